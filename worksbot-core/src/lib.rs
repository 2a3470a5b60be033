//! # worksbot-core
//!
//! Core types and traits for the LINE WORKS push sender: [`MessageBot`]
//! extension hooks, bearer token and dispatch outcome types, error enum,
//! and tracing initialization. Transport-agnostic; used by worksbot-sender
//! and worksbot-cli.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::MessageBot;
pub use error::{Result, WorksError};
pub use logger::init_tracing;
pub use types::{BearerToken, DispatchOutcome, DispatchRecord, PushInput, Recipient};
