//! Message-input file: `{ "message": "...", "send_to": [ { "id": "..." } ] }`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use worksbot_core::{PushInput, Result, WorksError};

/// Reads and parses the message-input JSON file.
pub fn read_input(path: impl AsRef<Path>) -> Result<PushInput> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let input: PushInput = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| WorksError::Input(format!("{}: {}", path.display(), e)))?;
    Ok(input)
}
