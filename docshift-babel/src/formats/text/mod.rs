//! Plain text
//!
//! Text is read as UTF-8 with invalid byte sequences dropped, and written back
//! byte-for-byte as UTF-8.

use crate::error::{ConvertError, Result};
use crate::publish;
use std::fs;
use std::path::Path;

pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|err| ConvertError::io(path, err))?;
    Ok(decode_lossy(bytes))
}

pub fn write_text(path: &Path, text: &str) -> Result<()> {
    publish::write_bytes(path, text.as_bytes())
}

/// Decode UTF-8, skipping anything that is not valid.
pub fn decode_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            let bytes = err.into_bytes();
            let mut text = String::with_capacity(bytes.len());
            for chunk in bytes.utf8_chunks() {
                text.push_str(chunk.valid());
            }
            text
        }
    }
}
