use std::io::Read;
use std::str;

use flate2::read::GzDecoder;

use crate::error::RelayError;
use crate::models::AuditLog;

/// Turns a gzip-compressed log object into a structured audit log.
///
/// Each stage fails with its own variant so an invocation failure names
/// exactly what was wrong with the object: gzip framing, text encoding,
/// JSON syntax, or document shape. Nothing partial is ever returned.
pub fn decode(raw: &[u8]) -> Result<AuditLog, RelayError> {
    let mut decoder = GzDecoder::new(raw);
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .map_err(RelayError::Decompress)?;

    let text = str::from_utf8(&decompressed).map_err(RelayError::Encoding)?;

    let document: serde_json::Value = serde_json::from_str(text).map_err(RelayError::Parse)?;

    serde_json::from_value(document).map_err(RelayError::Schema)
}
