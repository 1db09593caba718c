use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Reads a whole text input; `-` means standard input.
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed reading standard input")?;
        return Ok(buffer);
    }

    let bytes = fs::read(path).with_context(|| format!("failed reading {}", path.display()))?;
    Ok(decode_text(&bytes))
}

/// Decodes UTF-8, dropping a leading byte-order mark and replacing invalid
/// sequences rather than failing on them.
pub fn decode_text(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}
