use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read a table image from a file, or from stdin when the path is `-`.
///
/// Tables are binary, so this never goes through a string.
pub fn load_table_bytes(path: &Path) -> Result<Vec<u8>, String> {
    if path.as_os_str() == "-" {
        return load_stdin();
    }
    fs::read(path).map_err(|e| format!("failed to read '{}': {}", path.display(), e))
}

fn load_stdin() -> Result<Vec<u8>, String> {
    let mut buf = Vec::new();
    io::stdin()
        .read_to_end(&mut buf)
        .map_err(|e| format!("failed to read stdin: {}", e))?;
    Ok(buf)
}
