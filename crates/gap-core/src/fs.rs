//! Whole-file text helpers

use anyhow::{Context, Result};
use std::path::Path;

/// UTF-8 byte-order mark expected by the downstream C++ toolchain
pub const UTF8_BOM: char = '\u{FEFF}';

/// Read an entire file as UTF-8 text
pub fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Write text to a file, replacing any existing content
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

/// Write text to a file with a leading byte-order mark
pub fn write_text_with_bom(path: &Path, content: &str) -> Result<()> {
    let mut buf = String::with_capacity(content.len() + UTF8_BOM.len_utf8());
    buf.push(UTF8_BOM);
    buf.push_str(content);
    write_text(path, &buf)
}

pub fn is_file(path: &Path) -> bool {
    path.is_file()
}

pub fn is_directory(path: &Path) -> bool {
    path.is_dir()
}

/// Create a directory and any missing parents
pub fn create_dir_all(path: &Path) -> Result<()> {
    if is_directory(path) {
        return Ok(());
    }
    std::fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory: {}", path.display()))
}
