//! Filename conventions for generated files
//!
//! Downstream build tooling relies on these names, so they must not change.

const PREFIX: &str = "Gap";

pub fn header_filename(class_name: &str) -> String {
    format!("{}{}.h", PREFIX, class_name)
}

pub fn source_filename(class_name: &str) -> String {
    format!("{}{}.cpp", PREFIX, class_name)
}

pub fn ui_filename(class_name: &str) -> String {
    format!("{}{}.ui", PREFIX, class_name)
}

/// Header produced by Qt's `uic` from the `.ui` file (referenced, never rendered here)
pub fn ui_header_filename(class_name: &str) -> String {
    format!("ui_{}{}.h", PREFIX, class_name)
}
