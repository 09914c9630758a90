//! Small shared utilities.

pub mod codegen;
pub mod csv_export;
pub mod format;
