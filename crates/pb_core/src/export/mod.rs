//! JSON Export Module
//!
//! Turns a designed formation or a saved playbook into a named JSON file
//! (`ExportFile`). Writing the file is left to the caller.

pub mod documents;
pub mod slug;

// Re-export main types and functions
pub use documents::*;
pub use slug::*;
