//! JSON API layer
//!
//! Request/response entry points for hosts that drive the playbook model
//! with JSON instead of Rust calls.

pub mod playbook_json;

pub use playbook_json::{
    build_playbook, build_playbook_export, build_playbook_json, playbook_response_json,
    ApiError, ApiResponse, DefensePlayRequest, OffensePlayRequest, PlayRequest, PlaybookRequest,
    API_VERSION,
};
