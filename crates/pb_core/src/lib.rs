//! # pb_core - Football Playbook Model
//!
//! Formation and play editing for American football (11-player tackle and
//! 5-player flag), independent of any UI.
//!
//! ## Features
//! - Fixed logical field space with clamping and screen → field mapping
//! - Route and coverage presets resolved from relative segments
//! - Formation catalog and straight-line team-size templates
//! - Offensive/defensive editing sessions and an ordered playbook
//! - JSON export of formations and playbooks (plus their JSON Schema)
//! - JSON request API for building a playbook in one call

// Method naming conventions - would require API changes
#![allow(clippy::should_implement_trait)]
// Large enum variants - boxing would require API changes
#![allow(clippy::large_enum_variant)]

pub mod api;
pub mod catalog;
pub mod config;
pub mod editor;
pub mod error;
pub mod export;
pub mod geometry;
pub mod play;
pub mod roster;
pub mod routes;

// Re-export main API functions
pub use api::{build_playbook, build_playbook_json, playbook_response_json, PlaybookRequest};
pub use error::{PlaybookError, Result};

// Re-export model types
pub use catalog::{FormationTemplate, RosterTemplate, Side, TeamSizeTemplate};
pub use config::EditorConfig;
pub use editor::{FormationDesigner, PlaybookEditor};
pub use geometry::{FieldDimensions, Point, RenderedRect};
pub use play::{
    DefensivePlay, OffenseFormat, OffensivePlay, PlayMode, Playbook, PlaybookItem,
};
pub use roster::{CoverageAssignment, Player, Roster};
pub use routes::{CoveragePreset, RoutePreset};

// Re-export export system
pub use export::{
    export_formation, export_playbook, formation_schema, playbook_schema, slugify, ExportFile,
    FormationDocument, PlaybookDocument,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
