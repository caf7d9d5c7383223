//! Export documents
//!
//! Two JSON shapes leave the crate: a formation (players only, no routes) and a
//! playbook (title, timestamp and every saved play with routes).

use super::slug::slug_or_else;
use crate::error::{PlaybookError, Result};
use crate::geometry::Point;
use crate::play::{Playbook, PlaybookItem};
use crate::roster::Player;
use chrono::{DateTime, SecondsFormat, Utc};
use log::{debug, info};
use schemars::schema::RootSchema;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

/// Title used when the playbook title is blank
pub const DEFAULT_PLAYBOOK_TITLE: &str = "Custom Playbook";
/// File base name when the playbook title has no usable characters
pub const PLAYBOOK_FALLBACK_SLUG: &str = "custom-playbook";

// ============================================================================
// Documents
// ============================================================================

/// Formation player without route data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FormationPlayer {
    pub id: String,
    pub label: String,
    pub role: String,
    pub position: Point,
}

impl From<&Player> for FormationPlayer {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id.clone(),
            label: player.label.clone(),
            role: player.role.clone(),
            position: player.position,
        }
    }
}

/// Reusable formation file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormationDocument {
    /// Same as the file base name
    pub id: String,
    pub label: String,
    pub team_size: usize,
    pub description: String,
    pub players: Vec<FormationPlayer>,
}

/// Playbook file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaybookDocument {
    pub title: String,
    /// ISO 8601, UTC, millisecond precision
    pub generated_at: String,
    pub items: Vec<PlaybookItem>,
}

/// What gets written to disk: `<file_base_name>.json` holding `json`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_base_name: String,
    pub json: String,
}

impl ExportFile {
    pub fn file_name(&self) -> String {
        format!("{}.json", self.file_base_name)
    }
}

fn timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn to_pretty_json<T: Serialize>(document: &T) -> Result<String> {
    serde_json::to_string_pretty(document).map_err(|e| PlaybookError::Serialization(e.to_string()))
}

// ============================================================================
// Formation export
// ============================================================================

/// Export a designed formation, timestamped now
pub fn export_formation(name: &str, description: &str, players: &[Player]) -> Result<ExportFile> {
    export_formation_at(name, description, players, Utc::now())
}

/// Export a designed formation.
///
/// `now` only matters when `name` has no usable characters: the id then
/// falls back to `formation-<unix millis>`.
pub fn export_formation_at(
    name: &str,
    description: &str,
    players: &[Player],
    now: DateTime<Utc>,
) -> Result<ExportFile> {
    let id = slug_or_else(name, || format!("formation-{}", now.timestamp_millis()));

    let document = FormationDocument {
        id: id.clone(),
        label: name.to_string(),
        team_size: players.len(),
        description: description.to_string(),
        players: players.iter().map(FormationPlayer::from).collect(),
    };

    let json = to_pretty_json(&document)?;
    info!("exported formation '{}' ({} players)", id, document.team_size);
    Ok(ExportFile { file_base_name: id, json })
}

// ============================================================================
// Playbook export
// ============================================================================

/// Build the playbook document without serializing it
pub fn playbook_document(playbook: &Playbook, now: DateTime<Utc>) -> Result<PlaybookDocument> {
    if playbook.is_empty() {
        return Err(PlaybookError::EmptyPlaybook);
    }

    let title = match playbook.title.trim() {
        "" => DEFAULT_PLAYBOOK_TITLE.to_string(),
        trimmed => trimmed.to_string(),
    };

    Ok(PlaybookDocument {
        title,
        generated_at: timestamp(now),
        items: playbook.items().to_vec(),
    })
}

/// Export every saved play, timestamped now
pub fn export_playbook(playbook: &Playbook) -> Result<ExportFile> {
    export_playbook_at(playbook, Utc::now())
}

pub fn export_playbook_at(playbook: &Playbook, now: DateTime<Utc>) -> Result<ExportFile> {
    let document = playbook_document(playbook, now)?;
    let file_base_name = slug_or_else(&document.title, || PLAYBOOK_FALLBACK_SLUG.to_string());

    let json = to_pretty_json(&document)?;
    info!("exported playbook '{}' ({} plays)", file_base_name, document.items.len());
    debug!("playbook json: {} bytes", json.len());
    Ok(ExportFile { file_base_name, json })
}

// ============================================================================
// Schemas
// ============================================================================

/// JSON Schema (draft-07) of the playbook export
pub fn playbook_schema() -> RootSchema {
    schema_for!(PlaybookDocument)
}

/// JSON Schema (draft-07) of the formation export
pub fn formation_schema() -> RootSchema {
    schema_for!(FormationDocument)
}
