//! JSON API for building playbooks
//!
//! A request describes every play as catalog ids plus edits (moves, routes,
//! hand-drawn paths). Each play is replayed through a `PlaybookEditor`, so the
//! result is exactly what the same clicks in the editor would have produced.

use crate::config::EditorConfig;
use crate::editor::PlaybookEditor;
use crate::error::{PlaybookError, Result};
use crate::export::{playbook_document, ExportFile, PlaybookDocument};
use crate::geometry::Point;
use crate::play::{OffenseFormat, PlayMode, Playbook};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, error, info, warn};

/// API version for schema compatibility
pub const API_VERSION: &str = "v1";

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybookRequest {
    #[serde(default)]
    pub title: String,
    pub plays: Vec<PlayRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PlayRequest {
    Offense(OffensePlayRequest),
    Defense(DefensePlayRequest),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OffensePlayRequest {
    #[serde(default)]
    pub name: String,
    pub formation_id: String,
    /// Defaults to the formation's natural format
    #[serde(default)]
    pub format: Option<OffenseFormat>,
    /// player id -> new position (clamped)
    #[serde(default)]
    pub moves: BTreeMap<String, Point>,
    /// player id -> route name ("" clears, "Custom" starts an empty path)
    #[serde(default)]
    pub routes: BTreeMap<String, String>,
    /// player id -> hand-drawn waypoints
    #[serde(default)]
    pub drawn: BTreeMap<String, Vec<Point>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefensePlayRequest {
    #[serde(default)]
    pub name: String,
    pub formation_id: String,
    pub coverage_id: String,
    #[serde(default)]
    pub moves: BTreeMap<String, Point>,
    /// player id -> custom responsibility waypoints
    #[serde(default)]
    pub custom: BTreeMap<String, Vec<Point>>,
}

impl PlaybookRequest {
    pub fn from_json(content: &str) -> Result<Self> {
        let request: Self = serde_json::from_str(content)?;
        request.validate()?;
        Ok(request)
    }

    /// YAML accepts `.nan`/`.inf`, so coordinates are checked after parsing
    pub fn from_yaml(content: &str) -> Result<Self> {
        let request: Self = serde_yaml::from_str(content)?;
        request.validate()?;
        Ok(request)
    }

    /// Every coordinate in the request must be a finite number
    pub fn validate(&self) -> Result<()> {
        for (index, play) in self.plays.iter().enumerate() {
            let (moves, drawn) = match play {
                PlayRequest::Offense(offense) => (&offense.moves, &offense.drawn),
                PlayRequest::Defense(defense) => (&defense.moves, &defense.custom),
            };
            let points = moves
                .iter()
                .chain(drawn.iter().flat_map(|(id, points)| points.iter().map(move |p| (id, p))));
            for (player_id, point) in points {
                if !point.is_finite() {
                    return Err(PlaybookError::Deserialization(format!(
                        "play {index}: non-finite point ({}, {}) for player '{player_id}'",
                        point.x, point.y
                    )));
                }
            }
        }
        Ok(())
    }
}

// ============================================================================
// Response envelope
// ============================================================================

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub schema_version: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: &str, message: &str) -> Self {
        Self { code: code.to_string(), message: message.to_string() }
    }
}

impl From<&PlaybookError> for ApiError {
    fn from(error: &PlaybookError) -> Self {
        let code = match error {
            PlaybookError::EmptyPlaybook => "EMPTY_PLAYBOOK",
            PlaybookError::UnknownFormation(_) => "UNKNOWN_FORMATION",
            PlaybookError::UnknownCoverage(_) => "UNKNOWN_COVERAGE",
            PlaybookError::FormatUnavailable { .. } => "FORMAT_UNAVAILABLE",
            PlaybookError::InvalidConfig(_) => "INVALID_CONFIG",
            PlaybookError::Serialization(_) => "SERIALIZATION_FAILED",
            PlaybookError::Deserialization(_) => "INVALID_JSON",
            PlaybookError::Io(_) => "IO_ERROR",
        };
        Self::new(code, &error.to_string())
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn error(error: ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }
}

// ============================================================================
// Building
// ============================================================================

/// Replay every requested play through an editor and collect the playbook.
///
/// Unknown formation or coverage ids fail the whole request. Unknown player
/// ids inside `moves`/`routes`/`drawn`/`custom` are skipped with a warning.
pub fn build_playbook(request: &PlaybookRequest, config: &EditorConfig) -> Result<Playbook> {
    request.validate()?;
    let mut editor = PlaybookEditor::new(config.clone());
    editor.set_playbook_title(&request.title);

    for (index, play) in request.plays.iter().enumerate() {
        match play {
            PlayRequest::Offense(offense) => apply_offense(&mut editor, offense)?,
            PlayRequest::Defense(defense) => apply_defense(&mut editor, defense)?,
        }
        editor.save_current_play();
        debug!(index, "request play applied");
    }

    Ok(editor.playbook().clone())
}

fn apply_offense(editor: &mut PlaybookEditor, play: &OffensePlayRequest) -> Result<()> {
    editor.set_mode(PlayMode::Offense);
    editor.change_offense_formation(&play.formation_id)?;
    if let Some(format) = play.format {
        editor.set_offense_format(format)?;
    }
    editor.set_play_name(&play.name);

    apply_moves(editor, &play.moves);
    for (player_id, route_name) in &play.routes {
        if !editor.assign_route(player_id, route_name) {
            warn!(player_id = player_id.as_str(), "route for unknown player skipped");
        }
    }
    apply_drawn(editor, &play.drawn);
    Ok(())
}

fn apply_defense(editor: &mut PlaybookEditor, play: &DefensePlayRequest) -> Result<()> {
    editor.set_mode(PlayMode::Defense);
    editor.apply_coverage(&play.coverage_id)?;
    editor.change_defense_formation(&play.formation_id)?;
    editor.set_play_name(&play.name);

    apply_moves(editor, &play.moves);
    // Moved defenders get their coverage re-derived from the new alignment
    for player_id in play.moves.keys() {
        editor.assign_coverage(player_id, false);
    }
    apply_drawn(editor, &play.custom);
    Ok(())
}

fn apply_moves(editor: &mut PlaybookEditor, moves: &BTreeMap<String, Point>) {
    for (player_id, position) in moves {
        if !editor.move_player(player_id, *position) {
            warn!(player_id = player_id.as_str(), "move for unknown player skipped");
        }
    }
}

fn apply_drawn(editor: &mut PlaybookEditor, drawn: &BTreeMap<String, Vec<Point>>) {
    for (player_id, points) in drawn {
        if !editor.start_drawing(player_id) {
            warn!(player_id = player_id.as_str(), "drawing for unknown player skipped");
            continue;
        }
        for point in points {
            editor.field_clicked(*point);
        }
        editor.finish_drawing();
    }
}

/// Build and serialize in one go
pub fn build_playbook_export(
    request: &PlaybookRequest,
    config: &EditorConfig,
    now: DateTime<Utc>,
) -> Result<ExportFile> {
    let playbook = build_playbook(request, config)?;
    crate::export::export_playbook_at(&playbook, now)
}

/// JSON request in, playbook export JSON out, using the default config
pub fn build_playbook_json(request_json: &str) -> Result<String> {
    info!("Processing playbook build request");
    let request = PlaybookRequest::from_json(request_json)?;
    let file = build_playbook_export(&request, &EditorConfig::default(), Utc::now())?;
    Ok(file.json)
}

/// Envelope variant: always returns JSON containing `ApiResponse<PlaybookDocument>`
pub fn playbook_response_json(request_json: &str) -> String {
    info!("Processing playbook build request");

    let request = match PlaybookRequest::from_json(request_json) {
        Ok(request) => request,
        Err(e) => {
            error!("Failed to parse PlaybookRequest: {}", e);
            let response: ApiResponse<PlaybookDocument> = ApiResponse::error((&e).into());
            return serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string());
        }
    };

    let result = build_playbook(&request, &EditorConfig::default())
        .and_then(|playbook| playbook_document(&playbook, Utc::now()));

    match result {
        Ok(document) => {
            info!("Built playbook '{}' with {} plays", document.title, document.items.len());
            let response = ApiResponse::success(document);
            serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string())
        }
        Err(e) => {
            warn!("Playbook request rejected: {}", e);
            let response: ApiResponse<PlaybookDocument> = ApiResponse::error((&e).into());
            serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string())
        }
    }
}
