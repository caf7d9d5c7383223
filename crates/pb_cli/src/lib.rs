//! Playbook CLI Library
//!
//! File-level helpers behind the `pb` binary: config loading, formation and
//! playbook export to a directory, catalog listing and schema printing.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use log::{debug, info};
use pb_core::api::{build_playbook_export, PlaybookRequest};
use pb_core::catalog::{FormationTemplate, Side, TeamSizeTemplate};
use pb_core::export::ExportFile;
use pb_core::routes::{RoutePreset, DEFENSIVE_COVERAGES};
use pb_core::{formation_schema, playbook_schema, EditorConfig, FormationDesigner};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Where a formation export starts from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormationSource {
    /// Straight line of N players
    Template(usize),
    /// Catalog formation id (offense or defense)
    Catalog(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    Playbook,
    Formation,
}

/// `--config` wins; otherwise `PB_CONFIG_PATH`; otherwise defaults
pub fn load_config(path: Option<&Path>) -> Result<EditorConfig> {
    match path {
        Some(path) => {
            debug!("loading config from {}", path.display());
            EditorConfig::from_path(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))
        }
        None => EditorConfig::from_env().context("Failed to load config from PB_CONFIG_PATH"),
    }
}

/// `tackle`, `flag` or a positive player count
pub fn parse_template(value: &str) -> Result<usize> {
    if let Some(template) = TeamSizeTemplate::find(value) {
        return Ok(template.count);
    }
    match value.parse::<usize>() {
        Ok(count) if count > 0 => Ok(count),
        _ => bail!("Unknown template '{}': expected tackle, flag or a player count", value),
    }
}

/// Human-readable list of formations, routes and coverages
pub fn catalog_listing() -> String {
    let mut out = String::new();

    let sides = [("Offensive formations", Side::Offense), ("Defensive formations", Side::Defense)];
    for (title, side) in sides {
        let _ = writeln!(out, "{title}:");
        for formation in FormationTemplate::all(side) {
            let _ = writeln!(
                out,
                "  {:<12} {} ({} players)",
                formation.id, formation.label, formation.team_size
            );
        }
    }

    let routes: Vec<&str> = RoutePreset::all().iter().map(|r| r.name).collect();
    let _ = writeln!(out, "Routes:\n  {}", routes.join(", "));

    let _ = writeln!(out, "Coverages:");
    for coverage in DEFENSIVE_COVERAGES {
        let _ = writeln!(out, "  {:<12} {}", coverage.id, coverage.label);
    }
    out
}

/// Build a formation export from a template or a catalog formation
pub fn formation_file(
    config: &EditorConfig,
    source: &FormationSource,
    name: Option<&str>,
    description: Option<&str>,
    now: DateTime<Utc>,
) -> Result<ExportFile> {
    let mut designer = match source {
        FormationSource::Template(count) => {
            let mut designer = FormationDesigner::new(config);
            designer.apply_template(*count);
            designer
        }
        FormationSource::Catalog(id) => {
            let formation = FormationTemplate::find_offense(id)
                .or_else(|| FormationTemplate::find_defense(id))
                .with_context(|| format!("Unknown formation: {}", id))?;
            FormationDesigner::from_formation(config, formation)
        }
    };

    if let Some(name) = name {
        designer.name = name.to_string();
    }
    if let Some(description) = description {
        designer.description = description.to_string();
    }

    designer.export_at(now).context("Failed to export formation")
}

/// Read a playbook request (`.yaml`/`.yml` or JSON) and build its export
pub fn playbook_file(
    config: &EditorConfig,
    request_path: &Path,
    now: DateTime<Utc>,
) -> Result<ExportFile> {
    let content = fs::read_to_string(request_path)
        .with_context(|| format!("Failed to read request file: {}", request_path.display()))?;

    let is_yaml = matches!(
        request_path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    );
    let request = if is_yaml {
        PlaybookRequest::from_yaml(&content)
    } else {
        PlaybookRequest::from_json(&content)
    }
    .with_context(|| format!("Failed to parse request: {}", request_path.display()))?;

    build_playbook_export(&request, config, now).context("Failed to build playbook")
}

/// Write `<out_dir>/<file name>`, creating the directory if needed
pub fn write_export(out_dir: &Path, file: &ExportFile) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let path = out_dir.join(file.file_name());
    fs::write(&path, &file.json)
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;
    info!("wrote {} ({} bytes)", path.display(), file.json.len());
    Ok(path)
}

pub fn schema_json(kind: SchemaKind) -> Result<String> {
    let schema = match kind {
        SchemaKind::Playbook => playbook_schema(),
        SchemaKind::Formation => formation_schema(),
    };
    serde_json::to_string_pretty(&schema).context("Failed to serialize schema")
}
