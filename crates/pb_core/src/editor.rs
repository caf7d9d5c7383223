//! Editing sessions
//!
//! `PlaybookEditor` keeps an offensive and a defensive roster side by side,
//! each with its own formation, name and drawing state, plus the playbook the
//! saved plays go into. `FormationDesigner` is the simpler free-form editor
//! that produces a formation file.
//!
//! Player-level edits never fail: unknown ids are ignored and reported as
//! `false`. Catalog-level edits (formation, coverage, format) take ids and
//! return `Result` so a caller can tell a typo from a no-op.

use crate::catalog::{create_defense_players, FormationTemplate, RosterTemplate, Side};
use crate::config::EditorConfig;
use crate::error::{PlaybookError, Result};
use crate::export::{export_formation_at, export_playbook_at, ExportFile};
use crate::geometry::{Point, RenderedRect};
use crate::play::{
    resolve_play_name, DefensivePlay, OffenseFormat, OffensivePlay, PlayMode, Playbook,
    PlaybookItem,
};
use crate::roster::{CoverageAssignment, Roster};
use crate::routes::library::COVER_2;
use crate::routes::CoveragePreset;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

/// Coverage applied when the editor starts
pub const DEFAULT_COVERAGE: &CoveragePreset = &COVER_2;

// ============================================================================
// Per-side state
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct OffenseSession {
    pub formation: &'static FormationTemplate,
    pub format: OffenseFormat,
    pub name: String,
    pub roster: Roster,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DefenseSession {
    pub formation: &'static FormationTemplate,
    pub coverage: &'static CoveragePreset,
    pub name: String,
    pub roster: Roster,
}

impl DefenseSession {
    fn rebuild_roster(&mut self, config: &EditorConfig) {
        let players = create_defense_players(self.formation, self.coverage, &config.field);
        self.roster = Roster::new(players, config.field, config.template.clone());
    }
}

// ============================================================================
// Playbook editor
// ============================================================================

#[derive(Debug, Clone)]
pub struct PlaybookEditor {
    config: EditorConfig,
    mode: PlayMode,
    offense: OffenseSession,
    defense: DefenseSession,
    playbook: Playbook,
}

impl Default for PlaybookEditor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl PlaybookEditor {
    /// Offense on the first catalog formation, defense on the first catalog
    /// formation under Cover 2, empty playbook.
    pub fn new(config: EditorConfig) -> Self {
        let offense_formation = FormationTemplate::default_for(Side::Offense);
        let offense = OffenseSession {
            formation: offense_formation,
            format: OffenseFormat::for_team_size(offense_formation.team_size),
            name: config.defaults.offense_play_name.clone(),
            roster: Roster::from_template(
                offense_formation.into(),
                config.field,
                config.template.clone(),
            ),
        };

        let defense_formation = FormationTemplate::default_for(Side::Defense);
        let mut defense = DefenseSession {
            formation: defense_formation,
            coverage: DEFAULT_COVERAGE,
            name: config.defaults.defense_play_name.clone(),
            roster: Roster::new(Vec::new(), config.field, config.template.clone()),
        };
        defense.rebuild_roster(&config);

        let playbook = Playbook::new(config.defaults.playbook_title.clone());
        Self { config, mode: PlayMode::Offense, offense, defense, playbook }
    }

    // ========== Accessors ==========

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn mode(&self) -> PlayMode {
        self.mode
    }

    pub fn offense(&self) -> &OffenseSession {
        &self.offense
    }

    pub fn defense(&self) -> &DefenseSession {
        &self.defense
    }

    pub fn playbook(&self) -> &Playbook {
        &self.playbook
    }

    /// Roster of the current mode
    pub fn roster(&self) -> &Roster {
        match self.mode {
            PlayMode::Offense => &self.offense.roster,
            PlayMode::Defense => &self.defense.roster,
        }
    }

    fn roster_mut(&mut self) -> &mut Roster {
        match self.mode {
            PlayMode::Offense => &mut self.offense.roster,
            PlayMode::Defense => &mut self.defense.roster,
        }
    }

    /// Switching sides leaves the other roster's drawing state alone
    pub fn set_mode(&mut self, mode: PlayMode) {
        if self.mode != mode {
            debug!("editor mode {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
    }

    pub fn set_play_name(&mut self, name: &str) {
        match self.mode {
            PlayMode::Offense => self.offense.name = name.to_string(),
            PlayMode::Defense => self.defense.name = name.to_string(),
        }
    }

    pub fn set_playbook_title(&mut self, title: &str) {
        self.playbook.title = title.to_string();
    }

    // ========== Offense ==========

    /// Reset the offense to a catalog formation; the format follows its team size
    pub fn change_offense_formation(&mut self, formation_id: &str) -> Result<()> {
        let formation = FormationTemplate::find_offense(formation_id)
            .ok_or_else(|| PlaybookError::UnknownFormation(formation_id.to_string()))?;

        self.offense.formation = formation;
        self.offense.format = OffenseFormat::for_team_size(formation.team_size);
        self.offense.roster.reset_to_template(formation.into());
        info!(formation = formation.id, "offense formation changed");
        Ok(())
    }

    pub fn set_offense_format(&mut self, format: OffenseFormat) -> Result<()> {
        let team_size = self.offense.formation.team_size;
        if !format.is_available_for(team_size) {
            warn!(format = format.as_str(), team_size, "format not available");
            return Err(PlaybookError::FormatUnavailable {
                format: format.as_str().to_string(),
                team_size,
            });
        }
        self.offense.format = format;
        Ok(())
    }

    /// Route for an offensive player; only acts on the offense roster
    pub fn assign_route(&mut self, player_id: &str, route_name: &str) -> bool {
        self.offense.roster.assign_route(player_id, route_name)
    }

    // ========== Defense ==========

    /// Reset the defense to a catalog formation under the current coverage
    pub fn change_defense_formation(&mut self, formation_id: &str) -> Result<()> {
        let formation = FormationTemplate::find_defense(formation_id)
            .ok_or_else(|| PlaybookError::UnknownFormation(formation_id.to_string()))?;

        self.defense.formation = formation;
        self.defense.rebuild_roster(&self.config);
        info!(formation = formation.id, "defense formation changed");
        Ok(())
    }

    /// Switch coverage. The whole defense is rebuilt from the formation, so
    /// moved defenders and per-player custom responsibilities are discarded.
    pub fn apply_coverage(&mut self, coverage_id: &str) -> Result<()> {
        let coverage = CoveragePreset::find(coverage_id)
            .ok_or_else(|| PlaybookError::UnknownCoverage(coverage_id.to_string()))?;

        self.defense.coverage = coverage;
        self.defense.rebuild_roster(&self.config);
        info!(coverage = coverage.id, "coverage applied");
        Ok(())
    }

    /// Put one defender back on the active coverage, or start a custom responsibility
    pub fn assign_coverage(&mut self, player_id: &str, custom: bool) -> bool {
        let assignment = if custom {
            CoverageAssignment::Custom
        } else {
            CoverageAssignment::Preset(self.defense.coverage)
        };
        self.defense.roster.assign_coverage(player_id, assignment)
    }

    // ========== Active roster ==========

    pub fn move_player(&mut self, player_id: &str, position: Point) -> bool {
        self.roster_mut().move_player(player_id, position)
    }

    pub fn select(&mut self, player_id: &str) -> bool {
        self.roster_mut().select(player_id)
    }

    pub fn start_drawing(&mut self, player_id: &str) -> bool {
        self.roster_mut().start_drawing(player_id)
    }

    pub fn finish_drawing(&mut self) {
        self.roster_mut().finish_drawing();
    }

    pub fn clear_path(&mut self, player_id: &str) -> bool {
        self.roster_mut().clear_path(player_id)
    }

    /// Field click in field space. Only does something while drawing.
    pub fn field_clicked(&mut self, point: Point) -> bool {
        self.roster_mut().field_clicked(point)
    }

    /// Field click in screen space, mapped through the rendered field rectangle
    pub fn field_clicked_screen(&mut self, screen: Point, rect: &RenderedRect) -> bool {
        match self.config.field.to_field_space(screen, rect) {
            Some(point) => self.field_clicked(point),
            None => false,
        }
    }

    // ========== Playbook ==========

    /// Snapshot the active roster into the playbook and return its index.
    ///
    /// A blank play name becomes `"<prefix> <playbook length + 1>"`.
    pub fn save_current_play(&mut self) -> usize {
        let existing = self.playbook.len();
        let defaults = &self.config.defaults;

        let item = match self.mode {
            PlayMode::Offense => {
                let name = resolve_play_name(
                    &self.offense.name,
                    &defaults.offense_fallback_prefix,
                    existing,
                );
                PlaybookItem::Offense(OffensivePlay::snapshot(
                    name,
                    self.offense.format,
                    self.offense.formation.id,
                    &self.offense.roster,
                ))
            }
            PlayMode::Defense => {
                let name = resolve_play_name(
                    &self.defense.name,
                    &defaults.defense_fallback_prefix,
                    existing,
                );
                PlaybookItem::Defense(DefensivePlay::snapshot(
                    name,
                    self.defense.formation.id,
                    self.defense.coverage.id,
                    &self.defense.roster,
                ))
            }
        };

        info!(mode = ?self.mode, name = item.name(), "play saved");
        self.playbook.push(item);
        existing
    }

    pub fn remove_play(&mut self, index: usize) -> Option<PlaybookItem> {
        self.playbook.remove_at(index)
    }

    pub fn clear_playbook(&mut self) {
        self.playbook.clear();
    }

    pub fn can_export(&self) -> bool {
        !self.playbook.is_empty()
    }

    pub fn export_playbook(&self) -> Result<ExportFile> {
        self.export_playbook_at(Utc::now())
    }

    pub fn export_playbook_at(&self, now: DateTime<Utc>) -> Result<ExportFile> {
        export_playbook_at(&self.playbook, now)
    }
}

// ============================================================================
// Formation designer
// ============================================================================

/// Default size of a freshly opened designer
pub const DESIGNER_TEAM_SIZE: usize = 11;

#[derive(Debug, Clone)]
pub struct FormationDesigner {
    pub name: String,
    pub description: String,
    roster: Roster,
}

impl Default for FormationDesigner {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

impl FormationDesigner {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            name: "Custom Formation".to_string(),
            description: "Set up the starting alignment, place every player and export the \
                          formation as JSON."
                .to_string(),
            roster: Roster::from_template(
                RosterTemplate::Line(DESIGNER_TEAM_SIZE),
                config.field,
                config.template.clone(),
            ),
        }
    }

    /// Designer pre-filled from a catalog formation
    pub fn from_formation(config: &EditorConfig, formation: &'static FormationTemplate) -> Self {
        let mut designer = Self::new(config);
        designer.name = formation.label.to_string();
        designer.description = formation.description.to_string();
        designer.roster.reset_to_template(formation.into());
        designer
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn select(&mut self, player_id: &str) -> bool {
        self.roster.select(player_id)
    }

    /// Clicking the field moves the selected player there (clamped)
    pub fn field_clicked(&mut self, point: Point) -> bool {
        match self.roster.selected().map(str::to_string) {
            Some(id) => self.roster.move_player(&id, point),
            None => false,
        }
    }

    pub fn move_player(&mut self, player_id: &str, position: Point) -> bool {
        self.roster.move_player(player_id, position)
    }

    pub fn set_label(&mut self, player_id: &str, label: &str) -> bool {
        self.roster.set_label(player_id, label)
    }

    pub fn set_role(&mut self, player_id: &str, role: &str) -> bool {
        self.roster.set_role(player_id, role)
    }

    /// Add a numbered player at midfield and select it
    pub fn add_player(&mut self) -> String {
        self.roster.add_generated()
    }

    pub fn remove_player(&mut self, player_id: &str) -> bool {
        self.roster.remove(player_id)
    }

    /// Replace everyone with a straight line of `count` players; the first is selected
    pub fn apply_template(&mut self, count: usize) {
        self.roster.reset_to_template(RosterTemplate::Line(count));
        if let Some(first) = self.roster.players().first().map(|p| p.id.clone()) {
            self.roster.select(&first);
        }
    }

    pub fn reset_positions(&mut self) {
        self.roster.reset_positions();
    }

    pub fn export(&self) -> Result<ExportFile> {
        self.export_at(Utc::now())
    }

    pub fn export_at(&self, now: DateTime<Utc>) -> Result<ExportFile> {
        export_formation_at(&self.name, &self.description, self.roster.players(), now)
    }
}
