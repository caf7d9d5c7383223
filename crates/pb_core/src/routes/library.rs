//! Route and Coverage Presets
//!
//! Canned offensive routes and defensive coverage blueprints. Every preset
//! stores *relative* offsets only; absolute paths are always derived from
//! the player's current position by [`resolve_absolute_path`].
//!
//! [`resolve_absolute_path`]: super::resolver::resolve_absolute_path

use crate::geometry::Point;

/// Route name that marks a hand-drawn path
pub const CUSTOM_ROUTE: &str = "Custom";

/// Named offensive route
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutePreset {
    pub name: &'static str,
    /// Relative offsets from the receiver's alignment
    pub segments: &'static [Point],
}

/// One role slot of a coverage blueprint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlueprintEntry {
    /// Seed id of the defender this entry drives (e.g. "cb1", "mike")
    pub slot: &'static str,
    pub segments: &'static [Point],
}

/// Named defensive coverage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoveragePreset {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub blueprint: &'static [BlueprintEntry],
}

macro_rules! pt {
    ($x:expr, $y:expr) => {
        Point { x: $x, y: $y }
    };
}

const fn slot(slot: &'static str, segments: &'static [Point]) -> BlueprintEntry {
    BlueprintEntry { slot, segments }
}

// ============================================================================
// Offensive Routes
// ============================================================================

pub const GO: RoutePreset = RoutePreset { name: "Go", segments: &[pt!(0.0, -160.0)] };

pub const SLANT: RoutePreset =
    RoutePreset { name: "Slant", segments: &[pt!(20.0, -40.0), pt!(80.0, -120.0)] };

pub const POST: RoutePreset =
    RoutePreset { name: "Post", segments: &[pt!(20.0, -60.0), pt!(80.0, -180.0)] };

pub const CORNER: RoutePreset =
    RoutePreset { name: "Corner", segments: &[pt!(0.0, -60.0), pt!(100.0, -160.0)] };

pub const OUT: RoutePreset =
    RoutePreset { name: "Out", segments: &[pt!(0.0, -40.0), pt!(80.0, -40.0)] };

pub const IN: RoutePreset =
    RoutePreset { name: "In", segments: &[pt!(0.0, -40.0), pt!(-80.0, -40.0)] };

pub const WHEEL: RoutePreset = RoutePreset {
    name: "Wheel",
    segments: &[pt!(-40.0, -40.0), pt!(-60.0, -80.0), pt!(-20.0, -160.0)],
};

pub const CURL: RoutePreset =
    RoutePreset { name: "Curl", segments: &[pt!(0.0, -60.0), pt!(0.0, -20.0)] };

pub const DRAG: RoutePreset = RoutePreset { name: "Drag", segments: &[pt!(80.0, -20.0)] };

pub const SCREEN: RoutePreset =
    RoutePreset { name: "Screen", segments: &[pt!(-20.0, 0.0), pt!(-40.0, -10.0)] };

/// Stays home; resolves to an empty path
pub const BLOCK: RoutePreset = RoutePreset { name: "Block", segments: &[] };

pub const OFFENSIVE_ROUTES: &[RoutePreset] =
    &[GO, SLANT, POST, CORNER, OUT, IN, WHEEL, CURL, DRAG, SCREEN, BLOCK];

// ============================================================================
// Defensive Coverages
// ============================================================================

pub const COVER_2: CoveragePreset = CoveragePreset {
    id: "cover2",
    label: "Cover 2 Zone",
    description: "Deep halves split between the safeties, flat zones for the corners.",
    blueprint: &[
        slot("cb1", &[pt!(0.0, -40.0), pt!(-40.0, -80.0)]),
        slot("cb2", &[pt!(0.0, -40.0), pt!(40.0, -80.0)]),
        slot("fs", &[pt!(-40.0, -160.0)]),
        slot("ss", &[pt!(40.0, -160.0)]),
        slot("sam", &[pt!(-20.0, -80.0)]),
        slot("mike", &[pt!(0.0, -80.0)]),
        slot("will", &[pt!(20.0, -80.0)]),
    ],
};

pub const COVER_3: CoveragePreset = CoveragePreset {
    id: "cover3",
    label: "Cover 3 Drop",
    description: "Three deep thirds and four underneath zones.",
    blueprint: &[
        slot("cb1", &[pt!(-40.0, -160.0)]),
        slot("cb2", &[pt!(40.0, -160.0)]),
        slot("fs", &[pt!(0.0, -180.0)]),
        slot("ss", &[pt!(0.0, -120.0)]),
        slot("sam", &[pt!(-60.0, -60.0)]),
        slot("mike", &[pt!(0.0, -60.0)]),
        slot("will", &[pt!(60.0, -60.0)]),
    ],
};

pub const MAN: CoveragePreset = CoveragePreset {
    id: "man",
    label: "Man to Man",
    description: "Individual coverage with deep help from the safety.",
    blueprint: &[
        slot("cb1", &[pt!(-20.0, -120.0)]),
        slot("cb2", &[pt!(20.0, -120.0)]),
        slot("fs", &[pt!(0.0, -180.0)]),
        slot("ss", &[pt!(0.0, -120.0)]),
        slot("sam", &[pt!(-20.0, -40.0)]),
        slot("mike", &[pt!(0.0, -40.0)]),
        slot("will", &[pt!(20.0, -40.0)]),
    ],
};

pub const BLITZ: CoveragePreset = CoveragePreset {
    id: "blitz",
    label: "Pressure Blitz",
    description: "Extra rushers sent, man coverage left behind.",
    blueprint: &[
        slot("le", &[pt!(0.0, -60.0)]),
        slot("re", &[pt!(0.0, -60.0)]),
        slot("dt1", &[pt!(0.0, -60.0)]),
        slot("dt2", &[pt!(0.0, -60.0)]),
        slot("sam", &[pt!(0.0, -40.0)]),
        slot("will", &[pt!(0.0, -40.0)]),
        slot("mike", &[pt!(0.0, -40.0)]),
        slot("cb1", &[pt!(-40.0, -120.0)]),
        slot("cb2", &[pt!(40.0, -120.0)]),
        slot("fs", &[pt!(0.0, -160.0)]),
        slot("ss", &[pt!(0.0, -120.0)]),
    ],
};

pub const FLAG_ZONE: CoveragePreset = CoveragePreset {
    id: "flagZone",
    label: "Flag Zone Mix",
    description: "Hybrid zone built for 5v5 flag.",
    blueprint: &[
        slot("r1", &[pt!(0.0, -80.0)]),
        slot("r2", &[pt!(0.0, -80.0)]),
        slot("lb", &[pt!(0.0, -100.0)]),
        slot("cb1", &[pt!(-60.0, -120.0)]),
        slot("cb2", &[pt!(60.0, -120.0)]),
    ],
};

pub const DEFENSIVE_COVERAGES: &[CoveragePreset] = &[COVER_2, COVER_3, MAN, BLITZ, FLAG_ZONE];

// ============================================================================
// Lookup
// ============================================================================

impl RoutePreset {
    pub fn find(name: &str) -> Option<&'static RoutePreset> {
        OFFENSIVE_ROUTES.iter().find(|r| r.name == name)
    }

    pub fn all() -> &'static [RoutePreset] {
        OFFENSIVE_ROUTES
    }

    /// Zero-offset routes still carry a name but never move the player
    pub fn is_static(&self) -> bool {
        self.segments.is_empty()
    }
}

impl CoveragePreset {
    pub fn find(id: &str) -> Option<&'static CoveragePreset> {
        DEFENSIVE_COVERAGES.iter().find(|c| c.id == id)
    }

    pub fn all() -> &'static [CoveragePreset] {
        DEFENSIVE_COVERAGES
    }

    /// Blueprint offsets for one role slot
    pub fn segments_for(&self, slot: &str) -> Option<&'static [Point]> {
        self.blueprint.iter().find(|e| e.slot == slot).map(|e| e.segments)
    }
}

/// Label for a coverage id, falling back to the id itself
pub fn coverage_label(id: &str) -> &str {
    CoveragePreset::find(id).map(|c| c.label).unwrap_or(id)
}
