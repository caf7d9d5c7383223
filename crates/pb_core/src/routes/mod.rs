// crates/pb_core/src/routes/mod.rs
// Route and coverage presets plus the relative → absolute resolver

pub mod library;
pub mod resolver;

pub use library::{
    coverage_label, BlueprintEntry, CoveragePreset, RoutePreset, CUSTOM_ROUTE,
    DEFENSIVE_COVERAGES, OFFENSIVE_ROUTES,
};
pub use resolver::resolve_absolute_path;
