//! Optional overrides for a run (CLI args or programmatic).
//!
//! Used by [`RunConfig::apply_options`](super::RunConfig::apply_options). Only set fields
//! override the env-based config.

use std::path::PathBuf;

/// Overrides for a run: start URL, state directory, state tracking, verbosity.
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    /// Address the simulated browser starts at.
    pub url: Option<String>,
    /// Directory for file-backed session state.
    pub state_dir: Option<PathBuf>,
    /// Disable state tracking (in-memory state, no expiry).
    pub no_state: bool,
    /// Debug-level logs.
    pub verbose: bool,
}
