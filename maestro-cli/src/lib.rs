//! maestro-cli library: load flow definition files and drive them through the reconciler.
//!
//! Reads run config from .env, loads a JSON flow file, and either validates it, prints its
//! page order, or walks it in a simulated browser.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! let config = maestro_cli::RunConfig::default();
//! let report = maestro_cli::walk(Path::new("flows/signup.json"), &config, &[], 10)?;
//! for t in &report.transitions {
//!     println!("{:?} -> {:?}", t.previous, t.page);
//! }
//! # Ok::<(), maestro_cli::Error>(())
//! ```

mod config;
mod definition;
mod run;

pub use config::{Error, RunConfig, RunOptions};
pub use definition::{Condition, DefinitionError, FlowFile, NextRule, NodeSpec};
pub use maestro::{Transition, ValidationIssue, ValidationReport};
pub use run::{order, validate, walk, AssignmentError, StateAssignment, WalkReport};

/// Run config from env (after loading `.env`) with `options` applied.
pub fn load_config(options: &RunOptions) -> Result<RunConfig, Error> {
    dotenv::dotenv().ok();
    let mut config = RunConfig::from_env()?;
    config.apply_options(options);
    Ok(config)
}

#[cfg(test)]
mod tests;
