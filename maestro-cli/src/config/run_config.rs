//! Run config: parameter names, state tracking, state directory, start URL. Filled from
//! env / .env.
//!
//! Interacts with [`RunOptions`](super::RunOptions) and [`walk`](crate::run::walk).

use std::path::PathBuf;

use maestro::FlowConfig;

/// Error type used for config loading and runs.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Default start URL of the simulated browser.
pub const DEFAULT_START_URL: &str = "http://localhost/";

/// Run config for the `walk` command.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// URL parameter for the page. Default `page`.
    pub page_param: String,
    /// URL parameter for the session id. Default `id`.
    pub session_param: String,
    /// When false, state is kept in memory and sessions never expire.
    pub enable_state: bool,
    /// When set, session buckets are stored as files here; otherwise in memory.
    pub state_dir: Option<PathBuf>,
    /// Address the simulated browser starts at.
    pub start_url: String,
    /// When true, the default log filter is `debug` instead of `info`.
    pub verbose: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            page_param: maestro::params::DEFAULT_PAGE_PARAM.to_string(),
            session_param: maestro::params::DEFAULT_SESSION_PARAM.to_string(),
            enable_state: true,
            state_dir: None,
            start_url: DEFAULT_START_URL.to_string(),
            verbose: false,
        }
    }
}

impl RunConfig {
    /// Fill config from env vars (and .env). Requires `dotenv::dotenv().ok()` first.
    ///
    /// `MAESTRO_PAGE_PARAM`, `MAESTRO_SESSION_PARAM`, `MAESTRO_STATE_DIR`,
    /// `MAESTRO_START_URL` optional. `MAESTRO_ENABLE_STATE` and `MAESTRO_VERBOSE` accept
    /// `true`/`false`/`1`/`0`.
    pub fn from_env() -> Result<Self, Error> {
        let defaults = Self::default();
        let enable_state = env_bool("MAESTRO_ENABLE_STATE")?.unwrap_or(defaults.enable_state);
        let verbose = env_bool("MAESTRO_VERBOSE")?.unwrap_or(defaults.verbose);
        Ok(Self {
            page_param: std::env::var("MAESTRO_PAGE_PARAM").unwrap_or(defaults.page_param),
            session_param: std::env::var("MAESTRO_SESSION_PARAM")
                .unwrap_or(defaults.session_param),
            enable_state,
            state_dir: std::env::var("MAESTRO_STATE_DIR").ok().map(PathBuf::from),
            start_url: std::env::var("MAESTRO_START_URL").unwrap_or(defaults.start_url),
            verbose,
        })
    }

    /// Apply optional overrides from `RunOptions` to this config.
    pub fn apply_options(&mut self, options: &super::RunOptions) {
        if let Some(url) = &options.url {
            self.start_url = url.clone();
        }
        if options.state_dir.is_some() {
            self.state_dir = options.state_dir.clone();
        }
        if options.no_state {
            self.enable_state = false;
        }
        if options.verbose {
            self.verbose = true;
        }
    }

    /// Default `tracing` filter directive when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    /// Flow options for these parameter names and state mode.
    pub fn flow_config(&self) -> FlowConfig {
        FlowConfig::default()
            .with_page_param(self.page_param.clone())
            .with_session_param(self.session_param.clone())
            .with_state(self.enable_state)
    }
}

fn env_bool(name: &str) -> Result<Option<bool>, Error> {
    let Ok(raw) = std::env::var(name) else {
        return Ok(None);
    };
    match parse_bool(&raw) {
        Some(value) => Ok(Some(value)),
        None => Err(format!("{} must be true or false, got \"{}\"", name, raw).into()),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
