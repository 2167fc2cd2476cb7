//! maestro binary: validate, order or walk a flow definition file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use maestro_cli::{load_config, order, validate, walk, RunConfig, RunOptions, StateAssignment};

#[derive(Parser, Debug)]
#[command(name = "maestro")]
#[command(about = "Multi-step flow tools: validate, order and walk flow definition files")]
struct Args {
    /// Debug-level logs (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    fn run_options(&self) -> RunOptions {
        let mut options = RunOptions {
            verbose: self.verbose,
            ..RunOptions::default()
        };
        if let Command::Walk {
            url,
            no_state,
            state_dir,
            ..
        } = &self.command
        {
            options.url = url.clone();
            options.no_state = *no_state;
            options.state_dir = state_dir.clone();
        }
        options
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that entry point, previous and literal next links exist
    Validate { file: PathBuf },
    /// Print pages in natural order
    Order { file: PathBuf },
    /// Walk the flow forward in a simulated browser
    Walk {
        file: PathBuf,
        /// Start URL, e.g. "http://localhost/?id=abcde&page=details"
        #[arg(long)]
        url: Option<String>,
        /// Field to set when the walk reaches a page: page.key=json
        #[arg(long = "set", value_name = "PAGE.KEY=VALUE")]
        assignments: Vec<StateAssignment>,
        /// Maximum number of forward moves
        #[arg(long, default_value_t = 100)]
        steps: usize,
        /// Keep state in memory only (no session expiry)
        #[arg(long)]
        no_state: bool,
        /// Store session state as files in this directory
        #[arg(long)]
        state_dir: Option<PathBuf>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(config: &RunConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Command, config: &RunConfig) -> Result<ExitCode, maestro_cli::Error> {
    match command {
        Command::Validate { file } => {
            let report = validate(&file)?;
            if report.valid {
                println!("valid");
                return Ok(ExitCode::SUCCESS);
            }
            for issue in &report.errors {
                println!("{}", issue);
            }
            Ok(ExitCode::FAILURE)
        }
        Command::Order { file } => {
            for page in order(&file)? {
                println!("{}", page);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Walk {
            file,
            assignments,
            steps,
            json,
            ..
        } => {
            let report = walk(&file, config, &assignments, steps)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(ExitCode::SUCCESS);
            }
            println!("session: {}", report.session_id);
            for t in &report.transitions {
                println!(
                    "{} -> {}{}",
                    t.previous.as_deref().unwrap_or("-"),
                    t.page.as_deref().unwrap_or("-"),
                    if t.is_checking_skip { " (skip)" } else { "" }
                );
            }
            println!("final page: {}", report.final_page.as_deref().unwrap_or("-"));
            println!("url: {}", report.final_url);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = match load_config(&args.run_options()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config);
    match run(args.command, &config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
