//! # Railcraft CLI Application
//!
//! Terminal front end for `rail_core`: reads two coordinates (or a block
//! count), computes the rail materials and prints them as a table or JSON.
//!
//! ```text
//! rail_cli --from "0 0" --to "10 -5"
//! rail_cli --blocks 1000 --format json
//! rail_cli                      # prompts for the coordinates
//! ```

mod config;
mod render;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use rail_core::calculations::recipe::{calculate_route, RecipeCalculator};
use rail_core::errors::CalcResult;
use rail_core::report::ResourceReport;
use rail_core::units::Blocks;

use config::{CliConfig, OutputConfig, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "rail_cli")]
#[command(about = "Calculate the materials needed to build a Minecraft rail line")]
struct Args {
    /// Start coordinate as "x z"
    #[arg(long, allow_hyphen_values = true, requires = "to")]
    from: Option<String>,

    /// End coordinate as "x z"
    #[arg(long, allow_hyphen_values = true, requires = "from")]
    to: Option<String>,

    /// Track length in blocks, skipping the coordinate step
    #[arg(short, long, conflicts_with_all = ["from", "to"])]
    blocks: Option<u64>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Hide the "stacks and leftover" column
    #[arg(long)]
    no_stacks: bool,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Where the track length comes from
#[derive(Debug, Clone, PartialEq, Eq)]
enum RouteInput {
    Coordinates { from: String, to: String },
    Blocks(u64),
    Prompt,
}

impl Args {
    fn route_input(&self) -> RouteInput {
        match (&self.from, &self.to, self.blocks) {
            (_, _, Some(blocks)) => RouteInput::Blocks(blocks),
            (Some(from), Some(to), None) => RouteInput::Coordinates {
                from: from.clone(),
                to: to.clone(),
            },
            _ => RouteInput::Prompt,
        }
    }

    /// Merge command-line overrides into the file configuration.
    fn apply_to(&self, mut config: CliConfig) -> CliConfig {
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if self.no_stacks {
            config.output.show_stacks = false;
        }
        config
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => "rail_cli=warn,rail_core=warn",
        1 => "rail_cli=info,rail_core=info",
        2 => "rail_cli=debug,rail_core=debug",
        _ => "rail_cli=trace,rail_core=trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn prompt_line(prompt: &str) -> anyhow::Result<String> {
    print!("{}", prompt);
    io::stdout().flush().context("flushing prompt")?;

    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .context("reading from stdin")?;
    Ok(input.trim().to_string())
}

fn compute(input: RouteInput) -> anyhow::Result<CalcResult<ResourceReport>> {
    let report = match input {
        RouteInput::Blocks(blocks) => {
            info!(blocks, "calculating from block count");
            RecipeCalculator::new(Blocks(blocks)).compute()
        }
        RouteInput::Coordinates { from, to } => {
            info!(%from, %to, "calculating from coordinates");
            calculate_route(&from, &to)
        }
        RouteInput::Prompt => {
            let from = prompt_line("Start coordinate (x z): ")?;
            let to = prompt_line("End coordinate (x z): ")?;
            info!(%from, %to, "calculating from prompted coordinates");
            calculate_route(&from, &to)
        }
    };
    Ok(report)
}

/// What a calculation prints, and whether it succeeded
#[derive(Debug, Clone, PartialEq, Eq)]
struct Outcome {
    success: bool,
    stdout: String,
    stderr: String,
}

impl Outcome {
    fn exit_code(&self) -> ExitCode {
        if self.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

fn render_outcome(result: CalcResult<ResourceReport>, output: &OutputConfig) -> anyhow::Result<Outcome> {
    match result {
        Ok(report) => {
            let mut stdout = String::new();
            match output.format {
                OutputFormat::Text => render::write_text(&mut stdout, &report, output.show_stacks)?,
                OutputFormat::Json => {
                    stdout.push_str(&report.to_json()?);
                    stdout.push('\n');
                }
            }
            Ok(Outcome {
                success: true,
                stdout,
                stderr: String::new(),
            })
        }
        Err(e) => {
            let mut stderr = format!("Error: {}\n", e);
            if output.format == OutputFormat::Json {
                stderr.push_str(&serde_json::to_string_pretty(&e).context("serializing error")?);
                stderr.push('\n');
            }
            Ok(Outcome {
                success: false,
                stdout: String::new(),
                stderr,
            })
        }
    }
}

fn run(args: &Args) -> anyhow::Result<ExitCode> {
    let file_config = match &args.config {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };
    let config = args.apply_to(file_config);
    debug!(?config, "resolved configuration");

    let outcome = render_outcome(compute(args.route_input())?, &config.output)?;
    print!("{}", outcome.stdout);
    eprint!("{}", outcome.stderr);
    Ok(outcome.exit_code())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    info!("Railcraft v{}", env!("CARGO_PKG_VERSION"));

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
