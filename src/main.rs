use curvex::{Scenario, ScenarioConfig, CurvesLayout};
use curvex::{run_curves, run_air};
use curvex::{write_report, write_csv, sweep_step_sizes, write_sweep, DEFAULT_STEPS};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "curvex", about = "Explore exponential acceleration curves and air speed gain")]
struct Args {
    /// Scenario file, looked up as given and then under `scenarios/`
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Acceleration and deceleration, simulated next to theoretical (window)
    Curves,
    /// Deceleration only (window)
    Decel,
    /// Strafe / bunny-hop speed gain driven by a speed slider (window)
    Air,
    /// Print the diagnostics
    Report,
    /// Print every curve as CSV
    Csv,
    /// Print simulated stopping times over a range of step sizes as CSV
    Sweep,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let direct = PathBuf::from(file_name);
    let config_path = if direct.is_file() {
        direct
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    let text = fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read scenario {}", config_path.display()))?;
    let scenario_cfg = ScenarioConfig::from_yaml_str(&text)
        .with_context(|| format!("invalid scenario {}", config_path.display()))?;
    Ok(scenario_cfg)
}

// window runs get their subscriber from Bevy's LogPlugin
fn init_console_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "curvex=info".into()),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    let command = args.command.unwrap_or(Command::Curves);
    let windowed = matches!(command, Command::Curves | Command::Decel | Command::Air);
    if !windowed {
        init_console_logging();
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    match command {
        Command::Curves | Command::Decel => {
            let scenario = Scenario::build_scenario(scenario_cfg)?;
            println!("{}", scenario.diagnostics());
            let layout = match command {
                Command::Decel => CurvesLayout::DecelerationOnly,
                _ => CurvesLayout::Full,
            };
            run_curves(scenario, layout);
        }
        Command::Air => {
            let scenario = Scenario::build_scenario(scenario_cfg)?;
            run_air(scenario);
        }
        Command::Report => {
            let scenario = Scenario::build_scenario(scenario_cfg)?;
            let mut out = io::stdout().lock();
            write_report(&mut out, &scenario)?;
        }
        Command::Csv => {
            let scenario = Scenario::build_scenario(scenario_cfg)?;
            let mut out = io::stdout().lock();
            write_csv(&mut out, &scenario)?;
        }
        Command::Sweep => {
            let mut out = io::stdout().lock();
            let rows = sweep_step_sizes(&scenario_cfg, &DEFAULT_STEPS)?;
            write_sweep(&mut out, &scenario_cfg, &rows)?;
        }
    }

    Ok(())
}
