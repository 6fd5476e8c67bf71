use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::builder::RangedU64ValueParser;
use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use javelin_kinematics::chart::{ChartLayout, render_svg};
use javelin_kinematics::core::ballistics::{Angle, MAX_SAMPLES, ProjectileParameters};
use javelin_kinematics::report::KinematicsReport;
use javelin_kinematics::scenario::{ParameterOverrides, Scenario};

const CHART_SIZE: (u32, u32) = (1280, 720);

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Flight time and range of a javelin throw, derived step by step
#[derive(Parser, Debug)]
#[command(name = "javelin_kinematics", version)]
struct Cli {
    /// Built-in scenario to evaluate
    #[arg(short, long, default_value = "javelin-setup")]
    scenario: String,

    /// List built-in scenarios and exit
    #[arg(long)]
    list: bool,

    /// JSON parameters document to evaluate instead of a built-in scenario
    #[arg(long, value_name = "FILE", conflicts_with = "prompt")]
    params: Option<PathBuf>,

    /// Read angle, velocity, height and gravity from stdin
    #[arg(long)]
    prompt: bool,

    /// Release height in meters
    #[arg(long, value_name = "M", allow_negative_numbers = true)]
    height: Option<f64>,

    /// Release speed in m/s
    #[arg(long, value_name = "M/S")]
    speed: Option<f64>,

    /// Launch angle, degrees unless --radians is given
    #[arg(long, allow_negative_numbers = true)]
    angle: Option<f64>,

    /// Interpret --angle in radians
    #[arg(long, requires = "angle")]
    radians: bool,

    /// Gravitational acceleration in m/s^2
    #[arg(long, value_name = "M/S^2")]
    gravity: Option<f64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also write the trajectory chart to this SVG file
    #[arg(long, value_name = "FILE")]
    chart: Option<PathBuf>,

    /// Trajectory samples used for the chart
    #[arg(
        long,
        default_value_t = 200,
        value_parser = RangedU64ValueParser::<usize>::new().range(2..=MAX_SAMPLES as u64)
    )]
    samples: usize,

    /// More log output (-v debug, -vv everything)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn overrides(&self) -> ParameterOverrides {
        ParameterOverrides {
            initial_height_m: self.height,
            initial_speed_mps: self.speed,
            launch_angle: self.angle.map(|value| {
                if self.radians {
                    Angle::Radians(value)
                } else {
                    Angle::Degrees(value)
                }
            }),
            gravity_mps2: self.gravity,
        }
    }
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn,javelin_kinematics=info",
        1 => "warn,javelin_kinematics=debug",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_f64(prompt: &str) -> Result<f64> {
    loop {
        print!("{prompt}");
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        let bytes = io::stdin()
            .read_line(&mut line)
            .context("Could not read input")?;

        if bytes == 0 {
            bail!("Input ended unexpectedly (EOF).");
        }

        match line.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => eprintln!("Please enter a valid number (e.g., 45 or 12.5)."),
        }
    }
}

fn get_parameters_from_user() -> Result<ProjectileParameters> {
    Ok(ProjectileParameters {
        launch_angle: Angle::Degrees(read_f64("Angle (degrees): ")?),
        initial_speed_mps: read_f64("Velocity (m/s): ")?,
        initial_height_m: read_f64("Height (m): ")?,
        gravity_mps2: read_f64("Gravity (m/s^2): ")?,
    })
}

fn resolve_scenario(cli: &Cli) -> Result<Scenario> {
    let base = if cli.prompt {
        Scenario::new("prompt", "Custom throw", get_parameters_from_user()?)
    } else if let Some(path) = &cli.params {
        Scenario::from_json_file(path)
            .with_context(|| format!("Could not load parameters from {}", path.display()))?
    } else {
        Scenario::find(&cli.scenario)?
    };
    Ok(base.with_overrides(cli.overrides()))
}

fn print_scenarios() {
    for scenario in Scenario::builtin() {
        let p = scenario.params;
        println!(
            "{:<26} {} (h0 {:.2} m, v0 {:.3} m/s, θ {:.2}°, g {:.2} m/s²)",
            scenario.name,
            scenario.title,
            p.initial_height_m,
            p.initial_speed_mps,
            p.launch_angle.degrees(),
            p.gravity_mps2
        );
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.list {
        print_scenarios();
        return Ok(());
    }

    let scenario = resolve_scenario(&cli)?;
    debug!(?scenario, "resolved scenario");

    let report = KinematicsReport::compute(&scenario)
        .with_context(|| format!("Could not evaluate scenario '{}'", scenario.name))?;

    match cli.format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    if let Some(path) = &cli.chart {
        let layout = ChartLayout::build(&report, cli.samples)?;
        render_svg(&layout, path, CHART_SIZE)
            .with_context(|| format!("Could not write chart to {}", path.display()))?;
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
