mod tui;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use lorentz::metrics::{self, SweepConfig};
use lorentz::report::{DEFAULT_DIGITS, Report};
use lorentz::{Event, interval_kind, invariant, inverse_transform, transform};

/// Lorentz - 1D special-relativistic event transforms (c = 1)
#[derive(Parser)]
#[command(name = "lorentz", about = "Boost spacetime events between inertial frames")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transform an event into the frame moving at BETA
    #[command(allow_negative_numbers = true)]
    Transform {
        x: f64,
        t: f64,
        beta: f64,
        #[arg(long, default_value_t = DEFAULT_DIGITS)]
        digits: usize,
    },
    /// Recover the original event from a transformed one
    #[command(allow_negative_numbers = true)]
    Inverse {
        x_prime: f64,
        t_prime: f64,
        beta: f64,
        #[arg(long, default_value_t = DEFAULT_DIGITS)]
        digits: usize,
    },
    /// Spacetime interval magnitude sqrt(|t^2 - x^2|)
    #[command(allow_negative_numbers = true)]
    Invariant {
        x: f64,
        t: f64,
        #[arg(long, default_value_t = DEFAULT_DIGITS)]
        digits: usize,
    },
    /// Timelike or spacelike relative to the origin
    #[command(allow_negative_numbers = true)]
    Classify { x: f64, t: f64 },
    /// Print a full report for one boost
    Demo(DemoArgs),
    /// Sweep beta, export to CSV and plot
    Metrics(MetricsArgs),
    /// Run interactive TUI simulation
    Tui(EventArgs),
}

#[derive(Args, Clone, Copy)]
struct EventArgs {
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    x: f64,
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    t: f64,
}

impl EventArgs {
    fn event(self) -> Event {
        Event::new(self.x, self.t)
    }
}

#[derive(Args)]
struct DemoArgs {
    #[command(flatten)]
    event: EventArgs,
    #[arg(long, default_value_t = 0.6, allow_negative_numbers = true)]
    beta: f64,
    #[arg(long, default_value_t = DEFAULT_DIGITS)]
    digits: usize,
}

impl Default for DemoArgs {
    fn default() -> Self {
        Self {
            event: EventArgs { x: 0.0, t: 1.0 },
            beta: 0.6,
            digits: DEFAULT_DIGITS,
        }
    }
}

#[derive(Args)]
struct MetricsArgs {
    #[command(flatten)]
    event: EventArgs,
    #[arg(long, default_value_t = -0.99, allow_negative_numbers = true)]
    beta_min: f64,
    #[arg(long, default_value_t = 0.99, allow_negative_numbers = true)]
    beta_max: f64,
    #[arg(long, default_value_t = 199)]
    steps: usize,
    #[arg(long, default_value = "metrics.csv")]
    csv: PathBuf,
    /// Skip the plot when omitted
    #[arg(long)]
    plot: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Transform { x, t, beta, digits }) => {
            let (xp, tp) = transform(x, t, beta)?;
            println!("x' = {xp:.digits$}, t' = {tp:.digits$}");
        }
        Some(Commands::Inverse { x_prime, t_prime, beta, digits }) => {
            let (x, t) = inverse_transform(x_prime, t_prime, beta)?;
            println!("x = {x:.digits$}, t = {t:.digits$}");
        }
        Some(Commands::Invariant { x, t, digits }) => {
            println!("s = {:.digits$}", invariant(x, t));
        }
        Some(Commands::Classify { x, t }) => {
            let kind = interval_kind(x, t);
            println!("{} ({})", kind.separation(), kind);
        }
        Some(Commands::Demo(args)) => run_demo(&args)?,
        Some(Commands::Metrics(args)) => run_metrics(&args)?,
        Some(Commands::Tui(args)) => tui::start(args.event())?,
        None => run_demo(&DemoArgs::default())?,
    }

    Ok(())
}

fn run_demo(args: &DemoArgs) -> Result<()> {
    let report = Report::new(args.event.event(), args.beta)?.with_digits(args.digits);
    println!("{report}");
    Ok(())
}

fn run_metrics(args: &MetricsArgs) -> Result<()> {
    let config = SweepConfig {
        beta_min: args.beta_min,
        beta_max: args.beta_max,
        steps: args.steps,
    };
    let samples = metrics::sweep(args.event.event(), &config)?;

    metrics::export_csv(&samples, &args.csv)?;
    println!("✅ Metrics written to {}", args.csv.display());

    if let Some(plot) = &args.plot {
        metrics::plot_results(&samples, plot)?;
        println!("✅ Plot saved to {}", plot.display());
    }
    Ok(())
}
