use anyhow::Context as _;
use clamp::{Bounds, ClampError, ClampResult};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Parser, Debug)]
#[command(name = "clamp", version)]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Clamp a value into [lo, hi] and print the result.
    Eval(EvalArgs),
    /// Check that a pair of bounds is ordered (lo <= hi, no NaN).
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct EvalArgs {
    /// Value to clamp. Accepts `NaN`, `inf` and `-inf`.
    #[arg(long, value_parser = parse_number, allow_hyphen_values = true)]
    value: f64,

    /// Lower bound (inclusive).
    #[arg(
        long,
        value_parser = parse_number,
        allow_hyphen_values = true,
        conflicts_with = "bounds",
        required_unless_present = "bounds"
    )]
    lo: Option<f64>,

    /// Upper bound (inclusive).
    #[arg(
        long,
        value_parser = parse_number,
        allow_hyphen_values = true,
        conflicts_with = "bounds",
        required_unless_present = "bounds"
    )]
    hi: Option<f64>,

    /// Bounds as a JSON object, e.g. '{"lo": 0, "hi": 10}'.
    #[arg(long)]
    bounds: Option<String>,

    /// Print a JSON object instead of a bare number.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Lower bound (inclusive).
    #[arg(long, value_parser = parse_number, allow_hyphen_values = true)]
    lo: f64,

    /// Upper bound (inclusive).
    #[arg(long, value_parser = parse_number, allow_hyphen_values = true)]
    hi: f64,
}

#[derive(serde::Serialize, Debug)]
struct Evaluation {
    value: f64,
    lo: f64,
    hi: f64,
    result: f64,
    inverted: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Eval(args) => cmd_eval(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "clamp=debug" } else { "clamp=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn parse_number(s: &str) -> ClampResult<f64> {
    s.trim()
        .parse::<f64>()
        .map_err(|e| ClampError::parse(format!("'{s}' is not a number: {e}")))
}

fn resolve_bounds(args: &EvalArgs) -> anyhow::Result<Bounds<f64>> {
    if let Some(json) = &args.bounds {
        return Bounds::from_json(json).context("read --bounds");
    }
    // clap requires both --lo and --hi whenever --bounds is absent
    let lo = args.lo.context("missing --lo")?;
    let hi = args.hi.context("missing --hi")?;
    Ok(Bounds::from_raw(lo, hi))
}

#[tracing::instrument(skip_all, fields(value = args.value))]
fn cmd_eval(args: EvalArgs) -> anyhow::Result<()> {
    let bounds = resolve_bounds(&args)?;
    let inverted = bounds.is_inverted();
    if inverted {
        tracing::warn!(lo = bounds.lo, hi = bounds.hi, "inverted bounds; result is hi");
    }

    let result = bounds.clamp(args.value);
    tracing::debug!(lo = bounds.lo, hi = bounds.hi, result, "clamped");

    if args.json {
        let out = Evaluation {
            value: args.value,
            lo: bounds.lo,
            hi: bounds.hi,
            result,
            inverted,
        };
        let line = serde_json::to_string(&out).context("serialize evaluation")?;
        println!("{line}");
    } else {
        println!("{result}");
    }
    Ok(())
}

#[tracing::instrument(skip_all, fields(lo = args.lo, hi = args.hi))]
fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let bounds = Bounds::new(args.lo, args.hi).context("check bounds")?;
    tracing::debug!(?bounds, "bounds are ordered");
    println!("ok");
    Ok(())
}
