use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use fftperf::config::{
    DEFAULT_INITIAL_REPEATS, DEFAULT_REPEAT_GROWTH, DEFAULT_ROUNDS, DEFAULT_SIGNAL_LEN,
};
use fftperf::{driver, Backend, BenchConfig, SizePlan, TailPolicy};

/// Measure complex FFT throughput (MFlops) over a range of input sizes.
///
/// With no arguments: a 4194304-point standard-normal signal, 22 rounds of
/// halving sizes, 4 repeats in the first round growing by 1.7 per round.
#[derive(Parser, Debug)]
#[command(name = "fftperf", version)]
struct Cli {
    /// Length of the source signal
    #[arg(long = "len", default_value_t = DEFAULT_SIGNAL_LEN)]
    signal_len: usize,

    /// Number of halving rounds
    #[arg(long, default_value_t = DEFAULT_ROUNDS)]
    rounds: usize,

    /// FFT repeat count in the first round
    #[arg(long, default_value_t = DEFAULT_INITIAL_REPEATS)]
    repeats: usize,

    /// Factor applied to the repeat count after each round (below 1 shrinks it)
    #[arg(long, default_value_t = DEFAULT_REPEAT_GROWTH)]
    growth: f64,

    /// Time these sizes, in order, instead of halving (comma separated)
    #[arg(long, value_delimiter = ',')]
    sizes: Vec<usize>,

    /// Seed for the input signal
    #[arg(long)]
    seed: Option<u64>,

    /// Keep halving below size 2 instead of stopping
    #[arg(long)]
    unbounded: bool,

    /// FFT library to time: rustfft or phastft
    #[arg(long, default_value_t = Backend::RustFft)]
    backend: Backend,

    /// Also write a size/MFlops table to this file
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Log more to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> BenchConfig {
        let sizes = if self.sizes.is_empty() {
            SizePlan::Halving
        } else {
            SizePlan::Explicit(self.sizes.clone())
        };
        let tail = if self.unbounded {
            TailPolicy::Unbounded
        } else {
            TailPolicy::StopBelowTwo
        };

        BenchConfig {
            signal_len: self.signal_len,
            rounds: self.rounds,
            initial_repeats: self.repeats,
            repeat_growth: self.growth,
            sizes,
            tail,
            seed: self.seed,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> fftperf::Result<()> {
    let config = cli.config();
    config.validate()?;

    let mut subject = cli.backend.subject()?;
    let signal = driver::prepare_signal(&config);
    let report = driver::run(&config, &mut subject, &signal, io::stdout().lock())?;

    if let Some(path) = &cli.output {
        report.write_table(path)?;
    }
    Ok(())
}
