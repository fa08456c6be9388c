use anyhow::{Context, Result};
use clap::Parser;
use search::{BlockSize, ProbeCounter, SearchObserver, Strategy, TracingObserver};
use tracing::{info, warn};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

const ODDS: [i64; 13] = [1, 3, 5, 7, 9, 11, 13, 15, 17, 19, 21, 23, 25];

#[derive(Parser, Debug)]
#[command(name = "search-demo")]
#[command(about = "Look up targets in a sorted sequence", long_about = None)]
struct Args {
    /// Search strategy (linear, binary, interpolation, jump or jump:<block size>)
    #[arg(long, env = "SEARCH_DEMO_STRATEGY", default_value = "interpolation")]
    strategy: Strategy,

    /// Comma-separated ascending sequence, defaults to the odd numbers 1..=25
    #[arg(long, env = "SEARCH_DEMO_SEQUENCE", value_delimiter = ',', allow_hyphen_values = true)]
    sequence: Vec<i64>,

    /// Jump search block size, overrides the one given with `--strategy`
    #[arg(long, env = "SEARCH_DEMO_BLOCK_SIZE", allow_negative_numbers = true)]
    block_size: Option<i64>,

    /// Log every probe at trace level, on top of whatever `RUST_LOG` enables
    #[arg(long)]
    trace_probes: bool,

    /// Values to look up
    #[arg(allow_negative_numbers = true, default_values_t = [0, 1, 3, 13, 14, 23, 25, 26])]
    targets: Vec<i64>,
}

impl Args {
    fn strategy(&self) -> Result<Strategy> {
        match self.block_size {
            Some(size) => {
                let block_size = BlockSize::try_from(size).context("invalid --block-size")?;
                Ok(Strategy::Jump {
                    block_size: Some(block_size),
                })
            }
            None => Ok(self.strategy),
        }
    }
}

/// `RUST_LOG` if set, `info` otherwise. `--trace-probes` adds `search=trace`.
fn env_filter(args: &Args) -> Result<EnvFilter> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if !args.trace_probes {
        return Ok(filter);
    }
    let directive: Directive = "search=trace".parse().context("invalid trace directive")?;
    Ok(filter.add_directive(directive))
}

/// Probe observer for the demo, counts probes and optionally forwards them to `tracing`.
struct DemoObserver {
    counter: ProbeCounter,
    trace: Option<TracingObserver>,
}

impl SearchObserver for DemoObserver {
    fn on_probe(&mut self, event: search::ProbeEvent) {
        self.counter.on_probe(event);
        if let Some(trace) = &mut self.trace {
            trace.on_probe(event);
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&args)?)
        .init();

    let strategy = args.strategy()?;
    let sequence = if args.sequence.is_empty() {
        ODDS.to_vec()
    } else {
        args.sequence.clone()
    };

    if !sequence.windows(2).all(|w| w[0] <= w[1]) {
        warn!("sequence is not sorted in ascending order, results are meaningless");
    }

    info!(%strategy, len = sequence.len(), "searching");

    for value in &args.targets {
        let mut observer = DemoObserver {
            counter: ProbeCounter::new(),
            trace: args.trace_probes.then_some(TracingObserver),
        };
        let found = strategy.search_observed(&sequence, value, &mut observer);
        let probes = observer.counter.total();
        match found {
            Some(index) => info!(value, index, probes, "found"),
            None => info!(value, probes, "not found"),
        }
    }

    Ok(())
}
