//! quickstart — run one mobtrace configuration and summarize the trace.
//!
//! ```text
//! cargo run -p quickstart                      # built-in Lévy walk + proximity contacts
//! cargo run -p quickstart -- configs/model_b.json  # any TraceConfig as JSON
//! ```
//!
//! Progress lines come from the runner's `log` output; the per-tick summary
//! table is printed for the first few ticks only.

use std::time::Instant;

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;

use mt_contact::Contact;
use mt_core::{Point, Tick};
use mt_sim::{ModelConfig, TraceConfig, TraceObserver, TraceRunner};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:          u64 = 42;
const TICKS:         u64 = 2_000;
const CONTACT_RANGE: f64 = 5.0;
const TABLE_ROWS:    u64 = 10;

const LOG_PATTERN: &str = "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}";

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints one row per tick for the first `TABLE_ROWS` ticks and keeps
/// running totals.
#[derive(Default)]
struct SummaryObserver {
    /// Contact rows carry the centroid, so position rows are skipped.
    with_contacts:  bool,
    peak_contacts:  usize,
    /// Distinct pairs ever in contact.
    unique_pairs:   std::collections::BTreeSet<Contact>,
    last_centroid:  Option<Point>,
}

impl TraceObserver for SummaryObserver {
    fn on_positions(&mut self, tick: Tick, positions: &[Point]) {
        let n = positions.len() as f64;
        let (sx, sy) = positions.iter().fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        let centroid = Point::new(sx / n, sy / n);
        if !self.with_contacts && tick.0 <= TABLE_ROWS {
            println!("{:>6} {:>24} {:>10}", tick.to_string(), centroid.to_string(), "-");
        }
        self.last_centroid = Some(centroid);
    }

    fn on_contacts(&mut self, tick: Tick, contacts: &[Contact]) {
        self.peak_contacts = self.peak_contacts.max(contacts.len());
        self.unique_pairs.extend(contacts.iter().copied());
        if tick.0 <= TABLE_ROWS {
            let centroid = self.last_centroid.map_or_else(|| "-".to_string(), |c| c.to_string());
            println!("{:>6} {:>24} {:>10}", tick.to_string(), centroid, contacts.len());
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn init_logging() -> Result<()> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let config = log4rs::Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info))
        .context("building log configuration")?;
    log4rs::init_config(config).context("installing logger")?;
    Ok(())
}

fn load_config() -> Result<TraceConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {path}"))
        }
        None => Ok(TraceConfig {
            ticks:         TICKS,
            seed:          Some(SEED),
            log_interval:  500,
            contact_range: Some(CONTACT_RANGE),
            model:         ModelConfig::default(),
        }),
    }
}

fn main() -> Result<()> {
    init_logging()?;
    let config = load_config()?;

    println!("=== quickstart — mobtrace ===");
    println!("{}", serde_json::to_string_pretty(&config)?);
    println!();

    let mut runner = TraceRunner::new(config)?;
    println!("{:>6} {:>24} {:>10}", "Tick", "Centroid", "Contacts");
    println!("{}", "-".repeat(42));

    let mut obs = SummaryObserver {
        with_contacts: runner.source().reports_contacts(),
        ..SummaryObserver::default()
    };
    let t0 = Instant::now();
    let summary = runner.run(&mut obs)?;
    let elapsed = t0.elapsed();

    println!();
    println!("Trace complete in {:.3} s", elapsed.as_secs_f64());
    println!("  model          : {}", runner.source().name());
    println!("  agents         : {}", runner.source().agent_count());
    println!("  ticks          : {}", summary.ticks);
    if runner.source().reports_contacts() {
        println!("  contacts       : {}", summary.contacts);
        println!("  mean per tick  : {:.2}", summary.contacts as f64 / summary.ticks as f64);
        println!("  peak per tick  : {}", obs.peak_contacts);
        println!("  distinct pairs : {}", obs.unique_pairs.len());
    }
    if let Some(c) = obs.last_centroid {
        println!("  final centroid : {c}");
    }
    Ok(())
}
