//! Address translation simulator CLI.

use std::process;

use clap::Parser;
use log::info;

use pagesim::config::{Config, PolicyKind};
use pagesim::core::AddressTranslator;
use pagesim::sim::{self, ReplayMode, generator, trace};
use pagesim::{MmuError, SimStats};

#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    author,
    version,
    about = "Replays virtual address traces through a TLB and page table",
    long_about = None,
)]
struct Cli {
    /// Trace file, one address per line (first column).
    #[arg(conflicts_with = "generate")]
    trace: Option<String>,

    /// Replay N synthetic sequential page addresses instead of a trace.
    #[arg(long, value_name = "N")]
    generate: Option<usize>,

    /// JSON configuration file; flags below override it.
    #[arg(short, long)]
    config: Option<String>,

    /// Physical frames in the page table.
    #[arg(long)]
    frames: Option<usize>,

    /// Translation cache entries.
    #[arg(long)]
    tlb_size: Option<usize>,

    /// Replacement policy for both the page table and the cache.
    #[arg(short, long)]
    policy: Option<PolicyKind>,

    /// Replacement policy for the page table only.
    #[arg(long)]
    table_policy: Option<PolicyKind>,

    /// Replacement policy for the cache only.
    #[arg(long)]
    tlb_policy: Option<PolicyKind>,

    /// Leading address characters forming the page identifier.
    #[arg(long)]
    split_width: Option<usize>,

    /// Abort on the first malformed address instead of skipping it.
    #[arg(long)]
    strict: bool,

    /// Print statistics as JSON.
    #[arg(long)]
    json: bool,

    /// Print every translation.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("\x1b[1;31merror:\x1b[0m {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), MmuError> {
    let config = build_config(&cli)?;

    let addresses = match (&cli.trace, cli.generate) {
        (Some(path), _) => trace::read_trace(path)?,
        (None, Some(count)) => generator::sequential_addresses(count, generator::DEFAULT_PAGE_SIZE),
        (None, None) => {
            generator::sequential_addresses(generator::DEFAULT_COUNT, generator::DEFAULT_PAGE_SIZE)
        }
    };

    let mut translator = AddressTranslator::new(&config)?;
    let mode = if cli.strict {
        ReplayMode::Strict
    } else {
        ReplayMode::Lenient
    };
    info!(
        "replaying {} addresses ({} table / {} tlb)",
        addresses.len(),
        config.page_table.policy,
        config.tlb.policy
    );

    let frame_size = config.address.frame_size;
    let stats = sim::replay_with(&mut translator, &addresses, mode, |address, t| {
        if cli.verbose {
            println!(
                "{} -> {} [{}]",
                address,
                t.describe(frame_size),
                if t.cache_hit { "tlb hit" } else { "tlb miss" }
            );
        }
    })?;

    report(&stats, cli.json)
}

fn build_config(cli: &Cli) -> Result<Config, MmuError> {
    let mut config = match &cli.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };

    if let Some(frames) = cli.frames {
        config.page_table.capacity = frames;
    }
    if let Some(entries) = cli.tlb_size {
        config.tlb.capacity = entries;
    }
    if let Some(policy) = cli.policy {
        config = config.with_policy(policy);
    }
    if let Some(policy) = cli.table_policy {
        config.page_table.policy = policy;
    }
    if let Some(policy) = cli.tlb_policy {
        config.tlb.policy = policy;
    }
    if let Some(width) = cli.split_width {
        config.address.split_width = width;
    }

    config.validate()?;
    Ok(config)
}

fn report(stats: &SimStats, json: bool) -> Result<(), MmuError> {
    if json {
        println!("{}", stats.to_json()?);
    } else {
        stats.print();
    }
    Ok(())
}
