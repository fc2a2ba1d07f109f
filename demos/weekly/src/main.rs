//! weekly: build one week of bus routes for a fleet and roster drivers
//! onto them.
//!
//! Runs the deterministic greedy assignment and the optimizer-guided
//! assignment, prints both summaries, then prints the chosen roster day by
//! day.  `RUST_LOG=debug` shows per-driver and per-generation events.
//!
//! ```text
//! weekly 8
//! weekly 8 --config roster.json --output output/weekly
//! weekly 4 --greedy --exact --generations 50
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command, value_parser};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tr_assign::{Roster, greedy_roster};
use tr_core::{RosterConfig, parse_fleet_size};
use tr_output::{CsvWriter, SearchOutputObserver};
use tr_search::{FitnessMode, NoopObserver, Optimizer, OptimizerBuilder, SearchConfig, SearchOutcome};

// ── Configuration file ────────────────────────────────────────────────────────

/// Optional JSON file; every field falls back to its default.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    roster: RosterConfig,
    search: SearchConfig,
}

fn load_config(path: Option<&PathBuf>) -> Result<FileConfig> {
    let Some(path) = path else {
        return Ok(FileConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

// ── CLI ───────────────────────────────────────────────────────────────────────

fn cli() -> Command {
    Command::new("weekly")
        .about("Weekly bus timetable and driver roster")
        .arg(
            Arg::new("fleet")
                .value_name("FLEET")
                .help("Number of buses in the fleet")
                .required(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("JSON file with `roster` and `search` sections")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .value_name("DIR")
                .help("Write roster.csv and search_history.csv to DIR")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("Search seed (overrides the config file)")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("generations")
                .long("generations")
                .help("Search generations (overrides the config file)")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("exact")
                .long("exact")
                .help("Score individuals with the full assignment")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("greedy")
                .long("greedy")
                .help("Print the greedy roster instead of the optimized one")
                .action(ArgAction::SetTrue),
        )
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();

    // 1. Resolve configuration: file, then command-line overrides.
    let mut file = load_config(matches.get_one::<PathBuf>("config"))?;
    let fleet = matches.get_one::<String>("fleet").map(String::as_str).unwrap_or_default();
    file.roster.fleet_size = parse_fleet_size(fleet)?;
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        file.search.seed = seed;
    }
    if let Some(&generations) = matches.get_one::<usize>("generations") {
        file.search.generations = generations;
    }
    if matches.get_flag("exact") {
        file.search.fitness_mode = FitnessMode::Exact;
    }
    let FileConfig { roster: config, search } = file;
    let plan = config.validate()?;

    println!("=== weekly: transit roster ===");
    println!(
        "Fleet: {}  |  Peak: {} buses every {} min  |  Off-peak: {} buses every {} min",
        config.fleet_size,
        plan.peak.target,
        plan.peak.interval_mins,
        plan.off_peak.target,
        plan.off_peak.interval_mins,
    );
    println!();

    // 2. Greedy baseline.
    let greedy = greedy_roster(&config)?;
    print_summary("Greedy", &greedy);

    // 3. Optimizer-guided assignment.
    let mut optimizer = OptimizerBuilder::new(config.clone()).search(search).build()?;
    let t0 = Instant::now();
    let outcome = match matches.get_one::<PathBuf>("output") {
        Some(dir) => run_with_output(&mut optimizer, dir)?,
        None      => optimizer.run(&mut NoopObserver),
    };
    info!(elapsed_ms = t0.elapsed().as_millis() as u64, "search finished");

    let guided = optimizer.guided_roster(&outcome.best);
    println!(
        "Search: {} generations, best fitness {:.3}, sequence length {}",
        outcome.history.len(),
        outcome.fitness,
        outcome.best.len(),
    );
    print_summary("Optimized", &guided);
    println!();

    // 4. Roster table.
    let shown = if matches.get_flag("greedy") { &greedy } else { &guided };
    print_roster(shown, &config);
    println!("Drivers: {}", shown.driver_count());

    Ok(())
}

/// Run the search while writing its history, then write the guided roster.
fn run_with_output(optimizer: &mut Optimizer, dir: &Path) -> Result<SearchOutcome> {
    fs::create_dir_all(dir)?;
    let mut obs = SearchOutputObserver::new(CsvWriter::new(dir)?);
    let outcome = optimizer.run(&mut obs);

    obs.record_roster(&optimizer.guided_roster(&outcome.best), &optimizer.roster.week);
    obs.finish();
    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }
    Ok(outcome)
}

// ── Printing ──────────────────────────────────────────────────────────────────

fn print_summary(label: &str, roster: &Roster) {
    println!(
        "{label:<10} drivers {:>4}  |  covered {:>4} / {:<4} ({:.1} %)",
        roster.driver_count(),
        roster.covered_count(),
        roster.timetable.route_count(),
        roster.coverage_ratio() * 100.0,
    );
}

fn print_roster(roster: &Roster, config: &RosterConfig) {
    for day in config.week.day_ids() {
        println!("{}:", config.week.name(day));
        for route in roster.timetable.routes(day) {
            let driver = match route.driver() {
                Some(d) => format!("Driver {}", d.0 + 1),
                None    => "No driver".to_owned(),
            };
            let bus = route.slot().map(|s| s.0.to_string()).unwrap_or_else(|| "None".to_owned());
            println!("  {} | {driver} bus: {bus}", route.span);
        }
    }
}
