use clap::Parser;
use itertools::Itertools;
use michelin_explorer::prelude::*;
use std::io::{self, Write};
use std::time::Instant;

const PREVIEW_ROWS: usize = 10;

/// Filter the MICHELIN restaurant dataset from the command line
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the restaurant CSV file
    source: Option<String>,

    /// Path to an explorer config JSON file
    #[arg(short, long)]
    config: Option<String>,

    /// Award tier to include (repeatable). Defaults to every known tier
    #[arg(short, long = "award")]
    awards: Vec<String>,

    /// Start with no award checked
    #[arg(long, conflicts_with = "awards")]
    no_awards: bool,

    /// Currency code to include (repeatable). Omit for any currency
    #[arg(long = "currency")]
    currencies: Vec<String>,

    /// Text the cuisine field must contain
    #[arg(long)]
    cuisine: Option<String>,

    /// Print matching rows as JSON records
    #[arg(long)]
    json: bool,

    /// Print the currency and cuisine options and exit
    #[arg(long)]
    list_options: bool,

    /// Write a bincode snapshot of the loaded dataset to this path
    #[arg(long)]
    snapshot: Option<String>,

    /// Run in interactive mode to change the selection step by step
    #[arg(short = 'i', long, help = "Run an interactive selection session")]
    interactive: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = match (&cli.config, &cli.source) {
        (Some(path), source) => {
            let mut config = ExplorerConfig::from_file(path).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to load config '{}': {}", path, e))
            });
            if let Some(source) = source {
                config.source = source.into();
            }
            config
        }
        (None, Some(source)) => ExplorerConfig::new(source),
        (None, None) => exit_with_error("A dataset path or --config file is required."),
    };

    let load_start = Instant::now();
    let dataset = config
        .open_dataset()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load dataset: {}", e)));
    println!(
        "Loaded {} restaurants in {:?}",
        dataset.len(),
        load_start.elapsed()
    );

    if let Some(path) = &cli.snapshot {
        dataset
            .save_snapshot(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to write snapshot: {}", e)));
        println!("  -> Wrote snapshot to '{}'", path);
    }

    if cli.list_options {
        print_options(&dataset);
        return;
    }

    let selection = initial_selection(&cli, &config);
    let engine = config.engine();

    if cli.interactive {
        run_interactive(Arc::new(dataset), engine, selection);
    } else {
        run_query(&dataset, &engine, &selection, cli.json);
    }
}

fn initial_selection(cli: &Cli, config: &ExplorerConfig) -> Selection {
    let mut selection = if cli.no_awards {
        Selection::empty()
    } else if cli.awards.is_empty() {
        config.default_selection()
    } else {
        Selection::with_awards(cli.awards.iter().cloned())
    };
    for code in &cli.currencies {
        selection = selection.currency(code.as_str());
    }
    if let Some(token) = &cli.cuisine {
        selection = selection.cuisine(token.as_str());
    }
    selection
}

fn run_query(dataset: &Dataset, engine: &FilterEngine, selection: &Selection, json: bool) {
    if let Err(e) = selection.validate(dataset) {
        println!("Note: {}", e);
    }

    let filter_start = Instant::now();
    let outcome = engine.apply(dataset, selection);
    let filter_duration = filter_start.elapsed();

    if json {
        let rendered = serde_json::to_string_pretty(&outcome.to_json())
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to render JSON: {}", e)));
        println!("{}", rendered);
        return;
    }

    println!("\n{}", outcome.summary());
    print_distribution(outcome.distribution());
    print_rows(outcome.rows(), outcome.total());
    println!("\nFiltering took {:?}", filter_duration);
}

fn print_options(dataset: &Dataset) {
    println!("\n--- Currencies ({}) ---", dataset.distinct_currencies().len());
    println!("{}", dataset.distinct_currencies().iter().join(", "));
    println!("\n--- Cuisines ({}) ---", dataset.distinct_cuisines().len());
    println!("{}", dataset.distinct_cuisines().iter().join(", "));
    println!("\n--- Awards (whole dataset) ---");
    print_distribution(&dataset.award_distribution());
}

fn print_distribution(distribution: &AwardDistribution) {
    for slice in distribution.slices() {
        println!(
            "  {:<20} {:>6}  ({:.1}%)",
            slice.label,
            slice.count,
            slice.share * 100.0
        );
    }
}

fn print_rows<'a>(rows: impl Iterator<Item = &'a Restaurant>, total: usize) {
    println!();
    for row in rows.take(PREVIEW_ROWS) {
        println!(
            "  {:<32} | {:<16} | {:<4} | {}",
            row.name(),
            row.award(),
            row.currency(),
            row.cuisine()
        );
    }
    if total > PREVIEW_ROWS {
        println!("  ... and {} more", total - PREVIEW_ROWS);
    }
}

/// Runs a selection session, printing every recomputed snapshot.
fn run_interactive(dataset: Arc<Dataset>, engine: FilterEngine, selection: Selection) {
    println!("--- Explorer Interactive Mode ---");
    println!(
        "Commands: award <label> | currency <code>... | cuisine [token] | none | all | show | quit"
    );

    let mut session = Session::with_selection(Arc::clone(&dataset), engine, selection);
    let view = Arc::clone(&dataset);
    session.subscribe(move |snapshot| {
        println!("\n[{}] {}", snapshot.generation, snapshot.summary);
        print_distribution(&snapshot.distribution);
        print_rows(snapshot.rows(&view), snapshot.total());
    });
    session.refresh();

    loop {
        let line = prompt_for_input("Change selection", None);
        let (command, argument) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line.as_str(), ""),
        };

        let change = match command {
            "award" if !argument.is_empty() => SelectionChange::ToggleAward(argument.to_string()),
            "currency" if argument.is_empty() => SelectionChange::ClearCurrencies,
            "currency" => SelectionChange::SetCurrencies(
                argument.split_whitespace().map(str::to_string).collect(),
            ),
            "cuisine" => SelectionChange::SetCuisine(Some(argument.to_string())),
            "none" => SelectionChange::SetAwards(Vec::new()),
            "all" => SelectionChange::SetAwards(
                KNOWN_AWARDS.iter().map(|s| s.to_string()).collect(),
            ),
            "show" => {
                session.refresh();
                continue;
            }
            "quit" | "exit" => break,
            "" => continue,
            _ => {
                println!("Unknown command '{}'.", command);
                continue;
            }
        };
        session.update(change);
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    if let Err(e) = io::stdout().flush() {
        exit_with_error(&format!("Failed to flush stdout: {}", e));
    }

    match io::stdin().read_line(&mut line) {
        Ok(0) => return "quit".to_string(),
        Ok(_) => {}
        Err(e) => exit_with_error(&format!("Failed to read line: {}", e)),
    }
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
