use clap::Parser;
use michelin_explorer::selection::KNOWN_AWARDS;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

const HEADERS: [&str; 13] = [
    "Name",
    "Address",
    "Location",
    "MinPrice",
    "MaxPrice",
    "Currency",
    "Cuisine",
    "Longitude",
    "Latitude",
    "PhoneNumber",
    "Url",
    "WebsiteUrl",
    "Award",
];

const CURRENCIES: [&str; 8] = ["EUR", "USD", "GBP", "JPY", "CHF", "HKD", "SGD", "THB"];

const CUISINES: [&str; 14] = [
    "French",
    "Modern French",
    "Creative",
    "Italian",
    "Japanese",
    "Sushi",
    "Seafood",
    "Cantonese",
    "Asian",
    "Asian Fusion",
    "Street Food",
    "Thai",
    "Farm to table",
    "Contemporary",
];

const CITIES: [&str; 8] = [
    "Paris, France",
    "Tokyo, Japan",
    "New York, USA",
    "London, United Kingdom",
    "Hong Kong, China",
    "Singapore, Singapore",
    "Bangkok, Thailand",
    "Zurich, Switzerland",
];

/// A CLI tool to generate a synthetic restaurant dataset for the explorer
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated CSV file to
    #[arg(short, long, default_value = "generated_restaurants.csv")]
    output: String,

    /// The number of restaurants to generate
    #[arg(short, long, default_value_t = 1000)]
    rows: usize,

    /// The maximum number of cuisine tags per restaurant
    #[arg(long, default_value_t = 3)]
    max_cuisines: usize,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.max_cuisines == 0 {
        eprintln!("Error: --max-cuisines must be at least 1");
        std::process::exit(1);
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!("Generating {} restaurants...", cli.rows);

    let mut writer = csv::Writer::from_path(&cli.output)?;
    writer.write_record(HEADERS)?;
    for id in 0..cli.rows {
        writer.write_record(generate_restaurant(&mut rng, id, cli.max_cuisines))?;
    }
    writer.flush()?;

    println!(
        "Successfully generated and saved {} restaurants to '{}'",
        cli.rows, cli.output
    );

    Ok(())
}

/// Generates one row, in `HEADERS` order.
fn generate_restaurant(rng: &mut StdRng, id: usize, max_cuisines: usize) -> Vec<String> {
    let city = CITIES.choose(rng).copied().unwrap_or("Paris, France");
    let currency = CURRENCIES.choose(rng).copied().unwrap_or("EUR");
    let award = KNOWN_AWARDS.choose(rng).copied().unwrap_or("Bib Gourmand");

    let tag_count = rng.random_range(1..=max_cuisines.min(CUISINES.len()));
    let cuisine = CUISINES
        .choose_multiple(rng, tag_count)
        .copied()
        .collect::<Vec<_>>()
        .join(", ");

    let min_price = rng.random_range(20..200);
    let max_price = min_price + rng.random_range(0..300);

    // Roughly one in twenty rows has no listed currency.
    let currency = if rng.random_ratio(1, 20) { "" } else { currency };

    vec![
        format!("Restaurant {:05}", id),
        format!("{} Example Street, {}", rng.random_range(1..400), city),
        city.to_string(),
        min_price.to_string(),
        max_price.to_string(),
        currency.to_string(),
        cuisine,
        format!("{:.6}", rng.random_range(-180.0..180.0)),
        format!("{:.6}", rng.random_range(-90.0..90.0)),
        format!("+{}", rng.random_range(100_000_000u64..999_999_999)),
        format!("https://guide.michelin.com/restaurant/{}", id),
        String::new(),
        award.to_string(),
    ]
}
