//! Common test utilities for building datasets and selections.
use michelin_explorer::prelude::*;

/// The two-row table used throughout the filtering scenarios.
///
/// Row 0: `1 MICHELIN Star`, USD, "French, Seafood"
/// Row 1: `Bib Gourmand`, EUR, "Italian"
#[allow(dead_code)]
pub fn create_two_row_dataset() -> Dataset {
    Dataset::from_rows(
        headers(&["Name", "Award", "Currency", "Cuisine"]),
        vec![
            row(&["Le Poisson", "1 MICHELIN Star", "USD", "French, Seafood"]),
            row(&["Trattoria", "Bib Gourmand", "EUR", "Italian"]),
        ],
    )
    .expect("Failed to build two-row dataset")
}

/// A larger table covering every award tier, a missing currency and
/// multi-valued cuisines with irregular spacing.
#[allow(dead_code)]
pub const SAMPLE_CSV: &str = "\
Name,Address,Location,MinPrice,MaxPrice,Currency,Cuisine,Longitude,Latitude,PhoneNumber,Url,WebsiteUrl,Award
Sushi Ichi,1 Ginza,\"Tokyo, Japan\",200,400,JPY,\"Sushi, Japanese\",139.76,35.67,,,,3 MICHELIN Stars
Le Cinq,31 Avenue George V,\"Paris, France\",150,390,EUR,\"Modern French, Creative\",2.30,48.86,,,,2 MICHELIN Stars
Fusion Bar,12 Orchard Rd,\"Singapore, Singapore\",40,90,SGD,\"Asian Fusion\",103.83,1.30,,,,1 MICHELIN Star
Noodle House,88 Temple St,\"Hong Kong, China\",10,30,HKD,\"Cantonese,Street Food\",114.17,22.30,,,,Bib Gourmand
Sea Shack,4 Pier Rd,\"Boston, USA\",30,60,USD,\"Seafood, American\",-71.05,42.36,,,,Bib Gourmand
Le Marché,2 Rue Cler,\"Paris, France\",35,55,EUR,\"French,  Market Cuisine\",2.30,48.85,,,,Bib Gourmand
Mystery Table,9 Unknown Ln,\"Nowhere\",,,,Asian,,,,,,1 MICHELIN Star
";

#[allow(dead_code)]
pub fn create_sample_dataset() -> Dataset {
    Dataset::from_reader(SAMPLE_CSV.as_bytes()).expect("Failed to parse sample CSV")
}

#[allow(dead_code)]
pub fn both_awards() -> Selection {
    Selection::with_awards(["1 MICHELIN Star", "Bib Gourmand"])
}

#[allow(dead_code)]
pub fn names<'a>(rows: impl IntoIterator<Item = &'a Restaurant>) -> Vec<&'a str> {
    rows.into_iter().map(Restaurant::name).collect()
}

#[allow(dead_code)]
fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[allow(dead_code)]
fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|s| s.to_string()).collect()
}
