//! Property tests for the filter engine over generated datasets and selections.
use michelin_explorer::prelude::*;
use proptest::prelude::*;

const AWARDS: [&str; 5] = [
    "1 MICHELIN Star",
    "2 MICHELIN Stars",
    "3 MICHELIN Stars",
    "Bib Gourmand",
    "",
];
const CURRENCIES: [&str; 4] = ["EUR", "USD", "JPY", ""];
const TAGS: [&str; 6] = ["French", "Seafood", "Asian", "Asian Fusion", "Italian", "Thai"];

fn row_strategy() -> impl Strategy<Value = Vec<String>> {
    (
        prop::sample::select(AWARDS.to_vec()),
        prop::sample::select(CURRENCIES.to_vec()),
        prop::sample::subsequence(TAGS.to_vec(), 0..=3),
    )
        .prop_map(|(award, currency, tags)| {
            vec![award.to_string(), currency.to_string(), tags.join(", ")]
        })
}

fn dataset_strategy() -> impl Strategy<Value = Dataset> {
    prop::collection::vec(row_strategy(), 0..40).prop_map(|rows| {
        Dataset::from_rows(
            vec!["Award".into(), "Currency".into(), "Cuisine".into()],
            rows,
        )
        .expect("generated rows are well formed")
    })
}

fn selection_strategy() -> impl Strategy<Value = Selection> {
    (
        prop::sample::subsequence(AWARDS.to_vec(), 0..=AWARDS.len()),
        prop::sample::subsequence(CURRENCIES[..3].to_vec(), 0..=3),
        prop::option::of(prop::sample::select(vec![
            "Sea", "sian", "French", "Asian", "Thai",
        ])),
    )
        .prop_map(|(awards, currencies, cuisine)| {
            let mut selection = Selection::with_awards(awards);
            for code in currencies {
                selection = selection.currency(code);
            }
            if let Some(token) = cuisine {
                selection = selection.cuisine(token);
            }
            selection
        })
}

proptest! {
    #[test]
    fn prop_counts_are_consistent(
        dataset in dataset_strategy(),
        selection in selection_strategy(),
    ) {
        let outcome = FilterEngine::default().apply(&dataset, &selection);
        prop_assert!(outcome.total() <= dataset.len());
        prop_assert_eq!(outcome.distribution().total(), outcome.total());
        prop_assert_eq!(
            outcome.distribution().counts().values().sum::<usize>(),
            outcome.total()
        );
    }

    #[test]
    fn prop_filter_is_idempotent(
        dataset in dataset_strategy(),
        selection in selection_strategy(),
    ) {
        let engine = FilterEngine::default();
        let first = engine.apply(&dataset, &selection);
        let second = engine.apply(&dataset, &selection);
        prop_assert_eq!(first.indices(), second.indices());
        prop_assert_eq!(first.distribution(), second.distribution());
        prop_assert_eq!(first.summary(), second.summary());
    }

    #[test]
    fn prop_rows_are_an_ordered_subset(
        dataset in dataset_strategy(),
        selection in selection_strategy(),
    ) {
        let outcome = FilterEngine::default().apply(&dataset, &selection);
        prop_assert!(outcome.indices().windows(2).all(|w| w[0] < w[1]));
        for row in outcome.rows() {
            prop_assert!(selection.awards().contains(row.award()));
            if let Some(token) = selection.cuisine_token() {
                prop_assert!(row.cuisine().contains(token));
            }
        }
    }

    #[test]
    fn prop_empty_awards_yield_nothing(dataset in dataset_strategy()) {
        let outcome = FilterEngine::default().apply(&dataset, &Selection::empty());
        prop_assert_eq!(outcome.total(), 0);
        prop_assert!(outcome.distribution().is_empty());
    }

    #[test]
    fn prop_all_present_currencies_equals_no_constraint(
        dataset in dataset_strategy(),
        selection in selection_strategy(),
    ) {
        let unconstrained = selection.apply(SelectionChange::ClearCurrencies);
        let every_code: Vec<String> = dataset.present_currencies().into_iter().collect();
        let all_codes = unconstrained.apply(SelectionChange::SetCurrencies(every_code));

        let engine = FilterEngine::default();
        let a = engine.apply(&dataset, &unconstrained);
        let b = engine.apply(&dataset, &all_codes);
        prop_assert_eq!(a.indices(), b.indices());
        prop_assert_eq!(a.distribution(), b.distribution());
    }
}
