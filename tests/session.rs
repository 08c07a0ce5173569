//! Tests for per-session recomputation and snapshot delivery.
mod common;
use common::*;
use michelin_explorer::prelude::*;
use std::sync::Mutex;
use std::thread;

fn sample_session() -> Session {
    Session::new(Arc::new(create_sample_dataset()), FilterEngine::default())
}

#[test]
fn test_update_recomputes_and_notifies() {
    let mut session = sample_session();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    session.subscribe(move |snapshot| sink.lock().unwrap().push(snapshot.total()));

    let all = session.refresh();
    assert_eq!(all.total(), 7);

    let eur = session.update(SelectionChange::SetCurrencies(vec!["EUR".to_string()]));
    assert_eq!(eur.generation, 1);
    assert_eq!(eur.total(), 2);

    let french = session.update(SelectionChange::SetCuisine(Some("Modern".to_string())));
    assert_eq!(french.generation, 2);
    assert_eq!(names(french.rows(session.dataset())), vec!["Le Cinq"]);

    assert_eq!(*seen.lock().unwrap(), vec![7, 2, 1]);
}

#[test]
fn test_toggle_every_award_off_empties_result() {
    let mut session = sample_session();
    let mut last = None;
    for award in KNOWN_AWARDS {
        last = Some(session.update(SelectionChange::ToggleAward(award.to_string())));
    }
    let last = last.expect("at least one award toggled");
    assert!(session.selection().awards().is_empty());
    assert_eq!(last.total(), 0);
    assert!(last.distribution.is_empty());
}

#[test]
fn test_stale_snapshot_is_discarded() {
    let mut session = sample_session();
    let delivered = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&delivered);
    session.subscribe(move |snapshot| sink.lock().unwrap().push(snapshot.generation));

    let slow = session.stage(SelectionChange::SetCurrencies(vec!["USD".to_string()]));
    let fast = session.stage(SelectionChange::SetCurrencies(vec!["JPY".to_string()]));
    assert_eq!((slow.generation(), fast.generation()), (1, 2));

    let fast = thread::spawn(move || fast.run()).join().unwrap();
    let slow = thread::spawn(move || slow.run()).join().unwrap();

    assert!(session.publish(fast));
    assert!(!session.publish(slow));
    assert_eq!(*delivered.lock().unwrap(), vec![2]);
}

#[test]
fn test_republishing_latest_generation_is_delivered() {
    let mut session = sample_session();
    let delivered = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&delivered);
    session.subscribe(move |snapshot| sink.lock().unwrap().push(snapshot.generation));

    let first = session.refresh();
    let second = session.refresh();
    assert_eq!((first.generation, second.generation), (0, 0));

    let pending = session.pending();
    assert_eq!(pending.generation(), 0);
    assert!(session.publish(pending.run()));
    assert_eq!(*delivered.lock().unwrap(), vec![0, 0, 0]);
}

#[test]
fn test_sessions_share_dataset_across_threads() {
    let dataset = Arc::new(create_sample_dataset());
    let currencies = ["EUR", "USD", "JPY", "HKD"];

    let handles: Vec<_> = currencies
        .iter()
        .map(|code| {
            let dataset = Arc::clone(&dataset);
            let code = code.to_string();
            thread::spawn(move || {
                let mut session = Session::new(dataset, FilterEngine::default());
                session
                    .update(SelectionChange::SetCurrencies(vec![code]))
                    .total()
            })
        })
        .collect();

    let totals: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(totals, vec![2, 1, 1, 1]);
    assert_eq!(Arc::strong_count(&dataset), 1);
}

#[test]
fn test_snapshot_matches_direct_engine_call() {
    let mut session = sample_session();
    let snapshot = session.update(SelectionChange::SetCuisine(Some("French".to_string())));

    let outcome = FilterEngine::default().apply(session.dataset(), session.selection());
    assert_eq!(snapshot.matches, outcome.indices());
    assert_eq!(&snapshot.distribution, outcome.distribution());
    assert_eq!(snapshot.summary, outcome.summary());
}
