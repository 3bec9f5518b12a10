use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use turing_core::canned;

#[test]
fn table_has_no_blank_entries() {
    assert_eq!(canned::all().len(), 20);
    assert!(canned::all().iter().all(|p| !p.trim().is_empty()));
}

#[test]
fn pick_always_returns_a_listed_phrase() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let phrase = canned::pick(&mut rng);
        assert!(!phrase.is_empty());
        assert!(canned::all().contains(&phrase));
    }
}

#[test]
fn pick_covers_more_than_one_phrase() {
    let mut rng = StdRng::seed_from_u64(1);
    let seen: HashSet<&str> = (0..200).map(|_| canned::pick(&mut rng)).collect();
    assert!(seen.len() > 1);
}
