//! Checkouts on the built-in double-out board.

use checkout::{estimate_last, Count, Outcome, ResultSet, Search, TransitionTable, STANDARD};

fn search(budget: usize) -> Search<'static> {
    Search::builder().budget(budget).build(&STANDARD)
}

#[test]
fn test_highest_checkout() {
    assert_eq!(search(3).labels(170).unwrap(), vec!["T20 T20 D25"]);
}

#[test]
fn test_throw_order() {
    assert_eq!(
        search(2).labels(6).unwrap(),
        vec!["S2 D2", "S4 D1", "D1 D2", "D2 D1", "D3"]
    );
}

#[test]
fn test_counts() {
    assert_eq!(search(3).checkouts(2).unwrap().len(), 1);
    assert_eq!(search(3).checkouts(10).unwrap().len(), 55);
    assert_eq!(search(2).checkouts(40).unwrap().len(), 36);
    assert_eq!(search(3).checkouts(100).unwrap().len(), 546);
}

#[test]
fn test_bogey_number() {
    assert!(search(3).checkouts(169).unwrap().is_empty());
    assert_eq!(search(3).fewest_throws(169), Ok(None));
    assert_eq!(search(4).fewest_throws(169), Ok(Some(4)));
    assert_eq!(search(3).fewest_throws(170), Ok(Some(3)));
}

#[test]
fn test_every_checkout_ends_on_a_double() {
    let table: &TransitionTable = &STANDARD;
    let s = search(3);
    for start in 2..=60 {
        for c in s.checkouts(start).unwrap() {
            let last = *c.throws().last().unwrap();
            let rendered = c.render(table).unwrap();
            assert!(table.label(last).unwrap().starts_with('D'), "{rendered}");
            assert_eq!(table.replay(start, c.throws()), Ok(Outcome::Success));
        }
    }
}

#[test]
fn test_estimate_is_exact_for_small_totals() {
    // Each throw removes at least one point, so `start` throws is unlimited.
    for start in 2..=6u32 {
        let exact = search(start as usize).checkouts(start).unwrap().len();
        assert_eq!(estimate_last(start).unwrap(), Count::from(exact), "start={start}");
    }
}

#[test]
fn test_default_run() {
    let set = ResultSet::from_search(&search(3), 2..=10).unwrap();
    assert_eq!(set.rows().len(), 9);
    assert_eq!(set.rows()[0].solutions, vec!["D1"]);
    assert_eq!(set.rows()[1].solutions, vec!["S1 D1"]);
}
