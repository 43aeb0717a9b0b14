use once_cell::sync::Lazy;

use crate::outcome::Outcome;
use crate::table::TransitionTable;
use crate::util::{Points, Result};
use crate::STANDARD_MAX_POINTS;

/// Double-out board for `2..=501` points.
pub static STANDARD: Lazy<TransitionTable> = Lazy::new(|| {
    standard_table(STANDARD_MAX_POINTS).expect("standard board rows are well-formed")
});

const BULL: Points = 25;

struct Dart {
    label: String,
    value: Points,
    double: bool,
}

pub fn standard() -> TransitionTable {
    STANDARD.clone()
}

/// Builds the double-out table with a row for every value in `2..=max_points`.
///
/// Throws are ordered singles (`S1`..`S20`, `S25`), doubles (`D1`..`D20`,
/// `D25`), then trebles (`T1`..`T20`).
pub fn standard_table(max_points: Points) -> Result<TransitionTable> {
    let darts = darts();
    let rows = (2..=max_points).map(|points| {
        let outcomes = darts.iter().map(|d| d.outcome(points)).collect();
        (points, outcomes)
    });
    TransitionTable::new(darts.iter().map(|d| d.label.clone()), rows)
}

fn darts() -> Vec<Dart> {
    let segments = || (1..=20).chain([BULL]);
    let singles = segments().map(|n| Dart::new('S', n, 1));
    let doubles = segments().map(|n| Dart::new('D', n, 2));
    let trebles = (1..=20).map(|n| Dart::new('T', n, 3));
    singles.chain(doubles).chain(trebles).collect()
}

impl Dart {
    fn new(prefix: char, segment: Points, multiplier: Points) -> Self {
        Self {
            label: format!("{prefix}{segment}"),
            value: segment * multiplier,
            double: multiplier == 2,
        }
    }

    fn outcome(&self, points: Points) -> Outcome {
        match points.checked_sub(self.value) {
            Some(0) if self.double => Outcome::Success,
            Some(rest) if rest >= 2 => Outcome::Continue(rest),
            _ => Outcome::Bust,
        }
    }
}
