use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::outcome::Outcome;
use crate::util::{Error, Points, Result, Throw};
use crate::{BUST_SENTINEL, SUCCESS_SENTINEL};

/// Outcomes of every throw from one point value, in throw order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    points: Points,
    outcomes: Vec<Outcome>,
}

/// Read-only mapping from points remaining and throw to [`Outcome`].
///
/// Every row carries exactly one outcome per label. The order of the labels
/// is the order in which the search enumerates throws.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionTable {
    labels: Vec<String>,
    rows: BTreeMap<Points, Row>,
}

impl Row {
    #[must_use]
    pub fn points(&self) -> Points {
        self.points
    }

    #[must_use]
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    #[must_use]
    pub fn outcome(&self, throw: Throw) -> Option<Outcome> {
        self.outcomes.get(throw).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Throw, Outcome)> + '_ {
        self.outcomes.iter().copied().enumerate()
    }
}

impl TransitionTable {
    /// Builds a table, rejecting structurally broken input.
    ///
    /// Fails with [`Error::Config`] when there are no labels, when a row is
    /// wider or narrower than the label list, when a point value repeats, or
    /// when a `Continue` target is one of the cell sentinels.
    pub fn new<L, R>(labels: L, rows: R) -> Result<Self>
    where
        L: IntoIterator,
        L::Item: Into<String>,
        R: IntoIterator<Item = (Points, Vec<Outcome>)>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(Error::Config("no throw labels".to_string()));
        }

        let mut map = BTreeMap::new();
        for (points, outcomes) in rows {
            if outcomes.len() != labels.len() {
                return Err(Error::Config(format!(
                    "row {points} has {} outcomes, expected {}",
                    outcomes.len(),
                    labels.len()
                )));
            }
            if let Some(next) = outcomes.iter().find_map(|o| match o {
                Outcome::Continue(x) if *x == SUCCESS_SENTINEL || *x == BUST_SENTINEL => Some(*x),
                _ => None,
            }) {
                return Err(Error::Config(format!(
                    "row {points} continues to the sentinel value {next}"
                )));
            }
            match map.entry(points) {
                Entry::Vacant(e) => {
                    e.insert(Row { points, outcomes });
                }
                Entry::Occupied(_) => {
                    return Err(Error::Config(format!("duplicate row {points}")));
                }
            }
        }

        Ok(Self { labels, rows: map })
    }

    /// Checks that every `Continue` target has its own row.
    pub fn validate(&self) -> Result<()> {
        for row in self.rows.values() {
            for (throw, outcome) in row.iter() {
                if let Outcome::Continue(next) = outcome {
                    if !self.rows.contains_key(&next) {
                        return Err(Error::Config(format!(
                            "{} from {} leaves {next}, which has no row",
                            self.labels[throw], row.points
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    pub fn row(&self, points: Points) -> Result<&Row> {
        self.rows.get(&points).ok_or(Error::Lookup(points))
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn label(&self, throw: Throw) -> Option<&str> {
        self.labels.get(throw).map(String::as_str)
    }

    #[must_use]
    pub fn throw_count(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = Points> + '_ {
        self.rows.keys().copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &Row> + '_ {
        self.rows.values()
    }

    /// Applies `throws` in order starting from `start`.
    ///
    /// Returns the last outcome reached. A `Success` or `Bust` before the final
    /// throw ends the replay early with `Bust`, since no further throw is legal.
    pub fn replay(&self, start: Points, throws: &[Throw]) -> Result<Outcome> {
        let mut current = Outcome::Continue(start);
        for &throw in throws {
            let points = match current {
                Outcome::Continue(p) => p,
                _ => return Ok(Outcome::Bust),
            };
            current = self
                .row(points)?
                .outcome(throw)
                .ok_or_else(|| Error::InvalidArgument(format!("unknown throw {throw}")))?;
        }
        Ok(current)
    }
}
