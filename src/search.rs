use std::collections::BTreeSet;

use bon::Builder;
use itertools::iproduct;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::outcome::Outcome;
use crate::table::{Row, TransitionTable};
use crate::util::{Error, Points, Result, Throw};
use crate::{DEFAULT_THROW_BUDGET, SEPARATOR};

/// Ordered throws that bring a starting point value to exactly zero.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Checkout(Vec<Throw>);

/// Depth-bounded enumeration of every checkout over a [`TransitionTable`].
#[derive(Debug, Builder)]
pub struct Search<'a> {
    #[builder(finish_fn)]
    table: &'a TransitionTable,
    #[builder(default = DEFAULT_THROW_BUDGET)]
    budget: usize,
}

impl Checkout {
    #[must_use]
    pub fn single(throw: Throw) -> Self {
        Self(vec![throw])
    }

    #[must_use]
    pub fn throws(&self) -> &[Throw] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Labels joined by a single space, in throw order.
    ///
    /// Fails with [`Error::InvalidArgument`] if a throw has no label in `table`.
    pub fn render(&self, table: &TransitionTable) -> Result<String> {
        let labels = self
            .0
            .iter()
            .map(|&t| {
                table
                    .label(t)
                    .ok_or_else(|| Error::InvalidArgument(format!("unknown throw {t}")))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(labels.join(SEPARATOR))
    }

    fn extended(&self, throw: Throw) -> Self {
        let mut throws = Vec::with_capacity(self.0.len() + 1);
        throws.extend_from_slice(&self.0);
        throws.push(throw);
        Self(throws)
    }

    fn concat(&self, suffix: &Self) -> Self {
        let mut throws = Vec::with_capacity(self.0.len() + suffix.0.len());
        throws.extend_from_slice(&self.0);
        throws.extend_from_slice(&suffix.0);
        Self(throws)
    }
}

impl From<Vec<Throw>> for Checkout {
    fn from(value: Vec<Throw>) -> Self {
        Self(value)
    }
}

impl<'a> Search<'a> {
    #[must_use]
    pub fn table(&self) -> &'a TransitionTable {
        self.table
    }

    #[must_use]
    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Every checkout from `start` using at most `budget` throws.
    pub fn checkouts(&self, start: Points) -> Result<Vec<Checkout>> {
        let row = self.table.row(start)?;
        self.recursive_check(row, 1, &[Checkout::default()])
    }

    /// Same as [`Search::checkouts`], rendered to label strings.
    pub fn labels(&self, start: Points) -> Result<Vec<String>> {
        self.checkouts(start)?
            .iter()
            .map(|c| c.render(self.table))
            .collect()
    }

    /// Expands `row` as throw number `next`, prepending every prefix to each
    /// completed suffix.
    ///
    /// Outcomes are visited in throw order. For a continued branch the
    /// completed suffixes form the outer loop and the prefixes the inner one.
    /// No row is looked up for a throw that would exceed the budget.
    pub fn recursive_check(
        &self,
        row: &Row,
        next: usize,
        prefixes: &[Checkout],
    ) -> Result<Vec<Checkout>> {
        let mut found = Vec::new();
        if next > self.budget {
            return Ok(found);
        }

        for (throw, outcome) in row.iter() {
            match outcome {
                Outcome::Success => {
                    found.extend(prefixes.iter().map(|p| p.extended(throw)));
                }
                Outcome::Bust => {}
                Outcome::Continue(points) => {
                    if next + 1 > self.budget {
                        continue;
                    }
                    let next_row = self.table.row(points)?;
                    let suffixes =
                        self.recursive_check(next_row, next + 1, &[Checkout::single(throw)])?;
                    found.extend(iproduct!(&suffixes, prefixes).map(|(s, p)| p.concat(s)));
                }
            }
        }

        Ok(found)
    }

    /// Searches each start independently, keeping the input order.
    #[cfg(not(feature = "parallel"))]
    pub fn search_many<I>(&self, starts: I) -> Vec<(Points, Result<Vec<Checkout>>)>
    where
        I: IntoIterator<Item = Points>,
    {
        starts
            .into_iter()
            .map(|p| (p, self.checkouts(p)))
            .collect()
    }

    /// Searches each start independently, keeping the input order.
    #[cfg(feature = "parallel")]
    pub fn search_many<I>(&self, starts: I) -> Vec<(Points, Result<Vec<Checkout>>)>
    where
        I: IntoIterator<Item = Points>,
    {
        let starts: Vec<_> = starts.into_iter().collect();
        starts
            .into_par_iter()
            .map(|p| (p, self.checkouts(p)))
            .collect()
    }

    /// Fewest throws needed to check out from `start`, if it fits the budget.
    pub fn fewest_throws(&self, start: Points) -> Result<Option<usize>> {
        let mut frontier = BTreeSet::from([start]);
        for depth in 1..=self.budget {
            let mut next = BTreeSet::new();
            for &points in &frontier {
                for (_, outcome) in self.table.row(points)?.iter() {
                    match outcome {
                        Outcome::Success => return Ok(Some(depth)),
                        Outcome::Continue(p) => {
                            next.insert(p);
                        }
                        Outcome::Bust => {}
                    }
                }
            }
            if next.is_empty() {
                break;
            }
            frontier = next;
        }
        Ok(None)
    }
}
