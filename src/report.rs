use crate::search::Search;
use crate::util::{Points, Result};

/// Checkouts found for one starting point value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultRow {
    pub remaining: Points,
    pub solutions: Vec<String>,
}

/// Tabular result of a batch of searches: one row per starting value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultSet {
    rows: Vec<ResultRow>,
}

pub const REMAINING_COLUMN: &str = "Remaining Points";
pub const SOLUTION_COLUMN: &str = "Solution";

impl ResultSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `search` for every start and collects the rendered checkouts.
    ///
    /// Stops at the first start that fails; the error names the missing row.
    pub fn from_search<I>(search: &Search<'_>, starts: I) -> Result<Self>
    where
        I: IntoIterator<Item = Points>,
    {
        let table = search.table();
        let mut set = Self::new();
        for (remaining, found) in search.search_many(starts) {
            let solutions = found?
                .iter()
                .map(|c| c.render(table))
                .collect::<Result<_>>()?;
            set.push(remaining, solutions);
        }
        Ok(set)
    }

    pub fn push(&mut self, remaining: Points, solutions: Vec<String>) {
        self.rows.push(ResultRow {
            remaining,
            solutions,
        });
    }

    #[must_use]
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| r.solutions.len()).max().unwrap_or(0)
    }

    #[must_use]
    pub fn header(&self) -> Vec<String> {
        std::iter::once(REMAINING_COLUMN.to_string())
            .chain((1..=self.width()).map(|i| format!("{SOLUTION_COLUMN} {i}")))
            .collect()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.rows.iter().map(|r| r.solutions.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Outcome::{Bust, Continue, Success};
    use crate::table::TransitionTable;
    use crate::util::Error;

    fn small() -> TransitionTable {
        TransitionTable::new(
            ["A", "B"],
            [
                (2, vec![Success, Bust]),
                (3, vec![Continue(2), Success]),
                (4, vec![Continue(3), Continue(2)]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_from_search() {
        let t = small();
        let s = Search::builder().budget(2).build(&t);
        let set = ResultSet::from_search(&s, 2..=4).unwrap();
        let rows = set.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].solutions, vec!["A"]);
        assert_eq!(rows[1].solutions, vec!["A A", "B"]);
        assert_eq!(rows[2].solutions, vec!["A B", "B A"]);
        assert_eq!(set.total(), 5);
        assert_eq!(
            set.header(),
            vec!["Remaining Points", "Solution 1", "Solution 2"]
        );
    }

    #[test]
    fn test_empty_row_is_kept() {
        let t = small();
        let s = Search::builder().budget(1).build(&t);
        let set = ResultSet::from_search(&s, [4, 3]).unwrap();
        assert!(set.rows()[0].solutions.is_empty());
        assert_eq!(set.header().len(), 2);
    }

    #[test]
    fn test_missing_start() {
        let t = small();
        let s = Search::builder().budget(2).build(&t);
        assert_eq!(ResultSet::from_search(&s, [2, 8]), Err(Error::Lookup(8)));
    }
}
