//! Transition tables exported as delimited text.
//!
//! The first line is the header: an index column name, which may be empty,
//! followed by one label per throw. Every other line is a point value followed by one cell per
//! throw, where `0` is a checkout, `999` a bust and anything else the points
//! left. Comma, tab and semicolon separators are accepted.

use std::fs;
use std::path::Path;

use checkout::{Error, Outcome, Points, TransitionTable};

use crate::Result;

const SEPARATORS: [char; 3] = ['\t', ';', ','];

pub fn from_path<P>(path: P) -> Result<TransitionTable>
where
    P: AsRef<Path>,
{
    let text = fs::read_to_string(path)?;
    Ok(parse(&text)?)
}

pub fn parse(text: &str) -> checkout::Result<TransitionTable> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim_end_matches('\r')))
        .filter(|(_, l)| !l.trim().is_empty());

    let (_, header) = lines
        .next()
        .ok_or_else(|| Error::Config("empty table".to_string()))?;
    let sep = SEPARATORS
        .into_iter()
        .find(|&c| header.contains(c))
        .ok_or_else(|| Error::Config("header has no separator".to_string()))?;
    let labels: Vec<String> = header
        .split(sep)
        .skip(1)
        .map(|l| l.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for (line, text) in lines {
        let mut cells = text.split(sep).map(str::trim);
        let points = cell(cells.next().unwrap_or_default(), line)?;
        let outcomes = cells
            .map(|c| cell(c, line).map(Outcome::from_cell))
            .collect::<checkout::Result<Vec<_>>>()?;
        if outcomes.len() != labels.len() {
            return Err(Error::Config(format!(
                "line {line}: {} cells, expected {}",
                outcomes.len(),
                labels.len()
            )));
        }
        rows.push((points, outcomes));
    }

    TransitionTable::new(labels, rows)
}

/// Spreadsheet exports may write whole numbers as `40.0`.
fn cell(text: &str, line: usize) -> checkout::Result<Points> {
    text.parse::<Points>()
        .ok()
        .or_else(|| {
            text.parse::<f64>()
                .ok()
                .filter(|x| x.fract() == 0.0 && *x >= 0.0 && *x <= f64::from(Points::MAX))
                .map(|x| x as Points)
        })
        .ok_or_else(|| Error::Config(format!("line {line}: bad cell {text:?}")))
}

#[cfg(test)]
mod tests {
    use checkout::Search;

    use super::*;

    const SMALL: &str = "Points,A,B\n2,0,999\n3,2,0\n4,3,2\n";

    #[test]
    fn test_parse() {
        let t = parse(SMALL).unwrap();
        assert_eq!(t.labels(), &["A", "B"]);
        assert_eq!(
            t.row(4).unwrap().outcomes(),
            &[Outcome::Continue(3), Outcome::Continue(2)]
        );
        let s = Search::builder().budget(2).build(&t);
        assert_eq!(s.labels(4).unwrap(), vec!["A B", "B A"]);
    }

    #[test]
    fn test_tabs_and_floats() {
        let t = parse("n\tS1\tD1\n\n2.0\t999\t0.0\n3\t2\t999\n").unwrap();
        assert_eq!(t.row(2).unwrap().outcomes(), &[Outcome::Bust, Outcome::Success]);
        assert_eq!(t.row(3).unwrap().outcome(0), Some(Outcome::Continue(2)));
    }

    #[test]
    fn test_tsv_unnamed_index() {
        let t = parse("\tA\tB\r\n2\t0\t999\r\n3\t2\t0\r\n").unwrap();
        assert_eq!(t.labels(), &["A", "B"]);
        assert_eq!(t.row(2).unwrap().outcomes(), &[Outcome::Success, Outcome::Bust]);
        assert_eq!(t.row(3).unwrap().outcomes(), &[Outcome::Continue(2), Outcome::Success]);
        assert_eq!(parse(",A,B\n2,0,999\n3,2,0\n").unwrap(), t);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(parse(""), Err(Error::Config(_))));
        assert!(matches!(parse("Points A B\n"), Err(Error::Config(_))));
        assert!(matches!(parse("P,A,B\n2,0\n"), Err(Error::Config(_))));
        assert!(matches!(parse("P,A\n2,x\n"), Err(Error::Config(_))));
        assert!(matches!(parse("P,A\n2,0.5\n"), Err(Error::Config(_))));
        assert!(matches!(parse("P,A\n2,0\n2,0\n"), Err(Error::Config(_))));
    }

    #[test]
    fn test_round_trip_through_file() {
        let path = std::env::temp_dir().join(format!("checkout-load-{}.csv", std::process::id()));
        fs::write(&path, SMALL).unwrap();
        let t = from_path(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(t, parse(SMALL).unwrap());
        assert!(matches!(
            from_path(path.with_extension("missing")),
            Err(crate::Error::Io(_))
        ));
    }
}
