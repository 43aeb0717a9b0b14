use num::Zero;

use crate::util::{Count, Error, Points, Result};

/// Which part of the estimate table to return.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Last,
    Full,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Estimate {
    Last(Count),
    /// Estimates for `1..=n`; index `i` holds point value `i + 1`.
    Full(Vec<Count>),
}

impl Estimate {
    /// Estimate for the largest requested point value.
    #[must_use]
    pub fn last(&self) -> Option<&Count> {
        match self {
            Estimate::Last(x) => Some(x),
            Estimate::Full(xs) => xs.last(),
        }
    }
}

/// Estimated number of checkouts for `n` points in any number of throws.
///
/// `D(1) = 0` and for `k >= 2`:
///
/// ```text
/// D(k) = D(k-1) + sum(2 * D(j), j = 2..=k-2) + E(k)
/// ```
///
/// where `E(k)` is 1 if `k` is even and `k < 41 || k == 50`, otherwise 0.
/// This is a conjectured growth law with empirical corrections for the
/// standard board, and says nothing reliable past 50.
pub fn estimate(n: Points, mode: Mode) -> Result<Estimate> {
    let mut table = estimate_table(n)?;
    Ok(match mode {
        Mode::Full => Estimate::Full(table),
        Mode::Last => Estimate::Last(table.pop().unwrap_or_default()),
    })
}

pub fn estimate_last(n: Points) -> Result<Count> {
    let mut table = estimate_table(n)?;
    Ok(table.pop().unwrap_or_default())
}

pub fn estimate_table(n: Points) -> Result<Vec<Count>> {
    if n < 1 {
        return Err(Error::InvalidArgument(format!(
            "estimate needs at least 1 point, got {n}"
        )));
    }

    let n = n as usize;
    let mut d = Vec::with_capacity(n);
    d.push(Count::zero());
    // Running sum of D(2)..=D(k-2).
    let mut window = Count::zero();

    for k in 2..=n {
        if k > 3 {
            window += &d[k - 3];
        }
        let mut value = d[k - 2].clone();
        if k > 3 {
            value += &window * 2u32;
        }
        if k % 2 == 0 && (k < 41 || k == 50) {
            value += 1u32;
        }
        d.push(value);
    }

    Ok(d)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(xs: &[u32]) -> Vec<Count> {
        xs.iter().map(|&x| Count::from(x)).collect()
    }

    #[test]
    fn test_first_values() {
        assert_eq!(
            estimate_table(8).unwrap(),
            counts(&[0, 1, 1, 4, 8, 21, 49, 120])
        );
    }

    #[test]
    fn test_base_cases() {
        assert_eq!(estimate_last(1).unwrap(), Count::from(0u32));
        assert_eq!(estimate_last(2).unwrap(), Count::from(1u32));
        assert_eq!(estimate_last(3).unwrap(), Count::from(1u32));
    }

    #[test]
    fn test_zero_is_invalid() {
        assert!(matches!(estimate(0, Mode::Last), Err(Error::InvalidArgument(_))));
        assert!(matches!(estimate_table(0), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_modes_agree() {
        let full = estimate(60, Mode::Full).unwrap();
        let last = estimate(60, Mode::Last).unwrap();
        match &full {
            Estimate::Full(xs) => assert_eq!(xs.len(), 60),
            Estimate::Last(_) => panic!("expected full table"),
        }
        assert_eq!(full.last(), last.last());
    }

    #[test]
    fn test_large_values_do_not_overflow() {
        let x = estimate_last(501).unwrap();
        assert!(x > Count::from(u128::MAX));
    }
}
