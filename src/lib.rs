mod defs;
mod estimate;
mod outcome;
mod report;
mod search;
mod table;
mod util;

pub use defs::{standard, standard_table, STANDARD};
pub use estimate::{estimate, estimate_last, estimate_table, Estimate, Mode};
pub use outcome::Outcome;
pub use report::{ResultRow, ResultSet, REMAINING_COLUMN, SOLUTION_COLUMN};
pub use search::{Checkout, Search};
pub use table::{Row, TransitionTable};
pub use util::{Count, Error, Points, Result, Throw};

/// Cell value marking a bust in the delimited-text table encoding.
pub const BUST_SENTINEL: Points = 999;
/// Cell value marking an exact checkout in the delimited-text table encoding.
pub const SUCCESS_SENTINEL: Points = 0;
pub const SEPARATOR: &str = " ";
pub const DEFAULT_THROW_BUDGET: usize = 3;
pub const STANDARD_MAX_POINTS: Points = 501;
