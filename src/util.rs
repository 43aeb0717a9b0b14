use thiserror::Error;

pub type Points = u32;
pub type Throw = usize;
pub type Count = num::BigUint;
pub type Result<T> = ::core::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("no row for {0} points in the transition table")]
    Lookup(Points),
    #[error("malformed transition table: {0}")]
    Config(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
