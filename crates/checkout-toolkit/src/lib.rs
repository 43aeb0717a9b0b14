pub mod load;
pub mod print;

use thiserror::Error;

pub use print::PrintExt;

pub type Result<T> = ::core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Checkout(#[from] checkout::Error),
}
