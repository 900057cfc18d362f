use rust_decimal::Decimal;
use thiserror::Error;

/// Failure modes of the dispatch engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// The fleet cannot cover the requested load even at full output.
    #[error("requested load of {load} MW exceeds the {available} MW available across all plants")]
    Infeasible { load: Decimal, available: Decimal },

    /// Input violated a structural constraint the engine guards against.
    #[error("invalid dispatch input: {0}")]
    InvalidInput(String),

    /// Decimal arithmetic overflowed; inputs are far outside realistic ranges.
    #[error("arithmetic overflow while {0}")]
    Arithmetic(&'static str),
}
