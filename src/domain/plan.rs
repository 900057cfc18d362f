use rust_decimal::Decimal;
use serde::Serialize;

/// Per-plant outcome of a dispatch computation.
///
/// Only `name` and `p` are part of the wire contract; `pmin` and `cost` are
/// working data for the trimming pass and stay off the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Allocation {
    pub name: String,

    /// Assigned power in MW.
    #[serde(rename = "p", with = "rust_decimal::serde::arbitrary_precision")]
    pub power: Decimal,

    #[serde(skip_serializing)]
    pub pmin: Decimal,

    /// Marginal cost in currency per MWh, used to order reductions.
    #[serde(skip_serializing)]
    pub cost: Decimal,
}
