use rust_decimal::Decimal;
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Fuel prices and wind availability for one calculation.
///
/// Field names follow the wire contract verbatim. The CO₂ price is carried
/// through for reporting but does not enter the cost formula.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_fuels", skip_on_field_errors = false))]
pub struct Fuels {
    #[serde(rename = "gas(euro/MWh)", with = "rust_decimal::serde::arbitrary_precision")]
    pub gas_euro_per_mwh: Decimal,

    #[serde(rename = "kerosine(euro/MWh)", with = "rust_decimal::serde::arbitrary_precision")]
    pub kerosine_euro_per_mwh: Decimal,

    #[serde(rename = "co2(euro/ton)", default, with = "rust_decimal::serde::arbitrary_precision")]
    pub co2_euro_per_ton: Decimal,

    /// Percentage (0-100) of nameplate wind capacity currently obtainable.
    #[serde(rename = "wind(%)", with = "rust_decimal::serde::arbitrary_precision")]
    pub wind_percent: Decimal,
}

fn validate_fuels(fuels: &Fuels) -> Result<(), ValidationError> {
    if fuels.gas_euro_per_mwh.is_sign_negative() {
        return Err(invalid("gas", "gas price must be non-negative"));
    }
    if fuels.kerosine_euro_per_mwh.is_sign_negative() {
        return Err(invalid("kerosine", "kerosine price must be non-negative"));
    }
    if fuels.wind_percent.is_sign_negative() || fuels.wind_percent > Decimal::ONE_HUNDRED {
        return Err(invalid("wind", "wind percentage must be within 0-100"));
    }
    Ok(())
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}
