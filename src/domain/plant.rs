use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Kind of generation asset.
///
/// Unrecognized type strings deserialize to [`PlantType::Other`], which
/// dispatches as zero-cost, always-available capacity with no wind derating.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlantType {
    GasFired,
    TurboJet,
    WindTurbine,
    #[serde(other)]
    Other,
}

impl PlantType {
    /// Whether the marginal cost of this plant depends on a fuel price.
    pub fn burns_fuel(&self) -> bool {
        matches!(self, Self::GasFired | Self::TurboJet)
    }
}

impl std::fmt::Display for PlantType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::GasFired => "gasfired",
            Self::TurboJet => "turbojet",
            Self::WindTurbine => "windturbine",
            Self::Other => "other",
        };
        write!(f, "{s}")
    }
}

/// One power plant as supplied by the caller.
///
/// `pmin` is the minimum stable output while online; `pmax` the nameplate
/// ceiling. Both in MW.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_plant", skip_on_field_errors = false))]
pub struct Plant {
    pub name: String,

    #[serde(rename = "type")]
    pub plant_type: PlantType,

    /// Fuel-to-electricity conversion factor; required > 0 for fuel burners.
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision")]
    pub efficiency: Decimal,

    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub pmin: Decimal,

    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub pmax: Decimal,
}

fn validate_plant(plant: &Plant) -> Result<(), ValidationError> {
    if plant.name.trim().is_empty() {
        return Err(invalid("name", "plant name must not be empty"));
    }
    if plant.pmin.is_sign_negative() {
        return Err(invalid("pmin", "pmin must be non-negative"));
    }
    if plant.pmax < plant.pmin {
        return Err(invalid("pmax", "pmax must be greater than or equal to pmin"));
    }
    if plant.plant_type.burns_fuel() && plant.efficiency <= Decimal::ZERO {
        return Err(invalid(
            "efficiency",
            "efficiency must be positive for fuel-burning plants",
        ));
    }
    Ok(())
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use super::*;

    fn plant(plant_type: PlantType, efficiency: Decimal) -> Plant {
        Plant {
            name: "plant1".to_string(),
            plant_type,
            efficiency,
            pmin: dec!(10),
            pmax: dec!(100),
        }
    }

    #[test]
    fn test_known_types_deserialize() {
        let plant: Plant = serde_json::from_str(
            r#"{ "name": "gasfiredbig1", "type": "gasfired", "efficiency": 0.53, "pmin": 100, "pmax": 460 }"#,
        )
        .unwrap();
        assert_eq!(plant.plant_type, PlantType::GasFired);
        assert_eq!(plant.efficiency, dec!(0.53));
        assert_eq!(plant.pmax, dec!(460));
    }

    #[test]
    fn test_unrecognized_type_falls_back() {
        let plant: Plant = serde_json::from_str(
            r#"{ "name": "bio1", "type": "biomass", "efficiency": 0.4, "pmin": 0, "pmax": 50 }"#,
        )
        .unwrap();
        assert_eq!(plant.plant_type, PlantType::Other);
    }

    #[test]
    fn test_missing_efficiency_defaults_to_zero() {
        let plant: Plant = serde_json::from_str(
            r#"{ "name": "windpark1", "type": "windturbine", "pmin": 0, "pmax": 150 }"#,
        )
        .unwrap();
        assert_eq!(plant.efficiency, Decimal::ZERO);
    }

    #[test]
    fn test_fuel_burners_require_positive_efficiency() {
        assert!(plant(PlantType::GasFired, Decimal::ZERO).validate().is_err());
        assert!(plant(PlantType::TurboJet, dec!(-0.5)).validate().is_err());
        assert!(plant(PlantType::GasFired, dec!(0.53)).validate().is_ok());
        // Wind needs no efficiency at all.
        assert!(plant(PlantType::WindTurbine, Decimal::ZERO).validate().is_ok());
    }

    #[test]
    fn test_pmin_pmax_ordering() {
        let mut p = plant(PlantType::GasFired, dec!(0.5));
        p.pmin = dec!(200);
        assert!(p.validate().is_err());

        p.pmin = dec!(-1);
        assert!(p.validate().is_err());
    }
}
