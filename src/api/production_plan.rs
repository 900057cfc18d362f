use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::{
    api::error::ApiError,
    dispatch,
    domain::{Allocation, Fuels, Plant},
};

/// Request body for a production plan computation.
#[derive(Debug, Deserialize, Validate)]
pub struct ProductionPlanRequest {
    /// Required total power in MW.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[validate(custom(function = "validate_load"))]
    pub load: Decimal,

    #[validate(nested)]
    pub fuels: Fuels,

    #[validate(length(min = 1, message = "at least one power plant is required"), nested)]
    pub powerplants: Vec<Plant>,
}

/// POST /api/v1/productionplan - compute a dispatch plan for one load value
pub async fn production_plan(
    Json(request): Json<ProductionPlanRequest>,
) -> Result<Json<Vec<Allocation>>, ApiError> {
    request.validate()?;

    tracing::info!(
        load = %request.load,
        plants = request.powerplants.len(),
        "computing production plan"
    );

    let plan = dispatch::compute(request.load, &request.fuels, &request.powerplants)?;
    Ok(Json(plan))
}

fn validate_load(load: &Decimal) -> Result<(), ValidationError> {
    if load.is_sign_negative() {
        let mut error = ValidationError::new("load");
        error.message = Some("load must be non-negative".into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use super::*;

    fn request(body: &str) -> ProductionPlanRequest {
        serde_json::from_str(body).unwrap()
    }

    const VALID_BODY: &str = r#"{
        "load": 480,
        "fuels": { "gas(euro/MWh)": 13.4, "kerosine(euro/MWh)": 50.8, "co2(euro/ton)": 20, "wind(%)": 60 },
        "powerplants": [
            { "name": "gasfiredbig1", "type": "gasfired", "efficiency": 0.53, "pmin": 100, "pmax": 460 }
        ]
    }"#;

    #[test]
    fn test_valid_request_passes_validation() {
        let parsed = request(VALID_BODY);
        assert!(parsed.validate().is_ok());
        assert_eq!(parsed.load, dec!(480));
    }

    #[test]
    fn test_negative_load_fails_validation() {
        let mut parsed = request(VALID_BODY);
        parsed.load = dec!(-480);
        assert!(parsed.validate().is_err());
    }

    #[test]
    fn test_empty_plant_list_fails_validation() {
        let mut parsed = request(VALID_BODY);
        parsed.powerplants.clear();
        assert!(parsed.validate().is_err());
    }

    #[test]
    fn test_nested_plant_errors_surface() {
        let mut parsed = request(VALID_BODY);
        parsed.powerplants[0].efficiency = Decimal::ZERO;
        assert!(parsed.validate().is_err());
    }
}
