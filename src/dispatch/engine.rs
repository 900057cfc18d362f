use rust_decimal::Decimal;
use tracing::{debug, error};

use crate::dispatch::DispatchError;
use crate::domain::{Allocation, Fuels, Plant, PlantType};

/// Computes a production plan that meets `load` at minimal fuel cost.
///
/// Every plant starts at its full available capacity (wind-adjusted for wind
/// turbines). If the fleet over-produces, the excess is trimmed from the most
/// expensive plants first, never taking a running plant below its minimum
/// stable output: a plant is either off at exactly 0 MW or on within
/// `[pmin, available]`. The returned list has one entry per input plant, in
/// input order.
///
/// Complexity is O(n log n), dominated by the cost sort of the trimming pass.
pub fn compute(load: Decimal, fuels: &Fuels, plants: &[Plant]) -> Result<Vec<Allocation>, DispatchError> {
    if load.is_sign_negative() {
        return Err(DispatchError::InvalidInput("load must be non-negative".to_string()));
    }
    if plants.is_empty() {
        return Err(DispatchError::InvalidInput(
            "at least one power plant is required".to_string(),
        ));
    }

    // Working records, one per plant, starting at full available power.
    let mut allocations = Vec::with_capacity(plants.len());
    for plant in plants {
        allocations.push(Allocation {
            name: plant.name.clone(),
            power: available_power(plant, fuels.wind_percent),
            pmin: plant.pmin,
            cost: marginal_cost(plant, fuels)?,
        });
    }

    let mut available = Decimal::ZERO;
    for allocation in &allocations {
        available = available
            .checked_add(allocation.power)
            .ok_or(DispatchError::Arithmetic("summing available capacity"))?;
    }

    if available < load {
        error!(%load, %available, "load cannot be met with the available power plants");
        return Err(DispatchError::Infeasible { load, available });
    }

    let mut excess = available - load;
    if excess > Decimal::ZERO {
        // Most expensive first; equal costs keep their input order.
        let mut order: Vec<usize> = (0..allocations.len()).collect();
        order.sort_by(|&lhs, &rhs| allocations[rhs].cost.cmp(&allocations[lhs].cost));

        for index in order {
            let allocation = &mut allocations[index];

            // Cheap enough to lose this plant entirely.
            if allocation.power <= excess {
                excess -= allocation.power;
                allocation.power = Decimal::ZERO;
                continue;
            }

            let reducible = allocation.power - allocation.pmin;
            if reducible <= excess {
                // Keep the plant online at its floor.
                allocation.power -= reducible;
                excess -= reducible;
            } else {
                // This plant absorbs the rest; cheaper plants stay untouched.
                allocation.power -= excess;
                break;
            }
        }
    }

    debug!(%load, plants = allocations.len(), "production plan computed");
    Ok(allocations)
}

/// Power a plant can deliver right now, in MW.
///
/// Wind turbines are derated by the current wind percentage and rounded to one
/// decimal place. `Decimal::round_dp` rounds midpoints to even.
fn available_power(plant: &Plant, wind_percent: Decimal) -> Decimal {
    match plant.plant_type {
        PlantType::WindTurbine => (plant.pmax / Decimal::ONE_HUNDRED * wind_percent).round_dp(1),
        _ => plant.pmax,
    }
}

/// Marginal production cost in currency per MWh.
///
/// A pure function of plant type, efficiency and fuel prices; the CO₂ price
/// and the load play no part.
fn marginal_cost(plant: &Plant, fuels: &Fuels) -> Result<Decimal, DispatchError> {
    match plant.plant_type {
        PlantType::GasFired => fuel_cost(plant, fuels.gas_euro_per_mwh),
        PlantType::TurboJet => fuel_cost(plant, fuels.kerosine_euro_per_mwh),
        PlantType::WindTurbine | PlantType::Other => Ok(Decimal::ZERO),
    }
}

fn fuel_cost(plant: &Plant, fuel_price: Decimal) -> Result<Decimal, DispatchError> {
    if plant.efficiency <= Decimal::ZERO {
        return Err(DispatchError::InvalidInput(format!(
            "plant '{}' must have a positive efficiency",
            plant.name
        )));
    }
    fuel_price
        .checked_div(plant.efficiency)
        .ok_or(DispatchError::Arithmetic("deriving fuel cost"))
}
