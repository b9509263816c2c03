use crate::models::{AreaSpec, CalculationInput};

pub const SQUARE_METERS_PER_HECTARE: f64 = 10_000.0;

/// Cultivated area in square meters.
pub fn resolve_area(area: &AreaSpec) -> f64 {
    match *area {
        AreaSpec::Hectares(ha) => ha * SQUARE_METERS_PER_HECTARE,
        AreaSpec::Beds {
            length_m,
            width_m,
            count,
        } => length_m * width_m * count,
        AreaSpec::Unspecified => 0.0,
    }
}

/// Plant count, in priority order: an explicit positive count, then
/// area divided by the spacing footprint, otherwise unknown.
pub fn resolve_plants(input: &CalculationInput, area_m2: f64) -> Option<u64> {
    if let Some(plants) = input.plants.filter(|p| *p > 0.0) {
        return Some(plants.floor() as u64);
    }

    let spacing = input.spacing?;
    let row_cm = spacing.row_cm.filter(|v| *v != 0.0)?;
    let plant_cm = spacing.plant_cm.filter(|v| *v != 0.0)?;

    let area_per_plant = (row_cm / 100.0) * (plant_cm / 100.0);
    if area_per_plant > 0.0 {
        // Negative areas saturate to zero plants
        Some((area_m2 / area_per_plant).floor().max(0.0) as u64)
    } else {
        None
    }
}
