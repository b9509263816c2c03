use super::crop::Crop;
use super::soil::Soil;
use serde::Serialize;

/// The inputs the engine actually used, after defaults and overrides.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedInputs {
    pub crop: Crop,
    pub soil: Soil,
    pub kc: f64,
    pub root_depth: f64,
    pub cad: f64,
    pub p: f64,
    pub eto: f64,
    pub eff: f64,
    #[serde(rename = "areaM2")]
    pub area_m2: f64,
    pub plants: Option<u64>,
}

/// Root-zone water balance, mm (per day where applicable).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WaterBalance {
    /// Crop evapotranspiration
    pub etc: f64,
    /// Net irrigation requirement
    pub nir: f64,
    /// Gross irrigation requirement
    pub gir: f64,
    /// Total available water in the root zone
    pub taw: f64,
    /// Readily available water
    pub raw: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTotals {
    pub total_liters: f64,
    pub per_plant_liters: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub interval_days: f64,
    #[serde(rename = "eventMM")]
    pub event_mm: f64,
    pub event_total_liters: f64,
    pub per_plant_event_liters: Option<f64>,
    pub flow_per_plant_lh: Option<f64>,
    pub minutes_per_event_per_plant: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    pub echo: ResolvedInputs,
    pub metrics: WaterBalance,
    pub daily: DailyTotals,
    pub schedule: Schedule,
}
