use crate::models::WaterBalance;

/// Root-zone water balance.
///
/// Effective rainfall and capillary rise are not modelled: the net
/// requirement equals crop evapotranspiration.
pub fn compute_water_balance(
    kc: f64,
    root_depth_m: f64,
    cad_mm_per_m: f64,
    depletion_fraction: f64,
    eto: f64,
    system_efficiency: f64,
) -> WaterBalance {
    let etc = eto * kc;
    let taw = cad_mm_per_m * root_depth_m;
    let raw = depletion_fraction * taw;
    let nir = etc;
    let gir = gross_requirement(nir, system_efficiency);

    WaterBalance {
        etc,
        nir,
        gir,
        taw,
        raw,
    }
}

/// Inflate the net requirement for application losses. A non-positive
/// efficiency leaves it unchanged.
pub fn gross_requirement(nir: f64, system_efficiency: f64) -> f64 {
    if system_efficiency > 0.0 {
        nir / system_efficiency
    } else {
        nir
    }
}
