use crate::models::{Crop, ReferenceTables, Soil};
use serde::Serialize;

/// Baseline coefficients for a crop grown in a given soil.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Defaults {
    pub kc: f64,
    pub root_depth: f64,
    pub cad: f64,
    pub p: f64,
}

pub fn resolve_defaults(tables: &ReferenceTables, crop: Crop, soil: Soil) -> Defaults {
    let crop_profile = tables.crop(crop);
    let soil_profile = tables.soil(soil);

    Defaults {
        kc: crop_profile.kc,
        root_depth: crop_profile.root_depth_m,
        cad: soil_profile.cad_mm_per_m,
        p: soil_profile.depletion_fraction,
    }
}

/// String-keyed variant: identifiers are matched case-insensitively and
/// unknown names resolve to the `other` crop and `loamy` soil.
pub fn resolve_defaults_by_name(tables: &ReferenceTables, crop: &str, soil: &str) -> Defaults {
    resolve_defaults(tables, Crop::resolve(crop), Soil::resolve(soil))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CropProfile;

    #[test]
    fn tomato_on_loam() {
        let d = resolve_defaults(&ReferenceTables::default(), Crop::Tomato, Soil::Loamy);
        assert_eq!(d.kc, 1.15);
        assert_eq!(d.root_depth, 0.50);
        assert_eq!(d.cad, 120.0);
        assert_eq!(d.p, 0.5);
    }

    #[test]
    fn unknown_names_use_fallback_entries() {
        let tables = ReferenceTables::default();
        let d = resolve_defaults_by_name(&tables, "unknowncrop", "unknownsoil");
        assert_eq!(d, resolve_defaults(&tables, Crop::Other, Soil::Loamy));
        assert_eq!(d.kc, 1.00);
        assert_eq!(d.root_depth, 0.50);
        assert_eq!(d.cad, 120.0);
    }

    #[test]
    fn names_are_case_insensitive() {
        let tables = ReferenceTables::default();
        assert_eq!(
            resolve_defaults_by_name(&tables, "CORN", "Sandy"),
            resolve_defaults(&tables, Crop::Corn, Soil::Sandy)
        );
    }

    #[test]
    fn table_overrides_flow_through() {
        let mut tables = ReferenceTables::default();
        tables.crops.insert(
            Crop::Bean,
            CropProfile {
                kc: 0.9,
                root_depth_m: 0.4,
            },
        );
        let d = resolve_defaults(&tables, Crop::Bean, Soil::Clayey);
        assert_eq!(d.kc, 0.9);
        assert_eq!(d.root_depth, 0.4);
        assert_eq!(d.cad, 180.0);
        assert_eq!(d.p, 0.6);
    }
}
