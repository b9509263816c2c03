use super::climate::{is_valid_eto_row, Climate, MonthlyEto};
use super::crop::{Crop, CropProfile};
use super::soil::{Soil, SoilProfile};
use crate::error::{IrriCalcError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Crop, soil and climate reference data.
///
/// Every lookup is total: entries not overridden here resolve to the
/// built-in values carried by the enums themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTables {
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub crops: HashMap<Crop, CropProfile>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub soils: HashMap<Soil, SoilProfile>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub climates: HashMap<Climate, MonthlyEto>,
}

impl ReferenceTables {
    pub fn crop(&self, crop: Crop) -> CropProfile {
        self.crops
            .get(&crop)
            .copied()
            .unwrap_or_else(|| crop.builtin_profile())
    }

    pub fn soil(&self, soil: Soil) -> SoilProfile {
        self.soils
            .get(&soil)
            .copied()
            .unwrap_or_else(|| soil.builtin_profile())
    }

    pub fn eto_row(&self, climate: Climate) -> MonthlyEto {
        self.climates
            .get(&climate)
            .copied()
            .unwrap_or_else(|| climate.builtin_eto())
    }

    pub fn is_builtin(&self) -> bool {
        self.crops.is_empty() && self.soils.is_empty() && self.climates.is_empty()
    }

    /// Reject override rows the engine could not use meaningfully.
    pub fn validate(&self) -> Result<()> {
        for (crop, profile) in &self.crops {
            if !profile.is_valid() {
                return Err(IrriCalcError::Config(format!(
                    "crop '{}': kc and root_depth_m must be positive",
                    crop
                )));
            }
        }

        for (soil, profile) in &self.soils {
            if !profile.is_valid() {
                return Err(IrriCalcError::Config(format!(
                    "soil '{}': cad_mm_per_m must be positive and depletion_fraction in (0, 1]",
                    soil
                )));
            }
        }

        for (climate, row) in &self.climates {
            if !is_valid_eto_row(row) {
                return Err(IrriCalcError::Config(format!(
                    "climate '{}': ETo values must be finite and non-negative",
                    climate
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tables_use_builtins() {
        let tables = ReferenceTables::default();
        assert!(tables.is_builtin());
        assert_eq!(tables.crop(Crop::Corn), Crop::Corn.builtin_profile());
        assert_eq!(tables.soil(Soil::Sandy), Soil::Sandy.builtin_profile());
        assert_eq!(tables.eto_row(Climate::HotDry), Climate::HotDry.builtin_eto());
    }

    #[test]
    fn overrides_take_precedence() {
        let mut tables = ReferenceTables::default();
        tables.crops.insert(
            Crop::Tomato,
            CropProfile {
                kc: 1.2,
                root_depth_m: 0.7,
            },
        );

        assert_eq!(tables.crop(Crop::Tomato).kc, 1.2);
        // Untouched entries still resolve
        assert_eq!(tables.crop(Crop::Lettuce), Crop::Lettuce.builtin_profile());
        assert!(tables.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_rows() {
        let mut tables = ReferenceTables::default();
        tables.soils.insert(
            Soil::Clayey,
            SoilProfile {
                cad_mm_per_m: 180.0,
                depletion_fraction: 0.0,
            },
        );
        assert!(matches!(tables.validate(), Err(IrriCalcError::Config(_))));

        let mut tables = ReferenceTables::default();
        let mut row = Climate::Cold.builtin_eto();
        row[3] = f64::NAN;
        tables.climates.insert(Climate::Cold, row);
        assert!(tables.validate().is_err());
    }

    #[test]
    fn deserialize_from_yaml() {
        let yaml = r#"
crops:
  lettuce:
    kc: 1.0
    root_depth_m: 0.25
climates:
  hot-dry: [6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0]
"#;
        let tables: ReferenceTables = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(tables.crop(Crop::Lettuce).root_depth_m, 0.25);
        assert_eq!(tables.eto_row(Climate::HotDry)[7], 6.0);
        assert!(tables.soils.is_empty());
    }

    #[test]
    fn short_eto_row_fails_to_parse() {
        let yaml = "climates:\n  mild: [1.0, 2.0, 3.0]\n";
        assert!(serde_yaml::from_str::<ReferenceTables>(yaml).is_err());
    }
}
