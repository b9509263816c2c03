use super::defaults::{resolve_defaults, resolve_defaults_by_name, Defaults};
use super::eto::resolve_eto;
use super::geometry::{resolve_area, resolve_plants};
use super::schedule::compute_schedule;
use super::water_balance::compute_water_balance;
use crate::error::Result;
use crate::models::{
    CalculationInput, CalculationResult, Crop, InputDefaults, ReferenceTables, ResolvedInputs,
    Soil,
};

/// Irrigation requirement engine.
///
/// Stateless apart from the immutable reference tables, so a single
/// instance can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct IrrigationEngine {
    tables: ReferenceTables,
    input_defaults: InputDefaults,
}

impl IrrigationEngine {
    pub fn new(tables: ReferenceTables) -> Self {
        Self {
            tables,
            input_defaults: InputDefaults::default(),
        }
    }

    pub fn with_input_defaults(mut self, input_defaults: InputDefaults) -> Self {
        self.input_defaults = input_defaults;
        self
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    pub fn input_defaults(&self) -> &InputDefaults {
        &self.input_defaults
    }

    /// Baseline coefficients for a crop/soil pair named by the caller.
    pub fn defaults(&self, crop: &str, soil: &str) -> Defaults {
        resolve_defaults_by_name(&self.tables, crop, soil)
    }

    /// Like [`defaults`](Self::defaults), but an omitted crop or soil uses
    /// the configured input defaults.
    pub fn configured_defaults(&self, crop: Option<&str>, soil: Option<&str>) -> Defaults {
        let crop = crop.map_or(self.input_defaults.crop, Crop::resolve);
        let soil = soil.map_or(self.input_defaults.soil, Soil::resolve);
        resolve_defaults(&self.tables, crop, soil)
    }

    pub fn compute(&self, input: &CalculationInput) -> CalculationResult {
        let baseline = resolve_defaults(&self.tables, input.crop, input.soil);
        let kc = input.kc.unwrap_or(baseline.kc);
        let root_depth = input.root_depth_m.unwrap_or(baseline.root_depth);
        let cad = input.cad_mm_per_m.unwrap_or(baseline.cad);
        let p = baseline.p;

        let area_m2 = resolve_area(&input.area);
        let eto = resolve_eto(&self.tables, input);

        let metrics = compute_water_balance(kc, root_depth, cad, p, eto, input.system_efficiency);

        let plants = resolve_plants(input, area_m2);
        let plan = compute_schedule(
            area_m2,
            plants,
            metrics.etc,
            metrics.gir,
            metrics.raw,
            input.emitter_flow_lh,
            Some(input.emitters_per_plant),
        );

        tracing::debug!(
            crop = %input.crop,
            soil = %input.soil,
            kc,
            eto,
            area_m2,
            gir = metrics.gir,
            interval_days = plan.schedule.interval_days,
            "Computed irrigation requirement"
        );

        CalculationResult {
            echo: ResolvedInputs {
                crop: input.crop,
                soil: input.soil,
                kc,
                root_depth,
                cad,
                p,
                eto,
                eff: input.system_efficiency,
                area_m2,
                plants,
            },
            metrics,
            daily: plan.daily,
            schedule: plan.schedule,
        }
    }

    /// Parse a JSON payload and compute. Only a structurally malformed
    /// payload fails; everything else degrades to fallbacks.
    pub fn compute_json(&self, payload: &str) -> Result<CalculationResult> {
        let input = CalculationInput::from_json_with(payload, &self.input_defaults)?;
        Ok(self.compute(&input))
    }
}

/// Baseline coefficients from the built-in tables.
pub fn get_defaults(crop: &str, soil: &str) -> Defaults {
    resolve_defaults_by_name(&ReferenceTables::default(), crop, soil)
}

/// Compute against the built-in tables.
pub fn compute(input: &CalculationInput) -> CalculationResult {
    IrrigationEngine::default().compute(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AreaSpec, Climate, Spacing};

    fn tomato_one_hectare() -> CalculationInput {
        CalculationInput::new(Crop::Tomato, Soil::Loamy, AreaSpec::Hectares(1.0))
    }

    #[test]
    fn tomato_hectare_mild_august() {
        let result = compute(&tomato_one_hectare());

        assert_eq!(result.echo.kc, 1.15);
        assert_eq!(result.echo.root_depth, 0.50);
        assert_eq!(result.echo.cad, 120.0);
        assert_eq!(result.echo.p, 0.5);
        assert!((result.echo.eto - 3.3).abs() < 1e-9);
        assert_eq!(result.echo.area_m2, 10_000.0);

        assert!((result.metrics.etc - 3.795).abs() < 1e-9);
        assert!((result.metrics.taw - 60.0).abs() < 1e-9);
        assert!((result.metrics.raw - 30.0).abs() < 1e-9);
        assert!((result.metrics.gir - 4.2167).abs() < 1e-4);
        assert!((result.daily.total_liters - 42_166.7).abs() < 0.1);
    }

    #[test]
    fn zero_efficiency_gir_equals_nir() {
        let mut input = tomato_one_hectare();
        input.system_efficiency = 0.0;
        let result = compute(&input);
        assert!((result.metrics.gir - 3.795).abs() < 1e-9);
        assert_eq!(result.metrics.gir, result.metrics.nir);
    }

    #[test]
    fn beds_and_spacing_give_plant_count() {
        let mut input = CalculationInput::new(
            Crop::Tomato,
            Soil::Loamy,
            AreaSpec::Beds {
                length_m: 10.0,
                width_m: 1.2,
                count: 5.0,
            },
        );
        input.spacing = Some(Spacing {
            row_cm: Some(30.0),
            plant_cm: Some(25.0),
        });

        let result = compute(&input);
        assert!((result.echo.area_m2 - 60.0).abs() < 1e-9);
        assert_eq!(result.echo.plants, Some(800));
        assert!(result.daily.per_plant_liters.is_some());
    }

    #[test]
    fn emitters_give_minutes_per_event() {
        // One plant per m², daily cadence, 1.5 mm gross per event
        let mut input = CalculationInput::new(
            Crop::Other,
            Soil::Loamy,
            AreaSpec::Beds {
                length_m: 10.0,
                width_m: 1.0,
                count: 1.0,
            },
        );
        input.plants = Some(10.0);
        input.eto_mm_day = Some(1.5);
        input.cad_mm_per_m = Some(1.0);
        input.system_efficiency = 1.0;
        input.emitter_flow_lh = Some(2.0);
        input.emitters_per_plant = 2.0;

        let result = compute(&input);
        assert_eq!(result.schedule.interval_days, 1.0);
        assert!((result.schedule.per_plant_event_liters.unwrap() - 1.5).abs() < 1e-9);
        assert_eq!(result.schedule.flow_per_plant_lh, Some(4.0));
        assert!((result.schedule.minutes_per_event_per_plant.unwrap() - 22.5).abs() < 1e-9);
    }

    #[test]
    fn overrides_replace_table_values() {
        let mut input = tomato_one_hectare();
        input.kc = Some(0.8);
        input.root_depth_m = Some(1.0);
        input.cad_mm_per_m = Some(100.0);
        input.eto_mm_day = Some(5.0);

        let result = compute(&input);
        assert_eq!(result.echo.kc, 0.8);
        assert_eq!(result.metrics.taw, 100.0);
        assert_eq!(result.metrics.raw, 50.0);
        assert!((result.metrics.etc - 4.0).abs() < 1e-9);
    }

    #[test]
    fn zero_etc_schedules_daily() {
        let mut input = tomato_one_hectare();
        input.kc = Some(0.0);
        let result = compute(&input);
        assert_eq!(result.metrics.etc, 0.0);
        assert_eq!(result.schedule.interval_days, 1.0);
    }

    #[test]
    fn no_plants_means_no_per_plant_figures() {
        let mut input = tomato_one_hectare();
        input.emitter_flow_lh = Some(2.0);
        let result = compute(&input);
        assert!(result.echo.plants.is_none());
        assert!(result.daily.per_plant_liters.is_none());
        assert!(result.schedule.per_plant_event_liters.is_none());
        assert!(result.schedule.minutes_per_event_per_plant.is_none());
    }

    #[test]
    fn compute_is_deterministic() {
        let mut input = tomato_one_hectare();
        input.plants = Some(2500.0);
        input.emitter_flow_lh = Some(1.6);

        let first = serde_json::to_string(&compute(&input)).unwrap();
        let second = serde_json::to_string(&compute(&input)).unwrap();
        assert_eq!(first, second);
        assert_eq!(compute(&input), compute(&input));
    }

    #[test]
    fn get_defaults_falls_back() {
        let d = get_defaults("unknowncrop", "unknownsoil");
        assert_eq!(d.kc, 1.00);
        assert_eq!(d.root_depth, 0.50);
        assert_eq!(d.cad, 120.0);
        assert_eq!(d.p, 0.5);
    }

    #[test]
    fn configured_defaults_fill_omitted_identifiers() {
        let engine = IrrigationEngine::default().with_input_defaults(InputDefaults {
            crop: Crop::Corn,
            soil: Soil::Sandy,
            climate: Climate::Mild,
            month: 8,
            system_efficiency: 0.9,
        });

        let d = engine.configured_defaults(None, None);
        assert_eq!(d, engine.defaults("corn", "sandy"));
        assert_eq!(d.root_depth, 1.50);
        assert_eq!(d.cad, 60.0);

        let d = engine.configured_defaults(Some("lettuce"), None);
        assert_eq!(d.kc, 0.95);
        assert_eq!(d.cad, 60.0);
    }

    #[test]
    fn compute_json_end_to_end() {
        let engine = IrrigationEngine::default();
        let result = engine
            .compute_json(
                r#"{"crop": "tomate", "soilType": "franco",
                    "area": {"mode": "ha", "ha": "1"},
                    "climate": "ameno", "month": 8, "systemEff": 0.9}"#,
            )
            .unwrap();
        assert!((result.daily.total_liters - 42_166.7).abs() < 0.1);
    }

    #[test]
    fn compute_json_rejects_malformed_payload() {
        let engine = IrrigationEngine::default();
        assert!(engine.compute_json("not json").unwrap_err().is_invalid_input());
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        let engine = std::sync::Arc::new(IrrigationEngine::default());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = engine.clone();
                std::thread::spawn(move || engine.compute(&tomato_one_hectare()).metrics.gir)
            })
            .collect();
        for handle in handles {
            assert!((handle.join().unwrap() - 4.2167).abs() < 1e-4);
        }
    }
}
