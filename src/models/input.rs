use super::climate::Climate;
use super::crop::Crop;
use super::soil::Soil;
use crate::error::{IrriCalcError, Result};
use serde::Deserialize;
use serde_json::Value;

pub const DEFAULT_MONTH: i64 = 8;
pub const DEFAULT_SYSTEM_EFFICIENCY: f64 = 0.9;
pub const DEFAULT_EMITTERS_PER_PLANT: f64 = 1.0;

/// Request payload as it arrives on the wire.
///
/// Numeric fields are kept as raw JSON values because callers send both
/// numbers and numeric strings (form fields).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCalculationInput {
    pub crop: Option<String>,
    pub soil_type: Option<String>,
    pub soil: Option<String>,
    pub kc: Option<Value>,
    pub root_depth: Option<Value>,
    pub cad: Option<Value>,
    pub eto: Option<Value>,
    pub area: Option<RawArea>,
    pub plants: Option<Value>,
    pub spacing: Option<Value>,
    pub climate: Option<Value>,
    pub month: Option<Value>,
    pub system_eff: Option<Value>,
    pub emit: Option<Value>,
    pub emit_count: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawArea {
    pub mode: Option<String>,
    pub ha: Option<Value>,
    pub len: Option<Value>,
    pub wid: Option<Value>,
    pub beds: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSpacing {
    pub row_spacing: Option<Value>,
    pub plant_spacing: Option<Value>,
}

/// How the cultivated area was described.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AreaSpec {
    Hectares(f64),
    Beds {
        length_m: f64,
        width_m: f64,
        count: f64,
    },
    /// No area given, or an unknown mode. Resolves to zero area.
    Unspecified,
}

/// Row and in-row plant spacing, both in centimeters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Spacing {
    pub row_cm: Option<f64>,
    pub plant_cm: Option<f64>,
}

/// Fallbacks used when the payload omits an identifier or setting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputDefaults {
    pub crop: Crop,
    pub soil: Soil,
    pub climate: Climate,
    pub month: i64,
    pub system_efficiency: f64,
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            crop: Crop::Tomato,
            soil: Soil::Loamy,
            climate: Climate::Mild,
            month: DEFAULT_MONTH,
            system_efficiency: DEFAULT_SYSTEM_EFFICIENCY,
        }
    }
}

/// Validated calculation request. Every number here is finite.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationInput {
    pub crop: Crop,
    pub soil: Soil,
    pub kc: Option<f64>,
    pub root_depth_m: Option<f64>,
    pub cad_mm_per_m: Option<f64>,
    pub eto_mm_day: Option<f64>,
    pub area: AreaSpec,
    pub plants: Option<f64>,
    pub spacing: Option<Spacing>,
    pub climate: Climate,
    /// Calendar month as supplied; clamped into 1..=12 at lookup time.
    pub month: i64,
    pub system_efficiency: f64,
    pub emitter_flow_lh: Option<f64>,
    pub emitters_per_plant: f64,
}

impl CalculationInput {
    /// Minimal input: identifiers plus area, everything else defaulted.
    pub fn new(crop: Crop, soil: Soil, area: AreaSpec) -> Self {
        let defaults = InputDefaults::default();
        Self {
            crop,
            soil,
            kc: None,
            root_depth_m: None,
            cad_mm_per_m: None,
            eto_mm_day: None,
            area,
            plants: None,
            spacing: None,
            climate: defaults.climate,
            month: defaults.month,
            system_efficiency: defaults.system_efficiency,
            emitter_flow_lh: None,
            emitters_per_plant: DEFAULT_EMITTERS_PER_PLANT,
        }
    }

    pub fn from_json(payload: &str) -> Result<Self> {
        Self::from_json_with(payload, &InputDefaults::default())
    }

    pub fn from_json_with(payload: &str, defaults: &InputDefaults) -> Result<Self> {
        let value: Value = serde_json::from_str(payload)
            .map_err(|e| IrriCalcError::InvalidInput(format!("malformed JSON: {}", e)))?;
        Self::from_value_with(value, defaults)
    }

    pub fn from_value_with(value: Value, defaults: &InputDefaults) -> Result<Self> {
        if !value.is_object() {
            return Err(IrriCalcError::InvalidInput(
                "payload must be a JSON object".into(),
            ));
        }
        let raw: RawCalculationInput = serde_json::from_value(value)
            .map_err(|e| IrriCalcError::InvalidInput(format!("unexpected payload shape: {}", e)))?;
        Self::from_raw(raw, defaults)
    }

    pub fn from_raw(raw: RawCalculationInput, defaults: &InputDefaults) -> Result<Self> {
        let crop = identifier(raw.crop.as_deref())
            .map(Crop::resolve)
            .unwrap_or(defaults.crop);
        let soil = identifier(raw.soil_type.as_deref())
            .or_else(|| identifier(raw.soil.as_deref()))
            .map(Soil::resolve)
            .unwrap_or(defaults.soil);
        let climate = identifier(text("climate", raw.climate.as_ref()))
            .map(Climate::resolve)
            .unwrap_or(defaults.climate);

        let area = match raw.area {
            Some(area) => parse_area(&area)?,
            None => AreaSpec::Unspecified,
        };

        let spacing = parse_spacing(raw.spacing).map(|s| Spacing {
            row_cm: optional("spacing.rowSpacing", s.row_spacing.as_ref()),
            plant_cm: optional("spacing.plantSpacing", s.plant_spacing.as_ref()),
        });

        let month = optional("month", raw.month.as_ref())
            .map(|m| m.trunc() as i64)
            .unwrap_or(defaults.month);

        Ok(Self {
            crop,
            soil,
            kc: optional("kc", raw.kc.as_ref()),
            root_depth_m: optional("rootDepth", raw.root_depth.as_ref()),
            cad_mm_per_m: optional("cad", raw.cad.as_ref()),
            eto_mm_day: optional("eto", raw.eto.as_ref()),
            area,
            plants: optional("plants", raw.plants.as_ref()),
            spacing,
            climate,
            month,
            system_efficiency: optional("systemEff", raw.system_eff.as_ref())
                .unwrap_or(defaults.system_efficiency),
            emitter_flow_lh: optional("emit", raw.emit.as_ref()),
            emitters_per_plant: optional("emitCount", raw.emit_count.as_ref())
                .unwrap_or(DEFAULT_EMITTERS_PER_PLANT),
        })
    }
}

impl TryFrom<RawCalculationInput> for CalculationInput {
    type Error = IrriCalcError;

    fn try_from(raw: RawCalculationInput) -> Result<Self> {
        Self::from_raw(raw, &InputDefaults::default())
    }
}

impl std::str::FromStr for CalculationInput {
    type Err = IrriCalcError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json(s)
    }
}

/// Outcome of coercing one loosely-typed numeric field.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Numeric {
    Absent,
    Finite(f64),
    Malformed,
}

fn numeric(value: Option<&Value>) -> Numeric {
    match value {
        None | Some(Value::Null) => Numeric::Absent,
        Some(Value::Number(n)) => match n.as_f64() {
            Some(x) if x.is_finite() => Numeric::Finite(x),
            _ => Numeric::Absent,
        },
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Numeric::Absent;
            }
            match trimmed.parse::<f64>() {
                Ok(x) if x.is_finite() => Numeric::Finite(x),
                Ok(_) => Numeric::Absent,
                Err(_) => Numeric::Malformed,
            }
        }
        Some(_) => Numeric::Malformed,
    }
}

/// Optional numeric field: anything unusable falls back to absent.
fn optional(field: &str, value: Option<&Value>) -> Option<f64> {
    match numeric(value) {
        Numeric::Finite(x) => Some(x),
        Numeric::Absent => None,
        Numeric::Malformed => {
            tracing::debug!("Ignoring non-numeric value for '{}'", field);
            None
        }
    }
}

/// Area components: missing means zero, but garbage is rejected.
fn area_component(field: &str, value: Option<&Value>) -> Result<f64> {
    match numeric(value) {
        Numeric::Finite(x) => Ok(x),
        Numeric::Absent => Ok(0.0),
        Numeric::Malformed => Err(IrriCalcError::InvalidInput(format!(
            "area.{} must be numeric",
            field
        ))),
    }
}

fn parse_area(area: &RawArea) -> Result<AreaSpec> {
    let mode = area.mode.as_deref().map(|m| m.trim().to_lowercase());
    match mode.as_deref() {
        Some("ha") | Some("hectares") => {
            Ok(AreaSpec::Hectares(area_component("ha", area.ha.as_ref())?))
        }
        Some("beds") => Ok(AreaSpec::Beds {
            length_m: area_component("len", area.len.as_ref())?,
            width_m: area_component("wid", area.wid.as_ref())?,
            count: area_component("beds", area.beds.as_ref())?,
        }),
        _ => Ok(AreaSpec::Unspecified),
    }
}

/// Optional string field: a non-string value is ignored.
fn text<'a>(field: &str, value: Option<&'a Value>) -> Option<&'a str> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.as_str()),
        Some(_) => {
            tracing::debug!("Ignoring non-string value for '{}'", field);
            None
        }
    }
}

/// Spacing is optional plant-count input: anything but an object is ignored.
fn parse_spacing(value: Option<Value>) -> Option<RawSpacing> {
    match value {
        None | Some(Value::Null) => None,
        Some(value @ Value::Object(_)) => match serde_json::from_value(value) {
            Ok(spacing) => Some(spacing),
            Err(e) => {
                tracing::debug!("Ignoring malformed spacing: {}", e);
                None
            }
        },
        Some(_) => {
            tracing::debug!("Ignoring non-object value for 'spacing'");
            None
        }
    }
}

fn identifier(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
