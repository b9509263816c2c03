use crate::models::{CalculationInput, Climate, ReferenceTables};

/// Clamp a calendar month into 1..=12.
pub fn clamp_month(month: i64) -> u32 {
    month.clamp(1, 12) as u32
}

/// Table ETo for a climate and month, mm/day.
pub fn table_eto(tables: &ReferenceTables, climate: Climate, month: i64) -> f64 {
    let row = tables.eto_row(climate);
    row[(clamp_month(month) - 1) as usize]
}

/// Daily reference evapotranspiration, mm/day.
///
/// A positive caller-supplied value is used verbatim; otherwise the
/// climate/month table is consulted.
pub fn resolve_eto(tables: &ReferenceTables, input: &CalculationInput) -> f64 {
    match input.eto_mm_day {
        Some(eto) if eto > 0.0 => eto,
        _ => table_eto(tables, input.climate, input.month),
    }
}
