use crate::logic::eto::clamp_month;
use crate::models::{CalculationInput, CalculationResult};
use chrono::Month;

const UNAVAILABLE: &str = "—";

pub fn format_mm(mm: f64) -> String {
    format!("{:.1} mm", mm)
}

/// Liters with one decimal and thousands separators, e.g. "42,166.7 L".
pub fn format_liters(liters: f64) -> String {
    let rounded = format!("{:.1}", liters.abs());
    let (whole, frac) = rounded.split_once('.').unwrap_or((rounded.as_str(), "0"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if liters < 0.0 && rounded != "0.0" { "-" } else { "" };
    if frac == "0" {
        format!("{}{} L", sign, grouped)
    } else {
        format!("{}{}.{} L", sign, grouped, frac)
    }
}

pub fn format_minutes(minutes: f64) -> String {
    format!("{} min", minutes.round())
}

pub fn format_interval(days: f64) -> String {
    let d = days.round();
    if d <= 1.0 {
        "Every day".to_string()
    } else {
        format!("Every {} days", d)
    }
}

pub fn month_name(month: i64) -> &'static str {
    Month::try_from(clamp_month(month) as u8)
        .map(|m| m.name())
        .unwrap_or("August")
}

fn or_unavailable(value: Option<f64>, f: impl Fn(f64) -> String) -> String {
    value.map(f).unwrap_or_else(|| UNAVAILABLE.to_string())
}

/// Plain-text summary of a calculation.
pub fn render_text(input: &CalculationInput, result: &CalculationResult) -> String {
    let echo = &result.echo;
    let metrics = &result.metrics;
    let schedule = &result.schedule;

    let eto_source = match input.eto_mm_day {
        Some(eto) if eto > 0.0 => "supplied".to_string(),
        _ => format!("{}, {}", input.climate, month_name(input.month)),
    };

    let plants = echo
        .plants
        .map(|n| n.to_string())
        .unwrap_or_else(|| UNAVAILABLE.to_string());

    let mut lines = vec![
        format!("Crop: {}  Soil: {}", echo.crop, echo.soil),
        format!(
            "Kc: {:.2}  Root depth: {:.2} m  CAD: {:.0} mm/m  p: {:.2}",
            echo.kc, echo.root_depth, echo.cad, echo.p
        ),
        format!("ETo: {:.1} mm/day ({})", echo.eto, eto_source),
        format!(
            "Area: {:.2} m²  Plants: {}  Efficiency: {:.0}%",
            echo.area_m2,
            plants,
            echo.eff * 100.0
        ),
        String::new(),
        format!("ETc: {}/day", format_mm(metrics.etc)),
        format!("NIR: {}/day", format_mm(metrics.nir)),
        format!("GIR: {}/day", format_mm(metrics.gir)),
        format!(
            "TAW: {}  RAW: {}",
            format_mm(metrics.taw),
            format_mm(metrics.raw)
        ),
        String::new(),
    ];

    lines.push(format!(
        "Daily volume: {}/day",
        format_liters(result.daily.total_liters)
    ));
    lines.push(format!(
        "Per plant: {}",
        or_unavailable(result.daily.per_plant_liters, |l| format!(
            "{}/day",
            format_liters(l)
        ))
    ));
    lines.push(format!("Interval: {}", format_interval(schedule.interval_days)));
    lines.push(format!(
        "Per event: {} ({})",
        format_liters(schedule.event_total_liters),
        format_mm(schedule.event_mm)
    ));
    lines.push(format!(
        "Run time: {}",
        or_unavailable(schedule.minutes_per_event_per_plant, |m| format!(
            "{} per plant",
            format_minutes(m)
        ))
    ));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::compute;
    use crate::models::{AreaSpec, Crop, Soil};

    #[test]
    fn liters_grouping() {
        assert_eq!(format_liters(42_166.666), "42,166.7 L");
        assert_eq!(format_liters(999.0), "999 L");
        assert_eq!(format_liters(1_000.04), "1,000 L");
        assert_eq!(format_liters(1_234_567.89), "1,234,567.9 L");
        assert_eq!(format_liters(0.0), "0 L");
    }

    #[test]
    fn interval_wording() {
        assert_eq!(format_interval(1.0), "Every day");
        assert_eq!(format_interval(1.4), "Every day");
        assert_eq!(format_interval(7.905), "Every 8 days");
    }

    #[test]
    fn minutes_and_mm() {
        assert_eq!(format_minutes(22.5), "23 min");
        assert_eq!(format_mm(4.2166), "4.2 mm");
    }

    #[test]
    fn month_names_clamp() {
        assert_eq!(month_name(8), "August");
        assert_eq!(month_name(0), "January");
        assert_eq!(month_name(14), "December");
    }

    #[test]
    fn render_marks_unavailable_values() {
        let input = CalculationInput::new(Crop::Tomato, Soil::Loamy, AreaSpec::Hectares(1.0));
        let result = compute(&input);
        let text = render_text(&input, &result);

        assert!(text.contains("Crop: tomato  Soil: loamy"));
        assert!(text.contains("mild, August"));
        assert!(text.contains("42,166.7 L/day"));
        assert!(text.contains("Every 8 days"));
        assert!(text.contains("Per plant: —"));
        assert!(text.contains("Run time: —"));
    }
}
