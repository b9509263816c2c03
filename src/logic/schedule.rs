use crate::models::{DailyTotals, Schedule};

/// Daily volumes plus the per-event schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IrrigationPlan {
    pub daily: DailyTotals,
    pub schedule: Schedule,
}

/// Convert a depth of water over an area into liters (1 mm over 1 m² is 1 L).
pub fn depth_to_liters(depth_mm: f64, area_m2: f64) -> f64 {
    depth_mm * area_m2
}

/// Days between irrigation events. Never shorter than one day; zero
/// demand defaults to daily.
pub fn interval_days(etc: f64, raw: f64) -> f64 {
    if etc > 0.0 {
        (raw / etc).max(1.0)
    } else {
        1.0
    }
}

pub fn compute_schedule(
    area_m2: f64,
    plants: Option<u64>,
    etc: f64,
    gir: f64,
    raw: f64,
    emitter_flow_lh: Option<f64>,
    emitters_per_plant: Option<f64>,
) -> IrrigationPlan {
    // A zero plant count carries no per-plant information
    let plants = plants.filter(|n| *n > 0).map(|n| n as f64);

    let total_liters = depth_to_liters(gir, area_m2);
    let per_plant_liters = plants.map(|n| total_liters / n);

    let interval_days = interval_days(etc, raw);
    let event_mm = gir * interval_days;
    let event_total_liters = depth_to_liters(event_mm, area_m2);
    let per_plant_event_liters = plants.map(|n| event_total_liters / n);

    let flow_per_plant_lh = match (nonzero(emitter_flow_lh), nonzero(emitters_per_plant)) {
        (Some(flow), Some(count)) => Some(flow * count),
        _ => None,
    };

    let minutes_per_event_per_plant = match (nonzero(flow_per_plant_lh), per_plant_event_liters) {
        (Some(flow), Some(liters)) => Some(liters / flow * 60.0),
        _ => None,
    };

    IrrigationPlan {
        daily: DailyTotals {
            total_liters,
            per_plant_liters,
        },
        schedule: Schedule {
            interval_days,
            event_mm,
            event_total_liters,
            per_plant_event_liters,
            flow_per_plant_lh,
            minutes_per_event_per_plant,
        },
    }
}

fn nonzero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}
