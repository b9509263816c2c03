use serde::{Deserialize, Serialize};

/// Monthly reference evapotranspiration, mm/day, January first.
pub type MonthlyEto = [f64; 12];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Climate {
    Cold,
    #[default]
    Mild,
    HotHumid,
    HotDry,
}

impl Climate {
    pub const ALL: [Climate; 4] = [
        Climate::Cold,
        Climate::Mild,
        Climate::HotHumid,
        Climate::HotDry,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Climate::Cold => "cold",
            Climate::Mild => "mild",
            Climate::HotHumid => "hot-humid",
            Climate::HotDry => "hot-dry",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "cold" | "frio" => Some(Climate::Cold),
            "mild" | "ameno" => Some(Climate::Mild),
            "hot-humid" | "hothumid" | "hot humid" | "quenteu" => Some(Climate::HotHumid),
            "hot-dry" | "hotdry" | "hot dry" | "quentes" => Some(Climate::HotDry),
            _ => None,
        }
    }

    /// Total lookup: anything unrecognized is treated as `Mild`.
    pub fn resolve(s: &str) -> Self {
        Self::from_str(s).unwrap_or(Climate::Mild)
    }

    /// Simplified static ETo estimate for each calendar month.
    pub fn builtin_eto(&self) -> MonthlyEto {
        match self {
            Climate::Cold => [2.7, 2.3, 2.0, 1.8, 1.7, 1.7, 1.8, 2.0, 2.4, 2.6, 2.7, 2.7],
            Climate::Mild => [3.5, 3.3, 3.0, 2.8, 2.6, 2.6, 2.8, 3.3, 3.3, 3.6, 3.7, 3.7],
            Climate::HotHumid => [4.5, 4.3, 4.0, 3.8, 3.6, 3.6, 3.8, 4.0, 4.3, 4.6, 4.7, 4.7],
            Climate::HotDry => [5.5, 5.3, 5.0, 4.7, 4.5, 4.4, 4.5, 4.8, 5.0, 5.4, 5.6, 5.6],
        }
    }
}

impl std::fmt::Display for Climate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn is_valid_eto_row(row: &MonthlyEto) -> bool {
    row.iter().all(|v| v.is_finite() && *v >= 0.0)
}
