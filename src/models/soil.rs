use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Soil {
    Sandy,
    #[default]
    Loamy,
    Clayey,
}

impl Soil {
    pub const ALL: [Soil; 3] = [Soil::Sandy, Soil::Loamy, Soil::Clayey];

    pub fn as_str(&self) -> &'static str {
        match self {
            Soil::Sandy => "sandy",
            Soil::Loamy => "loamy",
            Soil::Clayey => "clayey",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sandy" | "sand" | "arenoso" => Some(Soil::Sandy),
            "loamy" | "loam" | "franco" => Some(Soil::Loamy),
            "clayey" | "clay" | "argiloso" => Some(Soil::Clayey),
            _ => None,
        }
    }

    /// Total lookup: anything unrecognized is treated as `Loamy`.
    pub fn resolve(s: &str) -> Self {
        Self::from_str(s).unwrap_or(Soil::Loamy)
    }

    /// Built-in available water capacity and allowable depletion.
    pub fn builtin_profile(&self) -> SoilProfile {
        let (cad_mm_per_m, depletion_fraction) = match self {
            Soil::Sandy => (60.0, 0.4),
            Soil::Loamy => (120.0, 0.5),
            Soil::Clayey => (180.0, 0.6),
        };
        SoilProfile {
            cad_mm_per_m,
            depletion_fraction,
        }
    }
}

impl std::fmt::Display for Soil {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilProfile {
    /// Available water capacity, mm of water per meter of depth
    pub cad_mm_per_m: f64,
    /// Fraction of TAW that may be depleted before irrigating (0 < p <= 1)
    pub depletion_fraction: f64,
}

impl SoilProfile {
    pub fn is_valid(&self) -> bool {
        self.cad_mm_per_m.is_finite()
            && self.cad_mm_per_m > 0.0
            && self.depletion_fraction.is_finite()
            && self.depletion_fraction > 0.0
            && self.depletion_fraction <= 1.0
    }
}
