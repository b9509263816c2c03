use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Crop {
    Lettuce,
    #[default]
    Tomato,
    Corn,
    Soy,
    Bean,
    Other,
}

impl Crop {
    pub const ALL: [Crop; 6] = [
        Crop::Lettuce,
        Crop::Tomato,
        Crop::Corn,
        Crop::Soy,
        Crop::Bean,
        Crop::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Crop::Lettuce => "lettuce",
            Crop::Tomato => "tomato",
            Crop::Corn => "corn",
            Crop::Soy => "soy",
            Crop::Bean => "bean",
            Crop::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "lettuce" | "alface" => Some(Crop::Lettuce),
            "tomato" | "tomate" => Some(Crop::Tomato),
            "corn" | "maize" | "milho" => Some(Crop::Corn),
            "soy" | "soybean" | "soja" => Some(Crop::Soy),
            "bean" | "beans" | "feijao" | "feijão" => Some(Crop::Bean),
            "other" | "outro" => Some(Crop::Other),
            _ => None,
        }
    }

    /// Total lookup: anything unrecognized is treated as `Other`.
    pub fn resolve(s: &str) -> Self {
        Self::from_str(s).unwrap_or(Crop::Other)
    }

    /// Built-in crop coefficient and effective root depth.
    pub fn builtin_profile(&self) -> CropProfile {
        let (kc, root_depth_m) = match self {
            Crop::Lettuce => (0.95, 0.30),
            Crop::Tomato => (1.15, 0.50),
            Crop::Corn => (1.10, 1.50),
            Crop::Soy => (1.05, 1.20),
            Crop::Bean => (1.05, 0.60),
            Crop::Other => (1.00, 0.50),
        };
        CropProfile { kc, root_depth_m }
    }
}

impl std::fmt::Display for Crop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropProfile {
    /// Crop coefficient (dimensionless)
    pub kc: f64,
    /// Effective root depth in meters
    pub root_depth_m: f64,
}

impl CropProfile {
    pub fn is_valid(&self) -> bool {
        self.kc.is_finite()
            && self.kc > 0.0
            && self.root_depth_m.is_finite()
            && self.root_depth_m > 0.0
    }
}
