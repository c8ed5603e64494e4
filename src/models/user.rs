use serde::{Deserialize, Serialize};

/// Per-user progress counters kept by the catalog service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UserStats {
    #[serde(default)]
    pub total_scanned: u32,
    #[serde(default)]
    pub routes_completed: u32,
    /// Kilometers
    #[serde(default)]
    pub distance_walked: f64,
}

impl UserStats {
    pub fn validate(&self) -> Result<(), String> {
        if !self.distance_walked.is_finite() || self.distance_walked < 0.0 {
            return Err("distance_walked must be a non-negative number".to_string());
        }
        Ok(())
    }
}
