use serde::{Deserialize, Serialize};

/// Medlemsprofil slik eieren/treneren har registrert den. Høyden brukes som
/// BMI-fallback når medlemmet aldri har logget height-metrikken.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberProfile {
    pub height_cm: Option<f64>,
    pub goal_weight_kg: Option<f64>,
    pub self_reported: bool,
}

impl Default for MemberProfile {
    fn default() -> Self {
        Self {
            height_cm: None,
            goal_weight_kg: None,
            self_reported: true,
        }
    }
}
