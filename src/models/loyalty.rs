use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Loyalty {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub discount: i64,
    #[serde(rename = "reservationCount", default)]
    pub reservation_count: i64,
}

impl Default for Loyalty {
    /// The fallback tier substituted whenever the Loyalty service is
    /// unreachable, circuit-open, or otherwise fails a lookup.
    fn default() -> Self {
        Self {
            status: "BRONZE".to_string(),
            discount: 0,
            reservation_count: 0,
        }
    }
}
