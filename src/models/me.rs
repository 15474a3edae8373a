use serde::Serialize;

use super::loyalty::Loyalty;
use super::reservation::ReservationShort;

#[derive(Debug, Clone, Serialize)]
pub struct MeResponse {
    pub username: String,
    pub loyalty: Loyalty,
    pub reservations: Vec<ReservationShort>,
}
