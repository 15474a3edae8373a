use serde::{Deserialize, Serialize};

/// A hotel as returned by the Reservation service, enriched with a
/// gateway-computed `full_address`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Hotel {
    #[serde(rename = "hotelUid", default)]
    pub hotel_uid: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub stars: u32,
    #[serde(default)]
    pub price: i64,
    #[serde(rename = "fullAddress", default)]
    pub full_address: String,
}

impl Hotel {
    /// True when this is the empty sentinel returned for a 404 lookup.
    pub fn is_absent(&self) -> bool {
        self.hotel_uid.is_empty()
    }

    /// Computes `fullAddress` from the hotel's own fields. Always called at
    /// the gateway before a hotel is handed to a caller; downstream-supplied
    /// `fullAddress` values, if any, are never trusted.
    pub fn with_full_address(mut self) -> Self {
        self.full_address = format!("{}, {}, {}", self.country, self.city, self.address);
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HotelsPage {
    pub page: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
    #[serde(rename = "totalElements")]
    pub total_elements: u64,
    pub items: Vec<Hotel>,
}
