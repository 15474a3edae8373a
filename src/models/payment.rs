use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    #[serde(rename = "paymentUid", default)]
    pub payment_uid: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub price: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentCreateResponse {
    pub status: String,
    pub price: i64,
}
