use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockline_catalog::Product;
use stockline_core::OrderId;

/// Line item snapshotted from the cart at checkout time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product: Product,
    pub quantity: i32,
}

/// Persisted order. Created exactly once per successful checkout and
/// immutable thereafter from this core's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub zip: String,
    pub country: String,
    pub placed_at: DateTime<Utc>,
    pub lines: Vec<OrderLine>,
}

/// Untrusted checkout input: the customer fields as received from a form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDetails {
    pub name: String,
    pub address: String,
    pub city: String,
    pub zip: String,
    pub country: String,
}

/// Checkout validation code, surfaced to the caller as data so the form can
/// be re-rendered without losing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckoutValidationCode {
    CartEmpty,
    MissingName,
    MissingAddress,
    MissingCity,
    MissingZipCode,
    MissingCountry,
}

impl CheckoutValidationCode {
    /// Stable key into the injected message table.
    pub fn key(&self) -> &'static str {
        match self {
            Self::CartEmpty => "CartEmpty",
            Self::MissingName => "ErrorMissingName",
            Self::MissingAddress => "ErrorMissingAddress",
            Self::MissingCity => "ErrorMissingCity",
            Self::MissingZipCode => "ErrorMissingZipCode",
            Self::MissingCountry => "ErrorMissingCountry",
        }
    }
}

impl core::fmt::Display for CheckoutValidationCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.key())
    }
}

impl OrderDetails {
    /// Accumulate a code for every blank required field.
    pub fn validate(&self) -> Vec<CheckoutValidationCode> {
        let checks = [
            (&self.name, CheckoutValidationCode::MissingName),
            (&self.address, CheckoutValidationCode::MissingAddress),
            (&self.city, CheckoutValidationCode::MissingCity),
            (&self.zip, CheckoutValidationCode::MissingZipCode),
            (&self.country, CheckoutValidationCode::MissingCountry),
        ];

        checks
            .into_iter()
            .filter(|(value, _)| value.trim().is_empty())
            .map(|(_, code)| code)
            .collect()
    }
}
