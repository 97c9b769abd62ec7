use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockline_core::ProductId;

/// Persisted catalog record.
///
/// Mutated only by the inventory service; owned by the catalog store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub details: String,
    /// Non-negative unit price.
    pub price: Decimal,
    /// Non-negative quantity in stock.
    pub quantity: i32,
}

/// Field validation code for untrusted product input.
///
/// The discriminant order below is the emission order: name first, then the
/// price group, then the stock group. Within a group only one code fires
/// (missing, then not-parseable, then not-positive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductValidationCode {
    MissingName,
    MissingPrice,
    PriceNotANumber,
    PriceNotGreaterThanZero,
    MissingQuantity,
    StockNotAnInteger,
    StockNotGreaterThanZero,
}

impl ProductValidationCode {
    /// Stable key into the injected message table.
    pub fn key(&self) -> &'static str {
        match self {
            Self::MissingName => "MissingName",
            Self::MissingPrice => "MissingPrice",
            Self::PriceNotANumber => "PriceNotANumber",
            Self::PriceNotGreaterThanZero => "PriceNotGreaterThanZero",
            Self::MissingQuantity => "MissingQuantity",
            Self::StockNotAnInteger => "StockNotAnInteger",
            Self::StockNotGreaterThanZero => "StockNotGreaterThanZero",
        }
    }
}

impl core::fmt::Display for ProductValidationCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.key())
    }
}

/// Untrusted external product input prior to validation.
///
/// All value fields are free-form strings as received from a form; `None` and
/// whitespace-only both count as missing. Never persisted directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInput {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub price: Option<String>,
    pub stock: Option<String>,
    pub description: Option<String>,
    pub details: Option<String>,
}

fn present(field: &Option<String>) -> Option<&str> {
    match field.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(value) => Some(value),
    }
}

impl ProductInput {
    /// Run all independent field checks and accumulate every applicable code.
    ///
    /// Not fail-fast across fields; mutually exclusive within a field.
    /// Returns an empty list for fully valid input.
    pub fn validate(&self) -> Vec<ProductValidationCode> {
        let mut codes = Vec::new();

        if present(&self.name).is_none() {
            codes.push(ProductValidationCode::MissingName);
        }

        match present(&self.price) {
            None => codes.push(ProductValidationCode::MissingPrice),
            Some(raw) => match Decimal::from_str(raw) {
                Err(_) => codes.push(ProductValidationCode::PriceNotANumber),
                Ok(price) if price <= Decimal::ZERO => {
                    codes.push(ProductValidationCode::PriceNotGreaterThanZero)
                }
                Ok(_) => {}
            },
        }

        match present(&self.stock) {
            None => codes.push(ProductValidationCode::MissingQuantity),
            Some(raw) => match i32::from_str(raw) {
                Err(_) => codes.push(ProductValidationCode::StockNotAnInteger),
                Ok(stock) if stock <= 0 => {
                    codes.push(ProductValidationCode::StockNotGreaterThanZero)
                }
                Ok(_) => {}
            },
        }

        codes
    }

    /// Convert validated input into a catalog record.
    ///
    /// Returns the accumulated codes when any check fails; nothing is parsed
    /// into a record in that case.
    pub fn to_product(&self) -> Result<Product, Vec<ProductValidationCode>> {
        let codes = self.validate();
        if !codes.is_empty() {
            return Err(codes);
        }

        // validate() guarantees both parses succeed.
        let price = present(&self.price)
            .and_then(|raw| Decimal::from_str(raw).ok())
            .unwrap_or(Decimal::ZERO);
        let quantity = present(&self.stock)
            .and_then(|raw| i32::from_str(raw).ok())
            .unwrap_or(0);

        Ok(Product {
            id: self
                .id
                .map(ProductId::new)
                .unwrap_or_else(ProductId::unassigned),
            name: present(&self.name).unwrap_or("").to_owned(),
            description: present(&self.description).unwrap_or("").to_owned(),
            details: present(&self.details).unwrap_or("").to_owned(),
            price,
            quantity,
        })
    }
}

impl From<&Product> for ProductInput {
    /// Project a stored record back into its form representation.
    fn from(product: &Product) -> Self {
        Self {
            id: Some(product.id.get()),
            name: Some(product.name.clone()),
            price: Some(product.price.to_string()),
            stock: Some(product.quantity.to_string()),
            description: Some(product.description.clone()),
            details: Some(product.details.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> ProductInput {
        ProductInput {
            id: None,
            name: Some("Echo Dot".to_owned()),
            price: Some("92.50".to_owned()),
            stock: Some("10".to_owned()),
            description: Some("(2nd Generation) - Black".to_owned()),
            details: None,
        }
    }

    #[test]
    fn fully_valid_input_yields_no_codes() {
        assert!(valid_input().validate().is_empty());
    }

    #[test]
    fn blank_name_blank_stock_negative_price_yield_three_codes() {
        let input = ProductInput {
            name: Some("   ".to_owned()),
            price: Some("-11.05".to_owned()),
            stock: None,
            ..Default::default()
        };

        assert_eq!(
            input.validate(),
            vec![
                ProductValidationCode::MissingName,
                ProductValidationCode::PriceNotGreaterThanZero,
                ProductValidationCode::MissingQuantity,
            ]
        );
    }

    #[test]
    fn price_codes_are_mutually_exclusive_in_precedence_order() {
        let missing = ProductInput {
            price: None,
            ..valid_input()
        };
        assert_eq!(
            missing.validate(),
            vec![ProductValidationCode::MissingPrice]
        );

        let garbled = ProductInput {
            price: Some("twelve".to_owned()),
            ..valid_input()
        };
        assert_eq!(
            garbled.validate(),
            vec![ProductValidationCode::PriceNotANumber]
        );

        let zero = ProductInput {
            price: Some("0".to_owned()),
            ..valid_input()
        };
        assert_eq!(
            zero.validate(),
            vec![ProductValidationCode::PriceNotGreaterThanZero]
        );
    }

    #[test]
    fn stock_codes_are_mutually_exclusive_in_precedence_order() {
        let fractional = ProductInput {
            stock: Some("4.5".to_owned()),
            ..valid_input()
        };
        assert_eq!(
            fractional.validate(),
            vec![ProductValidationCode::StockNotAnInteger]
        );

        let negative = ProductInput {
            stock: Some("-1".to_owned()),
            ..valid_input()
        };
        assert_eq!(
            negative.validate(),
            vec![ProductValidationCode::StockNotGreaterThanZero]
        );
    }

    #[test]
    fn to_product_parses_the_value_fields() {
        let product = valid_input().to_product().unwrap();
        assert!(!product.id.is_assigned());
        assert_eq!(product.name, "Echo Dot");
        assert_eq!(product.price, Decimal::new(9250, 2));
        assert_eq!(product.quantity, 10);
        assert_eq!(product.details, "");
    }

    #[test]
    fn to_product_returns_codes_without_building_a_record() {
        let err = ProductInput::default().to_product().unwrap_err();
        assert_eq!(
            err,
            vec![
                ProductValidationCode::MissingName,
                ProductValidationCode::MissingPrice,
                ProductValidationCode::MissingQuantity,
            ]
        );
    }

    #[test]
    fn form_projection_round_trips_a_record() {
        let product = valid_input().to_product().unwrap();
        let view = ProductInput::from(&product);
        assert_eq!(view.name.as_deref(), Some("Echo Dot"));
        assert_eq!(view.price.as_deref(), Some("92.50"));
        assert_eq!(view.stock.as_deref(), Some("10"));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any positive numeric pair renders valid input.
            #[test]
            fn positive_numbers_always_validate(
                price in 1u32..1_000_000,
                cents in 0u32..100,
                stock in 1i32..1_000_000,
                name in "[A-Za-z][A-Za-z0-9 ]{0,40}"
            ) {
                let input = ProductInput {
                    name: Some(name),
                    price: Some(format!("{price}.{cents:02}")),
                    stock: Some(stock.to_string()),
                    ..Default::default()
                };
                prop_assert!(input.validate().is_empty());

                let product = input.to_product().unwrap();
                prop_assert!(product.price > Decimal::ZERO);
                prop_assert_eq!(product.quantity, stock);
            }

            /// Property: non-positive stock always yields exactly the
            /// not-greater-than-zero code for the stock field.
            #[test]
            fn non_positive_stock_is_rejected(stock in i32::MIN..=0) {
                let input = ProductInput {
                    stock: Some(stock.to_string()),
                    ..valid_input()
                };
                prop_assert_eq!(
                    input.validate(),
                    vec![ProductValidationCode::StockNotGreaterThanZero]
                );
            }
        }
    }
}
