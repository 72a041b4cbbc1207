//! # Order Parsing
//!
//! Turns command-line arguments into purchases.
//!
//! ## Format
//! ```text
//! NAME:QTY      buy QTY units of NAME   ("Tomato:3", "Bell Pepper:0.5")
//! NAME          buy one unit of NAME    ("Onion")
//! ```
//! The quantity is split off at the last `:`. It may be fractional, zero or
//! negative; the cart accepts all of those.

use std::str::FromStr;

use crate::error::AppError;

/// A single purchase request.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub name: String,
    pub quantity: f64,
}

impl FromStr for Order {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (name, quantity) = match raw.rsplit_once(':') {
            Some((name, qty)) => {
                let quantity = qty
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| AppError::InvalidOrder(raw.to_string()))?;
                (name, quantity)
            }
            None => (raw, 1.0),
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidOrder(raw.to_string()));
        }

        Ok(Order {
            name: name.to_string(),
            quantity,
        })
    }
}

/// Parses every argument, stopping at the first malformed one.
pub fn parse_orders<I, S>(args: I) -> Result<Vec<Order>, AppError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter().map(|arg| arg.as_ref().parse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_quantity() {
        let order: Order = "Tomato:3".parse().unwrap();
        assert_eq!(order.name, "Tomato");
        assert_eq!(order.quantity, 3.0);
    }

    #[test]
    fn test_name_with_spaces_and_fraction() {
        let order: Order = " Bell Pepper : 0.5".parse().unwrap();
        assert_eq!(order.name, "Bell Pepper");
        assert_eq!(order.quantity, 0.5);
    }

    #[test]
    fn test_missing_quantity_defaults_to_one() {
        let order: Order = "Onion".parse().unwrap();
        assert_eq!(order.quantity, 1.0);
    }

    #[test]
    fn test_negative_quantity_is_allowed() {
        let order: Order = "Onion:-2".parse().unwrap();
        assert_eq!(order.quantity, -2.0);
    }

    #[test]
    fn test_malformed_orders() {
        assert!(matches!(
            "Tomato:lots".parse::<Order>(),
            Err(AppError::InvalidOrder(raw)) if raw == "Tomato:lots"
        ));
        assert!(":3".parse::<Order>().is_err());
        assert!("".parse::<Order>().is_err());
    }

    #[test]
    fn test_parse_orders_stops_on_error() {
        let orders = parse_orders(["Carrot:2", "Potato"]).unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[1].name, "Potato");

        assert!(parse_orders(["Carrot:2", "Potato:x"]).is_err());
    }
}
