use serde::{Deserialize, Serialize};

use crate::errors::{missing, non_blank, ModelError};
use crate::product::Product;
use crate::term::Term;

#[derive(Debug, Default, Deserialize)]
pub struct QuoteRequest {
    pub sku: Option<String>,
    pub weeks: Option<u32>,
}

impl QuoteRequest {
    pub fn validate(self) -> Result<(String, u32), ModelError> {
        match (non_blank(self.sku), self.weeks) {
            (Some(sku), Some(weeks)) => Ok((sku, weeks)),
            (sku, weeks) => Err(missing(&[("sku", sku.is_none()), ("weeks", weeks.is_none())])),
        }
    }
}

/// Weekly payments for a product financed over a term. Never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub normal_payment: f64,
    pub punctual_payment: f64,
}

impl Quote {
    /// Zero weeks is not guarded: the division yields `inf`/`NaN`.
    pub fn compute(product: &Product, term: &Term) -> Self {
        let price = product.price;
        let weeks = f64::from(term.weeks);
        Self {
            normal_payment: (price * term.normal_rate + price) / weeks,
            punctual_payment: (price * term.punctual_rate + price) / weeks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product(price: f64) -> Product {
        Product { sku: "A-1".into(), name: "Phone".into(), description: None, price }
    }

    #[test]
    fn computes_normal_and_punctual_payments() {
        let term = Term { weeks: 4, normal_rate: 0.1, punctual_rate: 0.05 };
        let q = Quote::compute(&product(1000.0), &term);
        assert!((q.normal_payment - 275.0).abs() < 1e-9);
        assert!((q.punctual_payment - 262.5).abs() < 1e-9);
    }

    #[test]
    fn zero_weeks_propagates_non_finite_values() {
        let term = Term { weeks: 0, normal_rate: 0.1, punctual_rate: 0.05 };
        let q = Quote::compute(&product(1000.0), &term);
        assert!(q.normal_payment.is_infinite());

        let q = Quote::compute(&product(0.0), &term);
        assert!(q.punctual_payment.is_nan());
    }

    #[test]
    fn serializes_camel_case() {
        let q = Quote { normal_payment: 1.5, punctual_payment: 1.25 };
        assert_eq!(serde_json::to_value(q).unwrap(), json!({"normalPayment": 1.5, "punctualPayment": 1.25}));
    }

    #[test]
    fn request_requires_sku_and_weeks() {
        let r: QuoteRequest = serde_json::from_value(json!({"sku": "A-1"})).unwrap();
        assert_eq!(r.validate(), Err(ModelError::MissingFields(vec!["weeks"])));

        let r: QuoteRequest = serde_json::from_value(json!({"sku": "A-1", "weeks": 4})).unwrap();
        assert_eq!(r.validate().unwrap(), ("A-1".to_string(), 4));
    }
}
