use serde::{Deserialize, Serialize};

use crate::errors::{missing, ModelError};

pub const TABLE: &str = "terms";
pub const KEY: &str = "weeks";

/// Financing duration with the interest multipliers applied to a price.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub weeks: u32,
    pub normal_rate: f64,
    pub punctual_rate: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateTermInput {
    pub weeks: Option<u32>,
    pub normal_rate: Option<f64>,
    pub punctual_rate: Option<f64>,
}

impl CreateTermInput {
    pub fn validate(self) -> Result<Term, ModelError> {
        match (self.weeks, self.normal_rate, self.punctual_rate) {
            (Some(weeks), Some(normal_rate), Some(punctual_rate)) => Ok(Term { weeks, normal_rate, punctual_rate }),
            (weeks, normal_rate, punctual_rate) => Err(missing(&[
                ("weeks", weeks.is_none()),
                ("normal_rate", normal_rate.is_none()),
                ("punctual_rate", punctual_rate.is_none()),
            ])),
        }
    }
}
