use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

/// Error listing every field flagged absent, in declaration order.
pub(crate) fn missing(fields: &[(&'static str, bool)]) -> ModelError {
    ModelError::MissingFields(fields.iter().filter(|(_, absent)| *absent).map(|(name, _)| *name).collect())
}

/// Blank strings count as missing.
pub(crate) fn non_blank(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}
