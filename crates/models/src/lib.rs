//! Domain records exchanged with the remote store and the HTTP layer.
//! - Request payloads keep every field optional so missing input can be
//!   reported as a validation error instead of a deserialization failure.
//! - Validated payloads become the records written to the store.

pub mod errors;
pub mod product;
pub mod quote;
pub mod term;

pub use product::{CreateProductInput, Product, ProductChanges, UpdateProductInput};
pub use quote::{Quote, QuoteRequest};
pub use term::{CreateTermInput, Term};
