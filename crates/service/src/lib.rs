//! Service layer providing product, term and quote operations on top of a remote table store.
//! - `store` holds the narrow table interface and its PostgREST / in-memory implementations.
//! - Services translate typed records to store rows and store failures to `ServiceError`.

pub mod errors;
pub mod store;
pub mod product_service;
pub mod term_service;
pub mod quote_service;
