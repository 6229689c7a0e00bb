use std::sync::Arc;

use service::{
    product_service::ProductService, quote_service::QuoteService, store::TableStore,
    term_service::TermService,
};

/// Shared handler state; every service wraps the same injected store client.
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<ProductService>,
    pub terms: Arc<TermService>,
    pub quotes: Arc<QuoteService>,
}

impl AppState {
    pub fn new(store: Arc<dyn TableStore>) -> Self {
        let products = Arc::new(ProductService::new(Arc::clone(&store)));
        let terms = Arc::new(TermService::new(store));
        let quotes = Arc::new(QuoteService::new(Arc::clone(&products), Arc::clone(&terms)));
        Self { products, terms, quotes }
    }
}
