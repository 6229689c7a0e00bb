use std::sync::Arc;

use models::{Quote, QuoteRequest};
use tracing::{debug, instrument};

use crate::errors::ServiceError;
use crate::product_service::ProductService;
use crate::term_service::TermService;

/// Credit quote: product price spread over a term, with normal and punctual rates.
pub struct QuoteService {
    products: Arc<ProductService>,
    terms: Arc<TermService>,
}

impl QuoteService {
    pub fn new(products: Arc<ProductService>, terms: Arc<TermService>) -> Self { Self { products, terms } }

    /// Product first, then term; either lookup failing aborts the quote.
    #[instrument(skip(self, request))]
    pub async fn quote(&self, request: QuoteRequest) -> Result<Quote, ServiceError> {
        let (sku, weeks) = request.validate()?;
        let product = self.products.get(&sku).await?;
        let term = self.terms.get(weeks).await?;
        let quote = Quote::compute(&product, &term);
        debug!(%sku, weeks, normal = quote.normal_payment, punctual = quote.punctual_payment, "quote_computed");
        Ok(quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, TableStore};
    use models::{CreateProductInput, CreateTermInput};

    async fn seeded() -> QuoteService {
        let store: Arc<dyn TableStore> = Arc::new(MemoryStore::new());
        let products = Arc::new(ProductService::new(store.clone()));
        let terms = Arc::new(TermService::new(store));
        products
            .create(CreateProductInput { sku: Some("PH-1".into()), name: Some("Phone".into()), description: None, price: Some(1000.0) })
            .await
            .unwrap();
        terms
            .create(CreateTermInput { weeks: Some(4), normal_rate: Some(0.1), punctual_rate: Some(0.05) })
            .await
            .unwrap();
        QuoteService::new(products, terms)
    }

    #[tokio::test]
    async fn quote_for_known_product_and_term() {
        let svc = seeded().await;
        let q = svc.quote(QuoteRequest { sku: Some("PH-1".into()), weeks: Some(4) }).await.unwrap();
        assert!((q.normal_payment - 275.0).abs() < 1e-9);
        assert!((q.punctual_payment - 262.5).abs() < 1e-9);
    }

    #[tokio::test]
    async fn unknown_sku_or_term_fails() {
        let svc = seeded().await;
        let r = svc.quote(QuoteRequest { sku: Some("nope".into()), weeks: Some(4) }).await;
        assert!(matches!(r, Err(ServiceError::NotFound(_))));
        let r = svc.quote(QuoteRequest { sku: Some("PH-1".into()), weeks: Some(52) }).await;
        assert!(matches!(r, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn missing_weeks_is_validation_error() {
        let svc = seeded().await;
        let r = svc.quote(QuoteRequest { sku: Some("PH-1".into()), weeks: None }).await;
        assert!(matches!(r, Err(ServiceError::Validation(_))));
    }
}
