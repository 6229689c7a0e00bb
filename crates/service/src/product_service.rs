use std::sync::Arc;

use models::product::{self, CreateProductInput, Product, UpdateProductInput};
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::store::{decode, encode, Filter, StoreError, TableStore};

/// Product catalogue operations on the `products` table, keyed by sku.
pub struct ProductService {
    store: Arc<dyn TableStore>,
}

fn by_sku(sku: &str) -> Filter {
    Filter::eq(product::KEY, sku)
}

impl ProductService {
    pub fn new(store: Arc<dyn TableStore>) -> Self { Self { store } }

    pub async fn list(&self) -> Result<Vec<Product>, ServiceError> {
        let rows = self.store.select(product::TABLE, None).await?;
        Ok(rows.into_iter().map(decode::<Product>).collect::<Result<Vec<_>, StoreError>>()?)
    }

    /// Single-row lookup; a missing sku is `ServiceError::NotFound`.
    #[instrument(skip(self))]
    pub async fn get(&self, sku: &str) -> Result<Product, ServiceError> {
        match self.store.select_single(product::TABLE, &by_sku(sku)).await {
            Ok(row) => Ok(decode(row)?),
            Err(StoreError::NoRows) => Err(ServiceError::not_found("product")),
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateProductInput) -> Result<Product, ServiceError> {
        let new = input.validate()?;
        let row = self.store.insert(product::TABLE, encode(&new)?).await?;
        let created: Product = decode(row)?;
        info!(sku = %created.sku, "product_created");
        Ok(created)
    }

    /// Update name/price (and description when given). No matching sku is `NotFound`.
    #[instrument(skip(self, input))]
    pub async fn update(&self, sku: &str, input: UpdateProductInput) -> Result<Product, ServiceError> {
        let changes = input.validate()?;
        let rows = self.store.update(product::TABLE, &by_sku(sku), encode(&changes)?).await?;
        let row = rows.into_iter().next().ok_or_else(|| ServiceError::not_found("product"))?;
        info!(%sku, "product_updated");
        Ok(decode(row)?)
    }

    /// Deleting an unknown sku is not an error.
    #[instrument(skip(self))]
    pub async fn delete(&self, sku: &str) -> Result<(), ServiceError> {
        self.store.delete(product::TABLE, &by_sku(sku)).await?;
        info!(%sku, "product_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn service() -> (Arc<MemoryStore>, ProductService) {
        let store = Arc::new(MemoryStore::new().with_unique_key(product::TABLE, product::KEY));
        (store.clone(), ProductService::new(store))
    }

    fn phone() -> CreateProductInput {
        CreateProductInput { sku: Some("PH-1".into()), name: Some("Phone".into()), description: None, price: Some(1000.0) }
    }

    #[tokio::test]
    async fn create_then_get() {
        let (_, svc) = service();
        let created = svc.create(phone()).await.unwrap();
        assert_eq!(created.sku, "PH-1");
        assert_eq!(svc.get("PH-1").await.unwrap(), created);
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let (_, svc) = service();
        assert!(matches!(svc.get("nope").await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn invalid_create_does_not_touch_store() {
        let (store, svc) = service();
        let mut input = phone();
        input.price = None;
        assert!(matches!(svc.create(input).await, Err(ServiceError::Validation(_))));
        assert_eq!(store.len(product::TABLE).await, 0);
    }

    #[tokio::test]
    async fn duplicate_sku_is_a_store_error() {
        let (_, svc) = service();
        svc.create(phone()).await.unwrap();
        assert!(matches!(svc.create(phone()).await, Err(ServiceError::Store(_))));
    }

    #[tokio::test]
    async fn update_keeps_description_when_absent() {
        let (_, svc) = service();
        let mut input = phone();
        input.description = Some("smart".into());
        svc.create(input).await.unwrap();

        let updated = svc
            .update("PH-1", UpdateProductInput { name: Some("Phone X".into()), description: None, price: Some(1200.0) })
            .await
            .unwrap();
        assert_eq!(updated.name, "Phone X");
        assert_eq!(updated.price, 1200.0);
        assert_eq!(updated.description.as_deref(), Some("smart"));
    }

    #[tokio::test]
    async fn update_unknown_sku_is_not_found() {
        let (_, svc) = service();
        let input = UpdateProductInput { name: Some("x".into()), description: None, price: Some(1.0) };
        assert!(matches!(svc.update("nope", input).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let (_, svc) = service();
        svc.create(phone()).await.unwrap();
        svc.delete("PH-1").await.unwrap();
        assert!(matches!(svc.get("PH-1").await, Err(ServiceError::NotFound(_))));
        svc.delete("PH-1").await.unwrap();
    }
}
