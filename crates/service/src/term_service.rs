use std::sync::Arc;

use models::term::{self, CreateTermInput, Term};
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::store::{decode, encode, Filter, StoreError, TableStore};

/// Financing terms on the `terms` table, keyed by weeks.
pub struct TermService {
    store: Arc<dyn TableStore>,
}

impl TermService {
    pub fn new(store: Arc<dyn TableStore>) -> Self { Self { store } }

    pub async fn list(&self) -> Result<Vec<Term>, ServiceError> {
        let rows = self.store.select(term::TABLE, None).await?;
        Ok(rows.into_iter().map(decode::<Term>).collect::<Result<Vec<_>, StoreError>>()?)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, weeks: u32) -> Result<Term, ServiceError> {
        match self.store.select_single(term::TABLE, &Filter::eq(term::KEY, weeks)).await {
            Ok(row) => Ok(decode(row)?),
            Err(StoreError::NoRows) => Err(ServiceError::not_found("term")),
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateTermInput) -> Result<Term, ServiceError> {
        let new = input.validate()?;
        let row = self.store.insert(term::TABLE, encode(&new)?).await?;
        let created: Term = decode(row)?;
        info!(weeks = created.weeks, "term_created");
        Ok(created)
    }
}
