use async_trait::async_trait;
use reqwest::{header::ACCEPT, Method, RequestBuilder, Response};
use serde::Deserialize;
use tracing::{debug, instrument};

use super::{Filter, Row, StoreError, TableStore};

/// PostgREST error code for "JSON object requested, multiple (or no) rows returned".
pub const NO_ROWS_CODE: &str = "PGRST116";

const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";
const RETURN_REPRESENTATION: &str = "return=representation";

/// Table store backed by a PostgREST endpoint (`<url>/rest/v1/<table>`), as exposed by Supabase.
#[derive(Clone)]
pub struct PostgrestStore {
    client: reqwest::Client,
    rest_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: Option<String>,
    message: Option<String>,
}

impl PostgrestStore {
    pub fn new(url: &str, api_key: &str) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        Ok(Self::with_client(client, url, api_key))
    }

    pub fn with_client(client: reqwest::Client, url: &str, api_key: &str) -> Self {
        Self {
            client,
            rest_url: format!("{}/rest/v1", url.trim_end_matches('/')),
            api_key: api_key.to_string(),
        }
    }

    pub fn from_config(cfg: &configs::StoreConfig) -> Result<Self, StoreError> {
        Self::new(&cfg.url, &cfg.api_key)
    }

    fn request(&self, method: Method, table: &str, filter: Option<&Filter>) -> RequestBuilder {
        let mut rb = self
            .client
            .request(method, format!("{}/{}", self.rest_url, table))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key);
        if let Some(f) = filter {
            rb = rb.query(&[(f.column.as_str(), format!("eq.{}", f.operand()))]);
        }
        rb
    }
}

async fn send(rb: RequestBuilder) -> Result<Response, StoreError> {
    let resp = rb.send().await.map_err(|e| StoreError::Transport(e.to_string()))?;
    if resp.status().is_success() {
        Ok(resp)
    } else {
        Err(error_from(resp).await)
    }
}

async fn error_from(resp: Response) -> StoreError {
    let status = resp.status().as_u16();
    let text = resp.text().await.unwrap_or_default();
    debug!(status, body = %text, "postgrest error response");
    match serde_json::from_str::<ErrorBody>(&text) {
        Ok(body) if body.code.as_deref() == Some(NO_ROWS_CODE) => StoreError::NoRows,
        Ok(body) => StoreError::Api { status, code: body.code, message: body.message.unwrap_or(text) },
        Err(_) => StoreError::Api { status, code: None, message: text },
    }
}

async fn rows(resp: Response) -> Result<Vec<Row>, StoreError> {
    resp.json::<Vec<Row>>().await.map_err(|e| StoreError::Decode(e.to_string()))
}

async fn row(resp: Response) -> Result<Row, StoreError> {
    resp.json::<Row>().await.map_err(|e| StoreError::Decode(e.to_string()))
}

#[async_trait]
impl TableStore for PostgrestStore {
    #[instrument(skip(self), level = "debug")]
    async fn select(&self, table: &str, filter: Option<&Filter>) -> Result<Vec<Row>, StoreError> {
        let rb = self.request(Method::GET, table, filter).query(&[("select", "*")]);
        rows(send(rb).await?).await
    }

    #[instrument(skip(self), level = "debug")]
    async fn select_single(&self, table: &str, filter: &Filter) -> Result<Row, StoreError> {
        let rb = self
            .request(Method::GET, table, Some(filter))
            .query(&[("select", "*")])
            .header(ACCEPT, SINGLE_OBJECT);
        row(send(rb).await?).await
    }

    #[instrument(skip(self, new_row), level = "debug")]
    async fn insert(&self, table: &str, new_row: Row) -> Result<Row, StoreError> {
        let rb = self
            .request(Method::POST, table, None)
            .header("Prefer", RETURN_REPRESENTATION)
            .header(ACCEPT, SINGLE_OBJECT)
            .json(&new_row);
        row(send(rb).await?).await
    }

    #[instrument(skip(self, changes), level = "debug")]
    async fn update(&self, table: &str, filter: &Filter, changes: Row) -> Result<Vec<Row>, StoreError> {
        let rb = self
            .request(Method::PATCH, table, Some(filter))
            .header("Prefer", RETURN_REPRESENTATION)
            .json(&changes);
        rows(send(rb).await?).await
    }

    #[instrument(skip(self), level = "debug")]
    async fn delete(&self, table: &str, filter: &Filter) -> Result<(), StoreError> {
        send(self.request(Method::DELETE, table, Some(filter))).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_url_ignores_trailing_slash() {
        let store = PostgrestStore::new("https://demo.supabase.co/", "anon").unwrap();
        assert_eq!(store.rest_url, "https://demo.supabase.co/rest/v1");
    }
}
