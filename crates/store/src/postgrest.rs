use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use atelier_core::Row;

use super::r#trait::{Filter, RecordStore, StoreError, StoreResult};

/// Client for the hosted store's PostgREST surface.
///
/// Filters become query parameters (`item_id=eq.7`,
/// `expected_date=lt.2024-06-01`); writes ask for the affected rows back via
/// `Prefer: return=representation`. No retries: one attempt per call.
#[derive(Debug, Clone)]
pub struct PostgrestRecordStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl PostgrestRecordStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    fn request(&self, method: Method, table: &str, filters: &[Filter]) -> reqwest::RequestBuilder {
        self.client
            .request(method, format!("{}/{}", self.base_url, table))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .query(&query_params(filters))
    }
}

fn query_params(filters: &[Filter]) -> Vec<(String, String)> {
    filters
        .iter()
        .map(|filter| match filter {
            Filter::Eq(field, value) => (field.clone(), format!("eq.{}", literal(value))),
            Filter::Lt(field, value) => (field.clone(), format!("lt.{}", literal(value))),
            Filter::Gte(field, value) => (field.clone(), format!("gte.{}", literal(value))),
        })
        .collect()
}

fn literal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

async fn rows_from(res: reqwest::Response) -> StoreResult<Vec<Row>> {
    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|e| StoreError::transport(e.to_string()))?;

    if !status.is_success() {
        return Err(StoreError::backend(format!("{status}: {body}")));
    }

    serde_json::from_str(&body).map_err(|e| StoreError::decode(e.to_string()))
}

#[async_trait]
impl RecordStore for PostgrestRecordStore {
    async fn select(&self, table: &str, filters: &[Filter]) -> StoreResult<Vec<Row>> {
        tracing::debug!(table, "store select");
        let res = self
            .request(Method::GET, table, filters)
            .send()
            .await
            .map_err(|e| StoreError::transport(e.to_string()))?;
        rows_from(res).await
    }

    async fn insert(&self, table: &str, row: Row) -> StoreResult<Row> {
        tracing::debug!(table, "store insert");
        let res = self
            .request(Method::POST, table, &[])
            .header("Prefer", "return=representation")
            .json(&row)
            .send()
            .await
            .map_err(|e| StoreError::transport(e.to_string()))?;

        rows_from(res)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::decode("insert returned no representation"))
    }

    async fn update(&self, table: &str, filters: &[Filter], patch: Row) -> StoreResult<Vec<Row>> {
        tracing::debug!(table, "store update");
        let res = self
            .request(Method::PATCH, table, filters)
            .header("Prefer", "return=representation")
            .json(&patch)
            .send()
            .await
            .map_err(|e| StoreError::transport(e.to_string()))?;
        rows_from(res).await
    }

    async fn delete(&self, table: &str, filters: &[Filter]) -> StoreResult<Vec<Row>> {
        tracing::debug!(table, "store delete");
        let res = self
            .request(Method::DELETE, table, filters)
            .header("Prefer", "return=representation")
            .send()
            .await
            .map_err(|e| StoreError::transport(e.to_string()))?;
        rows_from(res).await
    }

    async fn count(&self, table: &str, filters: &[Filter]) -> StoreResult<u64> {
        tracing::debug!(table, "store count");
        let res = self
            .request(Method::HEAD, table, filters)
            .header("Prefer", "count=exact")
            .send()
            .await
            .map_err(|e| StoreError::transport(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            return Err(StoreError::backend(status.to_string()));
        }

        // PostgREST reports the exact count after the slash: `0-24/57`.
        let range = res
            .headers()
            .get("content-range")
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| StoreError::decode("missing content-range header"))?;

        range
            .rsplit('/')
            .next()
            .and_then(|total| total.parse::<u64>().ok())
            .ok_or_else(|| StoreError::decode(format!("unparseable content-range '{range}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn filters_encode_as_postgrest_query_params() {
        let params = query_params(&[
            Filter::eq("item_id", 7),
            Filter::lt("expected_date", "2024-06-01"),
            Filter::gte("expected_date", "2024-06-01"),
        ]);

        assert_eq!(
            params,
            vec![
                ("item_id".to_string(), "eq.7".to_string()),
                ("expected_date".to_string(), "lt.2024-06-01".to_string()),
                ("expected_date".to_string(), "gte.2024-06-01".to_string()),
            ]
        );
    }

    #[test]
    fn string_literals_are_not_json_quoted() {
        assert_eq!(literal(&json!("cash")), "cash");
        assert_eq!(literal(&json!(12.5)), "12.5");
        assert_eq!(literal(&json!(true)), "true");
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let store = PostgrestRecordStore::new("https://example.test/rest/v1/", "key");
        assert_eq!(store.base_url, "https://example.test/rest/v1");
    }
}
