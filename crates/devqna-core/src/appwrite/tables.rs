//! Generic row CRUD against a remote database.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::appwrite::query::{to_params, Query};
use crate::appwrite::{BaasHttp, Credential};
use crate::config::BaasConfig;
use crate::{Error, Result};

/// One page of rows plus the total matching count reported by the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct RowPage<T> {
    pub total: u64,
    pub rows: Vec<T>,
}

#[derive(Deserialize)]
struct ListWire<T> {
    total: u64,
    documents: Vec<T>,
}

/// Typed CRUD over the rows of one remote database.
#[derive(Clone)]
pub struct TablesClient {
    http: BaasHttp,
    database_id: String,
}

impl TablesClient {
    /// Build a client for the given database. Uses the server key when the
    /// config carries one, otherwise public access.
    pub fn new(config: &BaasConfig, database_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            http: BaasHttp::from_config(config)?,
            database_id: database_id.into(),
        })
    }

    /// Same database, authenticated as a user session.
    #[must_use]
    pub fn with_session(&self, session_secret: impl Into<String>) -> Self {
        Self {
            http: self
                .http
                .with_credential(Credential::Session(session_secret.into())),
            database_id: self.database_id.clone(),
        }
    }

    fn rows_path(&self, table_id: &str) -> String {
        format!(
            "/databases/{}/collections/{}/documents",
            urlencoding::encode(&self.database_id),
            urlencoding::encode(table_id)
        )
    }

    fn row_path(&self, table_id: &str, row_id: &str) -> String {
        format!("{}/{}", self.rows_path(table_id), urlencoding::encode(row_id))
    }

    /// List rows matching the given queries.
    pub async fn list_rows<T: DeserializeOwned>(
        &self,
        table_id: &str,
        queries: &[Query],
    ) -> Result<RowPage<T>> {
        let request = self
            .http
            .request(Method::GET, &self.rows_path(table_id))
            .query(&to_params(queries));
        let page: ListWire<T> = self.http.send(request).await?;
        Ok(RowPage {
            total: page.total,
            rows: page.documents,
        })
    }

    /// Fetch a row by id. Returns `Ok(None)` when the row does not exist.
    pub async fn get_row<T: DeserializeOwned>(
        &self,
        table_id: &str,
        row_id: &str,
    ) -> Result<Option<T>> {
        let request = self.http.request(Method::GET, &self.row_path(table_id, row_id));
        match self.http.send(request).await {
            Ok(row) => Ok(Some(row)),
            Err(Error::Api { status: 404, .. }) => Ok(None),
            Err(error) => Err(error),
        }
    }

    /// Create a row with a backend-generated unique id.
    pub async fn create_row<T: DeserializeOwned, D: Serialize>(
        &self,
        table_id: &str,
        data: &D,
    ) -> Result<T> {
        let request = self
            .http
            .request(Method::POST, &self.rows_path(table_id))
            .json(&json!({
                "documentId": "unique()",
                "data": data,
            }));
        self.http.send(request).await
    }

    /// Patch the given fields of an existing row.
    pub async fn update_row<T: DeserializeOwned, D: Serialize>(
        &self,
        table_id: &str,
        row_id: &str,
        data: &D,
    ) -> Result<T> {
        let request = self
            .http
            .request(Method::PATCH, &self.row_path(table_id, row_id))
            .json(&json!({ "data": data }));
        self.http.send(request).await
    }

    /// Delete a row by id.
    pub async fn delete_row(&self, table_id: &str, row_id: &str) -> Result<()> {
        let request = self
            .http
            .request(Method::DELETE, &self.row_path(table_id, row_id));
        self.http.send_unit(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BaasConfig;

    fn test_client() -> TablesClient {
        let config = BaasConfig {
            endpoint: "https://cloud.example.com/v1".to_string(),
            project_id: "devqna".to_string(),
            api_key: None,
        };
        TablesClient::new(&config, "devqna-main").unwrap()
    }

    #[test]
    fn row_paths_are_escaped() {
        let client = test_client();
        assert_eq!(
            client.rows_path("questions"),
            "/databases/devqna-main/collections/questions/documents"
        );
        assert_eq!(
            client.row_path("questions", "id with space"),
            "/databases/devqna-main/collections/questions/documents/id%20with%20space"
        );
    }
}
