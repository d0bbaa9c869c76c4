//! Admin schema provisioning: databases, tables, columns, indexes.
//!
//! Used only by the setup CLI, outside the request path.

use reqwest::Method;
use serde_json::json;

use crate::appwrite::{BaasHttp, Credential};
use crate::config::BaasConfig;
use crate::{Error, Result};

/// Secondary index kinds supported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    Key,
    Fulltext,
}

impl IndexKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Key => "key",
            Self::Fulltext => "fulltext",
        }
    }
}

/// Row-level permissions granted on provisioned tables and buckets: anyone
/// may read, signed-in users may write.
fn default_permissions() -> Vec<&'static str> {
    vec![
        "read(\"any\")",
        "create(\"users\")",
        "update(\"users\")",
        "delete(\"users\")",
    ]
}

/// Admin client for one-time schema setup.
#[derive(Clone)]
pub struct ProvisioningClient {
    http: BaasHttp,
}

impl ProvisioningClient {
    /// Build a provisioning client. The config must carry the server API key.
    pub fn new(config: &BaasConfig) -> Result<Self> {
        let Some(api_key) = config.api_key.clone() else {
            return Err(Error::InvalidInput(
                "Provisioning requires a server API key".to_string(),
            ));
        };
        Ok(Self {
            http: BaasHttp::new(config, Credential::ApiKey(api_key))?,
        })
    }

    /// Check whether a database exists.
    pub async fn get_database(&self, database_id: &str) -> Result<()> {
        let request = self.http.request(
            Method::GET,
            &format!("/databases/{}", urlencoding::encode(database_id)),
        );
        self.http.send_unit(request).await
    }

    /// Create a database.
    pub async fn create_database(&self, database_id: &str, name: &str) -> Result<()> {
        let request = self
            .http
            .request(Method::POST, "/databases")
            .json(&json!({
                "databaseId": database_id,
                "name": name,
                "enabled": true,
            }));
        self.http.send_unit(request).await
    }

    /// Create a table with the default permission set.
    pub async fn create_table(&self, database_id: &str, table_id: &str) -> Result<()> {
        let request = self
            .http
            .request(
                Method::POST,
                &format!("/databases/{}/collections", urlencoding::encode(database_id)),
            )
            .json(&json!({
                "collectionId": table_id,
                "name": table_id,
                "permissions": default_permissions(),
                "enabled": true,
            }));
        self.http.send_unit(request).await
    }

    /// Create a string column on a table.
    pub async fn create_string_column(
        &self,
        database_id: &str,
        table_id: &str,
        key: &str,
        size: usize,
        required: bool,
        array: bool,
    ) -> Result<()> {
        let request = self
            .http
            .request(
                Method::POST,
                &format!(
                    "/databases/{}/collections/{}/attributes/string",
                    urlencoding::encode(database_id),
                    urlencoding::encode(table_id)
                ),
            )
            .json(&json!({
                "key": key,
                "size": size,
                "required": required,
                "array": array,
            }));
        self.http.send_unit(request).await
    }

    /// Create a secondary index over the given columns.
    pub async fn create_index(
        &self,
        database_id: &str,
        table_id: &str,
        key: &str,
        kind: IndexKind,
        columns: &[&str],
    ) -> Result<()> {
        let request = self
            .http
            .request(
                Method::POST,
                &format!(
                    "/databases/{}/collections/{}/indexes",
                    urlencoding::encode(database_id),
                    urlencoding::encode(table_id)
                ),
            )
            .json(&json!({
                "key": key,
                "type": kind.as_str(),
                "attributes": columns,
            }));
        self.http.send_unit(request).await
    }
}
