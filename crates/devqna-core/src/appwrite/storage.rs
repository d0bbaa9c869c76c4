//! Bucket file storage for question attachments.

use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::appwrite::{BaasHttp, Credential};
use crate::config::BaasConfig;
use crate::{Error, Result};

/// Metadata of an uploaded file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FileMeta {
    #[serde(rename = "$id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "mimeType", default)]
    pub mime_type: Option<String>,
    #[serde(rename = "sizeOriginal", default)]
    pub size_bytes: i64,
}

/// Bucket provisioning parameters used by the setup CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBucket {
    pub bucket_id: String,
    pub name: String,
    pub maximum_file_size: i64,
    pub allowed_extensions: Vec<String>,
}

/// Client for the file storage surface of the BaaS.
#[derive(Clone)]
pub struct StorageClient {
    http: BaasHttp,
}

impl StorageClient {
    /// Build a client. Uses the server key when the config carries one.
    pub fn new(config: &BaasConfig) -> Result<Self> {
        Ok(Self {
            http: BaasHttp::from_config(config)?,
        })
    }

    /// Same connection, authenticated as a user session.
    #[must_use]
    pub fn with_session(&self, session_secret: impl Into<String>) -> Self {
        Self {
            http: self
                .http
                .with_credential(Credential::Session(session_secret.into())),
        }
    }

    /// Create a bucket with a size ceiling and extension allow-list.
    ///
    /// Setup-only; requires the server key.
    pub async fn create_bucket(&self, bucket: &NewBucket) -> Result<()> {
        let request = self
            .http
            .request(Method::POST, "/storage/buckets")
            .json(&json!({
                "bucketId": bucket.bucket_id,
                "name": bucket.name,
                "fileSecurity": false,
                "enabled": true,
                "maximumFileSize": bucket.maximum_file_size,
                "allowedFileExtensions": bucket.allowed_extensions,
            }));
        self.http.send_unit(request).await
    }

    /// Upload file bytes with a client-generated unique id.
    pub async fn upload_file(
        &self,
        bucket_id: &str,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<FileMeta> {
        let file_name = sanitize_file_name(file_name);
        let file_id = Uuid::now_v7().to_string();

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(content_type)
            .map_err(|error| Error::InvalidInput(format!("Invalid content type: {error}")))?;
        let form = Form::new().text("fileId", file_id).part("file", part);

        let request = self
            .http
            .request(
                Method::POST,
                &format!("/storage/buckets/{}/files", urlencoding::encode(bucket_id)),
            )
            .multipart(form);
        self.http.send(request).await
    }

    /// Delete a stored file.
    pub async fn delete_file(&self, bucket_id: &str, file_id: &str) -> Result<()> {
        let request = self.http.request(
            Method::DELETE,
            &format!(
                "/storage/buckets/{}/files/{}",
                urlencoding::encode(bucket_id),
                urlencoding::encode(file_id)
            ),
        );
        self.http.send_unit(request).await
    }

    /// Public view URL for a stored file.
    #[must_use]
    pub fn file_view_url(&self, bucket_id: &str, file_id: &str) -> String {
        format!(
            "{}/storage/buckets/{}/files/{}/view?project={}",
            self.http.endpoint(),
            urlencoding::encode(bucket_id),
            urlencoding::encode(file_id),
            urlencoding::encode(self.http.project_id())
        )
    }
}

fn sanitize_file_name(file_name: &str) -> String {
    let trimmed = file_name.trim().trim_matches('/');
    if trimmed.is_empty() {
        return "file".to_string();
    }

    let (stem, ext) = trimmed.rsplit_once('.').map_or((trimmed, ""), |parts| parts);
    let stem = sanitize_token(stem);
    let stem = if stem.is_empty() {
        "file".to_string()
    } else {
        stem
    };
    let ext = sanitize_token(ext);

    if ext.is_empty() {
        stem
    } else {
        format!("{stem}.{ext}")
    }
}

fn sanitize_token(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut last_dash = false;

    for ch in input.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_alphanumeric() {
            out.push(ch);
            last_dash = false;
        } else if !last_dash {
            out.push('-');
            last_dash = true;
        }
    }

    out.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> StorageClient {
        let config = BaasConfig {
            endpoint: "https://cloud.example.com/v1".to_string(),
            project_id: "devqna".to_string(),
            api_key: None,
        };
        StorageClient::new(&config).unwrap()
    }

    #[test]
    fn sanitize_file_name_normalizes_stem_and_extension() {
        assert_eq!(sanitize_file_name("My Photo (1).PNG"), "my-photo-1.png");
        assert_eq!(sanitize_file_name("  "), "file");
        assert_eq!(sanitize_file_name("...pdf"), "file.pdf");
    }

    #[test]
    fn file_view_url_embeds_project() {
        let url = test_client().file_view_url("question-attachments", "file-1");
        assert_eq!(
            url,
            "https://cloud.example.com/v1/storage/buckets/question-attachments/files/file-1/view?project=devqna"
        );
    }
}
