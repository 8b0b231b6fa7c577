use reqwest::{Client, Response, StatusCode, header};
use serde_json::Value;

use super::client::FirebaseError;
use crate::infrastructure::config::FirebaseConfig;

const STORAGE_BASE_URL: &str = "https://firebasestorage.googleapis.com/v0";

/// Metadata of an uploaded object with its resolved download URL.
#[derive(Debug, Clone)]
pub struct StorageObject {
  pub object_path: String,
  pub download_url: String,
}

/// Thin client for the hosted file store's REST surface.
#[derive(Clone)]
pub struct FirebaseStorageClient {
  http: Client,
  base_url: String,
  bucket: String,
}

impl FirebaseStorageClient {
  pub fn new(config: &FirebaseConfig) -> Self {
    let base_url = match &config.emulator_host {
      Some(host) => format!("http://{}/v0", host),
      None => STORAGE_BASE_URL.to_string(),
    };
    Self::with_base_url(base_url, config.storage_bucket.clone())
  }

  /// Client against an explicit endpoint; used for emulators and tests.
  pub fn with_base_url(base_url: String, bucket: String) -> Self {
    Self {
      http: Client::new(),
      base_url: base_url.trim_end_matches('/').to_string(),
      bucket,
    }
  }

  // Object paths are a single URL segment; slashes must be encoded.
  fn object_url(&self, object_path: &str) -> String {
    format!(
      "{}/b/{}/o/{}",
      self.base_url,
      self.bucket,
      urlencoding::encode(object_path)
    )
  }

  /// Upload raw bytes under `object_path` and resolve the public URL.
  pub async fn upload(
    &self,
    object_path: &str,
    bytes: Vec<u8>,
    content_type: &str,
  ) -> Result<StorageObject, FirebaseError> {
    let url = format!("{}/b/{}/o", self.base_url, self.bucket);

    let response = self
      .http
      .post(&url)
      .query(&[("uploadType", "media"), ("name", object_path)])
      .header(header::CONTENT_TYPE, content_type)
      .body(bytes)
      .send()
      .await?;

    let metadata: Value = Self::check(response).await?.json().await?;

    // The bucket issues one or more comma-separated access tokens.
    let token = metadata
      .get("downloadTokens")
      .and_then(Value::as_str)
      .and_then(|tokens| tokens.split(',').next())
      .filter(|token| !token.is_empty());

    Ok(StorageObject {
      object_path: object_path.to_string(),
      download_url: self.download_url(object_path, token),
    })
  }

  /// Public download URL for an object, token-authorized when one exists.
  pub fn download_url(&self, object_path: &str, token: Option<&str>) -> String {
    let mut url = format!("{}?alt=media", self.object_url(object_path));
    if let Some(token) = token {
      url.push_str("&token=");
      url.push_str(token);
    }
    url
  }

  pub async fn delete(&self, object_path: &str) -> Result<(), FirebaseError> {
    let response = self.http.delete(self.object_url(object_path)).send().await?;

    // Deleting an already-gone object is not an error worth surfacing.
    if response.status() == StatusCode::NOT_FOUND {
      tracing::debug!("Storage object already absent: {}", object_path);
      return Ok(());
    }

    Self::check(response).await?;
    Ok(())
  }

  async fn check(response: Response) -> Result<Response, FirebaseError> {
    if response.status().is_success() {
      return Ok(response);
    }
    let status = response.status();
    let body = response
      .text()
      .await
      .unwrap_or_else(|_| "unknown".to_string());
    tracing::warn!("Storage request failed with {}: {}", status, body);
    Err(FirebaseError::Status { status, body })
  }
}
