use reqwest::{Client, Response, StatusCode};
use serde_json::{Map, Value, json};
use thiserror::Error;

use super::document::{self, DocumentError};
use crate::infrastructure::config::FirebaseConfig;

const FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";

#[derive(Debug, Error)]
pub enum FirebaseError {
  #[error("Request failed: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("Backend returned {status}: {body}")]
  Status { status: StatusCode, body: String },

  #[error("Document mapping failed: {0}")]
  Document(#[from] DocumentError),

  #[error("Unexpected response shape: {0}")]
  Malformed(String),
}

/// One stored document: full resource name plus its fields decoded to plain
/// JSON.
#[derive(Debug, Clone)]
pub struct Document {
  pub name: String,
  pub fields: Map<String, Value>,
}

impl Document {
  /// Trailing path segment of the resource name.
  pub fn doc_id(&self) -> &str {
    self.name.rsplit('/').next().unwrap_or(&self.name)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
  Ascending,
  Descending,
}

impl OrderDirection {
  fn as_str(&self) -> &'static str {
    match self {
      OrderDirection::Ascending => "ASCENDING",
      OrderDirection::Descending => "DESCENDING",
    }
  }
}

/// Thin client for the hosted document database's REST surface.
///
/// Created once at startup and shared for the life of the process. Adds no
/// retry, caching, or conflict handling; backend failures surface as-is.
#[derive(Clone)]
pub struct FirestoreClient {
  http: Client,
  base_url: String,
  project_id: String,
  api_key: String,
}

impl FirestoreClient {
  pub fn new(config: &FirebaseConfig) -> Self {
    let base_url = match &config.emulator_host {
      Some(host) => format!("http://{}/v1", host),
      None => FIRESTORE_BASE_URL.to_string(),
    };
    Self::with_base_url(base_url, config.project_id.clone(), config.api_key.clone())
  }

  /// Client against an explicit endpoint; used for emulators and tests.
  pub fn with_base_url(base_url: String, project_id: String, api_key: String) -> Self {
    Self {
      http: Client::new(),
      base_url: base_url.trim_end_matches('/').to_string(),
      project_id,
      api_key,
    }
  }

  fn documents_root(&self) -> String {
    format!(
      "{}/projects/{}/databases/(default)/documents",
      self.base_url, self.project_id
    )
  }

  /// Create a document under `collection` with a caller-chosen id.
  pub async fn create_document(
    &self,
    collection: &str,
    document_id: &str,
    fields: &Map<String, Value>,
  ) -> Result<Document, FirebaseError> {
    let url = format!("{}/{}", self.documents_root(), collection);
    let body = json!({ "fields": document::to_fields(fields)? });

    let response = self
      .http
      .post(&url)
      .query(&[("documentId", document_id), ("key", self.api_key.as_str())])
      .json(&body)
      .send()
      .await?;

    let value: Value = Self::check(response).await?.json().await?;
    Self::document_from_value(&value)
  }

  /// Replace the field set of an existing document.
  pub async fn patch_document(
    &self,
    collection: &str,
    document_id: &str,
    fields: &Map<String, Value>,
  ) -> Result<Document, FirebaseError> {
    let url = format!("{}/{}/{}", self.documents_root(), collection, document_id);
    let body = json!({ "fields": document::to_fields(fields)? });

    let response = self
      .http
      .patch(&url)
      .query(&[("key", &self.api_key)])
      .json(&body)
      .send()
      .await?;

    let value: Value = Self::check(response).await?.json().await?;
    Self::document_from_value(&value)
  }

  /// Fetch a single document; `Ok(None)` when it does not exist.
  pub async fn get_document(
    &self,
    collection: &str,
    document_id: &str,
  ) -> Result<Option<Document>, FirebaseError> {
    let url = format!("{}/{}/{}", self.documents_root(), collection, document_id);

    let response = self
      .http
      .get(&url)
      .query(&[("key", &self.api_key)])
      .send()
      .await?;

    if response.status() == StatusCode::NOT_FOUND {
      return Ok(None);
    }

    let value: Value = Self::check(response).await?.json().await?;
    Self::document_from_value(&value).map(Some)
  }

  pub async fn delete_document(
    &self,
    collection: &str,
    document_id: &str,
  ) -> Result<(), FirebaseError> {
    let url = format!("{}/{}/{}", self.documents_root(), collection, document_id);

    let response = self
      .http
      .delete(&url)
      .query(&[("key", &self.api_key)])
      .send()
      .await?;

    Self::check(response).await?;
    Ok(())
  }

  /// List every document of a collection ordered by one field.
  pub async fn run_query(
    &self,
    collection: &str,
    order_by: &str,
    direction: OrderDirection,
  ) -> Result<Vec<Document>, FirebaseError> {
    let url = format!("{}:runQuery", self.documents_root());
    let body = json!({
      "structuredQuery": {
        "from": [{ "collectionId": collection }],
        "orderBy": [{
          "field": { "fieldPath": order_by },
          "direction": direction.as_str(),
        }],
      }
    });

    let response = self
      .http
      .post(&url)
      .query(&[("key", &self.api_key)])
      .json(&body)
      .send()
      .await?;

    let value: Value = Self::check(response).await?.json().await?;
    let entries = value
      .as_array()
      .ok_or_else(|| FirebaseError::Malformed(format!("runQuery returned {}", value)))?;

    // Entries without a `document` key carry only read metadata.
    entries
      .iter()
      .filter_map(|entry| entry.get("document"))
      .map(Self::document_from_value)
      .collect()
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
    tracing::warn!("Firestore request failed with {}: {}", status, body);
    Err(FirebaseError::Status { status, body })
  }

  fn document_from_value(value: &Value) -> Result<Document, FirebaseError> {
    let name = value
      .get("name")
      .and_then(Value::as_str)
      .ok_or_else(|| FirebaseError::Malformed(format!("document without name: {}", value)))?
      .to_string();

    let fields = match value.get("fields") {
      Some(fields) => document::from_fields(fields)?,
      None => Map::new(),
    };

    Ok(Document { name, fields })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_doc_id_is_last_path_segment() {
    let document = Document {
      name: "projects/studio-test/databases/(default)/documents/invoices/abc-123".to_string(),
      fields: Map::new(),
    };
    assert_eq!(document.doc_id(), "abc-123");
  }

  #[test]
  fn test_emulator_host_reroutes_base_url() {
    let config = FirebaseConfig {
      api_key: "k".to_string(),
      auth_domain: "studio-test.firebaseapp.com".to_string(),
      project_id: "studio-test".to_string(),
      storage_bucket: "studio-test.firebasestorage.app".to_string(),
      messaging_sender_id: "1".to_string(),
      app_id: "app".to_string(),
      emulator_host: Some("localhost:8089".to_string()),
    };
    let client = FirestoreClient::new(&config);
    assert!(client.documents_root().starts_with("http://localhost:8089/v1/"));
  }
}
