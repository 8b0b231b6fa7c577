use httpmock::prelude::*;
use serde_json::json;

use glambill::infrastructure::firebase::{
  FirebaseStorageClient, FirestoreClient, OrderDirection,
};

fn client(server: &MockServer) -> FirestoreClient {
  FirestoreClient::with_base_url(
    server.base_url(),
    "studio-test".to_string(),
    "test-key".to_string(),
  )
}

#[tokio::test]
async fn test_create_document_sends_typed_fields_and_key() {
  let server = MockServer::start();

  let mock = server.mock(|when, then| {
    when
      .method(POST)
      .path("/projects/studio-test/databases/(default)/documents/invoices")
      .query_param("documentId", "doc-1")
      .query_param("key", "test-key")
      .json_body_partial(
        r#"{ "fields": { "client_name": { "stringValue": "Sinta" }, "total": { "integerValue": "1000000" } } }"#,
      );
    then.status(200).json_body(json!({
      "name": "projects/studio-test/databases/(default)/documents/invoices/doc-1",
      "fields": {
        "client_name": { "stringValue": "Sinta" },
        "total": { "integerValue": "1000000" },
      },
    }));
  });

  let fields = json!({ "client_name": "Sinta", "total": 1_000_000 });
  let document = client(&server)
    .create_document("invoices", "doc-1", fields.as_object().unwrap())
    .await
    .unwrap();

  mock.assert();
  assert_eq!(document.doc_id(), "doc-1");
  assert_eq!(document.fields["client_name"], json!("Sinta"));
  assert_eq!(document.fields["total"], json!(1_000_000));
}

#[tokio::test]
async fn test_get_document_maps_missing_to_none() {
  let server = MockServer::start();

  server.mock(|when, then| {
    when
      .method(GET)
      .path("/projects/studio-test/databases/(default)/documents/invoices/gone");
    then.status(404).json_body(json!({
      "error": { "code": 404, "status": "NOT_FOUND" }
    }));
  });

  let document = client(&server)
    .get_document("invoices", "gone")
    .await
    .unwrap();
  assert!(document.is_none());
}

#[tokio::test]
async fn test_run_query_orders_and_skips_metadata_entries() {
  let server = MockServer::start();

  let mock = server.mock(|when, then| {
    when
      .method(POST)
      .path("/projects/studio-test/databases/(default)/documents:runQuery")
      .json_body_partial(
        r#"{
          "structuredQuery": {
            "from": [{ "collectionId": "bookings" }],
            "orderBy": [{ "field": { "fieldPath": "event_date" }, "direction": "ASCENDING" }]
          }
        }"#,
      );
    then.status(200).json_body(json!([
      {
        "document": {
          "name": "projects/studio-test/databases/(default)/documents/bookings/b-1",
          "fields": { "event_date": { "stringValue": "2024-04-20" } },
        },
        "readTime": "2024-03-05T00:00:00Z",
      },
      {
        "document": {
          "name": "projects/studio-test/databases/(default)/documents/bookings/b-2",
          "fields": { "event_date": { "stringValue": "2024-05-11" } },
        },
      },
      // A trailing entry with only read metadata and no document.
      { "readTime": "2024-03-05T00:00:00Z" },
    ]));
  });

  let documents = client(&server)
    .run_query("bookings", "event_date", OrderDirection::Ascending)
    .await
    .unwrap();

  mock.assert();
  assert_eq!(documents.len(), 2);
  assert_eq!(documents[0].doc_id(), "b-1");
  assert_eq!(documents[1].fields["event_date"], json!("2024-05-11"));
}

#[tokio::test]
async fn test_backend_failure_propagates_with_body() {
  let server = MockServer::start();

  server.mock(|when, then| {
    when
      .method(DELETE)
      .path("/projects/studio-test/databases/(default)/documents/invoices/doc-1");
    then.status(403).body("permission denied by rules");
  });

  let error = client(&server)
    .delete_document("invoices", "doc-1")
    .await
    .unwrap_err();
  assert!(error.to_string().contains("403"));
  assert!(error.to_string().contains("permission denied by rules"));
}

#[tokio::test]
async fn test_storage_upload_resolves_token_url() {
  let server = MockServer::start();

  let mock = server.mock(|when, then| {
    when
      .method(POST)
      .path("/b/studio-test.firebasestorage.app/o")
      .query_param("uploadType", "media")
      .query_param("name", "receipts/inv-1/bukti.jpg")
      .header("content-type", "image/jpeg");
    then.status(200).json_body(json!({
      "name": "receipts/inv-1/bukti.jpg",
      "bucket": "studio-test.firebasestorage.app",
      "downloadTokens": "tok-123",
    }));
  });

  let storage = FirebaseStorageClient::with_base_url(
    server.base_url(),
    "studio-test.firebasestorage.app".to_string(),
  );

  let object = storage
    .upload("receipts/inv-1/bukti.jpg", vec![0xFF, 0xD8], "image/jpeg")
    .await
    .unwrap();

  mock.assert();
  assert_eq!(object.object_path, "receipts/inv-1/bukti.jpg");
  assert!(
    object
      .download_url
      .contains("/o/receipts%2Finv-1%2Fbukti.jpg?alt=media&token=tok-123")
  );
}

#[tokio::test]
async fn test_storage_delete_tolerates_missing_object() {
  let server = MockServer::start();

  server.mock(|when, then| {
    when
      .method(DELETE)
      .path_contains("/b/studio-test.firebasestorage.app/o/");
    then.status(404);
  });

  let storage = FirebaseStorageClient::with_base_url(
    server.base_url(),
    "studio-test.firebasestorage.app".to_string(),
  );

  assert!(storage.delete("receipts/gone.jpg").await.is_ok());
}
