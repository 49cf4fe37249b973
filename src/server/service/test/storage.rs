use super::*;
use crate::server::{
    error::storage::StorageError,
    model::storage::Bucket,
    service::storage::MAX_UPLOAD_BYTES,
};
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, ResponseTemplate,
};

/// Tests startup verification against a healthy store.
///
/// Expected: Ok when the key is accepted and both buckets exist
#[tokio::test]
async fn verify_succeeds_with_both_buckets() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/"))
        .and(header("apikey", "service-key"))
        .and(header("authorization", "Bearer service-key"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/storage/v1/bucket"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "id": "images", "name": "images", "public": true },
            { "id": "markdown", "name": "markdown", "public": true }
        ])))
        .mount(&server)
        .await;

    let storage = mock_storage(&server);

    assert!(storage.verify().await.is_ok());
}

/// Tests that a rejected service key fails verification.
///
/// Expected: Err(InvalidServiceKey) carrying the status
#[tokio::test]
async fn verify_fails_with_rejected_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid key"))
        .mount(&server)
        .await;

    let storage = mock_storage(&server);
    let result = storage.verify().await;

    assert!(matches!(
        result,
        Err(StorageError::InvalidServiceKey { status: 401, .. })
    ));
}

/// Tests that a missing bucket fails verification.
///
/// Expected: Err(MissingBucket("markdown"))
#[tokio::test]
async fn verify_fails_with_missing_bucket() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/storage/v1/bucket"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([{ "id": "images", "name": "images" }])),
        )
        .mount(&server)
        .await;

    let storage = mock_storage(&server);
    let result = storage.verify().await;

    assert!(matches!(result, Err(StorageError::MissingBucket(name)) if name == "markdown"));
}

/// Tests uploading an image.
///
/// Verifies the object is posted to the bucket chosen from the extension under its base
/// name, and the public URL is derived from endpoint, bucket and name.
///
/// Expected: Ok with the public URL
#[tokio::test]
async fn upload_posts_to_classified_bucket() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/storage/v1/object/images/cat.png"))
        .and(header("apikey", "service-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Key": "images/cat.png"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let storage = mock_storage(&server);
    let uploaded = storage
        .upload(b"png bytes".to_vec(), "nested/dir/cat.png")
        .await
        .unwrap();

    assert_eq!(uploaded.bucket, Bucket::Images);
    assert_eq!(uploaded.filename, "cat.png");
    assert_eq!(
        uploaded.url,
        format!("{}/storage/v1/object/public/images/cat.png", server.uri())
    );
}

/// Tests that a leading bucket segment and an unknown extension are both honoured.
///
/// Expected: markdown segment routes to markdown; `.zip` falls back to images
#[tokio::test]
async fn upload_uses_segment_then_falls_back_to_images() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/storage/v1/object/markdown/cover.png"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/storage/v1/object/images/archive.zip"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let storage = mock_storage(&server);

    let markdown = storage
        .upload(b"x".to_vec(), "markdown/cover.png")
        .await
        .unwrap();
    let fallback = storage.upload(b"x".to_vec(), "archive.zip").await.unwrap();

    assert_eq!(markdown.bucket, Bucket::Markdown);
    assert_eq!(fallback.bucket, Bucket::Images);
}

/// Tests that an oversized payload never reaches the store.
///
/// Expected: Err(FileTooLarge) and zero requests received
#[tokio::test]
async fn upload_rejects_oversized_file_before_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let storage = mock_storage(&server);
    let result = storage
        .upload(vec![0u8; MAX_UPLOAD_BYTES + 1], "big.png")
        .await;

    assert!(matches!(result, Err(StorageError::FileTooLarge { .. })));
}

/// Tests that a payload of exactly the limit is accepted.
///
/// Expected: Ok
#[tokio::test]
async fn upload_accepts_file_at_limit() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/storage/v1/object/images/edge.png"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let storage = mock_storage(&server);

    assert!(storage
        .upload(vec![0u8; MAX_UPLOAD_BYTES], "edge.png")
        .await
        .is_ok());
}

/// Tests that a store-side refusal surfaces as an error.
///
/// Expected: Err(UnexpectedStatus { status: 500 })
#[tokio::test]
async fn upload_surfaces_store_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let storage = mock_storage(&server);
    let result = storage.upload(b"x".to_vec(), "cat.png").await;

    assert!(matches!(
        result,
        Err(StorageError::UnexpectedStatus { status: 500, .. })
    ));
}

/// Tests deleting an object.
///
/// Expected: DELETE sent to the bucket with the object name as a prefix
#[tokio::test]
async fn delete_sends_prefixes() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/storage/v1/object/markdown"))
        .and(body_json(serde_json::json!({ "prefixes": ["post.md"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let storage = mock_storage(&server);

    assert!(storage.delete("markdown", "post.md").await.is_ok());
}

/// Tests deleting from a bucket that is not recognized.
///
/// Expected: Err(InvalidBucket) without any request
#[tokio::test]
async fn delete_rejects_unknown_bucket() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let storage = mock_storage(&server);
    let result = storage.delete("videos", "clip.mp4").await;

    assert!(matches!(result, Err(StorageError::InvalidBucket(name)) if name == "videos"));
}
