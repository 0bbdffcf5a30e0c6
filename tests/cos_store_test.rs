use cos_upload_provider::{init, FileDescriptor, ProviderConfig, Region};
use httpmock::prelude::*;

const BUCKET: &str = "media-1250000000";

fn config_for(server: &MockServer) -> ProviderConfig {
    ProviderConfig::new("AKIDexample", "secretkey", Region::ApGuangzhou, BUCKET)
        .with_endpoint_override(server.base_url(), true)
}

#[tokio::test]
async fn test_put_object_against_mock_cos() {
    let server = MockServer::start_async().await;
    let put_mock = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path(format!("/{}/uploads/abc123.txt", BUCKET))
                .body("hello cos");
            then.status(200).header("ETag", "\"5d41402abc4b2a76b9719d911017c592\"");
        })
        .await;

    let provider = init(config_for(&server)).unwrap();
    let mut file = FileDescriptor::new(b"hello cos".to_vec(), "abc123", ".txt")
        .with_path("uploads")
        .with_mime("text/plain");

    provider.upload_in_place(&mut file).await.unwrap();

    put_mock.assert_async().await;
    let expected = format!(
        "https://{}:{}/{}/uploads/abc123.txt",
        server.host(),
        server.port(),
        BUCKET
    );
    let metadata = file.provider_metadata.unwrap();
    assert_eq!(metadata.url_origin, expected);
    assert_eq!(metadata.width, None);
    assert_eq!(file.url, Some(expected));
}

#[tokio::test]
async fn test_put_object_with_cdn() {
    let server = MockServer::start_async().await;
    let put_mock = server
        .mock_async(|when, then| {
            when.method(PUT).path(format!("/{}/logo.svg", BUCKET));
            then.status(200);
        })
        .await;

    let provider = init(config_for(&server).with_cdn("cdn.example.com")).unwrap();
    let file = FileDescriptor::new(b"<svg/>".to_vec(), "logo", ".svg");

    let result = provider.upload(&file).await.unwrap();

    put_mock.assert_async().await;
    assert_eq!(result.url, "https://cdn.example.com/logo.svg");
}

#[tokio::test]
async fn test_put_object_error_is_not_retried() {
    let server = MockServer::start_async().await;
    let put_mock = server
        .mock_async(|when, then| {
            when.method(PUT).path(format!("/{}/abc.png", BUCKET));
            then.status(403)
                .header("Content-Type", "application/xml")
                .body(
                    "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
                     <Error><Code>AccessDenied</Code><Message>Access Denied.</Message>\
                     <RequestId>NjQ1</RequestId></Error>",
                );
        })
        .await;

    let provider = init(config_for(&server)).unwrap();
    let mut file = FileDescriptor::new(b"not really a png".to_vec(), "abc", ".png");

    let err = provider.upload_in_place(&mut file).await.unwrap_err();

    assert!(err.is_store_error());
    assert!(format!("{:?}", err).contains("AccessDenied"));
    assert_eq!(put_mock.hits_async().await, 1);
    assert!(file.provider_metadata.is_none());
    assert!(file.url.is_none());
}

#[tokio::test]
async fn test_delete_object_against_mock_cos() {
    let server = MockServer::start_async().await;
    let delete_mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path(format!("/{}/gallery/ff00.jpg", BUCKET));
            then.status(204);
        })
        .await;

    let provider = init(config_for(&server)).unwrap();
    let file = FileDescriptor::new(Vec::<u8>::new(), "ff00", ".jpg").with_path("gallery");

    provider.delete(&file).await.unwrap();

    delete_mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_object_error_propagates() {
    let server = MockServer::start_async().await;
    let delete_mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path(format!("/{}/gone.jpg", BUCKET));
            then.status(500)
                .header("Content-Type", "application/xml")
                .body("<Error><Code>InternalError</Code><Message>boom</Message></Error>");
        })
        .await;

    let provider = init(config_for(&server)).unwrap();
    let file = FileDescriptor::new(Vec::<u8>::new(), "gone", ".jpg");

    let err = provider.delete(&file).await.unwrap_err();

    assert!(err.is_store_error());
    assert_eq!(delete_mock.hits_async().await, 1);
}

#[test]
fn test_init_performs_no_io() {
    // 指向不存在的位址也能建立 provider
    let config = ProviderConfig::new("id", "key", Region::NaToronto, "b-1250000000")
        .with_endpoint_override("http://127.0.0.1:1", true);
    assert!(init(config).is_ok());
}
