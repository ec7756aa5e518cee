//! The typed API client against a live server on a loopback port

mod common;

use reqwest::StatusCode;
use tokio::net::TcpListener;
use tokio::sync::watch;
use url::Url;

use ::common::crypto::SecretKey;
use epochlock_daemon::http_server::api::client::{ApiClient, ApiError};
use epochlock_daemon::http_server::api::keys::{
    DecryptionKeyRequest, EonKeyRequest, EpochPublicKeyRequest, ErrorBody,
};
use epochlock_daemon::http_server::serve_api;

#[tokio::test]
async fn test_client_round_trip() {
    let (state, time) = common::setup_state();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (shutdown_tx, shutdown_rx) = watch::channel(());

    let server = tokio::spawn(serve_api(listener, common::http_config(), state, shutdown_rx));

    let remote = Url::parse(&format!("http://{}", addr)).unwrap();
    let client = ApiClient::new(&remote).unwrap();

    let info = client.call(EonKeyRequest).await.unwrap();
    assert_eq!(info.epoch_duration, common::EPOCH_DURATION);

    let target = info.current_epoch;
    let published = client
        .call(EpochPublicKeyRequest { epoch: target })
        .await
        .unwrap();
    assert_eq!(published.epoch, target);

    let request = DecryptionKeyRequest {
        epoch: target,
        ephemeral_public_key: SecretKey::generate().unwrap().public().to_hex(),
    };
    match client.call(request.clone()).await {
        Err(ApiError::HttpStatus(status, body)) => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            let body: ErrorBody = serde_json::from_str(&body).unwrap();
            assert_eq!(body.seconds_until_available, Some(10));
        }
        other => panic!("expected locked epoch, got {:?}", other),
    }

    time.advance_secs(10);
    let released = client.call(request).await.unwrap();
    let secret = SecretKey::from_hex(&released.epoch_private_key).unwrap();
    assert_eq!(secret.public(), published.epoch_public_key);

    assert_eq!(
        client.probe("/_status/livez").await.unwrap(),
        StatusCode::OK
    );

    shutdown_tx.send(()).unwrap();
    server.await.unwrap().unwrap();
}
