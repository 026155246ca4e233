//! Credentials and vendor session login end to end.

use super::common::*;
use opensubsonic::auth::NAVIDROME_AUTH_HEADER;
use opensubsonic::client::HttpRequest;
use opensubsonic::{AuthMode, NavidromeAuth, SubsonicApi, SubsonicClient, SubsonicCredentials};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_credentials_into_client() {
    let server = MockServer::start().await;
    Mock::given(path("/rest/ping.view"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(serde_json::json!({}))))
        .expect(1)
        .mount(&server)
        .await;

    let creds = SubsonicCredentials::new_api_key(server.uri(), "k-42");
    let api = SubsonicApi::connect(creds.into_config_builder().build())
        .await
        .unwrap();

    assert!(matches!(api.inner().auth_mode(), AuthMode::ApiKey { .. }));
    let pairs = query_pairs(&server, 0).await;
    assert_eq!(param(&pairs, "apiKey"), Some("k-42"));
}

#[tokio::test]
async fn test_navidrome_session_authorizes_native_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(serde_json::json!({"username": USERNAME, "password": PASSWORD})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "u-1",
            "isAdmin": false,
            "name": "Demo",
            "username": USERNAME,
            "token": "session-token"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/song"))
        .and(header(NAVIDROME_AUTH_HEADER, "Bearer session-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let creds = SubsonicCredentials::new_password(server.uri(), USERNAME, PASSWORD);
    let client = SubsonicClient::new(creds.clone().into_config_builder().build()).unwrap();

    let session = NavidromeAuth::from_client(&client)
        .login_with(&creds)
        .await
        .unwrap();
    assert!(!session.is_admin);

    let request = session.authorize(HttpRequest::get(format!("{}/api/song", server.uri())));
    let response = client.transport().send(request).await.unwrap();
    assert!(response.is_success());
}

#[tokio::test]
async fn test_navidrome_login_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let creds = SubsonicCredentials::new_password(server.uri(), USERNAME, "wrong");
    let client = SubsonicClient::new(creds.clone().into_config_builder().build()).unwrap();

    let err = NavidromeAuth::from_client(&client)
        .login_with(&creds)
        .await
        .unwrap_err();
    assert!(err.is_auth_error());
}
