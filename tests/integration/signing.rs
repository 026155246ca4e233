//! Request signing as seen by the server.

use super::common::*;
use opensubsonic::client::salt::derive_token;
use opensubsonic::{Params, SubsonicClient};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_ping(server: &MockServer) {
    Mock::given(path("/rest/ping.view"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(serde_json::json!({}))))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_password_request_is_signed() {
    let server = MockServer::start().await;
    mount_ping(&server).await;

    let client = SubsonicClient::new(password_config(&server).build()).unwrap();
    let _: serde_json::Value = client.request_json("ping", Params::new()).await.unwrap();

    let pairs = query_pairs(&server, 0).await;
    assert_eq!(keys(&pairs), vec!["v", "c", "f", "u", "t", "s"]);
    assert_eq!(param(&pairs, "f"), Some("json"));
    assert_eq!(param(&pairs, "u"), Some(USERNAME));

    let salt = param(&pairs, "s").unwrap();
    assert_eq!(salt.len(), 22);
    assert!(salt
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '~' || c == '_'));
    assert_eq!(param(&pairs, "t"), Some(derive_token(PASSWORD, salt).as_str()));

    assert!(param(&pairs, "p").is_none());
}

#[tokio::test]
async fn test_fresh_salt_per_request() {
    let server = MockServer::start().await;
    mount_ping(&server).await;

    let client = SubsonicClient::new(password_config(&server).build()).unwrap();
    for _ in 0..3 {
        let _: serde_json::Value = client.request_json("ping", Params::new()).await.unwrap();
    }

    let mut salts = Vec::new();
    for n in 0..3 {
        let pairs = query_pairs(&server, n).await;
        salts.push(param(&pairs, "s").unwrap().to_string());
    }
    salts.sort();
    salts.dedup();
    assert_eq!(salts.len(), 3);
}

#[tokio::test]
async fn test_reused_salt() {
    let server = MockServer::start().await;
    mount_ping(&server).await;

    let client = SubsonicClient::new(password_config(&server).with_reuse_salt(true).build()).unwrap();
    let _: serde_json::Value = client.request_json("ping", Params::new()).await.unwrap();
    let _: serde_json::Value = client.request_json("ping", Params::new()).await.unwrap();

    let first = query_pairs(&server, 0).await;
    let second = query_pairs(&server, 1).await;
    assert_eq!(param(&first, "s"), param(&second, "s"));
    assert_eq!(param(&first, "t"), param(&second, "t"));
}

#[tokio::test]
async fn test_api_key_request() {
    let server = MockServer::start().await;
    mount_ping(&server).await;

    let client = SubsonicClient::new(api_key_config(&server, "k-123").build()).unwrap();
    let _: serde_json::Value = client.request_json("ping", Params::new()).await.unwrap();

    let pairs = query_pairs(&server, 0).await;
    assert_eq!(keys(&pairs), vec!["v", "c", "f", "apiKey"]);
    assert_eq!(param(&pairs, "apiKey"), Some("k-123"));
}

#[tokio::test]
async fn test_form_post() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/createPlaylist.view"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(serde_json::json!({}))))
        .expect(1)
        .mount(&server)
        .await;

    let client = SubsonicClient::new(
        password_config(&server)
            .with_salt("c19b2d")
            .with_post(true)
            .build(),
    )
    .unwrap();

    let params = Params::new()
        .with("name", "Mix")
        .with("songId", vec!["1", "2", "3"]);
    let _: serde_json::Value = client
        .request_json("createPlaylist", params)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].url.query().is_none());
    let body = String::from_utf8(requests[0].body.clone()).unwrap();
    assert!(body.starts_with("v=1.16.1&c=opensubsonic-rs&f=json&name=Mix"));
    assert!(body.contains("songId=1&songId=2&songId=3"));
    assert!(body.ends_with("u=demo&t=4aa44610e7c8b09fa33569f2182aa7a9&s=c19b2d"));
}

#[tokio::test]
async fn test_reserved_caller_keys_are_ignored() {
    let server = MockServer::start().await;
    mount_ping(&server).await;

    let client = SubsonicClient::new(password_config(&server).build()).unwrap();
    let params = Params::new().with("u", "mallory").with("f", "xml");
    let _: serde_json::Value = client.request_json("ping", params).await.unwrap();

    let pairs = query_pairs(&server, 0).await;
    assert_eq!(param(&pairs, "u"), Some(USERNAME));
    assert_eq!(param(&pairs, "f"), Some("json"));
    assert_eq!(pairs.iter().filter(|(k, _)| k == "u").count(), 1);
}

#[tokio::test]
async fn test_base_url_with_subpath() {
    let server = MockServer::start().await;
    Mock::given(path("/music/rest/ping.view"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(serde_json::json!({}))))
        .expect(1)
        .mount(&server)
        .await;

    let client = SubsonicClient::new(
        opensubsonic::ClientConfig::builder()
            .with_url(format!("{}/music", server.uri()))
            .with_api_key("k")
            .build(),
    )
    .unwrap();
    let _: serde_json::Value = client.request_json("ping", Params::new()).await.unwrap();
}
