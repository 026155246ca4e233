//! Typed endpoints end to end.

use super::common::*;
use opensubsonic::api::ErrorKind;
use opensubsonic::client::ServerErrorCode;
use opensubsonic::{AlbumListArgs, AlbumListType, StarTarget, SubsonicApi};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount(server: &MockServer, name: &str, payload: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/rest/{}.view", name)))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(payload)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_browse_newest_album() {
    let server = MockServer::start().await;
    mount(&server, "ping", serde_json::json!({})).await;
    mount(
        &server,
        "getAlbumList2",
        serde_json::json!({"albumList2": {"album": [
            {"id": "al-7", "name": "Discovery", "artist": "Daft Punk", "songCount": 2, "duration": 600}
        ]}}),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/rest/getAlbum.view"))
        .and(query_param("id", "al-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(serde_json::json!({
            "album": {
                "id": "al-7",
                "name": "Discovery",
                "songCount": 2,
                "duration": 600,
                "song": [
                    {"id": "tr-1", "title": "One More Time", "isDir": false, "track": 1},
                    {"id": "tr-2", "title": "Aerodynamic", "isDir": false, "track": 2}
                ]
            }
        }))))
        .mount(&server)
        .await;

    let api = SubsonicApi::connect(password_config(&server).build()).await.unwrap();

    let newest = api
        .get_album_list2(AlbumListArgs::new(AlbumListType::Newest).with_page(1, 0))
        .await
        .unwrap();
    let album = api.get_album(&newest[0].id).await.unwrap();

    assert_eq!(album.album.name, "Discovery");
    let titles: Vec<&str> = album.song.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["One More Time", "Aerodynamic"]);
}

#[tokio::test]
async fn test_star_sends_repeated_ids() {
    let server = MockServer::start().await;
    mount(&server, "star", serde_json::json!({})).await;

    let api = SubsonicApi::new(api_key_config(&server, "k").build()).unwrap();
    api.star(StarTarget {
        ids: vec!["tr-1".into(), "tr-2".into()],
        album_ids: vec!["al-1".into()],
        artist_ids: Vec::new(),
    })
    .await
    .unwrap();

    let pairs = query_pairs(&server, 0).await;
    assert_eq!(keys(&pairs), vec!["v", "c", "f", "id", "id", "albumId", "apiKey"]);
}

#[tokio::test]
async fn test_cover_art_bytes() {
    let server = MockServer::start().await;
    let png = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
    Mock::given(method("GET"))
        .and(path("/rest/getCoverArt.view"))
        .and(query_param("id", "al-7"))
        .and(query_param("size", "300"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/png")
                .set_body_bytes(png.clone()),
        )
        .mount(&server)
        .await;

    let api = SubsonicApi::new(password_config(&server).build()).unwrap();
    let response = api.get_cover_art("al-7", Some(300)).await.unwrap();

    assert!(response.is_success());
    assert_eq!(response.bytes().to_vec(), png);
}

#[tokio::test]
async fn test_protocol_error_classification() {
    let server = MockServer::start().await;
    Mock::given(path("/rest/getSong.view"))
        .respond_with(ResponseTemplate::new(200).set_body_json(failed_envelope(70, "Song not found")))
        .mount(&server)
        .await;

    let api = SubsonicApi::new(password_config(&server).build()).unwrap();
    let err = api.get_song("tr-404").await.unwrap_err();

    assert!(err.is_protocol_error());
    assert!(!err.is_transport_error());
    assert!(!err.is_auth_error());
    assert_eq!(err.protocol_code(), Some(ServerErrorCode::NotFound));
    assert!(err.to_string().contains("Song not found"));
}

#[tokio::test]
async fn test_api_key_rejected() {
    let server = MockServer::start().await;
    Mock::given(path("/rest/ping.view"))
        .respond_with(ResponseTemplate::new(200).set_body_json(failed_envelope(44, "Invalid API key")))
        .mount(&server)
        .await;

    let err = SubsonicApi::connect(api_key_config(&server, "stale").build())
        .await
        .unwrap_err();
    assert!(err.is_auth_error());
    assert!(!err.to_string().contains("stale"));
}

#[tokio::test]
async fn test_http_error_without_envelope() {
    let server = MockServer::start().await;
    Mock::given(path("/rest/getGenres.view"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let api = SubsonicApi::new(password_config(&server).build()).unwrap();
    let err = api.get_genres().await.unwrap_err();

    assert!(err.is_transport_error());
    assert!(matches!(err.kind, ErrorKind::Client(_)));
}

#[tokio::test]
async fn test_connection_refused() {
    // Nothing listens on port 1
    let api = SubsonicApi::new(
        opensubsonic::ClientConfig::builder()
            .with_url("http://127.0.0.1:1")
            .with_api_key("k")
            .build(),
    )
    .unwrap();
    let err = api.ping().await.unwrap_err();
    assert!(err.is_transport_error());
}
