use opensubsonic::client::ClientConfigBuilder;
use opensubsonic::{ClientConfig, SubsonicCredentials};
use wiremock::MockServer;

pub const USERNAME: &str = "demo";
pub const PASSWORD: &str = "demo";

/// Query pairs of the n-th request the server received.
pub async fn query_pairs(server: &MockServer, n: usize) -> Vec<(String, String)> {
    let requests = server.received_requests().await.unwrap_or_default();
    requests[n]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// Value of one parameter in a list of pairs.
pub fn param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

pub fn keys(pairs: &[(String, String)]) -> Vec<&str> {
    pairs.iter().map(|(k, _)| k.as_str()).collect()
}

/// Password config for a mock server, with a fresh salt per request.
pub fn password_config(server: &MockServer) -> ClientConfigBuilder {
    ClientConfig::builder()
        .with_url(server.uri())
        .with_password(USERNAME, PASSWORD)
}

pub fn api_key_config(server: &MockServer, key: &str) -> ClientConfigBuilder {
    ClientConfig::builder().with_url(server.uri()).with_api_key(key)
}

/// Envelope with `status: ok` and the given payload fields.
pub fn ok_envelope(payload: serde_json::Value) -> serde_json::Value {
    let mut body = serde_json::json!({
        "status": "ok",
        "version": "1.16.1",
        "type": "navidrome",
        "serverVersion": "0.53.0",
        "openSubsonic": true
    });
    if let (Some(body), Some(payload)) = (body.as_object_mut(), payload.as_object()) {
        body.extend(payload.clone());
    }
    serde_json::json!({ "subsonic-response": body })
}

pub fn failed_envelope(code: u32, message: &str) -> serde_json::Value {
    serde_json::json!({
        "subsonic-response": {
            "status": "failed",
            "version": "1.16.1",
            "error": {"code": code, "message": message}
        }
    })
}

/// Credentials of a real server, if the environment names one.
pub fn live_credentials() -> Option<SubsonicCredentials> {
    match SubsonicCredentials::from_env() {
        Ok(creds) => Some(creds),
        Err(e) => {
            eprintln!("Skipping live test: {e}");
            None
        }
    }
}
