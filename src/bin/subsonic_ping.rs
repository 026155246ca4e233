//! Connectivity check against a Subsonic server.
//!
//! Reads credentials from the environment, pings the server and prints
//! what it reports about itself.
//!
//! ```sh
//! export SUBSONIC_URL='https://music.example.com'
//! export SUBSONIC_API_KEY='...'   # or SUBSONIC_USER + SUBSONIC_PASS
//! cargo run --bin subsonic-ping
//! ```

use opensubsonic_api::SubsonicApi;
use opensubsonic_auth::SubsonicCredentials;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let creds = SubsonicCredentials::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        eprintln!();
        eprintln!("  Set SUBSONIC_URL and either SUBSONIC_API_KEY");
        eprintln!("  or SUBSONIC_USER and SUBSONIC_PASS.");
        std::process::exit(1);
    });

    let api = SubsonicApi::new(creds.into_config_builder().build()).unwrap_or_else(|e| {
        eprintln!("Error: invalid configuration: {e}");
        std::process::exit(1);
    });

    let pong = api.ping().await.unwrap_or_else(|e| {
        eprintln!("Error: ping failed: {e}");
        std::process::exit(1);
    });

    println!("Connected to {}", api.inner().server_url());
    println!("  protocol version: {}", pong.version);
    if let Some(server_type) = &pong.server_type {
        let version = pong.server_version.as_deref().unwrap_or("unknown");
        println!("  server:           {server_type} {version}");
    }

    if !pong.open_subsonic {
        println!("  OpenSubsonic:     no");
        return;
    }

    match api.get_open_subsonic_extensions().await {
        Ok(extensions) => {
            println!("  OpenSubsonic extensions:");
            for ext in extensions {
                let versions: Vec<String> = ext.versions.iter().map(u32::to_string).collect();
                println!("    {} (v{})", ext.name, versions.join(", v"));
            }
        }
        Err(e) => eprintln!("  Could not list extensions: {e}"),
    }
}
