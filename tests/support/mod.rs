// One payment server per test binary, shared by every test in it.
use std::{
    // `Arc` lets the server thread publish into a slot the test thread reads.
    sync::{Arc, OnceLock},
    // Readiness polling sleeps between probes.
    time::Duration,
};

use serde_json::{json, Value};

// Base URL of the shared payment server once it has bound its port.
static SERVER_URL: OnceLock<String> = OnceLock::new();
// Guard so only the first caller starts a server.
static SERVER_READY: OnceLock<()> = OnceLock::new();

// Ensure the test server is running and return the shared base URL.
pub fn ensure_server() -> &'static str {
    SERVER_READY.get_or_init(|| {
        // Slot the server thread fills with its bound URL.
        let published_url = Arc::new(OnceLock::<String>::new());
        let published_url_thread = Arc::clone(&published_url);
        // The server runs on its own OS thread so it outlives each `#[tokio::test]` runtime.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            // Dedicated runtime: the in-memory stores live as long as this thread.
            runtime.block_on(async move {
                // Ephemeral port avoids collisions with a locally running server.
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral test port");
                let addr = listener.local_addr().expect("get local addr");
                let _ = published_url_thread.set(format!("http://{}", addr));
                // Same router and stores as production, minus tracing setup.
                payment_server::run(listener).await.expect("server failed");
            });
        });
        // Block until the socket accepts, so the first request never races bind.
        wait_for_server_url_and_readiness(published_url);
    });

    SERVER_URL
        .get()
        .expect("server url should be initialized")
        .as_str()
}

// Wait for the URL to be published, then for the port to accept TCP connections.
fn wait_for_server_url_and_readiness(published_url: Arc<OnceLock<String>>) {
    let base_url = loop {
        if let Some(url) = published_url.get() {
            break url.clone();
        }
        std::thread::sleep(Duration::from_millis(10));
    };

    let _ = SERVER_URL.set(base_url.clone());

    // Raw TCP probe needs host:port without the scheme.
    let addr = base_url
        .strip_prefix("http://")
        .expect("base url should use http://");

    // Roughly two seconds before giving up.
    for _ in 0..100 {
        if std::net::TcpStream::connect(addr).is_ok() {
            return;
        }
        std::thread::sleep(Duration::from_millis(20));
    }

    panic!("server did not become ready in time");
}

// Log in as `username` and return the issued bearer token.
pub async fn login(client: &reqwest::Client, base_url: &str, username: &str) -> String {
    let res = client
        .post(format!("{base_url}/login"))
        .json(&json!({ "username": username }))
        .send()
        .await
        .expect("login request should succeed");
    assert_eq!(res.status(), reqwest::StatusCode::OK);

    let body: Value = res.json().await.expect("login body should be json");
    body["token"]
        .as_str()
        .expect("login should return a token")
        .to_string()
}

// POST `body` to a protected route with the given bearer token.
pub async fn post_authed(
    client: &reqwest::Client,
    base_url: &str,
    path: &str,
    token: &str,
    body: Value,
) -> reqwest::Response {
    client
        .post(format!("{base_url}{path}"))
        .bearer_auth(token)
        .json(&body)
        .send()
        .await
        .expect("request should succeed")
}
