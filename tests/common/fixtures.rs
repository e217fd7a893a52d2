//! Upstream list fixtures and a mock upstream server

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Two HTTP proxies, newline terminated
pub const HTTP_LIST: &str = "1.2.3.4:8080\n5.6.7.8:3128\n";

/// A single SOCKS4 proxy
pub const SOCKS4_LIST: &str = "9.9.9.9:1080\n";

/// SOCKS5 proxies with a blank line and trailing blank lines
pub const SOCKS5_LIST: &str = "10.0.0.1:1080\n\n10.0.0.2:1080\n10.0.0.3:1080\n\n\n";

/// Default target filenames in processing order
pub const LIST_NAMES: [&str; 3] = ["http.txt", "socks4.txt", "socks5.txt"];

/// Start a mock upstream serving the given `(filename, body)` pairs under `/`
///
/// Paths that are not listed answer 404.
pub async fn start_upstream(lists: &[(&str, &str)]) -> MockServer {
    let server = MockServer::start().await;
    for (name, body) in lists {
        Mock::given(method("GET"))
            .and(path(format!("/{name}")))
            .respond_with(ResponseTemplate::new(200).set_body_string(*body))
            .mount(&server)
            .await;
    }
    server
}

/// Start a mock upstream serving all three default lists
pub async fn start_full_upstream() -> MockServer {
    start_upstream(&[
        ("http.txt", HTTP_LIST),
        ("socks4.txt", SOCKS4_LIST),
        ("socks5.txt", SOCKS5_LIST),
    ])
    .await
}
