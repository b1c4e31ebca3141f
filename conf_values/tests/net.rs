//! Endpoint splitting and HTTP fetch behaviour.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use conf_values::{ValuesError, host_port, http_get_bytes};
use rstest::rstest;

#[rstest]
#[case("host:8080", "host", 8080)]
#[case("hostOnly", "hostOnly", 80)]
#[case("host:badPort", "host", 80)]
fn splits_endpoints(#[case] endpoint: &str, #[case] host: &str, #[case] port: u16) {
    assert_eq!(host_port(endpoint), (host.to_owned(), port));
}

/// Serve a single canned HTTP response and return the URL to fetch it from.
fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut request = [0_u8; 1024];
            let _ = stream.read(&mut request);
            let response = format!(
                "{status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });
    format!("http://{addr}/")
}

#[test]
fn success_returns_body_bytes() {
    let url = serve_once("HTTP/1.1 200 OK", "ok");
    let body = http_get_bytes(&url).expect("fetch succeeds");
    assert_eq!(body.as_slice(), b"ok");
}

#[test]
fn error_status_is_reported() {
    let url = serve_once("HTTP/1.1 400 Bad Request", "");
    let err = http_get_bytes(&url).expect_err("must fail");
    assert!(matches!(err, ValuesError::HttpStatus { .. }));
}

#[test]
fn connection_failure_is_reported() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let err = http_get_bytes(&format!("http://{addr}/")).expect_err("must fail");
    assert!(matches!(err, ValuesError::HttpTransport(_)));
}
