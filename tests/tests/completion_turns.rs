//! Per-turn completion failure semantics against a local canned-response
//! HTTP server: a failed turn surfaces an error and the next turn still
//! succeeds.

use infrastructure::completion_client::CompletionClient;
use shared::error::ChatError;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

const OK_BODY: &str =
    r#"{"choices":[{"message":{"role":"assistant","content":"Step 1: open the app."}}]}"#;

fn headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

async fn respond(mut stream: TcpStream, status_line: &str, body: &str) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = headers_end(&buf) {
            let headers = String::from_utf8_lossy(&buf[..pos]);
            let content_length = headers
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() - (pos + 4) >= content_length {
                break;
            }
        }
    }
    let response = format!(
        "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    );
    stream.write_all(response.as_bytes()).await.unwrap();
    stream.shutdown().await.ok();
}

fn client_for(addr: std::net::SocketAddr) -> CompletionClient {
    CompletionClient::new(
        &format!("http://{addr}"),
        "test-key",
        "test-model",
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn server_error_fails_the_turn_and_the_next_turn_succeeds() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        respond(stream, "500 Internal Server Error", r#"{"error":"boom"}"#).await;
        let (stream, _) = listener.accept().await.unwrap();
        respond(stream, "200 OK", OK_BODY).await;
    });

    let client = client_for(addr);
    let err = client.complete("system", "user").await.unwrap_err();
    assert!(matches!(err, ChatError::CompletionRequest(_)));

    let reply = client.complete("system", "user").await.unwrap();
    assert_eq!(reply, "Step 1: open the app.");
    server.await.unwrap();
}

#[tokio::test]
async fn unparseable_success_body_is_a_completion_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        respond(stream, "200 OK", "<html>upstream hiccup</html>").await;
    });

    let client = client_for(addr);
    let err = client.complete("system", "user").await.unwrap_err();
    assert!(matches!(err, ChatError::CompletionRequest(_)));
    server.await.unwrap();
}

#[tokio::test]
async fn unreachable_endpoint_is_a_completion_error() {
    // Bind then drop so the port is very likely closed.
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let client = client_for(addr);
    let err = client.complete("system", "user").await.unwrap_err();
    assert!(matches!(err, ChatError::CompletionRequest(_)));
}
