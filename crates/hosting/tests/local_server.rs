//! Drives `GitHubClient` against a one-shot HTTP server on localhost.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread;

use chalkline_hosting::{CreateOutcome, CreateRepo, GitHubClient, HostingError, RepoHost};

struct Captured {
    request_line: String,
    headers: Vec<String>,
    body: String,
}

/// Serves exactly one request with the given status line and body, and
/// returns what the client sent.
fn serve_once(
    status_line: &'static str,
    response_body: &'static str,
) -> (String, thread::JoinHandle<Captured>) {
    serve_declaring(status_line, response_body, response_body.len())
}

/// Like `serve_once`, but announces `content_length` bytes and closes the
/// connection after writing `response_body`.
fn serve_declaring(
    status_line: &'static str,
    response_body: &'static str,
    content_length: usize,
) -> (String, thread::JoinHandle<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let base = format!("http://{}", listener.local_addr().unwrap());
    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().expect("accept");
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        let mut headers = Vec::new();
        let mut request_length = 0;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            let line = line.trim_end().to_string();
            if line.is_empty() {
                break;
            }
            if let Some(v) = line.to_ascii_lowercase().strip_prefix("content-length:") {
                request_length = v.trim().parse().unwrap();
            }
            headers.push(line);
        }
        let mut body = vec![0; request_length];
        reader.read_exact(&mut body).unwrap();

        let mut stream = stream;
        write!(
            stream,
            "{status_line}\r\nContent-Length: {content_length}\r\nConnection: close\r\n\r\n{response_body}"
        )
        .unwrap();
        stream.flush().unwrap();

        Captured {
            request_line: request_line.trim_end().to_string(),
            headers,
            body: String::from_utf8(body).unwrap(),
        }
    });
    (base, handle)
}

fn has_header(captured: &Captured, name: &str, value: &str) -> bool {
    captured
        .headers
        .iter()
        .any(|h| h.eq_ignore_ascii_case(&format!("{name}: {value}")))
}

#[test]
fn created_on_201() {
    let (base, server) = serve_once("HTTP/1.1 201 Created", "{}");
    let client = GitHubClient::new(base, "tok");
    let outcome = client.create_repository(&CreateRepo::for_year("2024")).unwrap();
    assert_eq!(outcome, CreateOutcome::Created);

    let captured = server.join().unwrap();
    assert_eq!(captured.request_line, "POST /user/repos HTTP/1.1");
    assert!(has_header(&captured, "authorization", "token tok"));
    assert!(has_header(&captured, "accept", "application/vnd.github.v3+json"));
    let sent: serde_json::Value = serde_json::from_str(&captured.body).unwrap();
    assert_eq!(sent["name"], "2024");
    assert_eq!(sent["private"], false);
    assert_eq!(sent["auto_init"], false);
}

#[test]
fn rejected_status_is_not_an_error() {
    let (base, server) = serve_once(
        "HTTP/1.1 422 Unprocessable Entity",
        r#"{"message":"name already exists on this account"}"#,
    );
    let client = GitHubClient::new(base, "tok");
    let outcome = client.create_repository(&CreateRepo::for_year("2024")).unwrap();
    server.join().unwrap();

    assert!(outcome.is_already_exists());
    match outcome {
        CreateOutcome::Rejected { status, body } => {
            assert_eq!(status, 422);
            assert!(body.contains("already exists"));
        }
        CreateOutcome::Created => panic!("expected rejection"),
    }
}

#[test]
fn ok_but_not_created_is_rejected() {
    let (base, server) = serve_once("HTTP/1.1 200 OK", "{}");
    let client = GitHubClient::new(base, "tok");
    let outcome = client.create_repository(&CreateRepo::for_year("2024")).unwrap();
    server.join().unwrap();
    assert!(!outcome.is_created());
}

#[test]
fn unreadable_body_is_reported() {
    let (base, server) = serve_declaring("HTTP/1.1 403 Forbidden", "{\"mess", 64);
    let client = GitHubClient::new(base, "tok");
    let outcome = client.create_repository(&CreateRepo::for_year("2024")).unwrap();
    server.join().unwrap();

    match outcome {
        CreateOutcome::Rejected { status, body } => {
            assert_eq!(status, 403);
            assert!(body.starts_with("<unreadable response body:"), "{body}");
        }
        CreateOutcome::Created => panic!("expected rejection"),
    }
}

#[test]
fn unreachable_host_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = GitHubClient::new(base, "tok");
    let err = client.create_repository(&CreateRepo::for_year("2024")).unwrap_err();
    assert!(matches!(err, HostingError::Transport { .. }));
}
