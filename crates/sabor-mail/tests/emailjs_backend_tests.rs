//! EmailJS backend integration tests
//!
//! Runs the backend against a one-shot HTTP listener on localhost that
//! answers with a canned response and captures the request it received.

#![cfg(not(target_arch = "wasm32"))]

use rstest::rstest;
use sabor_forms::ReservationRequest;
use sabor_mail::{DeliveryError, EmailJsBackend, EmailJsConfig, ReservationBackend};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Accepts one connection, replies with `status` and `body`, and returns the
/// raw request (headers and body) it read.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
	let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
	let url = format!("http://{}/api/v1.0/email/send", listener.local_addr().unwrap());

	let handle = tokio::spawn(async move {
		let (mut socket, _) = listener.accept().await.unwrap();
		let mut raw = Vec::new();
		let mut buf = [0u8; 1024];
		loop {
			let n = socket.read(&mut buf).await.unwrap();
			if n == 0 {
				break;
			}
			raw.extend_from_slice(&buf[..n]);
			let text = String::from_utf8_lossy(&raw);
			if let Some(header_end) = text.find("\r\n\r\n") {
				let content_length = text[..header_end]
					.lines()
					.find_map(|line| {
						let (name, value) = line.split_once(':')?;
						name.eq_ignore_ascii_case("content-length")
							.then(|| value.trim().parse::<usize>().ok())
							.flatten()
					})
					.unwrap_or(0);
				if raw.len() >= header_end + 4 + content_length {
					break;
				}
			}
		}
		let response = format!(
			"HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
			status,
			body.len(),
			body
		);
		socket.write_all(response.as_bytes()).await.unwrap();
		socket.shutdown().await.ok();
		String::from_utf8_lossy(&raw).into_owned()
	});

	(url, handle)
}

fn request() -> ReservationRequest {
	ReservationRequest::builder()
		.name("Ana García")
		.email("ana@example.com")
		.phone("612345678")
		.party_size("4")
		.date("2024-06-20")
		.time("21:00")
		.comments("Birthday")
		.build()
}

/// Test: a 200 response is a successful delivery and the body carries the
/// template parameters
#[rstest]
#[tokio::test]
async fn test_emailjs_success_posts_template_params() {
	// Arrange
	let (url, server) = serve_once("200 OK", "OK").await;
	let backend = EmailJsBackend::new(
		EmailJsConfig::new("service_x", "template_y", "public_z").with_endpoint(url),
	);

	// Act
	let result = backend.send(&request()).await;

	// Assert
	assert!(result.is_ok(), "unexpected error: {:?}", result);
	let raw = server.await.unwrap();
	assert!(raw.starts_with("POST /api/v1.0/email/send"));
	let body = &raw[raw.find("\r\n\r\n").unwrap() + 4..];
	let json: serde_json::Value = serde_json::from_str(body).unwrap();
	assert_eq!(json["service_id"], "service_x");
	assert_eq!(json["user_id"], "public_z");
	assert_eq!(json["template_params"]["name"], "Ana García");
	assert_eq!(json["template_params"]["comments"], "Birthday");
}

/// Test: a non-2xx response surfaces as a rejection with status and body
#[rstest]
#[tokio::test]
async fn test_emailjs_rejection() {
	// Arrange
	let (url, server) = serve_once("400 Bad Request", "The service ID is invalid").await;
	let backend = EmailJsBackend::new(
		EmailJsConfig::new("bad", "template_y", "public_z").with_endpoint(url),
	);

	// Act
	let err = backend.send(&request()).await.unwrap_err();
	server.await.unwrap();

	// Assert
	assert_eq!(
		err,
		DeliveryError::Rejected {
			status: 400,
			body: "The service ID is invalid".to_string(),
		}
	);
}

/// Test: an unreachable endpoint is an HTTP error
#[rstest]
#[tokio::test]
async fn test_emailjs_unreachable() {
	// Arrange: bind then drop to get a closed port
	let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
	let addr = listener.local_addr().unwrap();
	drop(listener);
	let backend = EmailJsBackend::new(
		EmailJsConfig::new("service_x", "template_y", "public_z")
			.with_endpoint(format!("http://{}/send", addr)),
	);

	// Act
	let err = backend.send(&request()).await.unwrap_err();

	// Assert
	assert!(matches!(err, DeliveryError::Http(_)));
}
