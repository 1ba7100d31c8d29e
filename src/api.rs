//! Thin HTTP gateway to the graph backend.
//!
//! One generic JSON POST plus typed wrappers over the three endpoints.
//! Errors distinguish transport failures, non-success statuses, and body
//! decode failures so callers can surface a message and branch UI state on
//! "added" vs "failed".

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::types::{GraphResponse, NewRelationship, Node, Relationship};

/// Base URL of the graph backend, trailing slash included.
pub const API_BASE: &str = "http://localhost:8080/api/";

/// Failure surfaced by gateway calls. Never fatal to the session; the
/// graph already rendered stays usable after any of these.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiError {
	/// The request never completed (network down, CORS, aborted).
	Transport(String),
	/// The backend answered with a non-success status.
	Status(u16),
	/// The body was not the JSON shape we expected.
	Decode(String),
}

impl fmt::Display for ApiError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ApiError::Transport(msg) => write!(f, "request failed: {msg}"),
			ApiError::Status(code) => write!(f, "server responded with status {code}"),
			ApiError::Decode(msg) => write!(f, "unexpected response body: {msg}"),
		}
	}
}

impl std::error::Error for ApiError {}

/// Fetch the full graph snapshot from `GET {base}graph`.
pub async fn fetch_graph() -> Result<GraphResponse, ApiError> {
	let url = format!("{API_BASE}graph");
	let request = Request::new_with_str(&url)
		.map_err(|err| ApiError::Transport(js_error_message(err)))?;
	let response = send(&request).await?;
	read_json(response).await
}

/// Create a node. The returned node carries the backend-assigned id,
/// which may differ from the provisional id in the request.
pub async fn create_node(node: &Node) -> Result<Node, ApiError> {
	post_json(&format!("{API_BASE}nodes"), node).await
}

/// Create a relationship. The request uses the write shape, the response
/// comes back in the read shape.
pub async fn create_relationship(rel: &NewRelationship) -> Result<Relationship, ApiError> {
	post_json(&format!("{API_BASE}relationships"), rel).await
}

/// POST `payload` as JSON to `url` and parse the response body as `R`.
pub async fn post_json<T, R>(url: &str, payload: &T) -> Result<R, ApiError>
where
	T: Serialize,
	R: DeserializeOwned,
{
	let body =
		serde_json::to_string(payload).map_err(|err| ApiError::Decode(err.to_string()))?;

	let headers = Headers::new().map_err(|err| ApiError::Transport(js_error_message(err)))?;
	headers
		.set("Content-Type", "application/json")
		.map_err(|err| ApiError::Transport(js_error_message(err)))?;

	let init = RequestInit::new();
	init.set_method("POST");
	init.set_headers(headers.as_ref());
	init.set_body(&JsValue::from_str(&body));

	let request = Request::new_with_str_and_init(url, &init)
		.map_err(|err| ApiError::Transport(js_error_message(err)))?;
	let response = send(&request).await?;
	read_json(response).await
}

async fn send(request: &Request) -> Result<Response, ApiError> {
	let window =
		web_sys::window().ok_or_else(|| ApiError::Transport("no window".to_string()))?;
	let value = JsFuture::from(window.fetch_with_request(request))
		.await
		.map_err(|err| ApiError::Transport(js_error_message(err)))?;
	value
		.dyn_into::<Response>()
		.map_err(|_| ApiError::Transport("fetch did not yield a response".to_string()))
}

async fn read_json<R: DeserializeOwned>(response: Response) -> Result<R, ApiError> {
	if !response.ok() {
		return Err(ApiError::Status(response.status()));
	}
	let text_promise = response
		.text()
		.map_err(|err| ApiError::Transport(js_error_message(err)))?;
	let text = JsFuture::from(text_promise)
		.await
		.map_err(|err| ApiError::Transport(js_error_message(err)))?
		.as_string()
		.unwrap_or_default();
	serde_json::from_str(&text).map_err(|err| ApiError::Decode(err.to_string()))
}

/// Best-effort human-readable message from an arbitrary JS error value.
fn js_error_message(err: JsValue) -> String {
	err.as_string()
		.or_else(|| {
			err.dyn_ref::<js_sys::Error>()
				.map(|e| String::from(e.message()))
		})
		.unwrap_or_else(|| "unknown error".to_string())
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn error_messages_are_human_readable() {
		assert_eq!(
			ApiError::Transport("connection refused".into()).to_string(),
			"request failed: connection refused"
		);
		assert_eq!(
			ApiError::Status(500).to_string(),
			"server responded with status 500"
		);
		assert_eq!(
			ApiError::Decode("missing field `name`".into()).to_string(),
			"unexpected response body: missing field `name`"
		);
	}

	#[test]
	fn endpoint_urls_join_on_the_base() {
		assert_eq!(
			format!("{API_BASE}graph"),
			"http://localhost:8080/api/graph"
		);
		assert_eq!(
			format!("{API_BASE}nodes"),
			"http://localhost:8080/api/nodes"
		);
		assert_eq!(
			format!("{API_BASE}relationships"),
			"http://localhost:8080/api/relationships"
		);
	}
}
