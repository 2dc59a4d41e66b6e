//! HTTP response helpers.

use crate::utils::mime;
use anyhow::{Context, Result};
use std::{fs, path::Path};
use tiny_http::{Header, Method, Request, Response, StatusCode};

/// Respond with a file from disk.
pub fn respond_file(request: Request, path: &Path) -> Result<()> {
    let content_type = mime::from_path(path);

    if is_head_request(&request) {
        return send_head(request, 200, content_type);
    }

    let body = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    send_body(request, 200, content_type, body)
}

/// Respond with in-memory bytes.
pub fn respond_bytes(
    request: Request,
    status: u16,
    content_type: &'static str,
    body: impl Into<Vec<u8>>,
) -> Result<()> {
    if is_head_request(&request) {
        return send_head(request, status, content_type);
    }
    send_body(request, status, content_type, body.into())
}

/// Respond with a rendered HTML page.
pub fn respond_html(request: Request, status: u16, body: String) -> Result<()> {
    respond_bytes(request, status, mime::types::HTML, body)
}

/// 405 for anything other than GET and HEAD.
pub fn respond_method_not_allowed(request: Request) -> Result<()> {
    let response = Response::from_string("405 Method Not Allowed")
        .with_status_code(StatusCode(405))
        .with_header(make_header("Content-Type", mime::types::PLAIN))
        .with_header(make_header("Allow", "GET, HEAD"));
    request.respond(response)?;
    Ok(())
}

/// 503 while shutting down.
pub fn respond_unavailable(request: Request) -> Result<()> {
    respond_bytes(
        request,
        503,
        mime::types::PLAIN,
        "503 Service Unavailable: server is shutting down",
    )
}

fn is_head_request(request: &Request) -> bool {
    *request.method() == Method::Head
}

fn send_head(request: Request, status: u16, content_type: &'static str) -> Result<()> {
    let response = Response::empty(StatusCode(status))
        .with_header(make_header("Content-Type", content_type))
        .with_header(make_header("Cache-Control", "no-cache"));
    request.respond(response)?;
    Ok(())
}

fn send_body(request: Request, status: u16, content_type: &'static str, body: Vec<u8>) -> Result<()> {
    let response = Response::from_data(body)
        .with_status_code(StatusCode(status))
        .with_header(make_header("Content-Type", content_type))
        .with_header(make_header("Cache-Control", "no-cache"));
    request.respond(response)?;
    Ok(())
}

/// Header from static ASCII parts, which `from_bytes` always accepts.
fn make_header(key: &'static str, value: &'static str) -> Header {
    Header::from_bytes(key, value).unwrap()
}
