use std::fs;

use tauri::{
    http::{header::CONTENT_TYPE, Request, Response, StatusCode},
    path::BaseDirectory,
    AppHandle, Manager, Runtime,
};

use crate::PACKAGED_INDEX_FILE;

const PACKAGED_DIST_DIR: &str = "dist";

pub(crate) fn handle_request<R: Runtime>(
    app_handle: &AppHandle<R>,
    request: Request<Vec<u8>>,
) -> Response<Vec<u8>> {
    let relative = match sanitize_request_path(request.uri().path()) {
        Ok(relative) => relative,
        Err(error) => {
            crate::append_desktop_log(&format!(
                "rejected packaged request {}: {}",
                request.uri(),
                error
            ));
            return error_response(StatusCode::BAD_REQUEST, "bad request");
        }
    };

    let resource = format!("{PACKAGED_DIST_DIR}/{relative}");
    let resolved = app_handle
        .path()
        .resolve(&resource, BaseDirectory::Resource);

    let bytes = match resolved.and_then(|path| fs::read(path).map_err(Into::into)) {
        Ok(bytes) => bytes,
        Err(error) => {
            crate::append_desktop_log(&format!("packaged file {relative} unavailable: {error}"));
            return error_response(StatusCode::NOT_FOUND, "not found");
        }
    };

    match Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, mime_for_path(&relative))
        .body(bytes)
    {
        Ok(response) => response,
        Err(_) => error_response(StatusCode::INTERNAL_SERVER_ERROR, "response build failed"),
    }
}

fn error_response(status: StatusCode, message: &str) -> Response<Vec<u8>> {
    match Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "text/plain")
        .body(message.as_bytes().to_vec())
    {
        Ok(response) => response,
        Err(_) => Response::new(message.as_bytes().to_vec()),
    }
}

// Traversal segments are rejected; the empty path is the index.
pub(crate) fn sanitize_request_path(path: &str) -> Result<String, String> {
    let mut segments = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => continue,
            ".." => return Err("path traversal is not allowed".to_string()),
            segment if segment.contains('\\') => {
                return Err("backslash segments are not allowed".to_string());
            }
            segment => segments.push(segment),
        }
    }

    if segments.is_empty() {
        return Ok(PACKAGED_INDEX_FILE.to_string());
    }
    Ok(segments.join("/"))
}

pub(crate) fn mime_for_path(path: &str) -> &'static str {
    match path.rsplit('.').next() {
        Some("html") => "text/html",
        Some("js") => "text/javascript",
        Some("css") => "text/css",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("woff2") => "font/woff2",
        _ => "application/octet-stream",
    }
}
