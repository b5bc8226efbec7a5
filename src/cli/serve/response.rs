//! Response helpers for the development server.

use crate::utils::mime;
use std::fs;
use std::path::Path;
use tiny_http::{Header, Request, Response};

fn content_type(value: &str) -> Header {
    Header::from_bytes(&b"Content-Type"[..], value.as_bytes())
        .unwrap_or_else(|_| unreachable!("static header value"))
}

/// 200 with a rendered HTML page.
pub fn respond_html(request: Request, body: String) {
    let response = Response::from_string(body).with_header(content_type(mime::types::HTML));
    let _ = request.respond(response);
}

/// 200 with a JSON body.
pub fn respond_json(request: Request, body: String) {
    let response = Response::from_string(body).with_header(content_type(mime::types::JSON));
    let _ = request.respond(response);
}

/// 200 with the bytes of a static file, typed by extension.
pub fn respond_file(request: Request, path: &Path) {
    match fs::read(path) {
        Ok(bytes) => {
            let response =
                Response::from_data(bytes).with_header(content_type(mime::from_path(path)));
            let _ = request.respond(response);
        }
        Err(e) => {
            crate::debug!("serve"; "failed to read {}: {e}", path.display());
            respond_not_found(request);
        }
    }
}

/// Plain 404.
pub fn respond_not_found(request: Request) {
    let response = Response::from_string("404 Not Found")
        .with_status_code(404)
        .with_header(content_type(mime::types::PLAIN));
    let _ = request.respond(response);
}

/// 500 page carrying the render or load error, so the browser shows what
/// to fix in config.json instead of a blank tab.
pub fn respond_error(request: Request, message: &str) {
    let body = format!(
        "<!DOCTYPE html><html><head><title>Render Error</title></head>\
         <body style=\"font-family:monospace;padding:2rem\">\
         <h1>Render Error</h1><pre>{}</pre>\
         <p>Fix config.json and reload.</p></body></html>",
        escape_html(message)
    );
    let response = Response::from_string(body)
        .with_status_code(500)
        .with_header(content_type(mime::types::HTML));
    let _ = request.respond(response);
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
