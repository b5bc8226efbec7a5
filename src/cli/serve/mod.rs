//! Development server: re-reads config.json and re-renders on every request.

mod lifecycle;
mod path;
mod response;

use crate::{
    config::{self, Paths},
    core, debug, log, render,
};
use anyhow::Result;
use std::fs;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use tiny_http::{Request, Server};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_INTERFACE: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// Run the development server until Ctrl+C.
pub fn serve(paths: &Paths, interface: IpAddr, port: u16) -> Result<()> {
    if !paths.static_dir.exists() {
        fs::create_dir_all(&paths.static_dir)?;
        debug!("serve"; "created {}", paths.static_dir.display());
    }

    let (server, addr) = lifecycle::bind_with_retry(interface, port)?;
    let server = Arc::new(server);
    core::register_server(server.clone());

    log!("serve"; "serving {} at http://{addr}/", paths.config.display());
    log!("serve"; "edit config.json and reload; press Ctrl+C to stop");

    run_request_loop(&server, paths);

    log!("serve"; "server stopped");
    Ok(())
}

/// Handle requests one at a time until shutdown unblocks the listener.
fn run_request_loop(server: &Server, paths: &Paths) {
    for request in server.incoming_requests() {
        if core::is_shutdown() {
            break;
        }
        handle_request(request, paths);
    }
}

fn handle_request(request: Request, paths: &Paths) {
    let url = request.url().to_string();
    debug!("serve"; "{} {}", request.method(), url);

    let route = url.split('?').next().unwrap_or(&url);
    match route {
        "/" | "/index.html" => match render_page(paths) {
            Ok(html) => response::respond_html(request, html),
            Err(e) => {
                log!("error"; "{e}");
                response::respond_error(request, &e.to_string());
            }
        },
        "/api/config" => match config::load_document(&paths.config) {
            // preserve_order keeps the serialized keys in file order
            Ok(doc) => response::respond_json(request, doc.to_string()),
            Err(e) => {
                log!("error"; "{e}");
                response::respond_error(request, &e.to_string());
            }
        },
        _ => {
            if let Some(tail) = route.strip_prefix("/static/")
                && let Some(file) = path::resolve_static(tail, &paths.static_dir)
            {
                response::respond_file(request, &file);
            } else {
                response::respond_not_found(request);
            }
        }
    }
}

/// Fresh load and render for a single request.
fn render_page(paths: &Paths) -> anyhow::Result<String> {
    let doc = config::load_document(&paths.config)?;
    Ok(render::render_document(&doc)?)
}
