//! Local guide server.
//!
//! Every request rescans the content tree, so edits to pages and boards show
//! up on the next reload without restarting.

mod lifecycle;
mod path;
mod response;

use crate::{
    config::SiteConfig,
    core::{is_shutdown, register_server},
    debug,
    embed::css::{GUIDE_CSS, GUIDE_CSS_NAME},
    log,
    page::{self, Links, PageContext, PageError},
    utils::{mime, path::safe_join},
};
use anyhow::{Context, Result};
use path::Route;
use std::sync::Arc;
use tiny_http::{Method, Request};

/// Bind the server and block on the request loop until Ctrl+C.
pub fn serve_site(config: &SiteConfig) -> Result<()> {
    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);
    register_server(Arc::clone(&server));

    log!("serve"; "http://{}", addr);
    debug!("serve"; "content root {}", config.content.dir.display());

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.serve.workers)
        .thread_name(|i| format!("serve-{i}"))
        .build()
        .context("Failed to create request thread pool")?;

    pool.in_place_scope(|scope| {
        for request in server.incoming_requests() {
            scope.spawn(move |_| {
                if let Err(e) = handle_request(request, config) {
                    log!("serve"; "request error: {e}");
                }
            });
        }
    });

    Ok(())
}

/// Handle a single HTTP request
fn handle_request(request: Request, config: &SiteConfig) -> Result<()> {
    if is_shutdown() {
        return response::respond_unavailable(request);
    }

    if !matches!(request.method(), Method::Get | Method::Head) {
        debug!("serve"; "{} {} -> 405", request.method(), request.url());
        return response::respond_method_not_allowed(request);
    }

    let route = path::resolve_route(request.url());
    debug!("serve"; "{} {} -> {:?}", request.method(), request.url(), route);

    if let Route::Static(rel) = &route {
        return respond_static(request, config, rel);
    }

    let ctx = match PageContext::load(config, Links::serve()) {
        Ok(ctx) => ctx,
        Err(e) => {
            log!("error"; "failed to scan content: {e}");
            let body = format!("500 Internal Server Error\n\n{e}");
            return response::respond_bytes(request, 500, mime::types::PLAIN, body);
        }
    };

    let rendered = match &route {
        Route::Index => Ok(page::render_index(&ctx)),
        Route::Reader(slug) => page::render_reader(&ctx, slug),
        Route::Editor(slug) => page::render_editor(&ctx, slug),
        Route::Static(_) | Route::Invalid => {
            let body = page::render_error(&ctx, "Page not found", request.url());
            return response::respond_html(request, 404, body);
        }
    };

    match rendered {
        Ok(body) => response::respond_html(request, 200, body),
        Err(e) => respond_page_error(request, &ctx, &e),
    }
}

/// 404 for a page that does not exist, 500 for one that fails to render.
fn respond_page_error(request: Request, ctx: &PageContext<'_>, error: &PageError) -> Result<()> {
    if error.is_not_found() {
        let body = page::render_error(ctx, "Page not found", &error.to_string());
        return response::respond_html(request, 404, body);
    }

    log!("error"; "{}: {}", request.url(), error);
    let body = page::render_error(ctx, "Failed to render page", &error.to_string());
    response::respond_html(request, 500, body)
}

/// Files from the project's static dir, then the embedded stylesheet.
fn respond_static(request: Request, config: &SiteConfig, rel: &str) -> Result<()> {
    if let Some(path) = safe_join(&config.content.static_dir, rel).filter(|p| p.is_file()) {
        return response::respond_file(request, &path);
    }

    if rel == GUIDE_CSS_NAME {
        return response::respond_bytes(request, 200, mime::types::CSS, GUIDE_CSS);
    }

    response::respond_bytes(request, 404, mime::types::PLAIN, "404 Not Found")
}
