//! Preview server for `/og/<route>.png`.

use std::io::Cursor;
use std::sync::Arc;

use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

use crate::assets::fonts::FontAsset;
use crate::foundation::error::{OgError, OgResult};
use crate::model::Branding;
use crate::render::pipeline::{CACHE_CONTROL, CONTENT_TYPE, render_preview};
use crate::routes::RouteTable;

const PLAIN: &str = "text/plain; charset=utf-8";
const WORKERS: usize = 4;

/// Everything a request handler needs, shared across worker threads.
#[derive(Debug)]
pub struct PreviewService {
    routes: RouteTable,
    fonts: FontAsset,
    branding: Branding,
}

/// Transport-independent response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewResponse {
    /// HTTP status code.
    pub status: u16,
    /// `Content-Type` header value.
    pub content_type: &'static str,
    /// Only set on successful image responses.
    pub cache_control: Option<&'static str>,
    /// `Content-Length` header value; for `HEAD` this is the length a `GET` would send.
    pub content_length: usize,
    /// Response body; empty for `HEAD`.
    pub body: Vec<u8>,
}

impl PreviewResponse {
    fn text(status: u16, body: impl Into<String>) -> Self {
        let body = body.into().into_bytes();
        Self {
            status,
            content_type: PLAIN,
            cache_control: None,
            content_length: body.len(),
            body,
        }
    }
}

impl PreviewService {
    /// Serve `routes` with the given fonts and footer labels.
    pub fn new(routes: RouteTable, fonts: FontAsset, branding: Branding) -> Self {
        Self {
            routes,
            fonts,
            branding,
        }
    }

    /// Routes this service answers.
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Map a request line to a response. `HEAD` gets the same status and headers with no body.
    pub fn handle(&self, method: &Method, url: &str) -> PreviewResponse {
        let head = match method {
            Method::Get => false,
            Method::Head => true,
            _ => return PreviewResponse::text(405, "405 Method Not Allowed"),
        };

        let Some(route) = self.routes.resolve_path(url) else {
            return PreviewResponse::text(404, "404 Not Found");
        };

        let mut resp = match render_preview(&route.request, &self.fonts, &self.branding) {
            Ok(img) => PreviewResponse {
                status: 200,
                content_type: CONTENT_TYPE,
                cache_control: Some(CACHE_CONTROL),
                content_length: img.png.len(),
                body: img.png,
            },
            Err(e) => {
                tracing::warn!(route = %route.route, error = %e, "render failed");
                PreviewResponse::text(500, format!("500 Internal Server Error: {e}"))
            }
        };
        if head {
            resp.body.clear();
        }
        resp
    }
}

/// Bind `addr` and answer requests until the process exits.
pub fn serve(addr: &str, service: PreviewService) -> OgResult<()> {
    let server = Server::http(addr)
        .map_err(|e| OgError::config(format!("bind preview server on '{addr}': {e}")))?;
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(WORKERS)
        .build()
        .map_err(|e| OgError::Other(anyhow::anyhow!("create request pool: {e}")))?;

    tracing::info!(addr = %addr, routes = service.routes.len(), "serving previews");
    for route in service.routes.iter() {
        tracing::debug!("http://{addr}{}", route.og_path());
    }

    let service = Arc::new(service);
    for request in server.incoming_requests() {
        let service = Arc::clone(&service);
        pool.spawn(move || {
            if let Err(e) = respond(request, &service) {
                tracing::warn!(error = %e, "request error");
            }
        });
    }
    Ok(())
}

fn respond(request: Request, service: &PreviewService) -> OgResult<()> {
    let resp = service.handle(request.method(), request.url());
    tracing::debug!(
        method = %request.method(),
        url = %request.url(),
        status = resp.status,
        "request"
    );

    let mut headers = vec![header("Content-Type", resp.content_type)?];
    if let Some(cc) = resp.cache_control {
        headers.push(header("Cache-Control", cc)?);
    }
    // tiny_http never writes a body for HEAD, so the declared length can exceed `body`.
    let out = Response::new(
        StatusCode(resp.status),
        headers,
        Cursor::new(resp.body),
        Some(resp.content_length),
        None,
    );
    request
        .respond(out)
        .map_err(|e| OgError::Other(anyhow::Error::new(e).context("write response")))
}

fn header(name: &str, value: &str) -> OgResult<Header> {
    Header::from_bytes(name, value)
        .map_err(|()| OgError::Other(anyhow::anyhow!("invalid header '{name}: {value}'")))
}
