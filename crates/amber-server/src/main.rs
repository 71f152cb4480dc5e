//! HTTP endpoint for HTML to Amber conversion.
//!
//! `POST /convert` with a `text/*` body answers with the Amber XML.

use std::env;
use std::io::Read;

use amber::{AmberError, AmberService};
use anyhow::{anyhow, Context};
use tiny_http::{Header, Request, Response, Server};

const DEFAULT_PORT: u16 = 3000;

/// Status, media type and body of a reply
#[derive(Debug, PartialEq, Eq)]
struct Reply {
    status: u16,
    content_type: &'static str,
    body: String,
}

impl Reply {
    fn xml(body: String) -> Self {
        Self {
            status: 200,
            content_type: "application/xml",
            body,
        }
    }

    fn error(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            body: message.into(),
        }
    }
}

fn respond(
    service: &AmberService,
    method: &str,
    url: &str,
    content_type: Option<&str>,
    body: &[u8],
) -> Reply {
    let path = url.split('?').next().unwrap_or_default();
    if path != "/convert" {
        return Reply::error(404, "Not Found");
    }
    if !method.eq_ignore_ascii_case("POST") {
        return Reply::error(405, "Method Not Allowed");
    }

    let Ok(body) = std::str::from_utf8(body) else {
        return Reply::error(400, "Request body is not valid UTF-8");
    };

    match service.convert_request(content_type, body) {
        Ok(xml) => Reply::xml(xml),
        Err(err @ AmberError::UnsupportedMediaType(_)) => Reply::error(415, err.to_string()),
        Err(err) => Reply::error(500, err.to_string()),
    }
}

fn handle(service: &AmberService, mut request: Request) -> anyhow::Result<()> {
    let mut body = Vec::new();
    request
        .as_reader()
        .read_to_end(&mut body)
        .context("failed to read request body")?;

    let content_type = request
        .headers()
        .iter()
        .find(|h| h.field.equiv("Content-Type"))
        .map(|h| h.value.as_str().to_string());

    let reply = respond(
        service,
        request.method().as_str(),
        request.url(),
        content_type.as_deref(),
        &body,
    );
    log::info!("{} {} -> {}", request.method(), request.url(), reply.status);

    let mut response = Response::from_string(reply.body).with_status_code(reply.status);
    if let Ok(header) = Header::from_bytes(&b"Content-Type"[..], reply.content_type.as_bytes()) {
        response = response.with_header(header);
    }
    request.respond(response).context("failed to send response")?;
    Ok(())
}

fn port() -> anyhow::Result<u16> {
    match env::var("PORT") {
        Ok(value) => value
            .parse()
            .with_context(|| format!("invalid PORT value {value:?}")),
        Err(_) => Ok(DEFAULT_PORT),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let address = ("0.0.0.0", port()?);
    let server = Server::http(address).map_err(|err| anyhow!("failed to bind: {err}"))?;
    log::info!("listening on port {}", address.1);

    let service = AmberService::new();
    for request in server.incoming_requests() {
        if let Err(err) = handle(&service, request) {
            log::error!("{err:#}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(content_type: Option<&str>, body: &str) -> Reply {
        respond(
            &AmberService::new(),
            "POST",
            "/convert",
            content_type,
            body.as_bytes(),
        )
    }

    #[test]
    fn test_convert_html() {
        let reply = post(Some("text/html"), "<p>Hello <b>world</b></p>");
        assert_eq!(
            reply,
            Reply::xml(
                r#"<document version="2.0"><paragraph>Hello <bold>world</bold></paragraph></document>"#
                    .to_string()
            )
        );
    }

    #[test]
    fn test_charset_parameter_accepted() {
        let reply = post(Some("text/plain; charset=utf-8"), "x");
        assert_eq!(reply.status, 200);
    }

    #[test]
    fn test_non_text_rejected() {
        assert_eq!(post(Some("application/json"), "{}").status, 415);
        assert_eq!(post(None, "<p>x</p>").status, 415);
    }

    #[test]
    fn test_routing() {
        let service = AmberService::new();
        let reply = respond(&service, "POST", "/other", Some("text/html"), b"");
        assert_eq!(reply.status, 404);

        let reply = respond(&service, "GET", "/convert", None, b"");
        assert_eq!(reply.status, 405);

        let reply = respond(&service, "POST", "/convert?x=1", Some("text/html"), b"");
        assert_eq!(reply.status, 200);
    }

    #[test]
    fn test_invalid_utf8() {
        let reply = respond(
            &AmberService::new(),
            "POST",
            "/convert",
            Some("text/html"),
            &[0xff, 0xfe],
        );
        assert_eq!(reply.status, 400);
    }
}
