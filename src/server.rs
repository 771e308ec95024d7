//! HTTP surface: a single handler that translates `q` and redirects to Kagi.

use std::net::SocketAddr;

use axum::Router;
use axum::extract::Query;
use axum::response::Redirect;
use axum::routing::get;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Deserialize;
use tracing::{debug, info};

use crate::translate;

/// Search endpoint of the target engine; translated queries are appended
/// as its `q` parameter.
pub const TARGET_BASE: &str = "https://kagi.com/search";

/// Characters to percent-encode in the `q` value. Everything outside
/// `[A-Za-z0-9_.-]` is escaped, so the value is safe anywhere in a query
/// string.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

#[derive(Deserialize)]
struct SearchParams {
    q: Option<String>,
}

/// Builds the router. The one handler answers at both `/` and `/search`,
/// so the service can stand in for a root-mounted redirect page or for a
/// SearXNG-shaped `/search?q=%s` browser keyword.
pub fn router() -> Router {
    Router::new()
        .route("/", get(handle_redirect))
        .route("/search", get(handle_redirect))
}

pub async fn serve(addr: SocketAddr) -> Result<(), ServeError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;
    info!(%addr, "listening");
    axum::serve(listener, router()).await?;
    Ok(())
}

async fn handle_redirect(Query(params): Query<SearchParams>) -> Redirect {
    let location = redirect_target(params.q.as_deref());
    debug!(q = params.q.as_deref().unwrap_or(""), %location, "redirecting");
    Redirect::temporary(&location)
}

/// Resolves the redirect target for a raw `q` value. A missing or empty
/// query goes to the bare search page; anything else is parsed, has its
/// bang rewritten, and is re-serialized into the target's syntax.
fn redirect_target(raw: Option<&str>) -> String {
    let Some(pair) = raw.and_then(translate::parse) else {
        return TARGET_BASE.to_string();
    };
    let translated = pair.normalize().to_string();
    format!(
        "{TARGET_BASE}?q={}",
        utf8_percent_encode(&translated, QUERY_ENCODE_SET)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_query_goes_to_bare_page() {
        assert_eq!(redirect_target(None), TARGET_BASE);
    }

    #[test]
    fn empty_query_goes_to_bare_page() {
        assert_eq!(redirect_target(Some("")), TARGET_BASE);
    }

    #[test]
    fn plain_query_is_encoded_verbatim() {
        assert_eq!(
            redirect_target(Some("hello world")),
            "https://kagi.com/search?q=hello%20world"
        );
    }

    #[test]
    fn translated_bang_lands_in_target() {
        assert_eq!(
            redirect_target(Some(":ja ramen")),
            "https://kagi.com/search?q=%21jp%20ramen"
        );
    }

    #[test]
    fn dropped_bang_leaves_plain_query() {
        assert_eq!(
            redirect_target(Some(":en hello")),
            "https://kagi.com/search?q=hello"
        );
    }

    #[test]
    fn non_ascii_query_is_percent_encoded() {
        assert_eq!(
            redirect_target(Some("日本")),
            "https://kagi.com/search?q=%E6%97%A5%E6%9C%AC"
        );
    }

    #[test]
    fn unreserved_characters_survive_encoding() {
        assert_eq!(
            redirect_target(Some("rust-lang_1.80")),
            "https://kagi.com/search?q=rust-lang_1.80"
        );
    }
}
