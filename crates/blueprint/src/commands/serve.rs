//! Preview server command.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use blueprint_static::{BODY_MARKER, HEAD_MARKER};

/// Run the serve command.
///
/// Prerendered routes are served from their own `index.html`. Anything else,
/// such as the signed-in app routes, gets the root document and is routed
/// client-side.
pub async fn run(port: u16, dir: PathBuf, open_browser: bool) -> Result<()> {
    let index = check_dist(&dir)?;

    let addr: SocketAddr = format!("127.0.0.1:{}", port)
        .parse()
        .context("Invalid address")?;

    tracing::info!("Serving {} at http://{}", dir.display(), addr);

    let app = Router::new().fallback_service(ServeDir::new(&dir).fallback(ServeFile::new(index)));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    if open_browser {
        let url = format!("http://{}", addr);
        let _ = open::that(&url);
    }

    axum::serve(listener, app).await?;

    Ok(())
}

/// The root document of `dir`. Warns when it still carries the client
/// build's placeholders, i.e. prerendering has not run.
fn check_dist(dir: &Path) -> Result<PathBuf> {
    let index = dir.join("index.html");
    if !index.is_file() {
        anyhow::bail!(
            "{} not found. Build the client bundle and run 'blueprint build' first.",
            index.display()
        );
    }

    let html = fs::read_to_string(&index)
        .with_context(|| format!("Failed to read {}", index.display()))?;
    if !is_prerendered(&html) {
        tracing::warn!(
            "{} has not been prerendered; pages will render client-side only",
            index.display()
        );
    }

    Ok(index)
}

fn is_prerendered(html: &str) -> bool {
    !html.contains(HEAD_MARKER) && !html.contains(BODY_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_root_document_is_an_error() {
        let temp = tempdir().unwrap();

        let err = check_dist(temp.path()).unwrap_err();

        assert!(err.to_string().contains("blueprint build"));
    }

    #[test]
    fn returns_root_document() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("index.html"), "<html></html>").unwrap();

        assert_eq!(check_dist(temp.path()).unwrap(), temp.path().join("index.html"));
    }

    #[test]
    fn detects_unfilled_template() {
        assert!(!is_prerendered("<head><!--app-head--></head><div id=\"root\"></div>"));
        assert!(!is_prerendered("<div id=\"root\"><!--app-html--></div>"));
        assert!(is_prerendered("<head><title>Pricing | Blueprint</title></head>"));
    }
}
