//! Serves the server rendered app and the wasm bundle produced by cargo-leptos.
//!
//! # Building
//! Use cargo-leptos: `cargo leptos watch` for development, `cargo leptos build --release` to ship.

#[cfg(not(debug_assertions))]
use axum::http::{header, HeaderValue};
use axum::Router;
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use perbaikan_app::{shell, App};
#[cfg(not(debug_assertions))]
use tower_http::set_header::SetResponseHeader;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// URL path and filesystem path of the compiled bundle.
fn bundle_paths(site_root: &str, pkg_dir: &str) -> (String, String) {
    let pkg_dir = pkg_dir.trim_matches('/');
    (format!("/{pkg_dir}"), format!("./{site_root}/{pkg_dir}"))
}

pub(crate) fn create_leptos_app(leptos_options: LeptosOptions) -> Router {
    let (bundle_path, bundle_filepath) =
        bundle_paths(&leptos_options.site_root, &leptos_options.site_pkg_dir);

    let pkg_service = ServeDir::new(&bundle_filepath);
    #[cfg(not(debug_assertions))]
    let pkg_service = SetResponseHeader::appending(
        pkg_service,
        header::CACHE_CONTROL,
        HeaderValue::from_static("public, max-age=86400, immutable"),
    );
    tracing::info!("Serving pkg dir: {bundle_filepath} at {bundle_path}");

    let routes = generate_route_list(App);

    Router::new()
        .nest_service(&bundle_path, pkg_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        // unknown paths fall through to the router, which renders the 404 view
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_paths_from_options() {
        assert_eq!(
            bundle_paths("target/site", "pkg"),
            ("/pkg".to_string(), "./target/site/pkg".to_string())
        );
        assert_eq!(
            bundle_paths("site", "/pkg/"),
            ("/pkg".to_string(), "./site/pkg".to_string())
        );
    }
}
