/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod endpoints;
pub mod error;

use axum::Router;
use axum::routing::{get, post};
use jobboard_core::types::ServerState;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn create_router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/", get(endpoints::get_root))
        .route("/health", get(endpoints::get_health))
        .route(
            "/candidates",
            get(endpoints::candidates::get).post(endpoints::candidates::post),
        )
        .route(
            "/candidates/{candidate}",
            get(endpoints::candidates::get_candidate)
                .put(endpoints::candidates::put_candidate)
                .delete(endpoints::candidates::delete_candidate),
        )
        .route(
            "/companies",
            get(endpoints::companies::get).post(endpoints::companies::post),
        )
        .route(
            "/companies/{company}",
            get(endpoints::companies::get_company)
                .put(endpoints::companies::put_company)
                .delete(endpoints::companies::delete_company),
        )
        .route(
            "/jobs",
            get(endpoints::jobs::get).post(endpoints::jobs::post),
        )
        .route(
            "/jobs/{job}",
            get(endpoints::jobs::get_job)
                .put(endpoints::jobs::put_job)
                .delete(endpoints::jobs::delete_job),
        )
        .route(
            "/jobs/{job}/candidates/{candidate}",
            post(endpoints::jobs::post_job_candidate).delete(endpoints::jobs::delete_job_candidate),
        )
        .fallback(endpoints::handle_404)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);
    let app = create_router(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    tracing::info!("Listening on http://{}", server_url);

    axum::serve(listener, app).await
}
