//! HTTP lookup over the per-lemgram files written by `lexicon.split`.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Redirect, Response},
    routing::get,
    Router,
};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use lmf_core::services::lookup;

#[derive(Clone)]
struct AppState {
    data_dir: Arc<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("lmf_lookup=info,lmf_core=info,tower_http=debug")),
        )
        .init();

    let data_dir = std::env::var("LMF_DATA_DIR").unwrap_or_else(|_| "data/v1".to_string());
    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "8000".to_string())
        .parse::<u16>()
        .unwrap_or(8000);

    let state = AppState {
        data_dir: Arc::new(PathBuf::from(&data_dir)),
    };
    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", port);
    info!("serving {} on {}", data_dir, addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(redirect_to_docs))
        .route("/v1/", get(redirect_to_docs))
        .route("/docs", get(docs))
        .route("/v1/lemgram/:id", get(read_lemgram))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn redirect_to_docs() -> Redirect {
    Redirect::temporary("/docs")
}

async fn docs() -> Html<&'static str> {
    Html(
        "<html><body><h1>lmf-lookup</h1>\
         <p><code>GET /v1/lemgram/{id}</code> returns the lexical entry stored \
         for a lemgram, or <code>{}</code> when there is none.</p></body></html>",
    )
}

/// 200 with `{}` for unknown ids.
async fn read_lemgram(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let dir = state.data_dir.clone();
    let result =
        tokio::task::spawn_blocking(move || lookup::read_entry(dir.as_path(), &id)).await;

    match result {
        Ok(Ok(value)) => Json(value).into_response(),
        Ok(Err(e)) => {
            error!("lookup failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
        Err(e) => {
            error!("lookup task failed: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    fn app(dir: &std::path::Path) -> Router {
        create_router(AppState {
            data_dir: Arc::new(dir.to_path_buf()),
        })
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn serves_known_and_unknown_lemgrams() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bomb..nn.1.json"), r#"{"lemgram":"bomb..nn.1"}"#).unwrap();

        let (status, body) = get_json(app(dir.path()), "/v1/lemgram/bomb..nn.1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["lemgram"], "bomb..nn.1");

        let (status, body) = get_json(app(dir.path()), "/v1/lemgram/saknas..nn.1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({}));
    }

    #[tokio::test]
    async fn root_redirects_to_docs() {
        let dir = tempfile::tempdir().unwrap();
        let resp = app(dir.path())
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(resp.headers()["location"], "/docs");
    }
}
