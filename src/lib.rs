pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::config::Config;
use crate::services::{
    quiz_service::QuizService,
    storage_service::{FileStore, KeyValueStore, MemoryStore, StorageService},
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: QuizService,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let store: Arc<dyn KeyValueStore> = match &config.storage_dir {
            Some(dir) => {
                tracing::info!("Persisting quiz state under {}", dir.display());
                Arc::new(FileStore::new(dir))
            }
            None => {
                tracing::warn!("STORAGE_DIR not set, quiz state will not survive a restart");
                Arc::new(MemoryStore::new())
            }
        };
        Self::with_store(store, &config.storage_key)
    }

    pub fn with_store(store: Arc<dyn KeyValueStore>, key: &str) -> Self {
        let storage = StorageService::new(store, key);
        Self {
            quiz_service: QuizService::load(storage),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health))
        .route("/api/quiz", get(routes::quiz::get_quiz))
        .route("/api/quiz/answers/:index", patch(routes::quiz::set_answer))
        .route("/api/quiz/reset", post(routes::quiz::reset))
        .route("/api/quiz/result", get(routes::quiz::get_result))
        .route("/api/quiz/summary", get(routes::quiz::get_summary))
        .route("/api/quiz/export", get(routes::quiz::export_result))
        .with_state(state)
}
