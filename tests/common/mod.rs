#![allow(dead_code)]

use axum_test::TestServer;
use sqlx::PgPool;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use url_shortener::domain::entities::NewShortUrl;
use url_shortener::domain::repositories::UrlRepository;
use url_shortener::infrastructure::persistence::InMemoryUrlRepository;
use url_shortener::routes::app_router;
use url_shortener::state::AppState;
use url_shortener::utils::code_generator::CodeGenerator;

/// Generator that replays a fixed list of codes, repeating the last one.
pub struct ScriptedCodeGenerator {
    codes: Mutex<VecDeque<String>>,
    last: Mutex<String>,
    calls: AtomicUsize,
}

impl ScriptedCodeGenerator {
    pub fn new(codes: &[&str]) -> Self {
        Self {
            codes: Mutex::new(codes.iter().map(|c| c.to_string()).collect()),
            last: Mutex::new(codes.last().map(|c| c.to_string()).unwrap_or_default()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CodeGenerator for ScriptedCodeGenerator {
    fn generate(&self, _length: usize) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.codes.lock().unwrap().pop_front() {
            Some(code) => code,
            None => self.last.lock().unwrap().clone(),
        }
    }
}

pub fn create_test_state() -> (AppState, Arc<InMemoryUrlRepository>) {
    let repository = Arc::new(InMemoryUrlRepository::new());
    let state = AppState::with_repository(repository.clone());

    (state, repository)
}

pub fn create_scripted_state(
    generator: Arc<ScriptedCodeGenerator>,
) -> (AppState, Arc<InMemoryUrlRepository>) {
    let repository = Arc::new(InMemoryUrlRepository::new());
    let state = AppState::with_generator(repository.clone(), generator);

    (state, repository)
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(app_router(state)).unwrap()
}

pub async fn seed_url(repository: &InMemoryUrlRepository, code: &str, url: &str) {
    repository
        .insert(NewShortUrl::new(url, code))
        .await
        .unwrap();
}

pub async fn create_test_url(pool: &PgPool, code: &str, url: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO urls (original_url, short_code) VALUES ($1, $2) RETURNING id")
        .bind(url)
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_inactive_url(pool: &PgPool, code: &str, url: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO urls (original_url, short_code, is_active) VALUES ($1, $2, FALSE) RETURNING id",
    )
    .bind(url)
    .bind(code)
    .fetch_one(pool)
    .await
    .unwrap()
}
