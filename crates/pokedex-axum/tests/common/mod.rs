//! Shared router fixtures: in-memory database plus a fake remote catalog.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;
use url::Url;

use pokedex_axum::bootstrap::{AxumContext, CorsConfig};
use pokedex_axum::routes::create_router;
use pokedex_core::testing::FakeCatalog;
use pokedex_core::{PokemonService, RemoteCatalog, RemoteCatalogConfig};
use pokedex_db::TestDb;

pub const PUBLIC_URL: &str = "http://test.local";

pub struct TestApp {
    pub router: Router,
    pub catalog: Arc<FakeCatalog>,
    _db: TestDb,
}

impl TestApp {
    /// Router over an empty database and `remote0..remote{n-1}`.
    pub async fn numbered(remote: usize) -> Self {
        Self::with_catalog(FakeCatalog::numbered(remote), &CorsConfig::AllowAll).await
    }

    pub async fn with_catalog(fake: FakeCatalog, cors: &CorsConfig) -> Self {
        let db = TestDb::new().await.unwrap();
        let catalog = Arc::new(fake);
        let remote = Arc::new(RemoteCatalog::new(
            catalog.clone(),
            None,
            RemoteCatalogConfig::default(),
        ));
        let service = Arc::new(PokemonService::new(db.pokemon_repository(), remote));
        let ctx = AxumContext::new(service, Url::parse(PUBLIC_URL).unwrap());

        Self {
            router: create_router(ctx, cors),
            catalog,
            _db: db,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Bytes) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Bytes) {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let (status, body) = self.get(uri).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    pub async fn post_json(&self, uri: &str, body: &str) -> (StatusCode, Bytes) {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Create a local pokemon and assert it was accepted.
    pub async fn create(&self, namespace: &str, name: &str, kind: &str) {
        let body = serde_json::json!({ "name": name, "type": kind }).to_string();
        let (status, _) = self
            .post_json(&format!("/{namespace}/pokemons"), &body)
            .await;
        assert_eq!(status, StatusCode::CREATED, "creating {namespace}/{name}");
    }
}

pub fn names(page: &serde_json::Value) -> Vec<String> {
    page["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["name"].as_str().unwrap().to_string())
        .collect()
}
