//! Integration tests for the pokemon routes.
//!
//! Each test builds the real router over an in-memory database and a fake
//! remote catalog, then drives it with `oneshot` requests.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use serde_json::json;

use common::{PUBLIC_URL, TestApp, names};
use pokedex_axum::bootstrap::CorsConfig;
use pokedex_core::testing::FakeCatalog;

#[tokio::test]
async fn ping_returns_pong() {
    let app = TestApp::numbered(0).await;
    let (status, body) = app.get("/ping").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"pong");
}

#[tokio::test]
async fn listing_merges_local_then_remote() {
    let app = TestApp::numbered(5).await;
    app.create("gym1", "first", "fire").await;
    app.create("gym1", "second", "water").await;

    let (status, page) = app.get_json("/gym1/pokemons?limit=3&offset=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["count"], 7);
    assert_eq!(names(&page), ["first", "remote0", "remote1"]);

    assert_eq!(
        page["next"],
        format!("{PUBLIC_URL}/gym1/pokemons?limit=3&offset=4")
    );
    assert_eq!(page["nextLimit"], 3);
    assert_eq!(page["nextOffset"], 4);
    assert_eq!(
        page["previous"],
        format!("{PUBLIC_URL}/gym1/pokemons?limit=1&offset=0")
    );
    assert_eq!(page["previousLimit"], 1);
    assert_eq!(page["previousOffset"], 0);
}

#[tokio::test]
async fn local_entries_are_normalized() {
    let app = TestApp::numbered(1).await;
    app.create("gym1", "sparky", "electric").await;

    let (_, page) = app.get_json("/gym1/pokemons?limit=1").await;
    let entry = &page["results"][0];
    assert_eq!(entry["name"], "sparky");
    assert_eq!(entry["types"], json!(["electric"]));
    assert_eq!(entry["weight"], 42);
    assert_eq!(entry["height"], 10);
    assert_eq!(entry["base_experience"], 0);
    assert_eq!(entry["forms"], json!([]));
    assert_eq!(entry["stats"]["special-attack"], 0);
}

#[tokio::test]
async fn namespaces_are_isolated() {
    let app = TestApp::numbered(2).await;
    app.create("gym1", "sparky", "electric").await;

    let (_, gym1) = app.get_json("/gym1/pokemons").await;
    let (_, gym2) = app.get_json("/gym2/pokemons").await;
    assert_eq!(names(&gym1), ["sparky", "remote0", "remote1"]);
    assert_eq!(names(&gym2), ["remote0", "remote1"]);
}

#[tokio::test]
async fn first_and_last_pages_omit_links() {
    let app = TestApp::numbered(5).await;

    let (_, first) = app.get_json("/gym1/pokemons?limit=5").await;
    assert!(first["next"].is_null());
    assert!(first["previous"].is_null());
    assert!(first.get("nextLimit").is_none());
    assert!(first.get("previousOffset").is_none());

    let (_, past_end) = app.get_json("/gym1/pokemons?limit=5&offset=20").await;
    assert_eq!(past_end["count"], 5);
    assert_eq!(past_end["results"], json!([]));
    assert!(past_end["next"].is_null());
}

#[tokio::test]
async fn malformed_paging_falls_back_to_defaults() {
    let app = TestApp::numbered(12).await;

    let (status, page) = app
        .get_json("/gym1/pokemons?limit=lots&offset=-4")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["results"].as_array().unwrap().len(), 10);
    assert!(page["previous"].is_null());
    assert_eq!(page["nextOffset"], 10);
}

#[tokio::test]
async fn zero_limit_uses_the_default_page_size() {
    let app = TestApp::numbered(12).await;

    let (status, page) = app.get_json("/gym1/pokemons?limit=0&offset=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["results"].as_array().unwrap().len(), 10);
    assert_eq!(page["nextLimit"], 10);
    assert_eq!(page["nextOffset"], 11);

    // Following next reaches the end instead of repeating the same window
    let next = page["next"].as_str().unwrap().trim_start_matches(PUBLIC_URL).to_string();
    let (_, last) = app.get_json(&next).await;
    assert_eq!(names(&last), ["remote11"]);
    assert!(last["next"].is_null());
}

#[tokio::test]
async fn search_filters_and_is_carried_in_links() {
    let app = TestApp::numbered(12).await;
    app.create("gym1", "remote-fan", "normal").await;

    let (_, page) = app
        .get_json("/gym1/pokemons?limit=2&searchText=remote1")
        .await;
    // remote1, remote10, remote11
    assert_eq!(page["count"], 3);
    assert_eq!(names(&page), ["remote1", "remote10"]);
    assert_eq!(
        page["next"],
        format!("{PUBLIC_URL}/gym1/pokemons?limit=2&offset=2&searchText=remote1")
    );

    let (_, case_sensitive) = app.get_json("/gym1/pokemons?searchText=REMOTE").await;
    assert_eq!(case_sensitive["count"], 0);
}

#[tokio::test]
async fn catalog_is_populated_once_across_requests() {
    let app = TestApp::numbered(4).await;

    app.get_json("/gym1/pokemons").await;
    app.get_json("/gym2/pokemons?offset=2").await;
    app.create("gym1", "late", "ghost").await;
    let (_, page) = app.get_json("/gym1/pokemons").await;

    assert_eq!(names(&page)[0], "late");
    assert_eq!(app.catalog.list_calls(), 1);
    assert_eq!(app.catalog.resolve_calls(), 4);
}

#[tokio::test]
async fn get_one_prefers_remote() {
    let app = TestApp::numbered(3).await;
    app.create("gym1", "remote1", "dragon").await;

    let (status, entry) = app.get_json("/gym1/pokemons/remote1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(entry["id"], 2);
    assert_eq!(entry["types"], json!(["normal"]));
}

#[tokio::test]
async fn get_one_falls_back_to_local() {
    let app = TestApp::numbered(3).await;
    app.create("gym1", "sparky", "electric").await;

    let (status, entry) = app.get_json("/gym1/pokemons/sparky").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(entry["types"], json!(["electric"]));

    // Local entries are only visible in their own namespace
    let (status, body) = app.get("/gym2/pokemons/sparky").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn get_one_survives_remote_failure() {
    let fake = FakeCatalog::numbered(3).failing_on("remote2");
    let app = TestApp::with_catalog(fake, &CorsConfig::AllowAll).await;

    let (status, body) = app.get("/gym1/pokemons/remote2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());

    app.create("gym1", "remote2", "steel").await;
    let (status, entry) = app.get_json("/gym1/pokemons/remote2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(entry["types"], json!(["steel"]));
}

#[tokio::test]
async fn create_returns_the_entry() {
    let app = TestApp::numbered(0).await;

    let (status, body) = app
        .post_json(
            "/gym1/pokemons",
            r#"{"name":"volt","type":"electric","weight":61,"height":0}"#,
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let entry: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(entry["name"], "volt");
    assert_eq!(entry["weight"], 61);
    assert_eq!(entry["height"], 10);
    assert!(entry["image"].as_str().unwrap().ends_with("/25.png"));
}

#[tokio::test]
async fn duplicate_create_conflicts() {
    let app = TestApp::numbered(0).await;
    app.create("x", "pikachu", "electric").await;

    let (status, body) = app
        .post_json("/x/pokemons", r#"{"name":"pikachu","type":"electric"}"#)
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(&body[..], b"Already exists");

    // Same name in another namespace is fine
    app.create("y", "pikachu", "electric").await;
}

#[tokio::test]
async fn invalid_create_bodies_are_bad_requests() {
    let app = TestApp::numbered(0).await;

    for body in [
        r#"{"name":"  ","type":"electric"}"#,
        r#"{"name":"volt","type":""}"#,
        r#"{"name":"volt"}"#,
        r#"{"name":"volt","type":"electric","weight":"heavy"}"#,
        "not json",
    ] {
        let (status, raw) = app.post_json("/gym1/pokemons", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {body}");
        let error: serde_json::Value = serde_json::from_slice(&raw).unwrap();
        assert_eq!(error["status"], 400);
        assert!(error["error"].is_string());
    }

    let (_, admin) = app.get_json("/admin/pokemons").await;
    assert_eq!(admin, json!([]));
}

#[tokio::test]
async fn admin_lists_every_namespace_in_order() {
    let app = TestApp::numbered(0).await;
    app.create("zeta", "a", "fire").await;
    app.create("alpha", "b", "water").await;
    app.create("alpha", "c", "grass").await;

    let (status, all) = app.get_json("/admin/pokemons").await;
    assert_eq!(status, StatusCode::OK);

    let keys: Vec<(String, String)> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|p| {
            (
                p["namespace"].as_str().unwrap().to_string(),
                p["name"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(
        keys,
        [
            ("alpha".to_string(), "b".to_string()),
            ("alpha".to_string(), "c".to_string()),
            ("zeta".to_string(), "a".to_string()),
        ]
    );
    assert_eq!(all[0]["type"], "water");
}

#[tokio::test]
async fn catalog_failure_is_a_json_500() {
    let fake = FakeCatalog::numbered(3).failing_on("remote1");
    let app = TestApp::with_catalog(fake, &CorsConfig::AllowAll).await;

    let (status, body) = app.get("/gym1/pokemons").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["status"], 500);
    assert!(error["error"].as_str().unwrap().contains("remote1"));

    // Nothing was kept, so the next request tries again
    app.get("/gym1/pokemons").await;
    assert_eq!(app.catalog.list_calls(), 2);
}

fn preflight(origin: &str) -> Request<Body> {
    Request::builder()
        .method(Method::OPTIONS)
        .uri("/gym1/pokemons")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn cors_allows_any_origin_by_default() {
    let app = TestApp::numbered(0).await;
    let response = tower::ServiceExt::oneshot(app.router.clone(), preflight("https://anywhere.example"))
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn cors_origin_list_is_enforced() {
    let cors = CorsConfig::AllowOrigins(vec!["https://app.example".to_string()]);
    let app = TestApp::with_catalog(FakeCatalog::numbered(0), &cors).await;

    let allowed = tower::ServiceExt::oneshot(app.router.clone(), preflight("https://app.example"))
        .await
        .unwrap();
    assert_eq!(
        allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://app.example"
    );

    let denied = tower::ServiceExt::oneshot(app.router.clone(), preflight("https://evil.example"))
        .await
        .unwrap();
    assert!(
        denied
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}
