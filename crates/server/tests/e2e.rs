use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use migration::MigratorTrait;
use reqwest::StatusCode as HttpStatusCode;
use sea_orm::{ConnectOptions, Database};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes::{self, cheeses};
use service::cheese::{repository::SeaOrmCheeseRepository, service::CheeseService};

fn cors() -> CorsLayer { CorsLayer::very_permissive() }

struct TestApp {
    base_url: String,
}

/// Spin up the app on an ephemeral port against a fresh in-memory SQLite
/// database. One pooled connection keeps the database alive for the run.
async fn start_server() -> anyhow::Result<TestApp> {
    let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());
    opts.max_connections(1).sqlx_logging(false);
    let db = Database::connect(opts).await?;
    migration::Migrator::up(&db, None).await?;

    let repo = Arc::new(SeaOrmCheeseRepository { db });
    let state = cheeses::ServerState { cheeses: Arc::new(CheeseService::new(repo)) };

    let app: Router = routes::build_router(cors(), state);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn e2e_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_list_on_empty_store_returns_empty_array() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/cheese", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body, json!([]));
    Ok(())
}

#[tokio::test]
async fn e2e_create_then_list_round_trips() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .post(format!("{}/cheese/new", app.base_url))
        .json(&json!({"name": "Gouda"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body, json!({"id": 1, "name": "Gouda"}));

    let res = c.get(format!("{}/cheese", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body, json!([{"id": 1, "name": "Gouda"}]));
    Ok(())
}

#[tokio::test]
async fn e2e_create_echoes_all_fields_with_identifier() -> anyhow::Result<()> {
    let app = start_server().await?;
    let payload = json!({"name": "Stilton", "origin": "England", "crumbly": true});

    let res = client()
        .post(format!("{}/cheese/new", app.base_url))
        .json(&payload)
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert!(body["id"].is_i64());
    assert_eq!(body["name"], payload["name"]);
    assert_eq!(body["origin"], payload["origin"]);
    assert_eq!(body["crumbly"], payload["crumbly"]);
    Ok(())
}

#[tokio::test]
async fn e2e_create_twice_assigns_distinct_ids() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let a = c
        .post(format!("{}/cheese/new", app.base_url))
        .json(&json!({"name": "Brie"}))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    let b = c
        .post(format!("{}/cheese/new", app.base_url))
        .json(&json!({"name": "Camembert"}))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_ne!(a["id"], b["id"]);

    let all = c
        .get(format!("{}/cheese", app.base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(all.as_array().map(Vec::len), Some(2));
    Ok(())
}

#[tokio::test]
async fn e2e_create_with_id_replaces_record() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let created = c
        .post(format!("{}/cheese/new", app.base_url))
        .json(&json!({"name": "Comte"}))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;

    let res = c
        .post(format!("{}/cheese/new", app.base_url))
        .json(&json!({"id": created["id"], "name": "Comte Extra"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let replaced = res.json::<serde_json::Value>().await?;
    assert_eq!(replaced["id"], created["id"]);
    assert_eq!(replaced["name"], "Comte Extra");

    let all = c
        .get(format!("{}/cheese", app.base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(all, json!([{"id": created["id"], "name": "Comte Extra"}]));
    Ok(())
}

#[tokio::test]
async fn e2e_malformed_body_is_client_error() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .post(format!("{}/cheese/new", app.base_url))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await?;
    assert!(res.status().is_client_error());
    Ok(())
}
