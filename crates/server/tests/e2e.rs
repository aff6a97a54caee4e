use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use service::{InMemoryUserStore, UserStore};
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let users: Arc<dyn UserStore> = InMemoryUserStore::new();
    let app = server::build_app(&configs::AppConfig::default(), users)?;

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}/v1", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_healthz() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/healthz", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({}));
    Ok(())
}

#[tokio::test]
async fn e2e_users_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.post(format!("{}/users", app.base_url)).json(&json!({"name": "Alice"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<Value>().await?;
    assert_eq!(created, json!({"id": 1, "name": "Alice"}));

    let res = c.put(format!("{}/users/1", app.base_url)).json(&json!({"name": "Alicia"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({"id": 1, "name": "Alicia"}));

    let res = c.get(format!("{}/users", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!([{"id": 1, "name": "Alicia"}]));

    let res = c.delete(format!("{}/users/1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c.delete(format!("{}/users/1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await?, json!({"error": "User not found"}));
    Ok(())
}

#[tokio::test]
async fn e2e_malformed_body_is_bad_request() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::Client::new()
        .post(format!("{}/users", app.base_url))
        .header("content-type", "application/json")
        .body("{\"name\":")
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?, json!({"error": "error at payload"}));
    Ok(())
}
