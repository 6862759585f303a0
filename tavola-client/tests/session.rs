//! Token storage and client rebuild against a mock backend

mod common;

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use common::MockBackend;
use serde_json::{Value, json};
use tavola_client::{ClientConfig, FileTokenStore, MemoryTokenStore, SharedClient, TokenStore};
use tempfile::TempDir;

#[tokio::test]
async fn test_rebuild_picks_up_new_token() -> anyhow::Result<()> {
    let backend = MockBackend::start().await;
    backend.respond(Method::GET, "/desk;", StatusCode::OK, json!([]));

    let store = Arc::new(MemoryTokenStore::new());
    let client = SharedClient::new(ClientConfig::new(backend.base_url()), store.clone())?;
    let tables = client.tables();

    tables.table_list().await?;

    // storing a token alone changes nothing
    store.save("abc123")?;
    tables.table_list().await?;

    client.rebuild().await?;
    tables.table_list().await?;

    let auth: Vec<Option<String>> = backend
        .requests()
        .iter()
        .map(|r| r.authorization().map(str::to_string))
        .collect();
    assert_eq!(auth, vec![None, None, Some("abc123".to_string())]);
    Ok(())
}

#[tokio::test]
async fn test_snapshot_taken_before_rebuild_keeps_old_headers() -> anyhow::Result<()> {
    let backend = MockBackend::start().await;
    backend.respond(Method::GET, "/category;", StatusCode::OK, json!([]));

    let client = SharedClient::new(
        ClientConfig::new(backend.base_url()),
        Arc::new(MemoryTokenStore::new()),
    )?;

    let in_flight = client.current().await;
    client.login_with_token("abc123").await?;

    let _: Value = in_flight.get("category;").await?;
    let _: Value = client.current().await.get("category;").await?;

    let requests = backend.requests();
    assert_eq!(requests[0].authorization(), None);
    assert_eq!(requests[1].authorization(), Some("abc123"));
    Ok(())
}

#[tokio::test]
async fn test_logout_drops_header() -> anyhow::Result<()> {
    let backend = MockBackend::start().await;
    backend.respond(Method::GET, "/product;", StatusCode::OK, json!([]));

    let client = SharedClient::new(
        ClientConfig::new(backend.base_url()),
        Arc::new(MemoryTokenStore::with_token("abc123")),
    )?;
    client.products().products().await?;
    client.logout().await?;
    client.products().products().await?;

    let requests = backend.requests();
    assert_eq!(requests[0].authorization(), Some("abc123"));
    assert_eq!(requests[1].authorization(), None);
    Ok(())
}

#[tokio::test]
async fn test_file_token_survives_restart() -> anyhow::Result<()> {
    let backend = MockBackend::start().await;
    backend.respond(Method::GET, "/desk;", StatusCode::OK, json!([]));
    let temp_dir = TempDir::new()?;
    let config = ClientConfig::new(backend.base_url()).with_token_dir(temp_dir.path());

    let first = SharedClient::new(config.clone(), Arc::new(FileTokenStore::new(temp_dir.path())))?;
    first.login_with_token("persisted-token").await?;
    drop(first);

    let second = SharedClient::new(config, Arc::new(FileTokenStore::new(temp_dir.path())))?;
    second.tables().table_list().await?;

    assert_eq!(
        backend.single_request().authorization(),
        Some("persisted-token")
    );
    Ok(())
}
