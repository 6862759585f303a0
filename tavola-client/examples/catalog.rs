// tavola-client/examples/catalog.rs
// Prints the catalog of the configured backend.
//
// Usage: catalog [token]
//   TAVOLA_BASE_URL=http://localhost:9000 cargo run --example catalog

use tavola_client::{SelectionStore, SharedClient, logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init_logger();

    let client = SharedClient::from_env()?;
    if let Some(token) = std::env::args().nth(1) {
        client.login_with_token(&token).await?;
    }
    tracing::info!(base_url = %client.config().base_url, "Loading catalog");

    let image_path = client.image_path().await;
    for category in client.categories().category_list().await? {
        let image = category
            .image()
            .map(|i| format!("{image_path}{i}"))
            .unwrap_or_default();
        println!(
            "[{}] {} {}",
            category.id().unwrap_or_default(),
            category.name().unwrap_or("-"),
            image
        );
    }

    for product in client.products().products().await? {
        println!(
            "  {} - {:?} ({:?})",
            product.name().unwrap_or("-"),
            product.price(),
            product.category_id()
        );
    }

    let tables = client.tables().table_list().await?;
    let mut selection = SelectionStore::new();
    if let Some(id) = tables.first().and_then(|t| t.id()) {
        selection.set_table_id(id);
    }
    for table in &tables {
        let selected = table.id().is_some() && selection.table_id() == table.id();
        let marker = if selected { "*" } else { " " };
        println!(
            "{marker} table {} seats {:?}",
            table.name().unwrap_or("-"),
            table.capacity()
        );
    }

    Ok(())
}
