//! Command handlers against a file-backed database and object store.

use std::time::Duration;

use stockroom_cli::handlers::{add::AddArgs, edit::EditArgs};
use stockroom_cli::{CliContext, bootstrap_with, handlers};
use stockroom_core::{NewProduct, StockroomConfig, SubmitOutcome};
use stockroom_db::{CoreFactory, setup_database};
use tempfile::TempDir;

async fn context(temp: &TempDir) -> CliContext {
    let config = StockroomConfig::from_lookup(Some(temp.path()), |key| {
        (key == "STOCKROOM_WATCH_INTERVAL_MS").then(|| "20".to_string())
    })
    .unwrap();
    let pool = setup_database(&config.database_path().unwrap())
        .await
        .unwrap();
    bootstrap_with(CoreFactory::product_repository(pool), config).unwrap()
}

#[tokio::test]
async fn add_edit_export_remove_round() {
    let temp = TempDir::new().unwrap();
    let ctx = context(&temp).await;

    let image = temp.path().join("lamp.png");
    std::fs::write(&image, b"png").unwrap();

    let SubmitOutcome::Created(id) = handlers::add::execute(
        &ctx,
        AddArgs {
            name: "Desk lamp".to_string(),
            quantity: "8".to_string(),
            price: "24.5".to_string(),
            image: Some(image),
        },
    )
    .await
    .unwrap() else {
        panic!("expected created");
    };

    handlers::edit::execute(
        &ctx,
        EditArgs {
            id: id.clone(),
            name: Some("Desk lamp, brass".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let listed = handlers::list::execute(&ctx, Some("BRASS"), false)
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].quantity, 8);

    let export = handlers::export::execute(&ctx, &temp.path().join("out"))
        .await
        .unwrap();
    let body = std::fs::read_to_string(export).unwrap();
    let mut lines = body.lines();
    assert_eq!(lines.next(), Some("Product Name,Quantity,Price,Image URL"));
    let row = lines.next().unwrap();
    assert!(row.starts_with("\"Desk lamp, brass\",8,24.50,file://"));
    assert!(lines.next().is_none());

    let image_path = listed[0].image_path.clone();
    assert!(ctx.config().storage_root().unwrap().join(&image_path).is_file());

    assert!(handlers::remove::execute(&ctx, &id, true).await.unwrap());
    assert!(!ctx.config().storage_root().unwrap().join(&image_path).exists());
    assert!(ctx.app().inventory().list().await.unwrap().is_empty());
}

#[tokio::test]
async fn watcher_sees_commits_from_another_context() {
    let temp = TempDir::new().unwrap();
    let ours = context(&temp).await;
    let theirs = context(&temp).await;

    let mut stream = ours.app().inventory().subscribe().await.unwrap();
    assert!(stream.next().await.unwrap().is_empty());
    let watcher = ours.watch_external_changes().await.unwrap();

    theirs
        .app()
        .inventory()
        .create(&NewProduct::new("Elsewhere", 1, 1.0))
        .await
        .unwrap();

    let snapshot = tokio::time::timeout(Duration::from_secs(5), stream.next())
        .await
        .expect("watcher did not publish")
        .unwrap();
    assert_eq!(snapshot[0].name, "Elsewhere");

    watcher.abort();
}
