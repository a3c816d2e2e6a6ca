mod asset;
mod company;
mod unit;
mod user;

use test_helpers::spawn_app;

#[tokio::test]
async fn health_check() -> anyhow::Result<()> {
    let app = spawn_app().await;

    app.client.health_check().await?;

    Ok(())
}

#[tokio::test]
async fn responses_are_never_cached() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let url = format!("{}/companies", app.client.address);
    let response = app.client.inner_client.get(&url).send().await?;

    let cache_control = response
        .headers()
        .get("cache-control")
        .expect("Cache-Control header should be present")
        .to_str()?;
    assert_eq!(cache_control, "no-store");

    Ok(())
}
