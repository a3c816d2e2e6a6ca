use payloads::{AssetStatus, CompanyId};
use reqwest::StatusCode;
use test_helpers::{asset_details_a, assert_status_code, spawn_app};

#[tokio::test]
async fn create_read_update_delete_asset() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let company = app.create_test_company().await?;
    let unit = app.create_test_unit(&company.id).await?;

    let details = asset_details_a(company.id, unit.id);
    let created = app.client.create_asset(&details).await?;
    assert!(created.is_created());
    let asset = created.body;
    assert_eq!(asset.name, details.name);
    assert_eq!(asset.metrics, details.metrics);
    assert_eq!(asset.specifications, details.specifications);

    assert_eq!(app.client.get_asset(&asset.id).await?, asset);

    let mut changed = details.clone();
    changed.status = AssetStatus::InOperation;
    changed.healthscore = 91.5;
    changed.sensors = vec!["GSJ1535".into(), "HIO4510".into()];
    let updated = app.client.update_asset(&asset.id, &changed).await?;
    assert!(updated.is_ok());
    assert_eq!(updated.body.status, AssetStatus::InOperation);
    assert_eq!(updated.body.healthscore, 91.5);
    assert_eq!(updated.body.sensors.len(), 2);

    app.client.delete_asset(&asset.id).await?;
    assert_status_code(
        app.client.get_asset(&asset.id).await,
        StatusCode::NOT_FOUND,
    );

    Ok(())
}

#[tokio::test]
async fn company_assets_only_include_that_company() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (acme, acme_unit, _, _) = app.create_test_hierarchy().await?;
    let (globex, globex_unit, _, _) = app.create_test_hierarchy().await?;
    app.create_test_asset(&acme.id, &acme_unit.id).await?;
    app.create_test_asset(&globex.id, &globex_unit.id).await?;

    let assets = app.client.list_company_assets(&acme.id).await?;
    assert_eq!(assets.len(), 2);
    assert!(assets.iter().all(|asset| asset.company_id == acme.id));

    let assets = app.client.list_company_assets(&globex.id).await?;
    assert_eq!(assets.len(), 2);
    assert!(assets.iter().all(|asset| asset.company_id == globex.id));

    Ok(())
}

#[tokio::test]
async fn healthscore_outside_percentage_is_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let company = app.create_test_company().await?;
    let unit = app.create_test_unit(&company.id).await?;

    let mut details = asset_details_a(company.id, unit.id);
    details.healthscore = 100.5;
    assert_status_code(
        app.client.create_asset(&details).await,
        StatusCode::BAD_REQUEST,
    );

    details.healthscore = 100.0;
    details.company_id = CompanyId(999);
    assert_status_code(
        app.client.create_asset(&details).await,
        StatusCode::BAD_REQUEST,
    );

    Ok(())
}

#[tokio::test]
async fn blank_sensor_entries_are_dropped() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let company = app.create_test_company().await?;
    let unit = app.create_test_unit(&company.id).await?;

    let mut details = asset_details_a(company.id, unit.id);
    details.sensors = vec!["GSJ1535".into(), "   ".into()];
    let asset = app.client.create_asset(&details).await?.body;
    assert_eq!(asset.sensors, vec!["GSJ1535".to_string()]);

    Ok(())
}
