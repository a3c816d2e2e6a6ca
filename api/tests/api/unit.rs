use payloads::{CompanyId, requests::UnitData};
use reqwest::StatusCode;
use test_helpers::{assert_status_code, spawn_app, unit_details_a};

#[tokio::test]
async fn create_read_update_delete_unit() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let company = app.create_test_company().await?;

    let created = app.client.create_unit(&unit_details_a(company.id)).await?;
    assert!(created.is_created());
    let unit = created.body;
    assert_eq!(unit.company_id, company.id);

    assert_eq!(app.client.get_unit(&unit.id).await?, unit);
    assert_eq!(app.client.list_company_units(&company.id).await?, vec![
        unit.clone()
    ]);

    let updated = app
        .client
        .update_unit(
            &unit.id,
            &UnitData {
                name: "Unidade Tobias".into(),
                company_id: company.id,
            },
        )
        .await?;
    assert!(updated.is_ok());
    assert_eq!(updated.body.name, "Unidade Tobias");

    app.client.delete_unit(&unit.id).await?;
    assert!(
        app.client
            .get_unit(&unit.id)
            .await
            .unwrap_err()
            .to_string()
            .contains("Unit not found")
    );

    Ok(())
}

#[tokio::test]
async fn unit_requires_existing_company() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app.client.create_unit(&unit_details_a(CompanyId(7))).await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn units_are_listed_per_company() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let first = app.create_test_company().await?;
    let second = app.create_test_company().await?;
    app.create_test_unit(&first.id).await?;
    app.create_test_unit(&second.id).await?;
    app.create_test_unit(&second.id).await?;

    let units = app.client.list_company_units(&second.id).await?;
    assert_eq!(units.len(), 2);
    assert!(units.iter().all(|unit| unit.company_id == second.id));

    Ok(())
}

#[tokio::test]
async fn deleting_unit_removes_its_users_and_assets() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (company, unit, user, asset) = app.create_test_hierarchy().await?;
    let other_unit = app.create_test_unit(&company.id).await?;
    let other_user = app.create_test_user(&company.id, &other_unit.id).await?;

    app.client.delete_unit(&unit.id).await?;

    assert_status_code(app.client.get_user(&user.id).await, StatusCode::NOT_FOUND);
    assert_status_code(
        app.client.get_asset(&asset.id).await,
        StatusCode::NOT_FOUND,
    );
    assert_eq!(app.client.list_company_users(&company.id).await?, vec![
        other_user
    ]);

    Ok(())
}
