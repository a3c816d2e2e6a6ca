use payloads::{CompanyId, requests::CompanyData};
use reqwest::StatusCode;
use test_helpers::{assert_status_code, spawn_app};

#[tokio::test]
async fn create_company_answers_created() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let response = app
        .client
        .create_company(&CompanyData {
            name: "Acme".into(),
        })
        .await?;

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.is_created());
    assert_eq!(response.body.name, "Acme");

    let companies = app.client.list_companies().await?;
    assert_eq!(companies, vec![response.body]);

    Ok(())
}

#[tokio::test]
async fn create_read_update_delete_company() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let company = app.create_test_company().await?;

    let retrieved = app.client.get_company(&company.id).await?;
    assert_eq!(retrieved, company);

    let updated = app
        .client
        .update_company(
            &company.id,
            &CompanyData {
                name: "Empresa Renomeada".into(),
            },
        )
        .await?;
    assert!(updated.is_ok());
    assert_eq!(updated.body.id, company.id);
    assert_eq!(updated.body.name, "Empresa Renomeada");

    let deleted = app.client.delete_company(&company.id).await?;
    assert_eq!(deleted.status, StatusCode::OK);
    assert!(
        app.client
            .get_company(&company.id)
            .await
            .unwrap_err()
            .to_string()
            .contains("Company not found")
    );

    Ok(())
}

#[tokio::test]
async fn blank_company_name_is_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app
        .client
        .create_company(&CompanyData { name: "  ".into() })
        .await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn missing_company_is_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;

    assert_status_code(
        app.client.get_company(&CompanyId(42)).await,
        StatusCode::NOT_FOUND,
    );
    assert_status_code(
        app.client.list_company_assets(&CompanyId(42)).await,
        StatusCode::NOT_FOUND,
    );
    assert_status_code(
        app.client.delete_company(&CompanyId(42)).await,
        StatusCode::NOT_FOUND,
    );

    Ok(())
}

#[tokio::test]
async fn deleting_company_removes_its_hierarchy() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (company, unit, user, asset) = app.create_test_hierarchy().await?;

    app.client.delete_company(&company.id).await?;

    assert_status_code(app.client.get_unit(&unit.id).await, StatusCode::NOT_FOUND);
    assert_status_code(app.client.get_user(&user.id).await, StatusCode::NOT_FOUND);
    assert_status_code(
        app.client.get_asset(&asset.id).await,
        StatusCode::NOT_FOUND,
    );

    Ok(())
}
