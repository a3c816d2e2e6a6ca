use payloads::requests::UserData;
use reqwest::StatusCode;
use test_helpers::{assert_status_code, spawn_app, user_details_a};

#[tokio::test]
async fn create_read_update_delete_user() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let company = app.create_test_company().await?;
    let unit = app.create_test_unit(&company.id).await?;

    let created = app
        .client
        .create_user(&user_details_a(company.id, unit.id))
        .await?;
    assert!(created.is_created());
    let user = created.body;
    assert_eq!(app.client.get_user(&user.id).await?, user);

    let second_unit = app.create_test_unit(&company.id).await?;
    let updated = app
        .client
        .update_user(
            &user.id,
            &UserData {
                name: "Jane Doe".into(),
                email: "jane.doe@example.com".into(),
                company_id: company.id,
                unit_id: second_unit.id,
            },
        )
        .await?;
    assert!(updated.is_ok());
    assert_eq!(updated.body.unit_id, second_unit.id);
    assert_eq!(updated.body.email, "jane.doe@example.com");

    app.client.delete_user(&user.id).await?;
    assert_status_code(app.client.get_user(&user.id).await, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn user_unit_must_belong_to_user_company() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let acme = app.create_test_company().await?;
    let globex = app.create_test_company().await?;
    let globex_unit = app.create_test_unit(&globex.id).await?;

    let result = app
        .client
        .create_user(&user_details_a(acme.id, globex_unit.id))
        .await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn malformed_email_is_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let company = app.create_test_company().await?;
    let unit = app.create_test_unit(&company.id).await?;

    let mut details = user_details_a(company.id, unit.id);
    details.email = "john.doe".into();
    assert_status_code(
        app.client.create_user(&details).await,
        StatusCode::BAD_REQUEST,
    );

    Ok(())
}
