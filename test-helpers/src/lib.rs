pub mod mock;

use api::{Config, telemetry};
use jiff::Timestamp;
use payloads::{
    Asset, AssetMetrics, AssetSpecifications, AssetStatus, ClientConfig,
    Company, CompanyId, Unit, UnitId, User, requests,
};
use reqwest::StatusCode;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

pub struct TestApp {
    #[allow(unused)]
    pub port: u16,
    pub client: payloads::APIClient,
}

pub async fn spawn_app_on_port(port: u16) -> TestApp {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let mut config = Config {
        ip: "127.0.0.1".into(),
        port,
        allowed_origins: vec!["*".to_string()],
    };

    let server = api::build(&mut config).unwrap();
    tokio::spawn(server);

    TestApp {
        port: config.port,
        client: payloads::APIClient::new(&ClientConfig {
            base_url: format!("http://127.0.0.1:{}/api", config.port),
        }),
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}

/// Functions to populate test data
///
/// Using anyhow::Result lets us get a backtrace from when the error was fist
/// converted to anyhow::Result. Run with RUST_BACKTRACE=1 to view.
impl TestApp {
    pub async fn create_test_company(&self) -> anyhow::Result<Company> {
        let response = self.client.create_company(&company_details_a()).await?;
        Ok(response.body)
    }

    pub async fn create_test_unit(
        &self,
        company_id: &CompanyId,
    ) -> anyhow::Result<Unit> {
        let response = self
            .client
            .create_unit(&unit_details_a(*company_id))
            .await?;
        Ok(response.body)
    }

    pub async fn create_test_user(
        &self,
        company_id: &CompanyId,
        unit_id: &UnitId,
    ) -> anyhow::Result<User> {
        let response = self
            .client
            .create_user(&user_details_a(*company_id, *unit_id))
            .await?;
        Ok(response.body)
    }

    pub async fn create_test_asset(
        &self,
        company_id: &CompanyId,
        unit_id: &UnitId,
    ) -> anyhow::Result<Asset> {
        let response = self
            .client
            .create_asset(&asset_details_a(*company_id, *unit_id))
            .await?;
        Ok(response.body)
    }

    /// A company with one unit, one user and one asset.
    pub async fn create_test_hierarchy(
        &self,
    ) -> anyhow::Result<(Company, Unit, User, Asset)> {
        let company = self.create_test_company().await?;
        let unit = self.create_test_unit(&company.id).await?;
        let user = self.create_test_user(&company.id, &unit.id).await?;
        let asset = self.create_test_asset(&company.id, &unit.id).await?;
        Ok((company, unit, user, asset))
    }
}

pub fn company_details_a() -> requests::CompanyData {
    requests::CompanyData {
        name: "Empresa Teste".into(),
    }
}

pub fn unit_details_a(company_id: CompanyId) -> requests::UnitData {
    requests::UnitData {
        name: "Unidade Jaguar".into(),
        company_id,
    }
}

pub fn user_details_a(
    company_id: CompanyId,
    unit_id: UnitId,
) -> requests::UserData {
    requests::UserData {
        name: "John Doe".into(),
        email: "john.doe@example.com".into(),
        company_id,
        unit_id,
    }
}

pub fn asset_details_a(
    company_id: CompanyId,
    unit_id: UnitId,
) -> requests::AssetData {
    requests::AssetData {
        name: "Motor H13D-1".into(),
        model: "motor".into(),
        status: AssetStatus::InAlert,
        healthscore: 70.0,
        image: "https://example.com/assets/motor.jpg".into(),
        specifications: AssetSpecifications {
            max_temp: Some(80.0),
            power: None,
            rpm: Some(1500.0),
        },
        metrics: AssetMetrics {
            total_collects_uptime: 7516,
            total_uptime: 1419.5,
            last_uptime_at: "2021-02-16T16:17:50.180Z"
                .parse::<Timestamp>()
                .unwrap(),
        },
        sensors: vec!["GSJ1535".into()],
        unit_id,
        company_id,
    }
}
