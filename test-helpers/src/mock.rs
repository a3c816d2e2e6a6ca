//! Mock data for UI development
//!
//! Creates a small but realistic hierarchy through the public API, so the
//! console has something to show on every page:
//! - two companies, each with a couple of units
//! - users spread across the units
//! - assets covering every status and all three health bands

use crate::TestApp;
use anyhow::Result;
use jiff::Timestamp;
use payloads::{
    Asset, AssetMetrics, AssetSpecifications, AssetStatus, Company, Unit,
    User, requests,
};

/// Development dataset created against a running api
pub struct DevDataset {
    pub companies: Vec<Company>,
    pub units: Vec<Unit>,
    pub users: Vec<User>,
    pub assets: Vec<Asset>,
}

struct AssetSeed {
    name: &'static str,
    model: &'static str,
    status: AssetStatus,
    healthscore: f64,
    max_temp: Option<f64>,
    power: Option<f64>,
    rpm: Option<f64>,
    total_collects_uptime: u64,
    total_uptime: f64,
    sensors: &'static [&'static str],
}

const ASSET_SEEDS: &[AssetSeed] = &[
    AssetSeed {
        name: "Motor H13D-1",
        model: "motor",
        status: AssetStatus::InAlert,
        healthscore: 70.0,
        max_temp: Some(80.0),
        power: Some(1.5),
        rpm: None,
        total_collects_uptime: 7516,
        total_uptime: 1419.55,
        sensors: &["GSJ1535"],
    },
    AssetSeed {
        name: "Motor H12D- Stage 3",
        model: "motor",
        status: AssetStatus::InOperation,
        healthscore: 80.1,
        max_temp: Some(85.0),
        power: Some(1.5),
        rpm: Some(1250.0),
        total_collects_uptime: 9200,
        total_uptime: 1800.0,
        sensors: &["HIO4510", "GUI5498"],
    },
    AssetSeed {
        name: "Ventilador D22",
        model: "fan",
        status: AssetStatus::InDowntime,
        healthscore: 48.3,
        max_temp: None,
        power: Some(0.5),
        rpm: Some(800.0),
        total_collects_uptime: 1200,
        total_uptime: 400.2,
        sensors: &["FAN0001"],
    },
    AssetSeed {
        name: "Bomba Hidráulica P3",
        model: "pump",
        status: AssetStatus::InOperation,
        healthscore: 75.0,
        max_temp: Some(60.0),
        power: None,
        rpm: Some(3500.0),
        total_collects_uptime: 0,
        total_uptime: 0.0,
        sensors: &[],
    },
];

impl DevDataset {
    pub async fn create(app: &TestApp) -> Result<Self> {
        let mut dataset = DevDataset {
            companies: vec![],
            units: vec![],
            users: vec![],
            assets: vec![],
        };

        let last_uptime_at: Timestamp = "2024-11-20T13:45:00Z".parse()?;

        for (company_name, unit_names) in [
            ("Empresa Teste", ["Unidade Jaguar", "Unidade Tobias"]),
            ("Indústria Beta", ["Planta Norte", "Planta Sul"]),
        ] {
            tracing::info!("🏭 Creating {company_name}");
            let company = app
                .client
                .create_company(&requests::CompanyData {
                    name: company_name.into(),
                })
                .await?
                .body;

            for (unit_index, unit_name) in unit_names.into_iter().enumerate() {
                let unit = app
                    .client
                    .create_unit(&requests::UnitData {
                        name: unit_name.into(),
                        company_id: company.id,
                    })
                    .await?
                    .body;

                let user = app
                    .client
                    .create_user(&requests::UserData {
                        name: format!("Operador {}", unit_index + 1),
                        email: format!(
                            "operador{}.{}@example.com",
                            unit_index + 1,
                            company.id
                        ),
                        company_id: company.id,
                        unit_id: unit.id,
                    })
                    .await?
                    .body;
                dataset.users.push(user);

                // split the seeds between the two units
                for seed in ASSET_SEEDS.iter().skip(unit_index).step_by(2) {
                    let details = requests::AssetData {
                        name: seed.name.into(),
                        model: seed.model.into(),
                        status: seed.status,
                        healthscore: seed.healthscore,
                        image: String::new(),
                        specifications: AssetSpecifications {
                            max_temp: seed.max_temp,
                            power: seed.power,
                            rpm: seed.rpm,
                        },
                        metrics: AssetMetrics {
                            total_collects_uptime: seed.total_collects_uptime,
                            total_uptime: seed.total_uptime,
                            last_uptime_at,
                        },
                        sensors: seed
                            .sensors
                            .iter()
                            .map(|s| s.to_string())
                            .collect(),
                        unit_id: unit.id,
                        company_id: company.id,
                    };
                    let asset = app.client.create_asset(&details).await?.body;
                    dataset.assets.push(asset);
                }
                dataset.units.push(unit);
            }
            dataset.companies.push(company);
        }

        Ok(dataset)
    }

    pub fn print_summary(&self) {
        tracing::info!("📋 Available test data:");
        for company in &self.companies {
            tracing::info!("   🏭 {} ({})", company.name, company.id);
            for unit in self.units.iter().filter(|u| u.company_id == company.id)
            {
                let assets = self
                    .assets
                    .iter()
                    .filter(|a| a.unit_id == unit.id)
                    .count();
                let users =
                    self.users.iter().filter(|u| u.unit_id == unit.id).count();
                tracing::info!(
                    "      ├─ {} ({}): {users} users, {assets} assets",
                    unit.name,
                    unit.id
                );
            }
        }
    }
}
