pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientConfig, ClientError};

use derive_more::{Display, FromStr};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Id type wrapper helps ensure we don't mix up ids for different resources.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    FromStr,
    Serialize,
    Deserialize,
)]
pub struct CompanyId(pub u64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    FromStr,
    Serialize,
    Deserialize,
)]
pub struct UnitId(pub u64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    FromStr,
    Serialize,
    Deserialize,
)]
pub struct UserId(pub u64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    FromStr,
    Serialize,
    Deserialize,
)]
pub struct AssetId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
}

/// A unit belongs to exactly one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: UnitId,
    pub name: String,
    pub company_id: CompanyId,
}

/// A user belongs to one company and to one unit of that company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub company_id: CompanyId,
    pub unit_id: UnitId,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum AssetStatus {
    #[display("inAlert")]
    InAlert,
    // older datasets spell this "inDownTime"
    #[serde(alias = "inDownTime")]
    #[display("inDowntime")]
    InDowntime,
    #[display("inOperation")]
    InOperation,
}

impl AssetStatus {
    pub const ALL: [AssetStatus; 3] =
        [Self::InAlert, Self::InDowntime, Self::InOperation];

    /// Human readable label shown in tags and selects.
    pub fn label(&self) -> &'static str {
        match self {
            Self::InAlert => "Em Alerta",
            Self::InDowntime => "Em Descanso",
            Self::InOperation => "Em Operação",
        }
    }

    /// Parse the wire name, as found in `<select>` values.
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "inAlert" => Some(Self::InAlert),
            "inDowntime" | "inDownTime" => Some(Self::InDowntime),
            "inOperation" => Some(Self::InOperation),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSpecifications {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_temp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpm: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetMetrics {
    pub total_collects_uptime: u64,
    /// Hours of collection
    pub total_uptime: f64,
    pub last_uptime_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: AssetId,
    pub name: String,
    pub model: String,
    pub status: AssetStatus,
    /// Percentage in [0, 100]
    pub healthscore: f64,
    /// Image URL, possibly empty
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub specifications: AssetSpecifications,
    pub metrics: AssetMetrics,
    #[serde(default)]
    pub sensors: Vec<String>,
    pub unit_id: UnitId,
    pub company_id: CompanyId,
}

/// REST endpoint suffix identifying a collection or entity, relative to the
/// configured base url.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourcePath {
    Companies,
    Company(CompanyId),
    CompanyUnits(CompanyId),
    CompanyUsers(CompanyId),
    CompanyAssets(CompanyId),
    Units,
    Unit(UnitId),
    Users,
    User(UserId),
    Assets,
    Asset(AssetId),
    HealthCheck,
}

impl std::fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Companies => write!(f, "companies"),
            Self::Company(id) => write!(f, "companies/{id}"),
            Self::CompanyUnits(id) => write!(f, "companies/{id}/units"),
            Self::CompanyUsers(id) => write!(f, "companies/{id}/users"),
            Self::CompanyAssets(id) => write!(f, "companies/{id}/assets"),
            Self::Units => write!(f, "units"),
            Self::Unit(id) => write!(f, "units/{id}"),
            Self::Users => write!(f, "users"),
            Self::User(id) => write!(f, "users/{id}"),
            Self::Assets => write!(f, "assets"),
            Self::Asset(id) => write!(f, "assets/{id}"),
            Self::HealthCheck => write!(f, "health_check"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_paths_render_relative_to_base() {
        let company = CompanyId(42);
        assert_eq!(ResourcePath::Companies.to_string(), "companies");
        assert_eq!(ResourcePath::Company(company).to_string(), "companies/42");
        assert_eq!(
            ResourcePath::CompanyAssets(company).to_string(),
            "companies/42/assets"
        );
        assert_eq!(ResourcePath::Unit(UnitId(7)).to_string(), "units/7");
        assert_eq!(ResourcePath::Asset(AssetId(3)).to_string(), "assets/3");
    }

    #[test]
    fn ids_parse_from_route_segments() {
        assert_eq!("42".parse::<CompanyId>().unwrap(), CompanyId(42));
        assert!("abc".parse::<CompanyId>().is_err());
        assert_eq!(UnitId(9).to_string(), "9");
    }

    #[test]
    fn asset_uses_camel_case_and_legacy_status_alias() {
        let json = serde_json::json!({
            "id": 1,
            "name": "Motor H13D-1",
            "model": "motor",
            "status": "inDownTime",
            "healthscore": 70.0,
            "image": "https://example.com/motor.jpg",
            "specifications": { "maxTemp": 80.0 },
            "metrics": {
                "totalCollectsUptime": 7516,
                "totalUptime": 1419.55,
                "lastUptimeAt": "2021-02-16T16:17:50.180Z"
            },
            "sensors": ["GSJ1535"],
            "unitId": 1,
            "companyId": 1
        });

        let asset: Asset = serde_json::from_value(json).unwrap();
        assert_eq!(asset.status, AssetStatus::InDowntime);
        assert_eq!(asset.specifications.max_temp, Some(80.0));
        assert_eq!(asset.specifications.power, None);
        assert_eq!(asset.metrics.total_collects_uptime, 7516);

        let back = serde_json::to_value(&asset).unwrap();
        assert_eq!(back["status"], "inDowntime");
        assert_eq!(back["companyId"], 1);
        assert!(back["specifications"].get("power").is_none());
    }

    #[test]
    fn status_wire_names_round_trip_through_display() {
        for status in AssetStatus::ALL {
            assert_eq!(
                AssetStatus::from_wire(&status.to_string()),
                Some(status)
            );
        }
        assert_eq!(AssetStatus::from_wire("broken"), None);
    }
}
