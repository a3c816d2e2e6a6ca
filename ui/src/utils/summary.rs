//! Aggregates shown on the company cover tab.

use payloads::{Asset, AssetId, AssetStatus};

/// Per-asset numbers for the cover table.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetSummary {
    pub id: AssetId,
    pub name: String,
    pub healthscore: f64,
    pub total_uptime: f64,
    pub total_collects: u64,
    /// Zero when the asset has no uptime yet.
    pub collects_per_hour: f64,
}

impl From<&Asset> for AssetSummary {
    fn from(asset: &Asset) -> Self {
        let metrics = &asset.metrics;
        let collects_per_hour = if metrics.total_uptime > 0.0 {
            metrics.total_collects_uptime as f64 / metrics.total_uptime
        } else {
            0.0
        };

        Self {
            id: asset.id,
            name: asset.name.clone(),
            healthscore: asset.healthscore,
            total_uptime: metrics.total_uptime,
            total_collects: metrics.total_collects_uptime,
            collects_per_hour,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompanyOverview {
    pub average_healthscore: Option<f64>,
    /// Over the assets that report a maximum temperature.
    pub average_max_temp: Option<f64>,
    pub status_counts: Vec<(AssetStatus, usize)>,
    pub assets: Vec<AssetSummary>,
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| {
        (sum + v, count + 1)
    });
    (count > 0).then(|| sum / count as f64)
}

impl CompanyOverview {
    pub fn from_assets(assets: &[Asset]) -> Self {
        let status_counts = AssetStatus::ALL
            .iter()
            .map(|status| {
                let count =
                    assets.iter().filter(|a| a.status == *status).count();
                (*status, count)
            })
            .collect();

        Self {
            average_healthscore: mean(assets.iter().map(|a| a.healthscore)),
            average_max_temp: mean(
                assets.iter().filter_map(|a| a.specifications.max_temp),
            ),
            status_counts,
            assets: assets.iter().map(AssetSummary::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::{AssetMetrics, AssetSpecifications, CompanyId, UnitId};

    fn asset(
        id: u64,
        status: AssetStatus,
        healthscore: f64,
        max_temp: Option<f64>,
        collects: u64,
        uptime: f64,
    ) -> Asset {
        Asset {
            id: AssetId(id),
            name: format!("Ativo {id}"),
            model: "motor".into(),
            status,
            healthscore,
            image: String::new(),
            specifications: AssetSpecifications {
                max_temp,
                ..Default::default()
            },
            metrics: AssetMetrics {
                total_collects_uptime: collects,
                total_uptime: uptime,
                last_uptime_at: "2021-02-16T16:17:50Z".parse().unwrap(),
            },
            sensors: vec![],
            unit_id: UnitId(1),
            company_id: CompanyId(42),
        }
    }

    #[test]
    fn collects_per_hour_is_zero_without_uptime() {
        let idle = asset(1, AssetStatus::InDowntime, 50.0, None, 10, 0.0);
        assert_eq!(AssetSummary::from(&idle).collects_per_hour, 0.0);

        let busy = asset(2, AssetStatus::InOperation, 90.0, None, 300, 150.0);
        assert_eq!(AssetSummary::from(&busy).collects_per_hour, 2.0);
    }

    #[test]
    fn averages_skip_assets_without_temperature() {
        let overview = CompanyOverview::from_assets(&[
            asset(1, AssetStatus::InAlert, 70.0, Some(80.0), 0, 0.0),
            asset(2, AssetStatus::InOperation, 80.0, None, 0, 0.0),
            asset(3, AssetStatus::InOperation, 90.0, Some(60.0), 0, 0.0),
        ]);

        assert_eq!(overview.average_healthscore, Some(80.0));
        assert_eq!(overview.average_max_temp, Some(70.0));
        assert_eq!(overview.status_counts, vec![
            (AssetStatus::InAlert, 1),
            (AssetStatus::InDowntime, 0),
            (AssetStatus::InOperation, 2),
        ]);
        assert_eq!(overview.assets.len(), 3);
    }

    #[test]
    fn empty_company_has_no_averages() {
        let overview = CompanyOverview::from_assets(&[]);
        assert_eq!(overview.average_healthscore, None);
        assert_eq!(overview.average_max_temp, None);
        assert!(overview.assets.is_empty());
    }
}
