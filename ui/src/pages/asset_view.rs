use payloads::{Asset, AssetId, Company, CompanyId, ResourcePath, Unit, UnitId};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{HealthGauge, StatusTag};
use crate::hooks::{use_get_data, use_title};
use crate::utils::masks;
use crate::{CompanyTab, Route};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub company_id: CompanyId,
    pub asset_id: AssetId,
}

/// Sensor names as a single cell.
pub fn sensor_list(sensors: &[String]) -> String {
    masks::text(Some(sensors.join(", ").as_str()))
}

#[function_component]
pub fn AssetViewPage(props: &Props) -> Html {
    let asset = use_get_data::<Asset>(ResourcePath::Asset(props.asset_id), true);
    let loaded = asset.data.as_ref();

    // the owning company and unit are only known once the asset arrives
    let company = use_get_data::<Company>(
        ResourcePath::Company(
            loaded.map(|a| a.company_id).unwrap_or(props.company_id),
        ),
        loaded.is_some(),
    );
    let unit = use_get_data::<Unit>(
        ResourcePath::Unit(loaded.map(|a| a.unit_id).unwrap_or(UnitId(0))),
        loaded.is_some(),
    );

    let title = loaded
        .map(|a| a.name.clone())
        .unwrap_or_else(|| "Ativo".to_string());
    use_title(&title);

    let company_name =
        masks::text(company.data.as_ref().map(|c| c.name.as_str()));
    let unit_name = masks::text(unit.data.as_ref().map(|u| u.name.as_str()));

    asset.render("ativo", |asset| {
        let specs = &asset.specifications;
        let metrics = &asset.metrics;
        let company_id = asset.company_id;
        let items: Vec<(&str, Html)> = vec![
            ("Empresa", html! { {company_name} }),
            ("Unidade", html! { {unit_name} }),
            ("Status", html! { <StatusTag status={asset.status} /> }),
            ("Modelo", html! { {masks::text(Some(asset.model.as_str()))} }),
            ("Sensores", html! { {sensor_list(&asset.sensors)} }),
            ("Saúde", html! { <HealthGauge score={asset.healthscore} /> }),
            ("Temperatura máxima", html! { {masks::temperature(specs.max_temp)} }),
            ("Potência", html! { {masks::power(specs.power)} }),
            ("RPM", html! { {masks::number(specs.rpm)} }),
            ("Total de coletas", html! { {masks::count(metrics.total_collects_uptime)} }),
            ("Horas em operação", html! { {masks::hours(Some(metrics.total_uptime))} }),
            ("Última coleta", html! { {masks::date(Some(metrics.last_uptime_at))} }),
        ];

        html! {
            <div class="space-y-6">
                <div class="flex items-start justify-between">
                    <div>
                        <Link<Route>
                            to={Route::Company { company_id, tab: CompanyTab::Assets }}
                            classes="text-sm text-blue-600 hover:underline"
                        >
                            {"← Ativos"}
                        </Link<Route>>
                        <h1 class="text-3xl font-bold text-neutral-900 mt-1">
                            {&asset.name}
                        </h1>
                        <p class="text-sm text-neutral-500 mt-1">
                            {format!("#{}", asset.id)}
                        </p>
                    </div>
                    <Link<Route>
                        to={Route::EditAsset { company_id, asset_id: asset.id }}
                        classes="px-3 py-2 rounded-md text-sm font-medium text-neutral-700
                                 border border-neutral-300 hover:bg-neutral-50"
                    >
                        {"Editar Ativo"}
                    </Link<Route>>
                </div>

                <div class="flex flex-col md:flex-row gap-6">
                    <dl class="flex-1 grid grid-cols-1 sm:grid-cols-2 gap-x-6 gap-y-4 bg-white p-6 rounded-lg shadow border border-neutral-200">
                        {for items.into_iter().map(|(label, value)| html! {
                            <div>
                                <dt class="text-sm text-neutral-500">{label}</dt>
                                <dd class="text-sm text-neutral-900 mt-1">{value}</dd>
                            </div>
                        })}
                    </dl>
                    if !asset.image.trim().is_empty() {
                        <img
                            src={asset.image.clone()}
                            alt={asset.name.clone()}
                            class="w-full md:w-80 h-auto rounded-lg shadow object-contain bg-white"
                        />
                    }
                </div>
            </div>
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sensors_are_joined_or_placeholder() {
        assert_eq!(
            sensor_list(&["GSJ1535".to_string(), "HIO4510".to_string()]),
            "GSJ1535, HIO4510"
        );
        assert_eq!(sensor_list(&[]), masks::PLACEHOLDER);
    }
}
