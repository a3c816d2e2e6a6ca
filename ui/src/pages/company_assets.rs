use payloads::{Asset, CompanyId, ResourcePath, Unit};
use yew::prelude::*;
use yew_router::prelude::*;

use super::company_users::unit_name;
use crate::Route;
use crate::components::HealthGauge;
use crate::hooks::use_get_data;
use crate::utils::masks;

const HEADERS: [&str; 11] = [
    "Nome",
    "Modelo",
    "Temp. máxima",
    "Potência",
    "RPM",
    "Horas em operação",
    "Coletas",
    "Última coleta",
    "Saúde",
    "Unidade",
    "Id",
];

#[derive(Properties, PartialEq)]
pub struct Props {
    pub company_id: CompanyId,
}

#[function_component]
pub fn CompanyAssetsTab(props: &Props) -> Html {
    let company_id = props.company_id;
    let assets = use_get_data::<Vec<Asset>>(
        ResourcePath::CompanyAssets(company_id),
        true,
    );
    let units =
        use_get_data::<Vec<Unit>>(ResourcePath::CompanyUnits(company_id), true);
    let units = units.data.as_deref();

    assets.render("ativos", |assets| {
        if assets.is_empty() {
            return html! {
                <p class="text-neutral-600">{"Nenhum ativo cadastrado."}</p>
            };
        }
        html! {
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-neutral-200 bg-white rounded-lg shadow">
                    <thead class="bg-neutral-50">
                        <tr>
                            {for HEADERS.iter().map(|header| html! {
                                <th class="px-4 py-2 text-left text-xs font-medium text-neutral-500 uppercase">
                                    {*header}
                                </th>
                            })}
                            <th class="px-4 py-2" />
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-neutral-100">
                        {for assets.iter().map(|asset| asset_row(asset, units))}
                    </tbody>
                </table>
            </div>
        }
    })
}

fn asset_row(asset: &Asset, units: Option<&[Unit]>) -> Html {
    let company_id = asset.company_id;
    let asset_id = asset.id;
    let specs = &asset.specifications;
    let metrics = &asset.metrics;

    html! {
        <tr key={asset_id.to_string()}>
            <td class="px-4 py-2 text-sm">
                <Link<Route>
                    to={Route::AssetView { company_id, asset_id }}
                    classes="text-blue-600 hover:underline"
                >
                    {&asset.name}
                </Link<Route>>
            </td>
            <td class="px-4 py-2 text-sm">{masks::text(Some(asset.model.as_str()))}</td>
            <td class="px-4 py-2 text-sm">{masks::temperature(specs.max_temp)}</td>
            <td class="px-4 py-2 text-sm">{masks::power(specs.power)}</td>
            <td class="px-4 py-2 text-sm">{masks::number(specs.rpm)}</td>
            <td class="px-4 py-2 text-sm">{masks::hours(Some(metrics.total_uptime))}</td>
            <td class="px-4 py-2 text-sm">{masks::count(metrics.total_collects_uptime)}</td>
            <td class="px-4 py-2 text-sm">{masks::date(Some(metrics.last_uptime_at))}</td>
            <td class="px-4 py-2"><HealthGauge score={asset.healthscore} /></td>
            <td class="px-4 py-2 text-sm">{unit_name(units, asset.unit_id)}</td>
            <td class="px-4 py-2 text-sm text-neutral-500">{asset_id.to_string()}</td>
            <td class="px-4 py-2 text-right">
                <Link<Route>
                    to={Route::EditAsset { company_id, asset_id }}
                    classes="text-sm text-blue-600 hover:underline"
                >
                    {"Editar"}
                </Link<Route>>
            </td>
        </tr>
    }
}
