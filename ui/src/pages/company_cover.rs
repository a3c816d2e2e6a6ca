use payloads::{Asset, CompanyId, ResourcePath};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::health_gauge::round_score;
use crate::components::{HealthBar, StatusTag};
use crate::hooks::use_get_data;
use crate::utils::masks;
use crate::utils::summary::CompanyOverview;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub company_id: CompanyId,
}

#[function_component]
pub fn CompanyCoverTab(props: &Props) -> Html {
    let company_id = props.company_id;
    let assets = use_get_data::<Vec<Asset>>(
        ResourcePath::CompanyAssets(company_id),
        true,
    );

    assets.render("visão geral", |assets| {
        let overview = CompanyOverview::from_assets(assets);
        html! {
            <div class="space-y-6">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <StatCard
                        label="Saúde média"
                        value={masks::percentage(
                            overview.average_healthscore.map(round_score)
                        )}
                    />
                    <StatCard
                        label="Temperatura máxima média"
                        value={masks::temperature(
                            overview.average_max_temp.map(round_score)
                        )}
                    />
                    <StatCard
                        label="Ativos"
                        value={overview.assets.len().to_string()}
                    />
                </div>

                <div class="flex gap-4">
                    {for overview.status_counts.iter().map(|(status, count)| html! {
                        <div class="flex items-center gap-2">
                            <StatusTag status={*status} />
                            <span class="text-sm text-neutral-700">{count.to_string()}</span>
                        </div>
                    })}
                </div>

                if overview.assets.is_empty() {
                    <p class="text-neutral-600">{"Nenhum ativo cadastrado."}</p>
                } else {
                    <table class="min-w-full divide-y divide-neutral-200 bg-white rounded-lg shadow">
                        <thead class="bg-neutral-50">
                            <tr>
                                <th class="px-4 py-2 text-left text-xs font-medium text-neutral-500 uppercase">{"Ativo"}</th>
                                <th class="px-4 py-2 text-left text-xs font-medium text-neutral-500 uppercase">{"Saúde"}</th>
                                <th class="px-4 py-2 text-left text-xs font-medium text-neutral-500 uppercase">{"Horas em operação"}</th>
                                <th class="px-4 py-2 text-left text-xs font-medium text-neutral-500 uppercase">{"Coletas"}</th>
                                <th class="px-4 py-2 text-left text-xs font-medium text-neutral-500 uppercase">{"Coletas por hora"}</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-neutral-100">
                            {for overview.assets.iter().map(|asset| html! {
                                <tr key={asset.id.to_string()}>
                                    <td class="px-4 py-2 text-sm">
                                        <Link<Route>
                                            to={Route::AssetView { company_id, asset_id: asset.id }}
                                            classes="text-blue-600 hover:underline"
                                        >
                                            {&asset.name}
                                        </Link<Route>>
                                    </td>
                                    <td class="px-4 py-2"><HealthBar score={asset.healthscore} /></td>
                                    <td class="px-4 py-2 text-sm">{masks::hours(Some(asset.total_uptime))}</td>
                                    <td class="px-4 py-2 text-sm">{masks::count(asset.total_collects)}</td>
                                    <td class="px-4 py-2 text-sm">{format!("{:.1}", asset.collects_per_hour)}</td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                }
            </div>
        }
    })
}

#[derive(Properties, PartialEq)]
struct StatCardProps {
    label: AttrValue,
    value: String,
}

#[function_component]
fn StatCard(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-white p-4 rounded-lg shadow border border-neutral-200">
            <p class="text-sm text-neutral-500">{&props.label}</p>
            <p class="text-2xl font-semibold text-neutral-900 mt-1">{&props.value}</p>
        </div>
    }
}
