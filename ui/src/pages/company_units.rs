use payloads::{CompanyId, ResourcePath, Unit};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_get_data;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub company_id: CompanyId,
}

#[function_component]
pub fn CompanyUnitsTab(props: &Props) -> Html {
    let company_id = props.company_id;
    let units =
        use_get_data::<Vec<Unit>>(ResourcePath::CompanyUnits(company_id), true);

    units.render("unidades", |units| {
        if units.is_empty() {
            return html! {
                <p class="text-neutral-600">{"Nenhuma unidade cadastrada."}</p>
            };
        }
        html! {
            <table class="min-w-full divide-y divide-neutral-200 bg-white rounded-lg shadow">
                <thead class="bg-neutral-50">
                    <tr>
                        <th class="px-4 py-2 text-left text-xs font-medium text-neutral-500 uppercase">{"Nome"}</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-neutral-500 uppercase">{"Id"}</th>
                        <th class="px-4 py-2" />
                    </tr>
                </thead>
                <tbody class="divide-y divide-neutral-100">
                    {for units.iter().map(|unit| html! {
                        <tr key={unit.id.to_string()}>
                            <td class="px-4 py-2 text-sm text-neutral-900">{&unit.name}</td>
                            <td class="px-4 py-2 text-sm text-neutral-500">{unit.id.to_string()}</td>
                            <td class="px-4 py-2 text-right">
                                <Link<Route>
                                    to={Route::EditUnit { company_id, unit_id: unit.id }}
                                    classes="text-sm text-blue-600 hover:underline"
                                >
                                    {"Editar"}
                                </Link<Route>>
                            </td>
                        </tr>
                    })}
                </tbody>
            </table>
        }
    })
}
