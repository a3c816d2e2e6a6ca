use payloads::{CompanyId, ResourcePath, Unit, UnitId, User};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_get_data;
use crate::utils::masks;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub company_id: CompanyId,
}

/// Name of the unit a user belongs to, if it is among `units`.
pub fn unit_name(units: Option<&[Unit]>, unit_id: UnitId) -> String {
    masks::text(
        units
            .and_then(|units| units.iter().find(|unit| unit.id == unit_id))
            .map(|unit| unit.name.as_str()),
    )
}

#[function_component]
pub fn CompanyUsersTab(props: &Props) -> Html {
    let company_id = props.company_id;
    let users =
        use_get_data::<Vec<User>>(ResourcePath::CompanyUsers(company_id), true);
    let units =
        use_get_data::<Vec<Unit>>(ResourcePath::CompanyUnits(company_id), true);
    let units = units.data.as_deref();

    users.render("usuários", |users| {
        if users.is_empty() {
            return html! {
                <p class="text-neutral-600">{"Nenhum usuário cadastrado."}</p>
            };
        }
        html! {
            <table class="min-w-full divide-y divide-neutral-200 bg-white rounded-lg shadow">
                <thead class="bg-neutral-50">
                    <tr>
                        <th class="px-4 py-2 text-left text-xs font-medium text-neutral-500 uppercase">{"Nome"}</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-neutral-500 uppercase">{"Email"}</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-neutral-500 uppercase">{"Unidade"}</th>
                        <th class="px-4 py-2" />
                    </tr>
                </thead>
                <tbody class="divide-y divide-neutral-100">
                    {for users.iter().map(|user| html! {
                        <tr key={user.id.to_string()}>
                            <td class="px-4 py-2 text-sm text-neutral-900">{&user.name}</td>
                            <td class="px-4 py-2 text-sm text-neutral-700">{&user.email}</td>
                            <td class="px-4 py-2 text-sm text-neutral-700">{unit_name(units, user.unit_id)}</td>
                            <td class="px-4 py-2 text-right">
                                <Link<Route>
                                    to={Route::EditUser { company_id, user_id: user.id }}
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
