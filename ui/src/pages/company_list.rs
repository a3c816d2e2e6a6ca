use payloads::{Company, ResourcePath};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::{use_get_data, use_title};

#[function_component]
pub fn CompanyListPage() -> Html {
    use_title("Empresas");
    let companies = use_get_data::<Vec<Company>>(ResourcePath::Companies, true);

    html! {
        <div class="space-y-8">
            <div class="flex justify-between items-center">
                <div>
                    <h1 class="text-3xl font-bold text-neutral-900">
                        {"Empresas"}
                    </h1>
                    <p class="text-lg text-neutral-600 mt-2">
                        {"Selecione uma empresa para ver seus ativos"}
                    </p>
                </div>
                <Link<Route>
                    to={Route::CreateCompany}
                    classes="bg-neutral-900 hover:bg-neutral-800 text-white px-4 py-2 rounded-md text-sm font-medium transition-colors"
                >
                    {"Cadastrar Empresa"}
                </Link<Route>>
            </div>

            {companies.render("empresas", |list| {
                if list.is_empty() {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600">
                                {"Nenhuma empresa cadastrada ainda."}
                            </p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {list.iter().map(company_card).collect::<Html>()}
                        </div>
                    }
                }
            })}
        </div>
    }
}

fn company_card(company: &Company) -> Html {
    html! {
        <Link<Route>
            key={company.id.to_string()}
            to={Route::CompanyRoot { company_id: company.id }}
            classes="block bg-white p-6 rounded-lg shadow-md border border-neutral-200 hover:border-blue-400 transition-colors"
        >
            <h3 class="text-xl font-semibold text-neutral-900">
                {&company.name}
            </h3>
            <p class="text-sm text-neutral-500 mt-1">
                {format!("#{}", company.id)}
            </p>
        </Link<Route>>
    }
}
