use payloads::Company;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{CompanyTab, Route};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub company: Company,
    pub active_tab: CompanyTab,
}

#[function_component]
pub fn CompanyTabHeader(props: &Props) -> Html {
    let company_id = props.company.id;

    html! {
        <div class="space-y-6">
            <div class="flex items-start justify-between">
                <div>
                    <h1 class="text-3xl font-bold text-neutral-900">
                        {&props.company.name}
                    </h1>
                    <p class="text-sm text-neutral-500 mt-1">
                        {format!("#{company_id}")}
                    </p>
                </div>
                <Link<Route>
                    to={Route::EditCompany { company_id }}
                    classes="px-3 py-2 rounded-md text-sm font-medium text-neutral-700
                             border border-neutral-300 hover:bg-neutral-50"
                >
                    {"Editar Empresa"}
                </Link<Route>>
            </div>

            <div class="border-b border-neutral-200">
                <nav class="-mb-px flex space-x-8">
                    {for CompanyTab::ALL.into_iter().map(|tab| {
                        let style = if tab == props.active_tab {
                            "border-blue-500 text-blue-600"
                        } else {
                            "border-transparent text-neutral-500 hover:text-neutral-700 hover:border-neutral-300"
                        };
                        html! {
                            <Link<Route>
                                to={Route::Company { company_id, tab }}
                                classes={classes!("py-2", "px-1", "border-b-2", "font-medium", "text-sm", style)}
                            >
                                {tab.label()}
                            </Link<Route>>
                        }
                    })}
                </nav>
            </div>
        </div>
    }
}
