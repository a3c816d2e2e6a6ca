use yew::prelude::*;
use yew_router::prelude::*;

use crate::{Route, hooks::use_disclosure};

const ENTRIES: [(&str, Route); 4] = [
    ("Cadastrar Empresa", Route::CreateCompany),
    ("Cadastrar Unidade", Route::CreateUnit),
    ("Cadastrar Usuário", Route::CreateUser),
    ("Cadastrar Ativo", Route::CreateAsset),
];

/// Header dropdown linking to every creation form.
#[function_component]
pub fn RegisterMenu() -> Html {
    let menu = use_disclosure(false);

    let on_toggle = menu.on_toggle.reform(|e: MouseEvent| e.stop_propagation());
    let on_backdrop_click = menu.on_close.reform(|_: MouseEvent| ());

    html! {
        <div class="relative">
            <button
                onclick={on_toggle}
                class="px-3 py-2 rounded-md text-sm font-medium text-white
                       bg-blue-600 hover:bg-blue-700"
            >
                {"Cadastrar"}
            </button>

            if menu.is_open {
                <>
                    <div onclick={on_backdrop_click.clone()} class="fixed inset-0 z-40" />
                    <div class="absolute right-0 mt-1 py-1 w-52 bg-white rounded-md
                                shadow-lg border border-neutral-200 z-50">
                        {for ENTRIES.into_iter().map(|(label, route)| html! {
                            <div onclick={on_backdrop_click.clone()}>
                                <Link<Route>
                                    to={route}
                                    classes="block px-4 py-2 text-sm text-neutral-700 hover:bg-neutral-100"
                                >
                                    {label}
                                </Link<Route>>
                            </div>
                        })}
                    </div>
                </>
            }
        </div>
    }
}
