use yew::prelude::*;
use yew_router::prelude::*;

use crate::{Route, components::RegisterMenu};

#[function_component]
pub fn Header() -> Html {
    html! {
        <header class="bg-white border-b border-neutral-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <Link<Route> to={Route::Companies} classes="text-xl font-semibold text-blue-700">
                        {"Tractian"}
                    </Link<Route>>
                    <nav class="flex items-center space-x-6">
                        <Link<Route> to={Route::Companies} classes="text-sm font-medium text-neutral-600 hover:text-neutral-900">
                            {"Empresas"}
                        </Link<Route>>
                        <RegisterMenu />
                    </nav>
                </div>
            </div>
        </header>
    }
}
