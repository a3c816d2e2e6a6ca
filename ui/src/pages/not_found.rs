use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_title;

#[function_component]
pub fn NotFoundPage() -> Html {
    use_title("Página não encontrada");

    html! {
        <div class="text-center py-16 space-y-4">
            <h1 class="text-4xl font-bold text-neutral-900">{"404"}</h1>
            <p class="text-neutral-600">
                {"A página que você procura não existe."}
            </p>
            <Link<Route>
                to={Route::Companies}
                classes="inline-block bg-neutral-900 hover:bg-neutral-800 text-white px-4 py-2 rounded-md text-sm font-medium transition-colors"
            >
                {"Página Inicial"}
            </Link<Route>>
        </div>
    }
}
