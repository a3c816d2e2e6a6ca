use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorResultProps {
    pub message: AttrValue,
    pub on_retry: Callback<()>,
}

/// Full-page failure with a manual retry.
#[function_component]
pub fn ErrorResult(props: &ErrorResultProps) -> Html {
    let on_click = props.on_retry.reform(|_: MouseEvent| ());

    html! {
        <div class="flex flex-col items-center text-center py-16 space-y-4">
            <span class="text-5xl text-red-500">{"!"}</span>
            <h2 class="text-xl font-semibold text-neutral-900">
                {"Oops! Algo errado aconteceu."}
            </h2>
            <p class="text-sm text-neutral-600">{&props.message}</p>
            <button
                onclick={on_click}
                class="px-4 py-2 text-sm font-medium text-white bg-blue-600
                       hover:bg-blue-700 rounded-md transition-colors"
            >
                {"Tentar Novamente"}
            </button>
        </div>
    }
}
