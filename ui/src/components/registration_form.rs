use yew::prelude::*;

use super::ConfirmationModal;
use crate::hooks::use_disclosure;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
    /// Entity name used in button labels, e.g. "Unidade"
    pub entity_label: AttrValue,
    pub is_edit: bool,
    pub is_saving: bool,
    #[prop_or_default]
    pub is_deleting: bool,
    /// Set once a save has landed; keeps every action disabled.
    #[prop_or_default]
    pub is_saved: bool,
    /// Last write failure, shown above the actions.
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
    /// Only offered in edit mode.
    #[prop_or_default]
    pub on_delete: Callback<()>,
    pub children: Html,
}

/// Card around a registration form: title, fields, save/cancel actions and,
/// when editing, a delete action behind a confirmation dialog.
#[function_component]
pub fn RegistrationForm(props: &Props) -> Html {
    let delete_dialog = use_disclosure(false);

    let onsubmit = props.on_submit.reform(|e: SubmitEvent| {
        e.prevent_default();
    });
    let on_cancel = props.on_cancel.reform(|_: MouseEvent| ());
    let on_delete_click = delete_dialog.on_open.reform(|_: MouseEvent| ());
    let on_confirm_delete = {
        let on_delete = props.on_delete.clone();
        let on_close = delete_dialog.on_close.clone();
        Callback::from(move |_| {
            on_close.emit(());
            on_delete.emit(());
        })
    };

    let busy = props.is_saving || props.is_deleting || props.is_saved;
    let save_label = match (props.is_saving, props.is_edit) {
        (true, _) => "Salvando...".to_string(),
        (false, true) => "Salvar".to_string(),
        (false, false) => format!("Cadastrar {}", props.entity_label),
    };

    html! {
        <div class="max-w-2xl mx-auto bg-white p-8 rounded-lg shadow-md">
            <h1 class="text-2xl font-bold text-neutral-900 mb-6">{&props.title}</h1>

            <form {onsubmit} class="space-y-5">
                {props.children.clone()}

                if let Some(error) = &props.error {
                    <div class="p-4 rounded-md bg-red-50 border border-red-200">
                        <p class="text-sm text-red-700">{error}</p>
                    </div>
                }

                <div class="flex flex-wrap gap-3 pt-4">
                    <button
                        type="submit"
                        disabled={busy}
                        class="px-4 py-2 rounded-md text-sm font-medium text-white
                               bg-blue-600 hover:bg-blue-700
                               disabled:opacity-50 disabled:cursor-not-allowed"
                    >
                        {save_label}
                    </button>
                    <button
                        type="button"
                        onclick={on_cancel}
                        disabled={busy}
                        class="px-4 py-2 rounded-md text-sm font-medium text-neutral-700
                               bg-white border border-neutral-300 hover:bg-neutral-50
                               disabled:opacity-50 disabled:cursor-not-allowed"
                    >
                        {"Cancelar"}
                    </button>
                    if props.is_edit {
                        <button
                            type="button"
                            onclick={on_delete_click}
                            disabled={busy}
                            class="ml-auto px-4 py-2 rounded-md text-sm font-medium text-red-600
                                   border border-red-300 hover:bg-red-50
                                   disabled:opacity-50 disabled:cursor-not-allowed"
                        >
                            {format!("Deletar {}", props.entity_label)}
                        </button>
                    }
                </div>
            </form>

            if delete_dialog.is_open {
                <ConfirmationModal
                    title="Atenção!"
                    message="Tem certeza que deseja deletar? Essa ação não pode ser desfeita."
                    confirm_text={format!("Deletar {}", props.entity_label)}
                    on_confirm={on_confirm_delete}
                    on_close={delete_dialog.on_close.clone()}
                    is_loading={props.is_deleting}
                />
            }
        </div>
    }
}
