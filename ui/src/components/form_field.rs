use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-neutral-300 \
                           rounded-md shadow-sm bg-white text-neutral-900 \
                           focus:outline-none focus:ring-2 \
                           focus:ring-blue-500 focus:border-blue-500 \
                           disabled:opacity-50";

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or_else(|| AttrValue::from("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
}

/// Labelled controlled input.
#[function_component]
pub fn TextField(props: &TextFieldProps) -> Html {
    let oninput = props.on_change.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.value()
    });

    html! {
        <div>
            <label for={props.id.clone()} class="block text-sm font-medium text-neutral-700 mb-1">
                {&props.label}
            </label>
            <input
                id={props.id.clone()}
                type={props.input_type.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                disabled={props.disabled}
                {oninput}
                class={INPUT_CLASS}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    /// Selected option value, empty for none.
    pub value: AttrValue,
    /// `(value, label)` pairs
    pub options: Vec<(String, String)>,
    pub on_change: Callback<String>,
    #[prop_or_else(|| AttrValue::from("Selecione..."))]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component]
pub fn SelectField(props: &SelectFieldProps) -> Html {
    let onchange = props.on_change.reform(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        select.value()
    });

    html! {
        <div>
            <label for={props.id.clone()} class="block text-sm font-medium text-neutral-700 mb-1">
                {&props.label}
            </label>
            <select
                id={props.id.clone()}
                disabled={props.disabled}
                {onchange}
                class={INPUT_CLASS}
            >
                <option value="" selected={props.value.is_empty()}>
                    {&props.placeholder}
                </option>
                {for props.options.iter().map(|(value, label)| html! {
                    <option
                        value={value.clone()}
                        selected={props.value.as_str() == value}
                    >
                        {label}
                    </option>
                })}
            </select>
        </div>
    }
}
