use payloads::AssetStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub status: AssetStatus,
}

pub fn status_palette(status: AssetStatus) -> &'static str {
    match status {
        AssetStatus::InAlert => "bg-red-50 text-red-700 border-red-200",
        AssetStatus::InDowntime => {
            "bg-yellow-50 text-yellow-700 border-yellow-200"
        }
        AssetStatus::InOperation => {
            "bg-green-50 text-green-700 border-green-200"
        }
    }
}

#[function_component]
pub fn StatusTag(props: &Props) -> Html {
    html! {
        <span class={classes!(
            "inline-block", "px-2", "py-0.5", "text-xs", "font-medium",
            "rounded", "border", status_palette(props.status)
        )}>
            {props.status.label()}
        </span>
    }
}
