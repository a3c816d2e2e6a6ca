use payloads::{APIClient, ClientConfig};
use std::rc::Rc;
use yew::prelude::*;

/// The backend client shared by every hook below [`ApiProvider`].
#[derive(Clone)]
pub struct ApiContext {
    config: ClientConfig,
    client: Rc<APIClient>,
}

impl PartialEq for ApiContext {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

#[derive(Properties, PartialEq)]
pub struct ApiProviderProps {
    pub config: ClientConfig,
    pub children: Children,
}

#[function_component]
pub fn ApiProvider(props: &ApiProviderProps) -> Html {
    let context = use_memo(props.config.clone(), |config| {
        tracing::debug!(base_url = %config.base_url, "Configured api client");
        ApiContext {
            config: config.clone(),
            client: Rc::new(APIClient::new(config)),
        }
    });

    html! {
        <ContextProvider<ApiContext> context={(*context).clone()}>
            {props.children.clone()}
        </ContextProvider<ApiContext>>
    }
}

#[hook]
pub fn use_api_client() -> APIClient {
    let context = use_context::<ApiContext>()
        .expect("use_api_client must be used within an ApiProvider");
    (*context.client).clone()
}
