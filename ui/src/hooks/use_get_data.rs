use payloads::{ClientError, ResourcePath};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use crate::components::ErrorResult;
use crate::contexts::use_api_client;

/// Stamp carried by every issued GET. Only the most recent one may settle the
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// Issues strictly increasing request tokens. One per mounted hook.
#[derive(Debug, Default)]
pub struct TokenIssuer {
    last: u64,
}

impl TokenIssuer {
    pub fn issue(&mut self) -> RequestToken {
        self.last += 1;
        RequestToken(self.last)
    }

    /// Token for this effect run, or None when fetching is gated off.
    pub fn issue_if(&mut self, should_get: bool) -> Option<RequestToken> {
        should_get.then(|| self.issue())
    }
}

/// Request state of a single GET.
///
/// At most one of `data` and `error` is set, and neither while loading.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchMachine<T> {
    pub data: Option<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pending: Option<RequestToken>,
}

impl<T> Default for FetchMachine<T> {
    fn default() -> Self {
        Self {
            data: None,
            is_loading: false,
            error: None,
            pending: None,
        }
    }
}

#[derive(Debug)]
pub enum FetchAction<T> {
    /// A request was issued. Supersedes any pending one.
    Start(RequestToken),
    Settle(RequestToken, Result<T, String>),
    /// Unmount or dependency change. Pending requests are abandoned.
    Reset,
}

impl<T> Reducible for FetchMachine<T> {
    type Action = FetchAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FetchAction::Start(token) => Rc::new(Self {
                data: None,
                is_loading: true,
                error: None,
                pending: Some(token),
            }),
            FetchAction::Settle(token, result) => {
                if self.pending != Some(token) {
                    tracing::debug!(?token, "Discarding stale response");
                    return self;
                }
                let (data, error) = match result {
                    Ok(data) => (Some(data), None),
                    Err(message) => (None, Some(message)),
                };
                Rc::new(Self {
                    data,
                    is_loading: false,
                    error,
                    pending: None,
                })
            }
            FetchAction::Reset => {
                let is_empty = self.data.is_none()
                    && self.error.is_none()
                    && self.pending.is_none()
                    && !self.is_loading;
                if is_empty {
                    return self;
                }
                Rc::new(Self::default())
            }
        }
    }
}

/// Await one GET and turn its outcome into the settling action.
pub async fn run_fetch<T, Fut>(
    token: RequestToken,
    path: ResourcePath,
    request: Fut,
) -> FetchAction<T>
where
    Fut: Future<Output = Result<T, ClientError>>,
{
    let result = request.await.map_err(|e| {
        tracing::warn!(%path, "GET failed: {e}");
        e.to_string()
    });
    tracing::debug!(%path, ?token, ok = result.is_ok(), "GET settled");
    FetchAction::Settle(token, result)
}

/// Generation counter bumped by `refetch`.
#[derive(Debug, Default, PartialEq)]
struct Generation(u64);

impl Reducible for Generation {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        Rc::new(Generation(self.0 + 1))
    }
}

/// What [`use_get_data`] hands back to a page.
pub struct FetchHookReturn<T> {
    pub data: Option<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

impl<T> FetchHookReturn<T> {
    /// Render the pending placeholder, the retryable error, or `render_fn`
    /// with the loaded data.
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: FnOnce(&T) -> Html,
    {
        match (&self.data, &self.error) {
            (Some(data), _) => render_fn(data),
            (None, Some(error)) => html! {
                <ErrorResult
                    message={error.clone()}
                    on_retry={self.refetch.clone()}
                />
            },
            (None, None) if self.is_loading => html! {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {format!("Carregando {context}...")}
                    </p>
                </div>
            },
            (None, None) => html! {},
        }
    }
}

/// Fetch `path` whenever it changes, `refetch` is called, or `should_get`
/// flips on.
///
/// Each run clears the previous result before issuing the request. A
/// response only lands if no newer request was issued since and the page is
/// still mounted.
#[hook]
pub fn use_get_data<T>(path: ResourcePath, should_get: bool) -> FetchHookReturn<T>
where
    T: DeserializeOwned + Clone + 'static,
{
    let client = use_api_client();
    let state = use_reducer(FetchMachine::<T>::default);
    let issuer = use_mut_ref(TokenIssuer::default);
    let generation = use_reducer(Generation::default);

    {
        let state = state.clone();
        use_effect_with(
            (path, generation.0, should_get),
            move |(path, _, should_get)| {
                let token = issuer.borrow_mut().issue_if(*should_get);
                if let Some(token) = token {
                    let path = *path;
                    tracing::debug!(%path, ?token, "GET issued");
                    state.dispatch(FetchAction::Start(token));

                    let state = state.clone();
                    yew::platform::spawn_local(async move {
                        let request =
                            async move { client.get::<T>(&path).await };
                        state.dispatch(run_fetch(token, path, request).await);
                    });
                }
                move || state.dispatch(FetchAction::Reset)
            },
        );
    }

    let refetch = Callback::from(move |_| generation.dispatch(()));

    FetchHookReturn {
        data: state.data.clone(),
        is_loading: state.is_loading,
        error: state.error.clone(),
        refetch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use payloads::{Company, CompanyId};
    use reqwest::StatusCode;

    fn acme() -> Company {
        Company {
            id: CompanyId(42),
            name: "Acme".into(),
        }
    }

    fn start(issuer: &mut TokenIssuer) -> (Rc<FetchMachine<Company>>, RequestToken) {
        let token = issuer.issue();
        let state = Rc::new(FetchMachine::default())
            .reduce(FetchAction::Start(token));
        (state, token)
    }

    #[test]
    fn initial_state_is_empty() {
        let state = FetchMachine::<Company>::default();
        assert_eq!(state.data, None);
        assert_eq!(state.error, None);
        assert!(!state.is_loading);
    }

    #[test]
    fn gated_fetch_issues_nothing() {
        let mut issuer = TokenIssuer::default();
        assert_eq!(issuer.issue_if(false), None);
        assert_eq!(issuer.issue_if(false), None);
        // no token was consumed while gated
        assert_eq!(issuer.issue_if(true), Some(RequestToken(1)));
    }

    #[test]
    fn success_sets_data_and_clears_error() {
        let mut issuer = TokenIssuer::default();
        let (state, token) = start(&mut issuer);
        assert!(state.is_loading);

        let state = state.reduce(FetchAction::Settle(token, Ok(acme())));
        assert_eq!(state.data, Some(acme()));
        assert_eq!(state.error, None);
        assert!(!state.is_loading);
    }

    #[test]
    fn failure_sets_error_and_no_data() {
        let mut issuer = TokenIssuer::default();
        let (state, token) = start(&mut issuer);

        let state = state
            .reduce(FetchAction::Settle(token, Err("Not found".into())));
        assert_eq!(state.data, None);
        assert_eq!(state.error.as_deref(), Some("Not found"));
        assert!(!state.is_loading);
    }

    #[test]
    fn last_issued_request_wins() {
        let mut issuer = TokenIssuer::default();
        let (state, first) = start(&mut issuer);
        let second = issuer.issue();
        assert!(second > first);
        let state = state.reduce(FetchAction::Start(second));

        let newer = Company {
            id: CompanyId(42),
            name: "Acme Renomeada".into(),
        };
        let state = state.reduce(FetchAction::Settle(second, Ok(newer.clone())));
        // the older request settles last and must not overwrite
        let state = state.reduce(FetchAction::Settle(first, Ok(acme())));
        assert_eq!(state.data, Some(newer));
        assert!(!state.is_loading);
    }

    #[test]
    fn settlement_after_reset_is_discarded() {
        let mut issuer = TokenIssuer::default();
        let (state, token) = start(&mut issuer);

        let state = state.reduce(FetchAction::Reset);
        let state = state.reduce(FetchAction::Settle(token, Ok(acme())));
        assert_eq!(*state, FetchMachine::default());
    }

    #[test]
    fn a_token_settles_at_most_once() {
        let mut issuer = TokenIssuer::default();
        let (state, token) = start(&mut issuer);

        let state = state.reduce(FetchAction::Settle(token, Ok(acme())));
        let state =
            state.reduce(FetchAction::Settle(token, Err("late".into())));
        assert_eq!(state.data, Some(acme()));
        assert_eq!(state.error, None);
    }

    #[test]
    fn refetch_clears_previous_result_while_loading() {
        let mut issuer = TokenIssuer::default();
        let (state, token) = start(&mut issuer);
        let state = state.reduce(FetchAction::Settle(token, Ok(acme())));

        let state = state.reduce(FetchAction::Start(issuer.issue()));
        assert_eq!(state.data, None);
        assert!(state.is_loading);
    }

    #[test]
    fn run_fetch_maps_client_errors_to_messages() {
        let token = TokenIssuer::default().issue();
        let path = ResourcePath::Company(CompanyId(42));

        let action = block_on(run_fetch(token, path, async {
            Err::<Company, _>(ClientError::APIError(
                StatusCode::NOT_FOUND,
                "Not found: Company not found".into(),
            ))
        }));
        match action {
            FetchAction::Settle(_, Err(message)) => {
                assert_eq!(message, "Not found: Company not found")
            }
            other => panic!("unexpected action {other:?}"),
        }

        let action =
            block_on(run_fetch(token, path, async { Ok(acme()) }));
        match action {
            FetchAction::Settle(settled, Ok(company)) => {
                assert_eq!(settled, token);
                assert_eq!(company, acme());
            }
            other => panic!("unexpected action {other:?}"),
        }
    }
}
