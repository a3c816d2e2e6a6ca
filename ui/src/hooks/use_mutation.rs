use futures::future::{FutureExt, LocalBoxFuture};
use payloads::{
    APIClient, ClientError, ResourcePath, responses::MutationResponse,
};
use serde::{Serialize, de::DeserializeOwned};
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use crate::contexts::use_api_client;

/// Completion and error handlers for a write. Both are required, so a failed
/// write always reaches the user.
pub struct MutationHandlers<T> {
    pub on_completed: Callback<MutationResponse<T>>,
    pub on_error: Callback<String>,
}

impl<T> Clone for MutationHandlers<T> {
    fn clone(&self) -> Self {
        Self {
            on_completed: self.on_completed.clone(),
            on_error: self.on_error.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MutationMachine<T> {
    pub data: Option<MutationResponse<T>>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl<T> Default for MutationMachine<T> {
    fn default() -> Self {
        Self {
            data: None,
            is_loading: false,
            error: None,
        }
    }
}

#[derive(Debug)]
pub enum MutationAction<T> {
    Start,
    Succeed(MutationResponse<T>),
    Fail(String),
}

impl<T: Clone> Reducible for MutationMachine<T> {
    type Action = MutationAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            MutationAction::Start => Self {
                data: self.data.clone(),
                is_loading: true,
                error: None,
            },
            MutationAction::Succeed(response) => Self {
                data: Some(response),
                is_loading: false,
                error: None,
            },
            // the last successful response stays available
            MutationAction::Fail(message) => Self {
                data: self.data.clone(),
                is_loading: false,
                error: Some(message),
            },
        };
        Rc::new(next)
    }
}

/// Await one write, record its outcome through `dispatch`, then invoke
/// exactly one of the handlers.
pub async fn run_mutation<T, Fut>(
    request: Fut,
    handlers: &MutationHandlers<T>,
    dispatch: impl Fn(MutationAction<T>),
) where
    T: Clone,
    Fut: Future<Output = Result<MutationResponse<T>, ClientError>>,
{
    match request.await {
        Ok(response) => {
            tracing::debug!(status = %response.status, "Write completed");
            dispatch(MutationAction::Succeed(response.clone()));
            handlers.on_completed.emit(response);
        }
        Err(e) => {
            let message = e.to_string();
            tracing::warn!("Write failed: {message}");
            dispatch(MutationAction::Fail(message.clone()));
            handlers.on_error.emit(message);
        }
    }
}

/// State of a write as seen by a page.
pub struct MutationHookReturn<T> {
    pub data: Option<MutationResponse<T>>,
    pub is_loading: bool,
    pub error: Option<String>,
}

type WriteFuture<T> =
    LocalBoxFuture<'static, Result<MutationResponse<T>, ClientError>>;

#[hook]
fn use_mutation<B, T, F>(
    request: F,
    handlers: MutationHandlers<T>,
) -> (Callback<B>, MutationHookReturn<T>)
where
    B: 'static,
    T: Clone + 'static,
    F: Fn(APIClient, B) -> WriteFuture<T> + 'static,
{
    let client = use_api_client();
    let state = use_reducer(MutationMachine::<T>::default);

    let trigger = {
        let state = state.clone();
        Callback::from(move |body: B| {
            state.dispatch(MutationAction::Start);
            let request = request(client.clone(), body);
            let handlers = handlers.clone();
            let state = state.clone();
            yew::platform::spawn_local(async move {
                run_mutation(request, &handlers, |action| {
                    state.dispatch(action)
                })
                .await;
            });
        })
    };

    (
        trigger,
        MutationHookReturn {
            data: state.data.clone(),
            is_loading: state.is_loading,
            error: state.error.clone(),
        },
    )
}

/// POST the trigger's body to `path`.
#[hook]
pub fn use_post_data<B, T>(
    path: ResourcePath,
    handlers: MutationHandlers<T>,
) -> (Callback<B>, MutationHookReturn<T>)
where
    B: Serialize + 'static,
    T: DeserializeOwned + Clone + 'static,
{
    use_mutation(
        move |client: APIClient, body: B| {
            tracing::debug!(%path, "POST issued");
            async move { client.post(&path, &body).await }.boxed_local()
        },
        handlers,
    )
}

/// PUT the trigger's body to `path`.
#[hook]
pub fn use_put_data<B, T>(
    path: ResourcePath,
    handlers: MutationHandlers<T>,
) -> (Callback<B>, MutationHookReturn<T>)
where
    B: Serialize + 'static,
    T: DeserializeOwned + Clone + 'static,
{
    use_mutation(
        move |client: APIClient, body: B| {
            tracing::debug!(%path, "PUT issued");
            async move { client.put(&path, &body).await }.boxed_local()
        },
        handlers,
    )
}

/// DELETE `path`. The trigger takes no body.
#[hook]
pub fn use_delete_data(
    path: ResourcePath,
    handlers: MutationHandlers<()>,
) -> (Callback<()>, MutationHookReturn<()>) {
    use_mutation(
        move |client: APIClient, _: ()| {
            tracing::debug!(%path, "DELETE issued");
            async move { client.delete(&path).await }.boxed_local()
        },
        handlers,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use payloads::{Company, CompanyId};
    use reqwest::StatusCode;
    use std::cell::{Cell, RefCell};

    struct Recorder {
        completed: Rc<Cell<u32>>,
        errors: Rc<RefCell<Vec<String>>>,
    }

    impl Recorder {
        fn new() -> Self {
            Self {
                completed: Rc::new(Cell::new(0)),
                errors: Rc::new(RefCell::new(vec![])),
            }
        }

        fn handlers<T: 'static>(&self) -> MutationHandlers<T> {
            let completed = self.completed.clone();
            let errors = self.errors.clone();
            MutationHandlers {
                on_completed: Callback::from(move |_: MutationResponse<T>| {
                    completed.set(completed.get() + 1)
                }),
                on_error: Callback::from(move |message: String| {
                    errors.borrow_mut().push(message)
                }),
            }
        }
    }

    fn created(name: &str) -> MutationResponse<Company> {
        MutationResponse {
            status: StatusCode::CREATED,
            body: Company {
                id: CompanyId(1),
                name: name.into(),
            },
        }
    }

    fn drive(
        state: Rc<MutationMachine<Company>>,
        result: Result<MutationResponse<Company>, ClientError>,
        recorder: &Recorder,
    ) -> Rc<MutationMachine<Company>> {
        let state = RefCell::new(state.reduce(MutationAction::Start));
        assert!(state.borrow().is_loading);
        block_on(run_mutation(
            async move { result },
            &recorder.handlers(),
            |action| {
                let next = state.borrow().clone().reduce(action);
                *state.borrow_mut() = next;
            },
        ));
        state.into_inner()
    }

    #[test]
    fn success_invokes_only_the_completion_handler() {
        let recorder = Recorder::new();
        let state = drive(
            Rc::new(MutationMachine::default()),
            Ok(created("Acme")),
            &recorder,
        );

        assert_eq!(recorder.completed.get(), 1);
        assert!(recorder.errors.borrow().is_empty());
        assert_eq!(state.data, Some(created("Acme")));
        assert!(!state.is_loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn failure_invokes_only_the_error_handler_and_keeps_data() {
        let recorder = Recorder::new();
        let state = drive(
            Rc::new(MutationMachine::default()),
            Ok(created("Acme")),
            &recorder,
        );

        let state = drive(
            state,
            Err(ClientError::APIError(
                StatusCode::BAD_REQUEST,
                "Bad request: O nome é obrigatório".into(),
            )),
            &recorder,
        );

        assert_eq!(recorder.completed.get(), 1);
        assert_eq!(*recorder.errors.borrow(), vec![
            "Bad request: O nome é obrigatório".to_string()
        ]);
        assert_eq!(state.data, Some(created("Acme")));
        assert_eq!(
            state.error.as_deref(),
            Some("Bad request: O nome é obrigatório")
        );
        assert!(!state.is_loading);
    }

    #[test]
    fn starting_a_write_clears_the_previous_error() {
        let state = Rc::new(MutationMachine::<Company>::default())
            .reduce(MutationAction::Fail("boom".into()))
            .reduce(MutationAction::Start);
        assert!(state.is_loading);
        assert_eq!(state.error, None);
    }
}
