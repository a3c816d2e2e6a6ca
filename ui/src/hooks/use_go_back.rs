use yew::prelude::*;
use yew_router::prelude::*;

use super::use_push_route;
use crate::Route;

/// Where a "go back" lands.
#[derive(Debug, Clone, PartialEq)]
pub enum BackTarget {
    History,
    Route(Route),
}

/// Step back through the session history, unless the page was opened
/// directly and there is nothing to step back to.
pub fn back_target(history_len: u32, fallback: &Route) -> BackTarget {
    if history_len > 1 {
        BackTarget::History
    } else {
        BackTarget::Route(fallback.clone())
    }
}

/// Returns a callback that returns to the previous page, or to `fallback`
/// when there is no previous page.
#[hook]
pub fn use_go_back(fallback: Route) -> Callback<()> {
    let navigator = use_navigator();
    let push_route = use_push_route();

    Callback::from(move |_: ()| {
        let history_len = web_sys::window()
            .and_then(|window| window.history().ok())
            .and_then(|history| history.length().ok())
            .unwrap_or(0);
        match (back_target(history_len, &fallback), &navigator) {
            (BackTarget::History, Some(navigator)) => navigator.back(),
            (BackTarget::History, None) => push_route.emit(fallback.clone()),
            (BackTarget::Route(route), _) => push_route.emit(route),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::CompanyId;

    #[test]
    fn goes_back_when_there_is_history() {
        assert_eq!(back_target(3, &Route::Companies), BackTarget::History);
        assert_eq!(back_target(2, &Route::Companies), BackTarget::History);
    }

    #[test]
    fn opened_directly_falls_back_to_the_route() {
        let fallback = Route::Company {
            company_id: CompanyId(42),
            tab: crate::CompanyTab::Units,
        };
        assert_eq!(
            back_target(1, &fallback),
            BackTarget::Route(fallback.clone())
        );
        assert_eq!(back_target(0, &fallback), BackTarget::Route(fallback));
    }
}
