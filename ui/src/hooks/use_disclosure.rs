use std::rc::Rc;
use yew::prelude::*;

/// Open/closed state gating a dialog or menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Disclosure {
    pub is_open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisclosureAction {
    Open,
    Close,
    Toggle,
}

impl Reducible for Disclosure {
    type Action = DisclosureAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let is_open = match action {
            DisclosureAction::Open => true,
            DisclosureAction::Close => false,
            DisclosureAction::Toggle => !self.is_open,
        };
        if is_open == self.is_open {
            return self;
        }
        Rc::new(Disclosure { is_open })
    }
}

#[derive(Clone, PartialEq)]
pub struct DisclosureHandle {
    pub is_open: bool,
    pub on_open: Callback<()>,
    pub on_close: Callback<()>,
    pub on_toggle: Callback<()>,
}

#[hook]
pub fn use_disclosure(initially_open: bool) -> DisclosureHandle {
    let state = use_reducer(|| Disclosure {
        is_open: initially_open,
    });

    let action = |action: DisclosureAction| {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(action))
    };

    DisclosureHandle {
        is_open: state.is_open,
        on_open: action(DisclosureAction::Open),
        on_close: action(DisclosureAction::Close),
        on_toggle: action(DisclosureAction::Toggle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(start: bool, actions: &[DisclosureAction]) -> bool {
        actions
            .iter()
            .fold(Rc::new(Disclosure { is_open: start }), |state, action| {
                state.reduce(*action)
            })
            .is_open
    }

    #[test]
    fn open_then_close_restores_closed_state() {
        use DisclosureAction::*;
        assert!(!apply(false, &[Open, Close]));
        assert!(apply(false, &[Open]));
    }

    #[test]
    fn toggling_twice_is_a_no_op() {
        use DisclosureAction::*;
        assert!(!apply(false, &[Toggle, Toggle]));
        assert!(apply(true, &[Toggle, Toggle]));
        assert!(!apply(true, &[Toggle]));
    }

    #[test]
    fn repeated_open_is_idempotent() {
        let state = Rc::new(Disclosure { is_open: true });
        let next = state.clone().reduce(DisclosureAction::Open);
        assert!(Rc::ptr_eq(&state, &next));
    }
}
