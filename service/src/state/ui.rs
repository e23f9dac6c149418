//! UI store slice.

use common::{define_kind, Reduce};

/// State of the UI chrome.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct State {
    /// Indicator whether the sidebar is open.
    pub sidebar_open: bool,

    /// Content of the open modal, if any.
    pub modal: Option<String>,

    /// Shown [`Toast`], if any.
    pub toast: Option<Toast>,
}

impl State {
    /// Indicates whether a modal is open.
    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.modal.is_some()
    }
}

/// Short-living message shown to the user.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Toast {
    /// Text of this [`Toast`].
    pub message: String,

    /// [`ToastKind`] of this [`Toast`].
    pub kind: ToastKind,
}

define_kind! {
    #[doc = "Kind of a [`Toast`]."]
    enum ToastKind {
        #[doc = "Operation succeeded."]
        Success = 1,

        #[doc = "Operation failed."]
        Error = 2,

        #[doc = "Informational message."]
        Info = 3,
    }
}

/// Action upon a [`State`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    /// Opens the sidebar if closed, and closes it otherwise.
    ToggleSidebar,

    /// Opens a modal with the provided content.
    OpenModal(String),

    /// Closes the modal.
    CloseModal,

    /// Shows the provided [`Toast`], replacing the current one.
    ShowToast(Toast),

    /// Hides the current [`Toast`].
    HideToast,
}

impl Reduce<Action> for State {
    fn reduce(mut self, action: Action) -> Self {
        match action {
            Action::ToggleSidebar => self.sidebar_open = !self.sidebar_open,
            Action::OpenModal(content) => self.modal = Some(content),
            Action::CloseModal => self.modal = None,
            Action::ShowToast(toast) => self.toast = Some(toast),
            Action::HideToast => self.toast = None,
        }
        self
    }
}

#[cfg(test)]
mod spec {
    use common::{reduce::reduce_all, Reduce as _};

    use super::{Action, State, Toast, ToastKind};

    #[test]
    fn toast_show_hide() {
        let toast = Toast {
            message: "Listing submitted".into(),
            kind: ToastKind::Success,
        };

        let state = State::default().reduce(Action::ShowToast(toast.clone()));
        assert_eq!(state.toast, Some(toast));

        let state = state.reduce(Action::HideToast);
        assert_eq!(state.toast, None);
    }

    #[test]
    fn sidebar_toggles() {
        let state = reduce_all(
            State::default(),
            [Action::ToggleSidebar, Action::ToggleSidebar, Action::ToggleSidebar],
        );

        assert!(state.sidebar_open);
    }

    #[test]
    fn modal_open_close() {
        let state = State::default().reduce(Action::OpenModal("Photos".into()));
        assert!(state.is_modal_open());

        let state = state.reduce(Action::CloseModal);
        assert!(!state.is_modal_open());
        assert_eq!(state.modal, None);
    }
}
