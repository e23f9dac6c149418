//! Application state: the global store and page-level states.
//!
//! Every state is a plain value transitioned by pure [`Reduce`]rs, so it's
//! passed around explicitly rather than living in a global.

pub mod page;
pub mod properties;
pub mod ui;
pub mod user;

use common::Reduce;
use derive_more::From;

/// Global application store.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Store {
    /// [`properties::State`] slice.
    pub properties: properties::State,

    /// [`user::State`] slice.
    pub user: user::State,

    /// [`ui::State`] slice.
    pub ui: ui::State,
}

/// Action upon a [`Store`], routed to one of its slices.
#[derive(Clone, Debug, Eq, From, PartialEq)]
pub enum Action {
    /// [`properties::Action`].
    Properties(properties::Action),

    /// [`user::Action`].
    User(user::Action),

    /// [`ui::Action`].
    Ui(ui::Action),
}

impl Reduce<Action> for Store {
    fn reduce(self, action: Action) -> Self {
        let Self {
            properties,
            user,
            ui,
        } = self;
        match action {
            Action::Properties(a) => Self {
                properties: properties.reduce(a),
                user,
                ui,
            },
            Action::User(a) => Self {
                properties,
                user: user.reduce(a),
                ui,
            },
            Action::Ui(a) => Self {
                properties,
                user,
                ui: ui.reduce(a),
            },
        }
    }
}
