//! [`User`] store slice.

use common::Reduce;

use crate::domain::{user, User};

/// State of the current [`User`] session.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct State {
    /// Current [`User`], if any.
    pub user: Option<User>,

    /// Indicator whether the current [`User`] is authenticated.
    pub is_authenticated: bool,

    /// Indicator whether the [`User`] is being loaded.
    pub loading: bool,

    /// Last loading error, if any.
    pub error: Option<String>,
}

/// Partial update of a [`User`].
///
/// Only the [`Some`] fields are applied.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Patch {
    /// New [`User::email`].
    pub email: Option<user::Email>,

    /// New [`User::phone`].
    pub phone: Option<user::Phone>,

    /// New [`User::name`].
    pub name: Option<user::Name>,

    /// New [`User::kind`].
    pub kind: Option<user::Kind>,

    /// New [`User::is_verified`].
    pub is_verified: Option<bool>,

    /// New [`User::subscription_plan`].
    pub subscription_plan: Option<user::SubscriptionPlan>,

    /// New [`User::subscription_expiry`].
    pub subscription_expiry: Option<Option<user::ExpiryDateTime>>,
}

impl Patch {
    /// Applies this [`Patch`] to the provided [`User`].
    #[must_use]
    pub fn apply(self, user: User) -> User {
        let Self {
            email,
            phone,
            name,
            kind,
            is_verified,
            subscription_plan,
            subscription_expiry,
        } = self;

        User {
            email: email.unwrap_or(user.email),
            phone: phone.unwrap_or(user.phone),
            name: name.unwrap_or(user.name),
            kind: kind.unwrap_or(user.kind),
            is_verified: is_verified.unwrap_or(user.is_verified),
            subscription_plan: subscription_plan
                .unwrap_or(user.subscription_plan),
            subscription_expiry: subscription_expiry
                .unwrap_or(user.subscription_expiry),
            ..user
        }
    }
}

/// Action upon a [`State`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    /// Authenticates the provided [`User`], finishing the loading.
    Set(User),

    /// Forgets the current [`User`].
    Clear,

    /// Marks the [`User`] as being loaded (or not).
    SetLoading(bool),

    /// Records a loading error, finishing the loading.
    SetError(String),

    /// Updates the current [`User`], if any.
    Update(Patch),
}

impl Reduce<Action> for State {
    fn reduce(mut self, action: Action) -> Self {
        match action {
            Action::Set(user) => {
                self.user = Some(user);
                self.is_authenticated = true;
                self.loading = false;
                self.error = None;
            }
            Action::Clear => {
                self.user = None;
                self.is_authenticated = false;
            }
            Action::SetLoading(loading) => self.loading = loading,
            Action::SetError(error) => {
                self.error = Some(error);
                self.loading = false;
            }
            Action::Update(patch) => {
                self.user = self.user.map(|u| patch.apply(u));
            }
        }
        self
    }
}
