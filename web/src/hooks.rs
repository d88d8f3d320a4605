use std::fmt;
use std::ops::Deref;

use yew::prelude::*;
use yew_router::prelude::*;

use replies::{LoginUserVo, UserId};

use crate::routes::Route;
use crate::services::Services;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UserContext {
    #[default]
    Initializing,
    Anonymous,
    User(LoginUserVo),
}

impl UserContext {
    pub fn user(&self) -> Option<&LoginUserVo> {
        match self {
            UserContext::User(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user().map(|u| u.is_admin()).unwrap_or_default()
    }

    /// Whether the session may edit the profile of `id`.
    pub fn may_edit_user(&self, id: UserId) -> bool {
        self.user()
            .map(|u| u.is_admin() || u.id == id)
            .unwrap_or_default()
    }
}

impl From<LoginUserVo> for UserContext {
    fn from(value: LoginUserVo) -> Self {
        if value.is_authenticated() {
            Self::User(value)
        } else {
            Self::Anonymous
        }
    }
}

/// State handle for the [`use_user_context`] hook.
pub struct UseUserContextHandle {
    inner: UseStateHandle<UserContext>,
    navigator: Navigator,
    services: Services,
}

impl UseUserContextHandle {
    pub fn login(&self, value: LoginUserVo) {
        self.services.store.set_login_user(value.clone());
        self.inner.set(value.into());
        self.navigator.push(&Route::Home);
    }

    pub fn logout(&self) {
        self.services.store.clear();
        self.inner.set(UserContext::Anonymous);
        self.navigator.push(&Route::Login);
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    /// Publishes whatever the store currently holds.
    pub fn sync(&self) {
        self.inner.set(self.services.store.login_user().into());
    }
}

impl Deref for UseUserContextHandle {
    type Target = UserContext;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Clone for UseUserContextHandle {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            navigator: self.navigator.clone(),
            services: self.services.clone(),
        }
    }
}

impl PartialEq for UseUserContextHandle {
    fn eq(&self, other: &Self) -> bool {
        *self.inner == *other.inner
    }
}

impl fmt::Debug for UseUserContextHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UseUserContextHandle")
            .field("value", &format!("{:?}", *self.inner))
            .finish()
    }
}

/// This hook is used to manage user context.
#[hook]
pub fn use_user_context() -> UseUserContextHandle {
    let inner = use_context::<UseStateHandle<UserContext>>().unwrap();
    let navigator = use_navigator().unwrap();
    let services = use_services();

    UseUserContextHandle {
        inner,
        navigator,
        services,
    }
}

#[hook]
pub fn use_services() -> Services {
    use_context::<Services>().unwrap()
}
