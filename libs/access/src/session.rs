use async_trait::async_trait;
use std::{cell::RefCell, rc::Rc};
use tracing::debug;

use replies::{LoginUserVo, Payload};

use crate::{ApiError, UserService};

#[async_trait(?Send)]
pub trait SessionProvider {
    /// Fetches the session user again, regardless of what is held.
    async fn refresh(&self) -> Result<(), ApiError>;

    fn current_user(&self) -> LoginUserVo;
}

#[async_trait(?Send)]
impl<T: SessionProvider + ?Sized> SessionProvider for Rc<T> {
    async fn refresh(&self) -> Result<(), ApiError> {
        (**self).refresh().await
    }

    fn current_user(&self) -> LoginUserVo {
        (**self).current_user()
    }
}

/// Holds the logged in user, anonymous until a refresh says otherwise.
pub struct LoginUserStore<U> {
    users: U,
    login_user: RefCell<LoginUserVo>,
}

impl<U> LoginUserStore<U>
where
    U: UserService,
{
    pub fn new(users: U) -> Self {
        Self {
            users,
            login_user: RefCell::new(LoginUserVo::anonymous()),
        }
    }

    pub fn login_user(&self) -> LoginUserVo {
        self.login_user.borrow().clone()
    }

    pub fn set_login_user(&self, user: LoginUserVo) {
        *self.login_user.borrow_mut() = user;
    }

    pub fn clear(&self) {
        self.set_login_user(LoginUserVo::anonymous());
    }

    /// Application failures leave the store anonymous, transport failures
    /// leave it untouched and are returned.
    pub async fn fetch_login_user(&self) -> Result<(), ApiError> {
        let response = self.users.login_user().await?;

        match response.into_payload() {
            Payload::Data(user) => {
                debug!(id = user.id, role = ?user.user_role, "session:refreshed");
                self.set_login_user(user);
            }
            Payload::Empty => {
                debug!("session:empty");
                self.clear();
            }
            Payload::Failed { code, message } => {
                debug!(%code, ?message, "session:anonymous");
                self.clear();
            }
        }

        Ok(())
    }
}

#[async_trait(?Send)]
impl<U> SessionProvider for LoginUserStore<U>
where
    U: UserService,
{
    async fn refresh(&self) -> Result<(), ApiError> {
        self.fetch_login_user().await
    }

    fn current_user(&self) -> LoginUserVo {
        self.login_user()
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use std::rc::Rc;

    use replies::{BaseResponse, ErrorCode, UserRole};

    use super::*;
    use crate::fakes::{login_user, FakeUsers};

    #[tokio::test]
    async fn it_should_start_anonymous() -> Result<()> {
        let store = LoginUserStore::new(Rc::new(FakeUsers::default()));

        assert_eq!(store.current_user(), LoginUserVo::anonymous());

        Ok(())
    }

    #[tokio::test]
    async fn it_should_replace_user_on_refresh() -> Result<()> {
        let users = Rc::new(FakeUsers::default().with_login(Ok(BaseResponse::ok(login_user(
            1,
            UserRole::Admin,
        )))));
        let store = LoginUserStore::new(users.clone());

        store.refresh().await?;

        assert_eq!(store.current_user().id, 1);
        assert!(store.current_user().is_admin());
        assert_eq!(users.login_calls(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn it_should_drop_stale_user_when_session_is_gone() -> Result<()> {
        let users = Rc::new(FakeUsers::default().with_login(Ok(BaseResponse::error(
            ErrorCode::NotLogin,
            "not logged in",
        ))));
        let store = LoginUserStore::new(users);
        store.set_login_user(login_user(1, UserRole::Admin));

        store.refresh().await?;

        assert_eq!(store.current_user(), LoginUserVo::anonymous());

        Ok(())
    }

    #[tokio::test]
    async fn it_should_propagate_transport_errors_and_keep_user() -> Result<()> {
        let users = Rc::new(FakeUsers::default().with_login(Err(ApiError::InternalServerError)));
        let store = LoginUserStore::new(users);
        store.set_login_user(login_user(2, UserRole::User));

        assert_eq!(store.refresh().await, Err(ApiError::InternalServerError));
        assert_eq!(store.current_user().id, 2);

        Ok(())
    }
}
