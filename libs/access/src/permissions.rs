use std::fmt;
use tracing::{debug, warn};

use replies::{ErrorCode, Payload, PictureId, UserId};

use crate::{ApiError, PictureService, SessionProvider};

/// Why a modification was allowed or denied.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    Administrator,
    Owner,
    NotOwner {
        owner: UserId,
    },
    Rejected {
        code: ErrorCode,
        message: Option<String>,
    },
    Missing,
    Failed(ApiError),
}

impl Decision {
    pub fn allowed(&self) -> bool {
        matches!(self, Self::Administrator | Self::Owner)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Administrator => write!(f, "administrator"),
            Self::Owner => write!(f, "owner"),
            Self::NotOwner { owner } => write!(f, "owned by {}", owner),
            Self::Rejected {
                code,
                message: Some(message),
            } => write!(f, "rejected {}: {}", code, message),
            Self::Rejected {
                code,
                message: None,
            } => write!(f, "rejected {}", code),
            Self::Missing => write!(f, "no picture"),
            Self::Failed(e) => write!(f, "failed: {}", e),
        }
    }
}

/// Decides whether the session user may modify a picture. Administrators
/// may modify anything, everybody else only what they uploaded.
pub struct Permissions<S, P> {
    session: S,
    pictures: P,
}

impl<S, P> Permissions<S, P>
where
    S: SessionProvider,
    P: PictureService,
{
    pub fn new(session: S, pictures: P) -> Self {
        Self { session, pictures }
    }

    pub async fn decide(&self, picture_id: PictureId) -> Decision {
        match self.try_decide(picture_id).await {
            Ok(decision) => decision,
            Err(e) => Decision::Failed(e),
        }
    }

    async fn try_decide(&self, picture_id: PictureId) -> Result<Decision, ApiError> {
        self.session.refresh().await?;

        let user = self.session.current_user();
        if user.is_admin() {
            return Ok(Decision::Administrator);
        }

        let response = self.pictures.picture_vo_by_id(picture_id).await?;

        Ok(match response.into_payload() {
            Payload::Data(picture) if picture.user_id == user.id => Decision::Owner,
            Payload::Data(picture) => Decision::NotOwner {
                owner: picture.user_id,
            },
            Payload::Empty => Decision::Missing,
            Payload::Failed { code, message } => Decision::Rejected { code, message },
        })
    }

    /// Denies whenever anything goes wrong.
    pub async fn is_owner_or_admin(&self, picture_id: PictureId) -> bool {
        let decision = self.decide(picture_id).await;

        match &decision {
            Decision::Failed(_) | Decision::Rejected { .. } | Decision::Missing => {
                warn!(picture_id, "permissions: {}", decision)
            }
            _ => debug!(picture_id, "permissions: {}", decision),
        }

        decision.allowed()
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use std::rc::Rc;

    use replies::{BaseResponse, UserRole};

    use super::*;
    use crate::fakes::{login_user, picture, FakePictures, FakeSession};

    fn permissions(
        session: &Rc<FakeSession>,
        pictures: &Rc<FakePictures>,
    ) -> Permissions<Rc<FakeSession>, Rc<FakePictures>> {
        Permissions::new(session.clone(), pictures.clone())
    }

    #[tokio::test]
    async fn it_should_allow_admin_without_fetching_picture() -> Result<()> {
        let session = Rc::new(FakeSession::new(login_user(2, UserRole::Admin)));
        let pictures = Rc::new(
            FakePictures::default()
                .with_response(5, Err(ApiError::InternalServerError))
                .with_response(6, Ok(BaseResponse::ok(picture(6, 1)))),
        );
        let permissions = permissions(&session, &pictures);

        assert_eq!(permissions.decide(5).await, Decision::Administrator);
        assert!(permissions.is_owner_or_admin(6).await);
        assert_eq!(pictures.calls(), 0);

        Ok(())
    }

    #[tokio::test]
    async fn it_should_allow_owner() -> Result<()> {
        let session = Rc::new(FakeSession::new(login_user(1, UserRole::User)));
        let pictures =
            Rc::new(FakePictures::default().with_response(5, Ok(BaseResponse::ok(picture(5, 1)))));
        let permissions = permissions(&session, &pictures);

        assert_eq!(permissions.decide(5).await, Decision::Owner);
        assert!(permissions.is_owner_or_admin(5).await);

        Ok(())
    }

    #[tokio::test]
    async fn it_should_deny_other_users() -> Result<()> {
        let session = Rc::new(FakeSession::new(login_user(2, UserRole::User)));
        let pictures =
            Rc::new(FakePictures::default().with_response(5, Ok(BaseResponse::ok(picture(5, 1)))));
        let permissions = permissions(&session, &pictures);

        assert_eq!(permissions.decide(5).await, Decision::NotOwner { owner: 1 });
        assert!(!permissions.is_owner_or_admin(5).await);

        Ok(())
    }

    #[tokio::test]
    async fn it_should_deny_unknown_roles_that_do_not_own() -> Result<()> {
        let session = Rc::new(FakeSession::new(login_user(2, UserRole::Unknown)));
        let pictures =
            Rc::new(FakePictures::default().with_response(5, Ok(BaseResponse::ok(picture(5, 1)))));

        assert!(!permissions(&session, &pictures).is_owner_or_admin(5).await);

        Ok(())
    }

    #[tokio::test]
    async fn it_should_deny_when_server_rejects() -> Result<()> {
        let session = Rc::new(FakeSession::new(login_user(1, UserRole::User)));
        let pictures = Rc::new(FakePictures::default().with_response(
            5,
            Ok(BaseResponse::error(ErrorCode::NotFound, "no such picture")),
        ));
        let permissions = permissions(&session, &pictures);

        assert_eq!(
            permissions.decide(5).await,
            Decision::Rejected {
                code: ErrorCode::NotFound,
                message: Some("no such picture".to_owned())
            }
        );
        assert!(!permissions.is_owner_or_admin(5).await);

        Ok(())
    }

    #[tokio::test]
    async fn it_should_deny_when_payload_is_missing() -> Result<()> {
        let session = Rc::new(FakeSession::new(login_user(1, UserRole::User)));
        let pictures = Rc::new(FakePictures::default().with_response(5, Ok(BaseResponse::empty())));
        let permissions = permissions(&session, &pictures);

        assert_eq!(permissions.decide(5).await, Decision::Missing);
        assert!(!permissions.is_owner_or_admin(5).await);

        Ok(())
    }

    #[tokio::test]
    async fn it_should_deny_when_picture_request_fails() -> Result<()> {
        let session = Rc::new(FakeSession::new(login_user(1, UserRole::User)));
        let pictures = Rc::new(
            FakePictures::default().with_response(5, Err(ApiError::Request("offline".to_owned()))),
        );
        let permissions = permissions(&session, &pictures);

        assert_eq!(
            permissions.decide(5).await,
            Decision::Failed(ApiError::Request("offline".to_owned()))
        );
        assert!(!permissions.is_owner_or_admin(5).await);

        Ok(())
    }

    #[tokio::test]
    async fn it_should_deny_when_session_refresh_fails() -> Result<()> {
        let session = Rc::new(
            FakeSession::new(login_user(1, UserRole::Admin)).failing(ApiError::Unauthorized),
        );
        let pictures =
            Rc::new(FakePictures::default().with_response(5, Ok(BaseResponse::ok(picture(5, 1)))));
        let permissions = permissions(&session, &pictures);

        assert_eq!(
            permissions.decide(5).await,
            Decision::Failed(ApiError::Unauthorized)
        );
        assert!(!permissions.is_owner_or_admin(5).await);
        assert_eq!(pictures.calls(), 0);

        Ok(())
    }

    #[tokio::test]
    async fn it_should_refresh_session_on_every_check() -> Result<()> {
        let session = Rc::new(FakeSession::new(login_user(1, UserRole::User)));
        let pictures =
            Rc::new(FakePictures::default().with_response(5, Ok(BaseResponse::ok(picture(5, 1)))));
        let permissions = permissions(&session, &pictures);

        permissions.is_owner_or_admin(5).await;
        permissions.is_owner_or_admin(5).await;

        assert_eq!(session.refreshes(), 2);
        assert_eq!(pictures.calls(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn it_should_see_role_changes_through_the_store() -> Result<()> {
        use crate::fakes::FakeUsers;
        use crate::LoginUserStore;

        let users = Rc::new(
            FakeUsers::default().with_login(Ok(BaseResponse::ok(login_user(2, UserRole::User)))),
        );
        let store = Rc::new(LoginUserStore::new(users));
        store.set_login_user(login_user(2, UserRole::Admin));
        let pictures =
            Rc::new(FakePictures::default().with_response(5, Ok(BaseResponse::ok(picture(5, 1)))));
        let permissions = Permissions::new(store.clone(), pictures.clone());

        assert_eq!(permissions.decide(5).await, Decision::NotOwner { owner: 1 });
        assert_eq!(pictures.calls(), 1);

        Ok(())
    }

    #[test]
    fn it_should_describe_decisions() {
        assert_eq!(Decision::NotOwner { owner: 3 }.to_string(), "owned by 3");
        assert_eq!(
            Decision::Rejected {
                code: ErrorCode::NotFound,
                message: None
            }
            .to_string(),
            "rejected 40400"
        );
        assert_eq!(
            Decision::Failed(ApiError::Forbidden).to_string(),
            "failed: Forbidden"
        );
    }
}
