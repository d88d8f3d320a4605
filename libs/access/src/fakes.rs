use async_trait::async_trait;
use std::{cell::Cell, collections::HashMap};

use replies::{
    BaseResponse, ErrorCode, LoginUserVo, PictureId, PictureVo, UserId, UserRole, UserVo,
};

use crate::{ApiError, PictureService, SessionProvider, UserService};

pub fn login_user(id: UserId, role: UserRole) -> LoginUserVo {
    LoginUserVo {
        id,
        user_account: Some(format!("account-{}", id)),
        user_name: Some(format!("name-{}", id)),
        user_role: role,
        ..LoginUserVo::anonymous()
    }
}

pub fn user(id: UserId, name: Option<&str>) -> UserVo {
    UserVo {
        id,
        user_account: None,
        user_name: name.map(|n| n.to_owned()),
        user_avatar: None,
        user_profile: None,
        user_role: UserRole::User,
        create_time: None,
    }
}

pub fn picture(id: PictureId, owner: UserId) -> PictureVo {
    PictureVo {
        id,
        url: Some(format!("https://cdn.example.com/{}.png", id)),
        name: Some(format!("picture {}", id)),
        introduction: None,
        category: None,
        tags: Vec::new(),
        pic_size: Some(2048),
        pic_width: Some(640),
        pic_height: Some(480),
        pic_scale: Some(1.33),
        pic_format: Some("png".to_owned()),
        user_id: owner,
        create_time: None,
        edit_time: None,
        update_time: None,
        user: None,
    }
}

pub struct FakeSession {
    user: LoginUserVo,
    failure: Option<ApiError>,
    refreshes: Cell<usize>,
}

impl FakeSession {
    pub fn new(user: LoginUserVo) -> Self {
        Self {
            user,
            failure: None,
            refreshes: Cell::new(0),
        }
    }

    pub fn failing(self, error: ApiError) -> Self {
        Self {
            failure: Some(error),
            ..self
        }
    }

    pub fn refreshes(&self) -> usize {
        self.refreshes.get()
    }
}

#[async_trait(?Send)]
impl SessionProvider for FakeSession {
    async fn refresh(&self) -> Result<(), ApiError> {
        self.refreshes.set(self.refreshes.get() + 1);
        match &self.failure {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    fn current_user(&self) -> LoginUserVo {
        self.user.clone()
    }
}

#[derive(Default)]
pub struct FakePictures {
    responses: HashMap<PictureId, Result<BaseResponse<PictureVo>, ApiError>>,
    calls: Cell<usize>,
}

impl FakePictures {
    pub fn with_response(
        mut self,
        id: PictureId,
        response: Result<BaseResponse<PictureVo>, ApiError>,
    ) -> Self {
        self.responses.insert(id, response);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

#[async_trait(?Send)]
impl PictureService for FakePictures {
    async fn picture_vo_by_id(&self, id: PictureId) -> Result<BaseResponse<PictureVo>, ApiError> {
        self.calls.set(self.calls.get() + 1);
        self.responses
            .get(&id)
            .cloned()
            .unwrap_or_else(|| Ok(BaseResponse::error(ErrorCode::NotFound, "picture not found")))
    }
}

/// When suspending, every request yields once before answering and named
/// users come back suffixed with the index of the request.
#[derive(Default)]
pub struct FakeUsers {
    responses: HashMap<UserId, Result<BaseResponse<UserVo>, ApiError>>,
    login: Option<Result<BaseResponse<LoginUserVo>, ApiError>>,
    suspending: bool,
    calls: Cell<usize>,
    login_calls: Cell<usize>,
}

impl FakeUsers {
    pub fn with_user(self, id: UserId, name: &str) -> Self {
        self.with_response(id, Ok(BaseResponse::ok(user(id, Some(name)))))
    }

    pub fn with_response(
        mut self,
        id: UserId,
        response: Result<BaseResponse<UserVo>, ApiError>,
    ) -> Self {
        self.responses.insert(id, response);
        self
    }

    pub fn with_login(self, login: Result<BaseResponse<LoginUserVo>, ApiError>) -> Self {
        Self {
            login: Some(login),
            ..self
        }
    }

    pub fn suspending(self) -> Self {
        Self {
            suspending: true,
            ..self
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn login_calls(&self) -> usize {
        self.login_calls.get()
    }
}

#[async_trait(?Send)]
impl UserService for FakeUsers {
    async fn user_by_id(&self, id: UserId) -> Result<BaseResponse<UserVo>, ApiError> {
        let index = self.calls.get();
        self.calls.set(index + 1);

        if self.suspending {
            tokio::task::yield_now().await;
        }

        let response = self
            .responses
            .get(&id)
            .cloned()
            .unwrap_or_else(|| Ok(BaseResponse::error(ErrorCode::NotFound, "user not found")));

        if self.suspending {
            response.map(|mut response| {
                if let Some(user) = response.data.as_mut() {
                    user.user_name = user.user_name.take().map(|n| format!("{}-{}", n, index));
                }
                response
            })
        } else {
            response
        }
    }

    async fn login_user(&self) -> Result<BaseResponse<LoginUserVo>, ApiError> {
        self.login_calls.set(self.login_calls.get() + 1);
        self.login.clone().unwrap_or_else(|| {
            Ok(BaseResponse::error(ErrorCode::NotLogin, "not logged in"))
        })
    }
}
