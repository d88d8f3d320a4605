use async_trait::async_trait;
use std::rc::Rc;

use replies::{BaseResponse, LoginUserVo, PictureId, PictureVo, UserId, UserVo};

use crate::ApiError;

#[async_trait(?Send)]
pub trait PictureService {
    async fn picture_vo_by_id(&self, id: PictureId) -> Result<BaseResponse<PictureVo>, ApiError>;
}

#[async_trait(?Send)]
pub trait UserService {
    async fn user_by_id(&self, id: UserId) -> Result<BaseResponse<UserVo>, ApiError>;

    /// The user owning the current session, if any.
    async fn login_user(&self) -> Result<BaseResponse<LoginUserVo>, ApiError>;
}

#[async_trait(?Send)]
impl<T: PictureService + ?Sized> PictureService for Rc<T> {
    async fn picture_vo_by_id(&self, id: PictureId) -> Result<BaseResponse<PictureVo>, ApiError> {
        (**self).picture_vo_by_id(id).await
    }
}

#[async_trait(?Send)]
impl<T: UserService + ?Sized> UserService for Rc<T> {
    async fn user_by_id(&self, id: UserId) -> Result<BaseResponse<UserVo>, ApiError> {
        (**self).user_by_id(id).await
    }

    async fn login_user(&self) -> Result<BaseResponse<LoginUserVo>, ApiError> {
        (**self).login_user().await
    }
}
