use serde::{Deserialize, Serialize};

mod size;

pub use size::*;

pub type UserId = u64;

pub type PictureId = u64;

/// Every endpoint wraps its payload in this envelope, `code` zero is success.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BaseResponse<T> {
    pub code: i32,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> BaseResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            code: ErrorCode::Success.into(),
            data: Some(data),
            message: Some("ok".to_owned()),
        }
    }

    pub fn empty() -> Self {
        Self {
            code: ErrorCode::Success.into(),
            data: None,
            message: Some("ok".to_owned()),
        }
    }

    pub fn error(code: ErrorCode, message: &str) -> Self {
        Self {
            code: code.into(),
            data: None,
            message: Some(message.to_owned()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == i32::from(ErrorCode::Success)
    }

    pub fn error_code(&self) -> ErrorCode {
        self.code.into()
    }

    pub fn into_payload(self) -> Payload<T> {
        match (self.is_success(), self.data) {
            (true, Some(data)) => Payload::Data(data),
            (true, None) => Payload::Empty,
            (false, _) => Payload::Failed {
                code: self.code.into(),
                message: self.message,
            },
        }
    }
}

/// An envelope taken apart, failures keep the server's code and message.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload<T> {
    Data(T),
    Empty,
    Failed {
        code: ErrorCode,
        message: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    Success,
    Params,
    NotLogin,
    NoAuth,
    Forbidden,
    NotFound,
    System,
    Operation,
    Other(i32),
}

impl From<i32> for ErrorCode {
    fn from(value: i32) -> Self {
        match value {
            0 => Self::Success,
            40000 => Self::Params,
            40100 => Self::NotLogin,
            40101 => Self::NoAuth,
            40300 => Self::Forbidden,
            40400 => Self::NotFound,
            50000 => Self::System,
            50001 => Self::Operation,
            other => Self::Other(other),
        }
    }
}

impl From<ErrorCode> for i32 {
    fn from(value: ErrorCode) -> Self {
        match value {
            ErrorCode::Success => 0,
            ErrorCode::Params => 40000,
            ErrorCode::NotLogin => 40100,
            ErrorCode::NoAuth => 40101,
            ErrorCode::Forbidden => 40300,
            ErrorCode::NotFound => 40400,
            ErrorCode::System => 50000,
            ErrorCode::Operation => 50001,
            ErrorCode::Other(other) => other,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", i32::from(*self))
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
    #[serde(other)]
    Unknown,
}

impl UserRole {
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

pub const ANONYMOUS_NAME: &str = "Not logged in";

/// The session user as reported by `/user/get/login`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginUserVo {
    pub id: UserId,
    pub user_account: Option<String>,
    pub user_name: Option<String>,
    pub user_avatar: Option<String>,
    pub user_profile: Option<String>,
    #[serde(default)]
    pub user_role: UserRole,
    pub create_time: Option<String>,
    pub update_time: Option<String>,
}

impl LoginUserVo {
    pub fn anonymous() -> Self {
        Self {
            id: 0,
            user_account: None,
            user_name: Some(ANONYMOUS_NAME.to_owned()),
            user_avatar: None,
            user_profile: None,
            user_role: UserRole::User,
            create_time: None,
            update_time: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.id != 0
    }

    pub fn is_admin(&self) -> bool {
        self.user_role.is_admin()
    }

    pub fn display_name(&self) -> &str {
        self.user_name.as_deref().unwrap_or(ANONYMOUS_NAME)
    }
}

impl Default for LoginUserVo {
    fn default() -> Self {
        Self::anonymous()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserVo {
    pub id: UserId,
    pub user_account: Option<String>,
    pub user_name: Option<String>,
    pub user_avatar: Option<String>,
    pub user_profile: Option<String>,
    #[serde(default)]
    pub user_role: UserRole,
    pub create_time: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserLoginRequest {
    pub user_account: String,
    pub user_password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PictureVo {
    pub id: PictureId,
    pub url: Option<String>,
    pub name: Option<String>,
    pub introduction: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub pic_size: Option<u64>,
    pub pic_width: Option<u32>,
    pub pic_height: Option<u32>,
    pub pic_scale: Option<f64>,
    pub pic_format: Option<String>,
    pub user_id: UserId,
    pub create_time: Option<String>,
    pub edit_time: Option<String>,
    pub update_time: Option<String>,
    pub user: Option<UserVo>,
}

impl PictureVo {
    /// Name to save a download under, falls back to the picture id.
    pub fn file_name(&self) -> String {
        let stem = match &self.name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => format!("picture-{}", self.id),
        };
        match &self.pic_format {
            Some(format) if !format.is_empty() => format!("{}.{}", stem, format),
            _ => stem,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PictureEditRequest {
    pub id: PictureId,
    pub name: Option<String>,
    pub introduction: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
}

impl From<&PictureVo> for PictureEditRequest {
    fn from(picture: &PictureVo) -> Self {
        Self {
            id: picture.id,
            name: picture.name.clone(),
            introduction: picture.introduction.clone(),
            category: picture.category.clone(),
            tags: picture.tags.clone(),
        }
    }
}

/// Profile changes, `user_role` is only honored for administrators.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdateRequest {
    pub id: UserId,
    pub user_name: Option<String>,
    pub user_avatar: Option<String>,
    pub user_profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_role: Option<UserRole>,
}

impl From<&UserVo> for UserUpdateRequest {
    fn from(user: &UserVo) -> Self {
        Self {
            id: user.id,
            user_name: user.user_name.clone(),
            user_avatar: user.user_avatar.clone(),
            user_profile: user.user_profile.clone(),
            user_role: None,
        }
    }
}

impl From<&LoginUserVo> for UserUpdateRequest {
    fn from(user: &LoginUserVo) -> Self {
        Self {
            id: user.id,
            user_name: user.user_name.clone(),
            user_avatar: user.user_avatar.clone(),
            user_profile: user.user_profile.clone(),
            user_role: None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserQueryRequest {
    pub current: u64,
    pub page_size: u64,
}

impl Default for UserQueryRequest {
    fn default() -> Self {
        Self {
            current: 1,
            page_size: 10,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
    pub total: u64,
    pub size: u64,
    pub current: u64,
}

impl<T> Page<T> {
    pub fn pages(&self) -> u64 {
        if self.size == 0 {
            0
        } else {
            self.total.div_ceil(self.size)
        }
    }
}
