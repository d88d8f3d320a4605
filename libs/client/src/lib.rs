use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use access::{ApiError, PictureService, UserService};
use replies::{
    BaseResponse, LoginUserVo, Page, PictureEditRequest, PictureId, PictureVo, UserId,
    UserLoginRequest, UserQueryRequest, UserUpdateRequest, UserVo,
};

pub const DEFAULT_API_ROOT: &str = "http://localhost:8976/api";

/// Talks to the picture backend. The session lives in a cookie, kept by the
/// client natively and by the browser on wasm.
#[derive(Clone)]
pub struct ApiClient {
    root: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(root: &str) -> Result<Self, ApiError> {
        let builder = reqwest::Client::builder();

        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.cookie_store(true);

        let http = builder
            .build()
            .map_err(|e| ApiError::Request(e.to_string()))?;

        Ok(Self {
            root: root.trim_end_matches('/').to_owned(),
            http,
        })
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.root, path)
    }

    pub async fn login(
        &self,
        account: &str,
        password: &str,
    ) -> Result<BaseResponse<LoginUserVo>, ApiError> {
        let request = UserLoginRequest {
            user_account: account.to_owned(),
            user_password: password.to_owned(),
        };

        self.post("/user/login", &request).await
    }

    pub async fn logout(&self) -> Result<BaseResponse<bool>, ApiError> {
        self.post("/user/logout", &()).await
    }

    pub async fn edit_picture(
        &self,
        request: &PictureEditRequest,
    ) -> Result<BaseResponse<bool>, ApiError> {
        self.post("/picture/edit", request).await
    }

    /// Administrators update any user, everybody else edits themselves.
    pub async fn update_user(
        &self,
        request: &UserUpdateRequest,
        admin: bool,
    ) -> Result<BaseResponse<bool>, ApiError> {
        if admin {
            self.post("/user/update", request).await
        } else {
            self.post("/user/edit", request).await
        }
    }

    pub async fn list_users(
        &self,
        query: &UserQueryRequest,
    ) -> Result<BaseResponse<Page<UserVo>>, ApiError> {
        self.post("/user/list/page/vo", query).await
    }

    async fn get<T>(&self, path: &str) -> Result<BaseResponse<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        debug!("GET {}", path);

        self.send(self.http.get(self.url(path))).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<BaseResponse<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("POST {}", path);

        self.send(self.http.post(self.url(path)).json(body)).await
    }

    async fn send<T>(&self, builder: RequestBuilder) -> Result<BaseResponse<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status.as_u16()));
        }

        response
            .json::<BaseResponse<T>>()
            .await
            .map_err(|e| ApiError::Deserialize(e.to_string()))
    }
}

pub fn status_error(status: u16) -> ApiError {
    match status {
        401 => ApiError::Unauthorized,
        403 => ApiError::Forbidden,
        404 => ApiError::NotFound,
        500 => ApiError::InternalServerError,
        other => ApiError::Status(other),
    }
}

pub fn by_id(path: &str, id: u64) -> String {
    format!("{}?id={}", path, id)
}

#[async_trait(?Send)]
impl PictureService for ApiClient {
    async fn picture_vo_by_id(&self, id: PictureId) -> Result<BaseResponse<PictureVo>, ApiError> {
        self.get(&by_id("/picture/get/vo", id)).await
    }
}

#[async_trait(?Send)]
impl UserService for ApiClient {
    async fn user_by_id(&self, id: UserId) -> Result<BaseResponse<UserVo>, ApiError> {
        self.get(&by_id("/user/get", id)).await
    }

    async fn login_user(&self) -> Result<BaseResponse<LoginUserVo>, ApiError> {
        self.get("/user/get/login").await
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::*;

    #[test]
    pub fn it_should_join_root_and_path() -> Result<()> {
        let client = ApiClient::new("http://localhost:8976/api/")?;

        assert_eq!(client.root(), DEFAULT_API_ROOT);
        assert_eq!(
            client.url(&by_id("/picture/get/vo", 5)),
            "http://localhost:8976/api/picture/get/vo?id=5"
        );

        Ok(())
    }

    #[test]
    pub fn it_should_map_statuses_to_errors() {
        assert_eq!(status_error(401), ApiError::Unauthorized);
        assert_eq!(status_error(403), ApiError::Forbidden);
        assert_eq!(status_error(404), ApiError::NotFound);
        assert_eq!(status_error(500), ApiError::InternalServerError);
        assert_eq!(status_error(502), ApiError::Status(502));
    }

    #[test]
    pub fn it_should_decode_login_user_envelope() -> Result<()> {
        let response: BaseResponse<LoginUserVo> = serde_json::from_str(
            r#"{"code":0,"data":{"id":1,"userName":"alice","userRole":"admin"},"message":"ok"}"#,
        )?;

        assert!(response.is_success());
        assert!(response.data.map(|u| u.is_admin()).unwrap_or_default());

        Ok(())
    }

    #[tokio::test]
    async fn it_should_report_unreachable_backend_as_request_error() -> Result<()> {
        let client = ApiClient::new("http://127.0.0.1:9")?;

        match client.login_user().await {
            Err(ApiError::Request(_)) => {}
            other => panic!("unexpected {:?}", other),
        }

        Ok(())
    }
}
