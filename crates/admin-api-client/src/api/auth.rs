/*
[INPUT]:  Login credentials and refresh tokens
[OUTPUT]: Token pairs and the signed-in user's info
[POS]:    API layer - auth endpoints
[UPDATE]: When auth endpoints or payloads change
*/

use super::SystemManageApi;
use crate::http::{RequestDescriptor, Result, Transport};
use crate::types::{LoginRequest, LoginToken, RefreshTokenRequest, UserInfo};

impl<T: Transport> SystemManageApi<T> {
    /// Exchange account credentials for a token pair
    ///
    /// POST /auth/login
    pub async fn fetch_login(&self, req: &LoginRequest) -> Result<LoginToken> {
        self.send_json(RequestDescriptor::post("/auth/login").with_data(req)?)
            .await
    }

    /// POST /auth/refreshToken
    pub async fn fetch_refresh_token(&self, refresh_token: &str) -> Result<LoginToken> {
        let body = RefreshTokenRequest {
            refresh_token: refresh_token.to_string(),
        };
        self.send_json(RequestDescriptor::post("/auth/refreshToken").with_data(&body)?)
            .await
    }

    /// GET /auth/getUserInfo
    pub async fn fetch_get_user_info(&self) -> Result<UserInfo> {
        self.send_json(RequestDescriptor::get("/auth/getUserInfo"))
            .await
    }
}
