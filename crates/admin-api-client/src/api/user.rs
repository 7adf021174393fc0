/*
[INPUT]:  User search params and user models
[OUTPUT]: User pages and mutation results
[POS]:    API layer - user endpoints
[UPDATE]: When user endpoints or payloads change
*/

use serde_json::Value;

use super::{SystemManageApi, delete_by_id, with_optional_params};
use crate::http::{RequestDescriptor, Result, Transport};
use crate::types::{UserList, UserModel, UserSearchParams};

impl<T: Transport> SystemManageApi<T> {
    /// Query a page of users
    ///
    /// GET /user
    pub async fn fetch_get_user_list(&self, params: Option<&UserSearchParams>) -> Result<UserList> {
        let descriptor = with_optional_params(RequestDescriptor::get("/user"), params)?;
        self.send_json(descriptor).await
    }

    /// POST /user
    pub async fn create_user(&self, req: &UserModel) -> Result<Value> {
        self.send(RequestDescriptor::post("/user").with_data(req)?)
            .await
    }

    /// PUT /user
    pub async fn update_user(&self, req: &UserModel) -> Result<Value> {
        self.send(RequestDescriptor::put("/user").with_data(req)?)
            .await
    }

    /// DELETE /user with body `[id]`
    pub async fn delete_user(&self, id: &str) -> Result<Value> {
        self.send(delete_by_id("/user", id)?).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::SystemManageApi;
    use crate::http::MockTransport;
    use crate::types::{EnableStatus, UserGender, UserSearchParams};
    use reqwest::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_user_list_decodes_page() {
        let api = SystemManageApi::new(MockTransport::new().respond_with(json!({
            "records": [{
                "id": "u1",
                "accountName": "soybean",
                "nickName": "Soy",
                "phoneNumber": "13800000000",
                "email": "soy@example.com",
                "gender": "1",
                "status": "ENABLED",
                "createBy": "root",
                "createTime": "2024-05-01 10:00:00"
            }],
            "current": 1,
            "size": 10,
            "total": 31
        })));
        let params = UserSearchParams {
            status: Some(Some(EnableStatus::Enabled)),
            email: Some(None),
            ..UserSearchParams::page(1, 10)
        };

        let page = api.fetch_get_user_list(Some(&params)).await.expect("user list");

        assert_eq!(page.total, 31);
        let user = &page.records[0];
        assert_eq!(user.account_name, "soybean");
        assert_eq!(UserGender::from_code(&user.gender), Some(UserGender::Male));
        assert_eq!(user.account_password, "");

        let request = api.transport().last_request().expect("request");
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.url, "/user");
        assert_eq!(
            request.params,
            Some(json!({"status": "ENABLED", "email": null, "current": 1, "size": 10}))
        );
    }

    #[tokio::test]
    async fn test_delete_user_sends_id_batch() {
        let api = SystemManageApi::new(MockTransport::new());

        api.delete_user("u1").await.expect("delete_user");

        let request = api.transport().last_request().expect("request");
        assert_eq!(request.method, Method::DELETE);
        assert_eq!(request.url, "/user");
        assert_eq!(request.data, Some(json!(["u1"])));
        assert_eq!(request.params, None);
    }
}
