/*
[INPUT]:  Role search params, role models, role/menu and role/API assignments
[OUTPUT]: Role pages, role summaries, assignment flags
[POS]:    API layer - role endpoints
[UPDATE]: When role endpoints or payloads change
*/

use serde_json::Value;

use super::{SystemManageApi, delete_by_id, with_optional_params};
use crate::http::{RequestDescriptor, Result, Transport};
use crate::types::{AllRole, RoleList, RoleMenu, RoleModel, RolePermission, RoleSearchParams};

impl<T: Transport> SystemManageApi<T> {
    /// Query a page of roles
    ///
    /// GET /role
    pub async fn fetch_get_role_list(&self, params: Option<&RoleSearchParams>) -> Result<RoleList> {
        let descriptor = with_optional_params(RequestDescriptor::get("/role"), params)?;
        self.send_json(descriptor).await
    }

    /// All enabled roles
    ///
    /// GET /systemManage/getAllRoles
    pub async fn fetch_get_all_roles(&self) -> Result<Vec<AllRole>> {
        self.send_list(RequestDescriptor::get("/systemManage/getAllRoles"))
            .await
    }

    /// POST /role
    pub async fn create_role(&self, req: &RoleModel) -> Result<Value> {
        self.send(RequestDescriptor::post("/role").with_data(req)?)
            .await
    }

    /// PUT /role
    pub async fn update_role(&self, req: &RoleModel) -> Result<Value> {
        self.send(RequestDescriptor::put("/role").with_data(req)?)
            .await
    }

    /// DELETE /role with body `[id]`
    pub async fn delete_role(&self, id: &str) -> Result<Value> {
        self.send(delete_by_id("/role", id)?).await
    }

    /// Grant menus to a role. An empty reply means the grant was accepted.
    ///
    /// POST /permission/authRoleMenu
    pub async fn fetch_assign_routes(&self, req: &RoleMenu) -> Result<bool> {
        let descriptor = RequestDescriptor::post("/permission/authRoleMenu").with_data(req)?;
        self.send_flag(descriptor).await
    }

    /// Grant API operations to a role
    ///
    /// POST /permission/authRoleOperation
    pub async fn fetch_assign_permission(&self, req: &RolePermission) -> Result<bool> {
        let descriptor = RequestDescriptor::post("/permission/authRoleOperation").with_data(req)?;
        self.send_flag(descriptor).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::SystemManageApi;
    use crate::http::MockTransport;
    use crate::types::{EnableStatus, RoleMenu, RoleModel, RolePermission, RoleSearchParams};
    use reqwest::Method;
    use serde_json::{Value, json};

    #[tokio::test]
    async fn test_create_role_posts_model_and_returns_raw_payload() {
        let api = SystemManageApi::new(MockTransport::new().respond_with(json!({"ok": 1})));
        let model = RoleModel {
            id: None,
            name: "admin".to_string(),
            code: "ADMIN".to_string(),
            remark: String::new(),
            status: Some(EnableStatus::Enabled),
            order: 1,
        };

        let result = api.create_role(&model).await.expect("create_role");

        assert_eq!(result, json!({"ok": 1}));
        let request = api.transport().last_request().expect("request");
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url, "/role");
        assert_eq!(request.params, None);
        assert_eq!(
            request.data,
            Some(json!({"name": "admin", "code": "ADMIN", "remark": "", "status": "ENABLED", "order": 1}))
        );
    }

    #[tokio::test]
    async fn test_role_list_forwards_paging_unchanged() {
        let api = SystemManageApi::new(MockTransport::new().respond_with(json!({
            "records": [], "current": 3, "size": 15, "total": 0
        })));

        let page = api
            .fetch_get_role_list(Some(&RoleSearchParams::page(3, 15)))
            .await
            .expect("role list");

        assert_eq!((page.current, page.size), (3, 15));
        let request = api.transport().last_request().expect("request");
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.params, Some(json!({"current": 3, "size": 15})));
        assert_eq!(request.data, None);
    }

    #[tokio::test]
    async fn test_role_list_without_params_sends_none() {
        let api = SystemManageApi::new(MockTransport::new().respond_with(json!({
            "records": [], "current": 1, "size": 10, "total": 0
        })));

        api.fetch_get_role_list(None).await.expect("role list");

        assert_eq!(api.transport().last_request().expect("request").params, None);
    }

    #[tokio::test]
    async fn test_assignments_send_input_unchanged() {
        let api = SystemManageApi::new(
            MockTransport::new()
                .respond_with(json!(true))
                .respond_with(json!(false)),
        );
        let menus = RoleMenu {
            role_id: "r1".to_string(),
            menu_ids: vec!["1".to_string(), "2".to_string()],
        };
        let operations = RolePermission {
            role_id: "r1".to_string(),
            operation_ids: vec!["listUsers".to_string()],
        };

        assert!(api.fetch_assign_routes(&menus).await.expect("assign routes"));
        assert!(!api.fetch_assign_permission(&operations).await.expect("assign permission"));

        let requests = api.transport().requests();
        assert_eq!(requests[0].url, "/permission/authRoleMenu");
        assert_eq!(requests[0].data, Some(json!({"roleId": "r1", "menuIds": ["1", "2"]})));
        assert_eq!(requests[1].url, "/permission/authRoleOperation");
        assert_eq!(
            requests[1].data,
            Some(json!({"roleId": "r1", "operationIds": ["listUsers"]}))
        );
    }

    #[tokio::test]
    async fn test_assignments_accept_empty_reply() {
        let api = SystemManageApi::new(
            MockTransport::new()
                .respond_with(Value::Null)
                .respond_with(Value::Null),
        );

        let granted = api
            .fetch_assign_routes(&RoleMenu {
                role_id: "r1".to_string(),
                menu_ids: vec!["3".to_string()],
            })
            .await
            .expect("null reply is success");
        assert!(granted);

        let granted = api
            .fetch_assign_permission(&RolePermission {
                role_id: "r1".to_string(),
                operation_ids: Vec::new(),
            })
            .await
            .expect("null reply is success");
        assert!(granted);
    }

    #[tokio::test]
    async fn test_all_roles_null_is_empty() {
        let api = SystemManageApi::new(MockTransport::new().respond_with(Value::Null));

        let roles = api.fetch_get_all_roles().await.expect("null reply");

        assert!(roles.is_empty());
    }

    #[tokio::test]
    async fn test_failures_propagate_unchanged() {
        let api = SystemManageApi::new(MockTransport::new().fail_with("boom"));

        let err = api.fetch_get_all_roles().await.expect_err("should fail");

        assert_eq!(err.to_string(), "boom");
    }
}
