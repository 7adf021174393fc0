/*
[INPUT]:  Role identifiers
[OUTPUT]: API endpoint metadata and granted operation ids
[POS]:    API layer - API-endpoint authorization endpoints
[UPDATE]: When API-endpoint routes change
*/

use super::{SystemManageApi, path_with_id};
use crate::http::{RequestDescriptor, Result, Transport};
use crate::types::ApiEndpoint;

impl<T: Transport> SystemManageApi<T> {
    /// Every backend operation available for authorization
    ///
    /// GET /api
    pub async fn fetch_get_api_endpoint_tree(&self) -> Result<Vec<ApiEndpoint>> {
        self.send_list(RequestDescriptor::get("/api")).await
    }

    /// Operation ids granted to a role
    ///
    /// GET /api/listApiOperationIdByRoleId/{roleId}
    pub async fn fetch_get_role_api_endpoints(&self, role_id: &str) -> Result<Vec<String>> {
        let path = path_with_id("/api/listApiOperationIdByRoleId", role_id, "roleId")?;
        self.send_list(RequestDescriptor::get(path)).await
    }
}
