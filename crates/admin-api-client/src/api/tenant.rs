/*
[INPUT]:  Tenant search params and tenant models
[OUTPUT]: Tenant pages and mutation results
[POS]:    API layer - tenant endpoints
[UPDATE]: When tenant endpoints or payloads change
*/

use serde_json::Value;

use super::{SystemManageApi, delete_by_id, with_optional_params};
use crate::http::{RequestDescriptor, Result, Transport};
use crate::types::{TenantList, TenantModel, TenantSearchParams};

impl<T: Transport> SystemManageApi<T> {
    /// Query a page of tenants
    ///
    /// GET /tenant
    pub async fn fetch_get_tenant_list(
        &self,
        params: Option<&TenantSearchParams>,
    ) -> Result<TenantList> {
        let descriptor = with_optional_params(RequestDescriptor::get("/tenant"), params)?;
        self.send_json(descriptor).await
    }

    /// POST /tenant
    pub async fn create_tenant(&self, req: &TenantModel) -> Result<Value> {
        self.send(RequestDescriptor::post("/tenant").with_data(req)?)
            .await
    }

    /// PUT /tenant
    pub async fn update_tenant(&self, req: &TenantModel) -> Result<Value> {
        self.send(RequestDescriptor::put("/tenant").with_data(req)?)
            .await
    }

    /// DELETE /tenant with body `[id]`
    pub async fn delete_tenant(&self, id: &str) -> Result<Value> {
        self.send(delete_by_id("/tenant", id)?).await
    }
}
