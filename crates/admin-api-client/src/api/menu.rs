/*
[INPUT]:  Route models, menu/role identifiers
[OUTPUT]: Menu sequences, menu trees, page keys, normalized menu pages
[POS]:    API layer - menu (route) endpoints
[UPDATE]: When menu endpoints or the normalized listing change
*/

use serde_json::Value;

use super::{SystemManageApi, delete_by_id, path_with_id};
use crate::http::{RequestDescriptor, Result, Transport};
use crate::types::{FlatResponse, Menu, MenuList, PaginatingQueryRecord, RouteModel};

impl<T: Transport> SystemManageApi<T> {
    /// Every menu as a flat sequence
    ///
    /// GET /route
    ///
    /// A `null` payload reads as no menus.
    pub async fn fetch_get_menu_list_raw(&self) -> Result<Vec<Menu>> {
        self.send_list(RequestDescriptor::get("/route")).await
    }

    /// Every menu wrapped as a single page.
    ///
    /// Never fails: a transport or decode failure comes back as
    /// `FlatResponse { data: None, error: Some(message) }`.
    pub async fn fetch_get_menu_list(&self) -> FlatResponse<MenuList> {
        match self.fetch_get_menu_list_raw().await {
            Ok(menus) => FlatResponse::ok(PaginatingQueryRecord::single_page(menus)),
            Err(err) => FlatResponse::err(err.to_string()),
        }
    }

    /// Page keys known to the frontend router
    ///
    /// GET /systemManage/getAllPages
    pub async fn fetch_get_all_pages(&self) -> Result<Vec<String>> {
        self.send_list(RequestDescriptor::get("/systemManage/getAllPages"))
            .await
    }

    /// Menus as a tree (children nested under their parent)
    ///
    /// GET /route/tree
    pub async fn fetch_get_menu_tree(&self) -> Result<Vec<Menu>> {
        self.send_list(RequestDescriptor::get("/route/tree")).await
    }

    /// Menu ids granted to a role
    ///
    /// GET /route/listMenuIdByRoleId/{roleId}
    pub async fn fetch_get_role_menu_ids(&self, role_id: &str) -> Result<Vec<String>> {
        let path = path_with_id("/route/listMenuIdByRoleId", role_id, "roleId")?;
        self.send_list(RequestDescriptor::get(path)).await
    }

    /// POST /route
    pub async fn create_route(&self, req: &RouteModel) -> Result<Value> {
        self.send(RequestDescriptor::post("/route").with_data(req)?)
            .await
    }

    /// PUT /route
    pub async fn update_route(&self, req: &RouteModel) -> Result<Value> {
        self.send(RequestDescriptor::put("/route").with_data(req)?)
            .await
    }

    /// DELETE /route with body `[id]`
    pub async fn delete_route(&self, id: &str) -> Result<Value> {
        self.send(delete_by_id("/route", id)?).await
    }
}
