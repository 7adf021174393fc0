/*
[INPUT]:  System-manage backend schema (roles, users, menus, API endpoints, tenants)
[OUTPUT]: Typed Rust records with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{CommonRecord, PaginatingQueryRecord};
use super::enums::{IconType, MenuType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleData {
    pub name: String,
    /// Unique business key
    pub code: String,
    #[serde(default)]
    pub remark: String,
    /// Sort weight
    #[serde(default)]
    pub order: i32,
}

pub type Role = CommonRecord<RoleData>;

pub type RoleList = PaginatingQueryRecord<Role>;

/// Menus granted to a role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleMenu {
    pub role_id: String,
    pub menu_ids: Vec<String>,
}

/// API operations granted to a role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolePermission {
    pub role_id: String,
    pub operation_ids: Vec<String>,
}

/// Enabled role summary returned by `getAllRoles`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllRole {
    pub id: Value,
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub account_name: String,
    #[serde(default)]
    pub account_password: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub nick_name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub personal_profile: String,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub phone_code: String,
    /// "1" male, "2" female; see `UserGender`
    #[serde(default)]
    pub gender: String,
}

pub type User = CommonRecord<UserData>;

pub type UserList = PaginatingQueryRecord<User>;

/// Button-level permission attached to a menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuButton {
    pub code: String,
    pub desc: String,
}

/// Fixed query parameter carried by a route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteQuery {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuData {
    /// Parent menu id, 0 for roots
    pub pid: i64,
    pub menu_type: MenuType,
    pub menu_name: String,
    pub route_name: String,
    pub route_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub icon_type: IconType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Vec<MenuButton>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Menu>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i18n_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_alive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constant: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_in_menu: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_menu: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_tab: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_index_in_tab: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<Vec<RouteQuery>>,
}

pub type Menu = CommonRecord<MenuData>;

pub type MenuList = PaginatingQueryRecord<Menu>;

impl CommonRecord<MenuData> {
    pub fn is_root(&self) -> bool {
        self.pid == 0
    }

    pub fn children(&self) -> &[Menu] {
        self.inner.children.as_deref().unwrap_or_default()
    }

    /// Depth-first, pre-order walk over this node and its descendants
    pub fn walk(&self) -> MenuWalk<'_> {
        MenuWalk { stack: vec![self] }
    }
}

/// Iterator returned by `Menu::walk`
#[derive(Debug)]
pub struct MenuWalk<'a> {
    stack: Vec<&'a Menu>,
}

impl<'a> Iterator for MenuWalk<'a> {
    type Item = &'a Menu;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

/// Lightweight tree node used by menu pickers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuTree {
    pub id: i64,
    pub label: String,
    pub p_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<MenuTree>>,
}

/// Backend operation available for role authorization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEndpoint {
    pub operation_id: String,
    pub path: String,
    pub http_method: String,
    #[serde(default)]
    pub permissions: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantData {
    pub name: String,
    pub contact_user_id: String,
    pub contact_account_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Built-in tenants cannot be deleted
    #[serde(default)]
    pub built_in: bool,
    pub expire_time: String,
    #[serde(default)]
    pub menu_ids: Vec<String>,
    #[serde(default)]
    pub operation_ids: Vec<String>,
}

pub type Tenant = CommonRecord<TenantData>;

pub type TenantList = PaginatingQueryRecord<Tenant>;
