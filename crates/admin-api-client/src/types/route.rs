/*
[INPUT]:  Route backend schema
[OUTPUT]: Renderable route types for the signed-in user
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::system_manage::RouteQuery;

/// Rendering metadata attached to a route
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMeta {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i18n_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_alive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constant: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_icon: Option<String>,
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

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuRoute {
    pub id: String,
    pub name: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    #[serde(default)]
    pub meta: RouteMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<MenuRoute>>,
}

/// Routes visible to the signed-in user plus the home route name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRoute {
    pub routes: Vec<MenuRoute>,
    pub home: String,
}
