/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs (search params, mutation models)
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::{EnableStatus, IconType, MenuType};
use super::serde_helpers::deserialize_double_option;

// Search params: every field is `Option<Option<T>>`.
//   None          -> field omitted
//   Some(None)    -> field sent as explicit null
//   Some(Some(v)) -> filter on v

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSearchParams {
    #[serde(
        default,
        deserialize_with = "deserialize_double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub code: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<Option<EnableStatus>>,
    #[serde(
        default,
        deserialize_with = "deserialize_double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub current: Option<Option<u64>>,
    #[serde(
        default,
        deserialize_with = "deserialize_double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub size: Option<Option<u64>>,
}

impl RoleSearchParams {
    /// Unfiltered request for one page
    pub fn page(current: u64, size: u64) -> Self {
        Self {
            current: Some(Some(current)),
            size: Some(Some(size)),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSearchParams {
    #[serde(
        default,
        deserialize_with = "deserialize_double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub account_name: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub nick_name: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone_number: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<Option<EnableStatus>>,
    #[serde(
        default,
        deserialize_with = "deserialize_double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub current: Option<Option<u64>>,
    #[serde(
        default,
        deserialize_with = "deserialize_double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub size: Option<Option<u64>>,
}

impl UserSearchParams {
    pub fn page(current: u64, size: u64) -> Self {
        Self {
            current: Some(Some(current)),
            size: Some(Some(size)),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantSearchParams {
    #[serde(
        default,
        deserialize_with = "deserialize_double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub contact_account_name: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<Option<EnableStatus>>,
    #[serde(
        default,
        deserialize_with = "deserialize_double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub current: Option<Option<u64>>,
    #[serde(
        default,
        deserialize_with = "deserialize_double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub size: Option<Option<u64>>,
}

impl TenantSearchParams {
    pub fn page(current: u64, size: u64) -> Self {
        Self {
            current: Some(Some(current)),
            size: Some(Some(size)),
            ..Self::default()
        }
    }
}

/// Role payload for create/update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleModel {
    /// Target record for updates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub name: String,
    pub code: String,
    pub remark: String,
    pub status: Option<EnableStatus>,
    pub order: i32,
}

/// Menu payload for create/update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub menu_type: MenuType,
    pub menu_name: String,
    pub route_name: String,
    pub route_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i18n_key: Option<String>,
    pub icon: String,
    pub icon_type: IconType,
    pub status: Option<EnableStatus>,
    pub pid: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_alive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constant: Option<bool>,
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
}

/// User payload for create/update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub account_name: String,
    pub account_password: String,
    pub avatar: String,
    pub nick_name: String,
    pub phone_number: String,
    pub email: String,
    pub status: Option<EnableStatus>,
    pub personal_profile: String,
    pub country_code: String,
    pub phone_code: String,
    pub gender: String,
}

/// Tenant payload for create/update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub name: String,
    pub contact_user_id: String,
    pub contact_account_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub built_in: bool,
    pub expire_time: String,
    pub status: Option<EnableStatus>,
    #[serde(default)]
    pub menu_ids: Vec<String>,
    #[serde(default)]
    pub operation_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn search_params_keep_null_apart_from_absent() {
        let params = RoleSearchParams {
            name: Some(None),
            code: Some(Some("ADMIN".to_string())),
            ..RoleSearchParams::page(2, 20)
        };

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"name": null, "code": "ADMIN", "current": 2, "size": 20})
        );
    }

    #[test]
    fn search_params_deserialize_two_states() {
        let params: UserSearchParams =
            serde_json::from_value(json!({"email": null, "nickName": "ann"})).unwrap();

        assert_eq!(params.email, Some(None));
        assert_eq!(params.nick_name, Some(Some("ann".to_string())));
        assert_eq!(params.account_name, None);
        assert_eq!(params.status, None);
    }

    #[test]
    fn empty_search_params_serialize_to_empty_object() {
        assert_eq!(
            serde_json::to_value(TenantSearchParams::default()).unwrap(),
            json!({})
        );
    }

    #[test]
    fn role_model_matches_backend_shape() {
        let model = RoleModel {
            id: None,
            name: "admin".to_string(),
            code: "ADMIN".to_string(),
            remark: String::new(),
            status: Some(EnableStatus::Enabled),
            order: 1,
        };

        assert_eq!(
            serde_json::to_value(&model).unwrap(),
            json!({"name": "admin", "code": "ADMIN", "remark": "", "status": "ENABLED", "order": 1})
        );
    }
}
