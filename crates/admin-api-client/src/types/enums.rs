/*
[INPUT]:  Backend enum vocabularies and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Record enable status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnableStatus {
    Enabled,
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MenuType {
    Directory,
    Menu,
}

/// Where a menu icon comes from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IconType {
    #[default]
    #[serde(rename = "1")]
    Iconify,
    #[serde(rename = "2")]
    Local,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserGender {
    #[serde(rename = "1")]
    Male,
    #[serde(rename = "2")]
    Female,
}

impl UserGender {
    /// Wire code stored in `User::gender`
    pub fn code(self) -> &'static str {
        match self {
            UserGender::Male => "1",
            UserGender::Female => "2",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(UserGender::Male),
            "2" => Some(UserGender::Female),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn enums_use_backend_spelling() {
        assert_eq!(serde_json::to_value(EnableStatus::Enabled).unwrap(), json!("ENABLED"));
        assert_eq!(serde_json::to_value(MenuType::Directory).unwrap(), json!("DIRECTORY"));
        assert_eq!(serde_json::to_value(IconType::Local).unwrap(), json!("2"));
        assert_eq!(
            serde_json::from_value::<UserGender>(json!("1")).unwrap(),
            UserGender::Male
        );
    }

    #[test]
    fn gender_codes_match_wire_values() {
        assert_eq!(UserGender::from_code(UserGender::Female.code()), Some(UserGender::Female));
        assert_eq!(UserGender::from_code("3"), None);
    }
}
