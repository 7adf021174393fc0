/*
[INPUT]:  Shared backend record and paging conventions
[OUTPUT]: Generic record, page and response envelope types
[POS]:    Data layer - type definitions shared by every API module
[UPDATE]: When audit fields or envelope conventions change
*/

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::EnableStatus;

/// A persisted backend entity with its audit metadata.
///
/// Audit fields are filled in by the backend. The entity's own fields are
/// flattened alongside them on the wire and reachable through `Deref`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonRecord<T> {
    /// Opaque identifier; numeric or string depending on the backend
    pub id: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EnableStatus>,
    #[serde(flatten)]
    pub inner: T,
}

impl<T> CommonRecord<T> {
    /// Identifier rendered the way path segments and delete bodies expect it
    pub fn id_string(&self) -> String {
        match &self.id {
            Value::String(id) => id.clone(),
            other => other.to_string(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.status == Some(EnableStatus::Enabled)
    }
}

impl<T> Deref for CommonRecord<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T> DerefMut for CommonRecord<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

/// One page of a paginated listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatingQueryRecord<T> {
    pub records: Vec<T>,
    /// 1-based page number
    pub current: u64,
    pub size: u64,
    /// Server-side count across all pages
    pub total: u64,
}

impl<T> PaginatingQueryRecord<T> {
    /// Present a complete, unpaginated sequence as a single page
    pub fn single_page(records: Vec<T>) -> Self {
        let len = records.len() as u64;
        Self {
            records,
            current: 1,
            size: len,
            total: len,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Paging input shared by the search params
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonSearchParams {
    pub current: u64,
    pub size: u64,
}

/// `{data, error}` pair for callers that inspect failures as values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatResponse<T> {
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> FlatResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Convert back into a `Result`, using the error text as the failure
    pub fn into_result(self) -> Result<Option<T>, String> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Named {
        name: String,
    }

    #[test]
    fn common_record_flattens_entity_fields() {
        let record: CommonRecord<Named> = serde_json::from_value(json!({
            "id": 7,
            "createBy": "root",
            "createTime": "2024-05-01 10:00:00",
            "updateBy": null,
            "status": "ENABLED",
            "name": "ops"
        }))
        .expect("record should deserialize");

        assert_eq!(record.id_string(), "7");
        assert_eq!(record.create_by.as_deref(), Some("root"));
        assert_eq!(record.update_by, None);
        assert_eq!(record.update_time, None);
        assert!(record.is_enabled());
        assert_eq!(record.name, "ops");
    }

    #[test]
    fn single_page_counts_records() {
        let page = PaginatingQueryRecord::single_page(vec!["a", "b", "c"]);
        assert_eq!(page.current, 1);
        assert_eq!(page.size, 3);
        assert_eq!(page.total, 3);

        let empty = PaginatingQueryRecord::<u8>::single_page(Vec::new());
        assert!(empty.is_empty());
        assert_eq!((empty.size, empty.total), (0, 0));
    }

    #[test]
    fn flat_response_serializes_both_fields() {
        let failed = FlatResponse::<Vec<u8>>::err("boom");
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            json!({"data": null, "error": "boom"})
        );
        assert_eq!(failed.into_result(), Err("boom".to_string()));

        let ok = FlatResponse::ok(1);
        assert!(ok.is_ok());
        assert_eq!(ok.into_result(), Ok(Some(1)));
    }
}
