/*
[INPUT]:  Typed operation arguments and a Transport
[OUTPUT]: Request descriptors dispatched to the transport, typed results
[POS]:    API layer - endpoint catalog for the system-manage backend
[UPDATE]: When adding endpoints or changing request shaping
*/

pub mod auth;
pub mod endpoint;
pub mod menu;
pub mod role;
pub mod route;
pub mod tenant;
pub mod user;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::http::{AdminApiError, ClientConfig, HttpTransport, RequestDescriptor, Result, Transport};

/// Endpoint catalog. One method per backend operation, each issuing a
/// single request through the wrapped transport.
#[derive(Debug, Clone)]
pub struct SystemManageApi<T> {
    transport: T,
}

impl SystemManageApi<HttpTransport> {
    /// Catalog over an HTTP transport built from `config`
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self::new(HttpTransport::with_config(config)?))
    }
}

impl<T: Transport> SystemManageApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Send and hand back the payload untouched
    pub(crate) async fn send(&self, descriptor: RequestDescriptor) -> Result<Value> {
        self.transport.request(descriptor).await
    }

    /// Send and decode the payload
    pub(crate) async fn send_json<R: DeserializeOwned>(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<R> {
        let payload = self.transport.request(descriptor).await?;
        Ok(serde_json::from_value(payload)?)
    }

    /// Send and decode a sequence; a `null` payload is an empty sequence
    pub(crate) async fn send_list<R: DeserializeOwned>(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<Vec<R>> {
        let items: Option<Vec<R>> = self.send_json(descriptor).await?;
        Ok(items.unwrap_or_default())
    }

    /// Send an assignment; a `null` payload counts as accepted
    pub(crate) async fn send_flag(&self, descriptor: RequestDescriptor) -> Result<bool> {
        let flag: Option<bool> = self.send_json(descriptor).await?;
        Ok(flag.unwrap_or(true))
    }
}

/// Attach query params when the caller gave any
fn with_optional_params<P: Serialize>(
    descriptor: RequestDescriptor,
    params: Option<&P>,
) -> Result<RequestDescriptor> {
    match params {
        Some(params) => descriptor.with_params(params),
        None => Ok(descriptor),
    }
}

/// `{prefix}/{id}` with `id` encoded as one path segment (only RFC 3986
/// unreserved characters pass through)
fn path_with_id(prefix: &str, id: &str, name: &str) -> Result<String> {
    if id.is_empty() {
        return Err(AdminApiError::InvalidArgument(format!(
            "{name} must not be empty"
        )));
    }
    Ok(format!(
        "{}/{}",
        prefix.trim_end_matches('/'),
        urlencoding::encode(id)
    ))
}

/// Delete endpoints take a batch of ids; a single id goes as `[id]`
fn delete_by_id(path: &str, id: &str) -> Result<RequestDescriptor> {
    RequestDescriptor::delete(path).with_data(&[id])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_path_with_id_encodes_segment() {
        assert_eq!(
            path_with_id("/route/listMenuIdByRoleId", "r1", "roleId").unwrap(),
            "/route/listMenuIdByRoleId/r1"
        );
        assert_eq!(
            path_with_id("/api/listApiOperationIdByRoleId/", "a b/c", "roleId").unwrap(),
            "/api/listApiOperationIdByRoleId/a%20b%2Fc"
        );
    }

    #[test]
    fn test_path_with_id_rejects_empty() {
        let err = path_with_id("/route/listMenuIdByRoleId", "", "roleId").unwrap_err();
        assert!(matches!(err, AdminApiError::InvalidArgument(_)));
    }

    #[test]
    fn test_delete_by_id_wraps_single_id() {
        let descriptor = delete_by_id("/user", "9").unwrap();
        assert_eq!(descriptor.method, reqwest::Method::DELETE);
        assert_eq!(descriptor.data, Some(json!(["9"])));
        assert_eq!(descriptor.params, None);
    }
}
