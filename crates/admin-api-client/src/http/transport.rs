/*
[INPUT]:  Request descriptors built by the endpoint catalog
[OUTPUT]: Decoded JSON payloads or transport errors
[POS]:    HTTP layer - transport seam between catalog and network
[UPDATE]: When the descriptor shape or transport contract changes
*/

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::http::{AdminApiError, Result};

/// One outbound call described as plain data.
///
/// `url` is the path relative to the transport's base URL. `params` is the
/// JSON form of the query (objects only); `data` is the JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: String,
    pub params: Option<Value>,
    pub data: Option<Value>,
}

impl RequestDescriptor {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            params: None,
            data: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    pub fn put(url: impl Into<String>) -> Self {
        Self::new(Method::PUT, url)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::DELETE, url)
    }

    /// Attach query parameters
    pub fn with_params<P: Serialize + ?Sized>(mut self, params: &P) -> Result<Self> {
        self.params = Some(serde_json::to_value(params)?);
        Ok(self)
    }

    /// Attach a JSON body
    pub fn with_data<D: Serialize + ?Sized>(mut self, data: &D) -> Result<Self> {
        self.data = Some(serde_json::to_value(data)?);
        Ok(self)
    }
}

/// Executes request descriptors.
///
/// Implementations own connection handling, headers and authentication.
/// A successful call yields the response payload as JSON (`Value::Null` when
/// the server sent nothing).
#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(&self, descriptor: RequestDescriptor) -> Result<Value>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn request(&self, descriptor: RequestDescriptor) -> Result<Value> {
        (**self).request(descriptor).await
    }
}

#[async_trait]
impl<'a, T: Transport + ?Sized> Transport for &'a T {
    async fn request(&self, descriptor: RequestDescriptor) -> Result<Value> {
        (**self).request(descriptor).await
    }
}

#[derive(Debug, Clone)]
enum MockReply {
    Ok(Value),
    Err(String),
}

/// Mock transport for testing
///
/// Records every descriptor it receives and answers from a queue of
/// scripted replies. An empty queue answers `Value::Null`.
#[derive(Debug, Default)]
pub struct MockTransport {
    requests: Mutex<Vec<RequestDescriptor>>,
    replies: Mutex<VecDeque<MockReply>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply
    pub fn respond_with(self, payload: Value) -> Self {
        self.push(MockReply::Ok(payload));
        self
    }

    /// Queue a failing reply carrying `message`
    pub fn fail_with(self, message: impl Into<String>) -> Self {
        self.push(MockReply::Err(message.into()));
        self
    }

    /// Descriptors received so far, oldest first
    pub fn requests(&self) -> Vec<RequestDescriptor> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last_request(&self) -> Option<RequestDescriptor> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    fn push(&self, reply: MockReply) {
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(reply);
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn request(&self, descriptor: RequestDescriptor) -> Result<Value> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(descriptor);

        let reply = self
            .replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();

        match reply {
            Some(MockReply::Ok(payload)) => Ok(payload),
            Some(MockReply::Err(message)) => Err(AdminApiError::Transport(message)),
            None => Ok(Value::Null),
        }
    }
}
