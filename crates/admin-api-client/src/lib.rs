/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public admin API client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod api;
pub mod http;
pub mod types;

pub use api::SystemManageApi;

// Re-export commonly used types from http
pub use http::{
    AdminApiError,
    ClientConfig,
    Credentials,
    HttpTransport,
    MockTransport,
    RequestDescriptor,
    Result,
    Transport,
};

// Re-export all types
pub use types::*;
