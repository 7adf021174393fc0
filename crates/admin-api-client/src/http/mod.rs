/*
[INPUT]:  Request descriptors and HTTP client configuration
[OUTPUT]: JSON payloads, typed errors and the Transport seam
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding transports or changing client behavior
*/

pub mod client;
pub mod error;
pub mod transport;

pub use error::{AdminApiError, Result};
pub use transport::{MockTransport, RequestDescriptor, Transport};

pub use client::{ClientConfig, Credentials, DEFAULT_BASE_URL, HttpTransport};
