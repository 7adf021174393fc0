/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs/enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod auth;
pub mod common;
pub mod enums;
pub mod requests;
pub mod route;
pub mod system_manage;

mod serde_helpers;

pub use auth::*;
pub use common::*;
pub use enums::*;
pub use requests::*;
pub use route::*;
pub use system_manage::*;
