//! Facade re-exports for rustnlp-hub

pub use crate::api::error::*;
pub use crate::api::types::*;
pub use crate::core::hub_api::HubApi;
