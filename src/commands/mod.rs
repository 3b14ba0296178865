//! Command implementations for the sdkstage CLI

pub mod resolve;
pub mod stage;
pub mod version;
