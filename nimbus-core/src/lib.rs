//! Nimbus Core
//!
//! Core types shared by the Nimbus client and CLI.
//!
//! This crate contains:
//! - `Record`: the opaque resource representation returned by the services
//! - DTOs: request bodies sent to the network and block-storage services
//! - `Toggle`: explicit tri-state for paired enable/disable flags

pub mod dto;
pub mod record;
pub mod types;

pub use record::Record;
pub use types::Toggle;
