//! Data Transfer Objects for the service APIs
//!
//! Request bodies sent to the network and block-storage services. Every
//! optional field is skipped when unset so that a flag the user did not pass
//! never overwrites a server-side default.

pub mod backup;
pub mod network;
