//! Provider adapters for the hosted identity and data services.

pub mod backend;
pub mod identity;
pub mod provider;
