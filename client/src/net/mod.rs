//! Networking modules for the server's provider relay.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` calls the `/api/*` endpoints and `types` defines the shared wire
//! schema that the server also uses to decode provider responses.

pub mod api;
pub mod types;
