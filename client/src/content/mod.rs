//! Static marketing content.

pub mod features;
