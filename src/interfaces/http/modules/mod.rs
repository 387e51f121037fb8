//! HTTP API modules

pub mod fees;
pub mod health;
pub mod toll;
