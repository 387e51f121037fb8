//! Application layer: use cases built on the domain

pub mod services;

pub use services::TollFeeService;
