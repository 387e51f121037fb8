//! Application services

pub mod toll_fee;

pub use toll_fee::TollFeeService;
