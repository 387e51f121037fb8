//! SeaORM entities

pub mod toll_fee;
pub mod toll_free_date;
pub mod toll_free_vehicle;
