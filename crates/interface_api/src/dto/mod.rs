//! Request and response data transfer objects

pub mod group;
pub mod expense;
pub mod settlement;
