pub mod commands;
pub mod fixture;
pub mod utils;
pub mod validation;
