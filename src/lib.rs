pub mod cli;
pub mod errors;
pub mod models;
pub mod project;
pub mod reporting;
pub mod reports;
pub mod utils;
