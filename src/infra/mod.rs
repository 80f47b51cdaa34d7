pub mod config;
pub mod constants;
pub mod diagnosis;
pub mod logging;
