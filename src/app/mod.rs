pub mod actions;
mod app;
pub mod controller;
pub mod events;

pub use app::App;
