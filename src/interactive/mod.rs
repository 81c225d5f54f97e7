//! Full-screen terminal client

pub mod app;
pub mod layout;
pub mod rendering;
pub mod runner;

pub use app::App;
pub use runner::run_tui;
