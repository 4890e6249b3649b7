pub mod app;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod grid;
pub mod handlers;
pub mod models;
pub mod storage;
pub mod ui;
pub mod state;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::{load_articles, load_measurements, load_nutrition};
