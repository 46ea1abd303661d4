mod app_state;
mod config;
pub mod database;
pub mod models;
pub mod routes;
pub use app_state::AppState;
pub use config::Config;
pub use routes::{build_router, make_app};
