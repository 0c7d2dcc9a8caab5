pub mod assets;
pub mod config;
pub mod content;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod template;
pub mod theme;

pub use config::Config;
pub use routes::{AppState, router};
