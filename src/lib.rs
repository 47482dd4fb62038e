pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod reconcile;
pub mod registry;
pub mod session;
pub mod state;
pub mod store;
pub mod sync;

pub use app::router;
pub use config::Config;
pub use registry::{load_registry, ZoneRegistry};
pub use session::Session;
pub use state::AppState;
pub use sync::SyncClient;
