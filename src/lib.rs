pub mod app;
pub mod config;
pub mod dates;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod policy;
pub mod profiles;
pub mod series;
pub mod share;
pub mod state;
pub mod storage;
pub mod ui;
pub mod view;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::{BlobStore, FileStore, MemoryStore, load_profiles};
