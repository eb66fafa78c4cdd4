pub mod codec;
pub mod config;
pub mod files;
pub mod store;

pub use config::{load_config_or_default, save_config, AppConfig};
pub use files::{atomic_write, config_file, ensure_data_dir, get_data_dir, init_local_data_dir, log_file};
pub use store::{load_tasks, save_tasks, FileStore, MemoryStore, TaskStore};
