pub mod config;
pub mod logger;
pub mod realtime_db;
#[cfg(test)]
pub mod testing;

pub use config::FirebaseConfig;
pub use logger::{ResponseClient, ResponseLogger};
