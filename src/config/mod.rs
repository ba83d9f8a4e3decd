//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → loader.rs (semantic checks)
//!     → MessengerConfig (validated, immutable)
//!     → passed to ContractClient at construction
//!
//! secret key: environment variable only (see wallet.rs)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; lifecycle is one run of the client
//! - All fields have defaults so the demo runs without a config file
//! - The secret key never appears in the schema

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::MessengerConfig;
