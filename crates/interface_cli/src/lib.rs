//! MedVerify command-line client
//!
//! Wires the HTTP adapter into the registration and claims domains and
//! exposes them as `medverify` subcommands.
//!
//! # Configuration
//!
//! Read from `MEDVERIFY_*` environment variables (after loading `.env`), see
//! [`config::ClientConfig`]. `--api-base-url` and `--session-file` override
//! the corresponding variables for one invocation.
//!
//! # Session
//!
//! The selected role and signed-in user persist in a JSON file between
//! invocations. A successful registration signs the new user in.

pub mod cli;
pub mod config;
pub mod telemetry;
pub mod session_store;
pub mod commands;
pub mod output;
pub mod error;

pub use cli::Cli;
pub use config::ClientConfig;
pub use session_store::SessionStore;
pub use commands::{run, App};
pub use error::CliError;
