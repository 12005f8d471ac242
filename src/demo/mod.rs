//! Support code for the demo binary.
//!
//! The demo converts a roster of [`User`] records into [`UserDto`] views and
//! prints their names. Nothing here is needed to use the conversion
//! operations themselves.

mod config;
mod logging;
mod user;

pub use config::{ConfigError, LogFormat, LoggingConfig, RosterConfig};
pub use logging::{LoggingError, init as init_logging};
pub use user::{User, UserDto, sample_users};
