//! termrc-core: the `launch` remote-control command.
//!
//! Marshals launch options between the process issuing the command and the
//! process executing it.
//!
//! # Main Entry Points
//!
//! - [`launch::encode_payload`] - Turn local options into a wire payload
//! - [`launch::decode_payload`] - Rebuild typed options from a payload
//! - [`launch::resolve_target`] - Pick the tab a new window attaches to
//! - [`launch::LaunchHandler`] - Decode, resolve and launch in one call

pub mod errors;
pub mod launch;
pub mod logging;

pub use errors::TermrcError;
pub use launch::{
    CopyEnv, DecodedLaunch, LaunchError, LaunchHandler, LaunchOptions, LaunchOutcome,
    LaunchRcOptions, LaunchRequest, LaunchType, Launcher, MatchContext, TabId, TabMatcher,
    TargetResolution, WindowId,
};
pub use logging::init_logging;
pub use termrc_config::{ConfigError, TermrcConfig};
