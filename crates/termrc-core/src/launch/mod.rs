pub mod decode;
pub mod defaults;
pub mod encode;
pub mod errors;
pub mod handler;
pub mod target;
pub mod types;

/// Wire name of the command.
pub const LAUNCH_COMMAND: &str = "launch";

/// The field whose wire shape decides between a full environment copy and
/// explicit overrides.
pub const COPY_ENV_FIELD: &str = "copy_env";

pub use decode::{DecodedLaunch, decode_payload, decode_payload_against};
pub use defaults::{canonical_defaults, canonical_defaults_with};
pub use encode::{build_command, encode_payload, encode_payload_with_env};
pub use errors::LaunchError;
pub use handler::{LaunchHandler, LaunchOutcome, LaunchRequest, Launcher};
pub use target::{MatchContext, TabMatcher, TargetResolution, resolve_target};
pub use types::{
    CopyEnv, LaunchOptions, LaunchRcOptions, LaunchType, Location, OsWindowState, StdinSource,
    TabId, WindowId,
};
