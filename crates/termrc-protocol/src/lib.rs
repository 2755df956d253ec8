//! # termrc-protocol
//!
//! Wire-level types for the remote-control `launch` command: the declarative
//! field schema, the flat payload map and the command/response envelopes.
//!
//! Has no knowledge of windows, tabs or processes. Those live in `termrc-core`.

mod errors;
pub mod launch;
mod messages;
mod payload;
pub mod schema;

pub use errors::SchemaError;
pub use launch::{LAUNCH_PROTOCOL_SPEC, RC_ONLY_FIELDS, launch_schema};
pub use messages::{CommandMessage, ErrorCode, PROTOCOL_VERSION, ResponseMessage};
pub use payload::{Payload, is_truthy};
pub use schema::{FieldDecl, Schema, TypeTag};
