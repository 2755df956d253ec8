//! Receiving side of the `launch` command.
//!
//! A payload is decoded against the handler's defaults, a target tab is
//! resolved through the [`TabMatcher`], and the [`Launcher`] is invoked with
//! the result. Both collaborators belong to the window manager.

use std::collections::HashMap;

use termrc_config::TermrcConfig;
use termrc_protocol::{CommandMessage, Payload, ResponseMessage};
use tracing::{error, info, warn};

use super::LAUNCH_COMMAND;
use super::decode::{DecodedLaunch, decode_payload, decode_payload_against};
use super::defaults::canonical_defaults_with;
use super::errors::LaunchError;
use super::target::{MatchContext, TabMatcher, TargetResolution, resolve_target};
use super::types::{LaunchOptions, TabId, WindowId};

/// Everything the launch routine receives for one request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchRequest<'a> {
    pub options: &'a LaunchOptions,
    pub args: &'a [String],
    pub target_tab: Option<TabId>,
    /// The window the request came from.
    pub rc_from_window: Option<WindowId>,
    pub base_env: Option<&'a HashMap<String, String>>,
}

/// Creates the window, tab or process a launch describes.
pub trait Launcher {
    /// Returns the new window's id, or `None` when the launch produced no
    /// window (clipboard and background launches, for instance).
    fn launch(&mut self, request: &LaunchRequest<'_>) -> Result<Option<WindowId>, LaunchError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    Launched {
        /// `WindowId(0)` when the launcher reported no window.
        window_id: WindowId,
        /// The caller asked for no response.
        silent: bool,
    },
    /// No tab matched and the requested `type` could not proceed without
    /// one. Carries the `type` as sent, which may be absent or unknown.
    NoTarget { requested_type: Option<String> },
}

impl LaunchOutcome {
    /// The response body for the remote caller, if one is owed.
    pub fn response_data(&self) -> Option<String> {
        match self {
            LaunchOutcome::Launched {
                window_id,
                silent: false,
            } => Some(window_id.to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LaunchHandler {
    /// `None` uses freshly built canonical defaults for every request.
    defaults: Option<LaunchOptions>,
}

impl LaunchHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(defaults: LaunchOptions) -> Self {
        Self {
            defaults: Some(defaults),
        }
    }

    /// Canonical defaults with the `[launch]` overrides from `config`.
    pub fn from_config(config: &TermrcConfig) -> Result<Self, LaunchError> {
        Ok(Self::with_defaults(canonical_defaults_with(&config.launch)?))
    }

    pub fn defaults(&self) -> Option<&LaunchOptions> {
        self.defaults.as_ref()
    }

    fn decode(&self, payload: &Payload) -> Result<DecodedLaunch, LaunchError> {
        match &self.defaults {
            Some(defaults) => decode_payload_against(payload, defaults),
            None => decode_payload(payload),
        }
    }

    /// Decode `payload`, resolve its target and launch it.
    pub fn handle(
        &self,
        matcher: &dyn TabMatcher,
        launcher: &mut dyn Launcher,
        window: Option<WindowId>,
        payload: &Payload,
    ) -> Result<LaunchOutcome, LaunchError> {
        info!(event = "core.launch.handle_started", window = ?window.map(|w| w.0));

        let decoded = self.decode(payload)?;
        let ctx = MatchContext::from_payload(window, payload);
        let candidates = matcher.tabs_for_match(&ctx);

        // Placement is decided by the `type` as sent; the decoded (possibly
        // defaulted) type only goes to the launcher.
        let requested_type = payload.get_str("type");
        let target_tab = match resolve_target(&candidates, requested_type) {
            TargetResolution::Tab(tab) => Some(tab),
            TargetResolution::NoTabRequired => None,
            TargetResolution::Rejected => {
                warn!(
                    event = "core.launch.handle_aborted",
                    requested_type = ?requested_type,
                    match_expr = ?ctx.match_expr,
                );
                return Ok(LaunchOutcome::NoTarget {
                    requested_type: requested_type.map(String::from),
                });
            }
        };

        let request = LaunchRequest {
            options: &decoded.options,
            args: &decoded.args,
            target_tab,
            rc_from_window: window,
            base_env: decoded.base_env(),
        };

        let window_id = launcher
            .launch(&request)
            .inspect_err(|e| error!(event = "core.launch.handle_failed", error = %e))?
            .unwrap_or(WindowId(0));

        let silent = payload.flag("no_response");
        info!(
            event = "core.launch.handle_completed",
            window_id = %window_id,
            tab = ?target_tab.map(|t| t.0),
            silent = silent,
        );
        Ok(LaunchOutcome::Launched { window_id, silent })
    }

    /// Handle a full command message and build the reply, if one is owed.
    ///
    /// Returns `None` when the sender set `no_response` or the launch had no
    /// target. Failures become error responses.
    pub fn handle_message(
        &self,
        matcher: &dyn TabMatcher,
        launcher: &mut dyn Launcher,
        window: Option<WindowId>,
        message: &CommandMessage,
    ) -> Option<ResponseMessage> {
        let result = if message.cmd == LAUNCH_COMMAND {
            self.handle(matcher, launcher, window, &message.payload)
        } else {
            Err(LaunchError::UnknownCommand {
                cmd: message.cmd.clone(),
            })
        };

        match result {
            Ok(outcome) if !message.no_response => {
                outcome.response_data().map(|data| ResponseMessage::success(Some(data)))
            }
            Ok(_) => None,
            Err(e) if message.no_response => {
                warn!(event = "core.launch.error_unreported", error = %e);
                None
            }
            Err(e) => Some(ResponseMessage::failure(e.wire_code(), e.to_string())),
        }
    }
}
