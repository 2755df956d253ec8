use termrc_protocol::Payload;
use tracing::{debug, info};

use super::types::{LaunchType, TabId, WindowId};

/// What the window manager needs to turn a request into candidate tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchContext<'a> {
    /// The window the request was issued from, if any.
    pub window: Option<WindowId>,
    pub match_expr: Option<&'a str>,
    pub use_self: bool,
}

impl<'a> MatchContext<'a> {
    pub fn from_payload(window: Option<WindowId>, payload: &'a Payload) -> Self {
        Self {
            window,
            match_expr: payload.get_str("match"),
            use_self: payload.flag("self"),
        }
    }
}

/// Resolves a match context into candidate tabs.
///
/// Implemented by the window manager. The match expression language is
/// opaque at this layer; implementations return candidates in preference
/// order, most preferred first.
pub trait TabMatcher {
    fn tabs_for_match(&self, ctx: &MatchContext<'_>) -> Vec<TabId>;
}

/// Where a launch is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetResolution {
    /// Attach to this tab.
    Tab(TabId),
    /// Nothing matched, but the launch type can create its own container.
    NoTabRequired,
    /// Nothing matched and the launch type needs an existing tab.
    Rejected,
}

impl TargetResolution {
    pub fn target_tab(&self) -> Option<TabId> {
        match self {
            TargetResolution::Tab(tab) => Some(*tab),
            _ => None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, TargetResolution::Rejected)
    }
}

/// Pick the first candidate, or decide from the requested `type` whether
/// the launch may proceed without one.
///
/// `requested_type` is the raw wire value, not the decoded option: an absent
/// or unrecognized type never proceeds without a tab, even though decoding
/// would fill it with the default.
pub fn resolve_target(candidates: &[TabId], requested_type: Option<&str>) -> TargetResolution {
    if let Some(tab) = candidates.first() {
        debug!(
            event = "core.launch.target_resolved",
            tab = %tab,
            candidates = candidates.len(),
        );
        return TargetResolution::Tab(*tab);
    }

    let standalone = requested_type
        .and_then(LaunchType::from_wire)
        .is_some_and(|t| !t.requires_existing_tab());

    if standalone {
        debug!(
            event = "core.launch.target_not_required",
            requested_type = ?requested_type,
        );
        TargetResolution::NoTabRequired
    } else {
        info!(
            event = "core.launch.target_rejected",
            requested_type = ?requested_type,
        );
        TargetResolution::Rejected
    }
}
