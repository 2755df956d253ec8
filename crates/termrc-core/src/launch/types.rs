use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque id of a window owned by the window manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque id of a tab owned by the window manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(pub u64);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of container the new process is launched into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LaunchType {
    #[default]
    Window,
    Tab,
    OsWindow,
    Overlay,
    OverlayMain,
    Background,
    Clipboard,
    Primary,
}

impl LaunchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LaunchType::Window => "window",
            LaunchType::Tab => "tab",
            LaunchType::OsWindow => "os-window",
            LaunchType::Overlay => "overlay",
            LaunchType::OverlayMain => "overlay-main",
            LaunchType::Background => "background",
            LaunchType::Clipboard => "clipboard",
            LaunchType::Primary => "primary",
        }
    }

    /// Parse a wire name. Unrecognized names give `None`.
    pub fn from_wire(name: &str) -> Option<Self> {
        let launch_type = match name {
            "window" => LaunchType::Window,
            "tab" => LaunchType::Tab,
            "os-window" => LaunchType::OsWindow,
            "overlay" => LaunchType::Overlay,
            "overlay-main" => LaunchType::OverlayMain,
            "background" => LaunchType::Background,
            "clipboard" => LaunchType::Clipboard,
            "primary" => LaunchType::Primary,
            _ => return None,
        };
        Some(launch_type)
    }

    /// Whether a launch of this type must attach to an existing tab.
    ///
    /// `background`, `os-window`, `tab` and `window` can create their own
    /// container when no tab matches.
    pub fn requires_existing_tab(&self) -> bool {
        !matches!(
            self,
            LaunchType::Background | LaunchType::OsWindow | LaunchType::Tab | LaunchType::Window
        )
    }
}

impl fmt::Display for LaunchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placement of the new window inside its tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    First,
    After,
    Before,
    Neighbor,
    Last,
    Vsplit,
    Hsplit,
    Split,
    #[default]
    Default,
}

/// Where the new process reads its stdin from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StdinSource {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "@selection")]
    Selection,
    #[serde(rename = "@screen")]
    Screen,
    #[serde(rename = "@screen_scrollback")]
    ScreenScrollback,
    #[serde(rename = "@alternate")]
    Alternate,
    #[serde(rename = "@alternate_scrollback")]
    AlternateScrollback,
    #[serde(rename = "@first_cmd_output_on_screen")]
    FirstCmdOutputOnScreen,
    #[serde(rename = "@last_cmd_output")]
    LastCmdOutput,
    #[serde(rename = "@last_visited_cmd_output")]
    LastVisitedCmdOutput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsWindowState {
    #[default]
    Normal,
    Fullscreen,
    Maximized,
    Minimized,
}

/// Fully-resolved options handed to the launch routine.
///
/// Field names are the wire names. The `Default` value is the canonical
/// default set (see [`super::defaults`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchOptions {
    pub window_title: Option<String>,
    pub cwd: Option<String>,
    pub env: Vec<String>,
    pub var: Vec<String>,
    pub tab_title: Option<String>,
    #[serde(rename = "type")]
    pub launch_type: LaunchType,
    pub keep_focus: bool,
    pub copy_colors: bool,
    pub copy_cmdline: bool,
    /// Copy the invoking process's whole environment.
    pub copy_env: bool,
    pub hold: bool,
    pub location: Location,
    pub allow_remote_control: bool,
    pub remote_control_password: Vec<String>,
    pub stdin_source: StdinSource,
    pub stdin_add_formatting: bool,
    pub stdin_add_line_wrap_markers: bool,
    pub spacing: Vec<String>,
    pub marker: Option<String>,
    pub logo: Option<String>,
    pub logo_position: Option<String>,
    /// `-1.0` means "use the configured default".
    pub logo_alpha: f64,
    pub os_window_title: Option<String>,
    pub os_window_name: Option<String>,
    pub os_window_class: Option<String>,
    pub os_window_state: OsWindowState,
    pub always_on_top: bool,
    pub color: Vec<String>,
    pub watcher: Vec<String>,
}

/// Options as parsed on the issuing side: the launch options plus the
/// fields that only steer the remote-control exchange.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchRcOptions {
    /// Match expression selecting the target tab.
    #[serde(rename = "match")]
    pub match_expr: Option<String>,
    /// Use the tab the command was run in instead of the active one.
    #[serde(rename = "self")]
    pub use_self: bool,
    pub no_response: bool,
    #[serde(flatten)]
    pub launch: LaunchOptions,
}

/// How the environment of the new process is seeded.
///
/// `copy_env` travels either as a boolean ("copy everything") or as a list
/// of `KEY=VALUE` overrides. The two never apply together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CopyEnv {
    #[default]
    Neither,
    FullEnvironmentCopy(bool),
    EnvironmentOverrides(HashMap<String, String>),
}

impl CopyEnv {
    pub fn copies_full_environment(&self) -> bool {
        matches!(self, CopyEnv::FullEnvironmentCopy(true))
    }

    /// The base environment overrides, if any.
    pub fn base_env(&self) -> Option<&HashMap<String, String>> {
        match self {
            CopyEnv::EnvironmentOverrides(env) => Some(env),
            _ => None,
        }
    }
}
