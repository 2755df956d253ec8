//! Field declarations for the `launch` command.

use std::sync::LazyLock;

use crate::schema::Schema;

/// Declarations for every field the `launch` command accepts on the wire.
pub const LAUNCH_PROTOCOL_SPEC: &str = r#"
args+/list.str: The command line to run in the new window, as a list, use an empty list to run the default shell
match/str: The tab to open the new window in
window_title/str: Title for the new window
cwd/str: Working directory for the new window
env/list.str: List of environment variables of the form NAME=VALUE
var/list.str: List of user variables of the form NAME=VALUE
tab_title/str: Title for the new tab
type/choices.window.tab.os-window.overlay.overlay-main.background.clipboard.primary: The type of window to open
keep_focus/bool: Boolean indicating whether the current window should retain focus or not
copy_colors/bool: Boolean indicating whether to copy the colors from the current window
copy_cmdline/bool: Boolean indicating whether to copy the cmdline from the current window
copy_env/list.str=copy_local_env: List of strings representing the local env vars
hold/bool: Boolean indicating whether to keep window open after cmd exits
location/choices.first.after.before.neighbor.last.vsplit.hsplit.split.default: Where in the tab to open the new window
allow_remote_control/bool: Boolean indicating whether to allow remote control from the new window
remote_control_password/list.str: A list of remote control passwords
stdin_source/choices.none.@selection.@screen.@screen_scrollback.@alternate.@alternate_scrollback.\
    @first_cmd_output_on_screen.@last_cmd_output.@last_visited_cmd_output: Where to get stdin for the process from
stdin_add_formatting/bool: Boolean indicating whether to add formatting codes to stdin
stdin_add_line_wrap_markers/bool: Boolean indicating whether to add line wrap markers to stdin
spacing/list.str: A list of spacing specifications, see the docs for the set-spacing command
marker/str: Specification for marker for new window, for example: "text 1 ERROR"
logo/str: Path to window logo
logo_position/str: Window logo position as string or empty string to use default
logo_alpha/float: Window logo alpha or -1 to use default
self/bool: Boolean, if True use tab the command was run in
os_window_title/str: Title for OS Window
os_window_name/str: WM_NAME for OS Window
os_window_class/str: WM_CLASS for OS Window
os_window_state/choices.normal.fullscreen.maximized.minimized: The initial state for OS Window
always_on_top/bool: Boolean, if true and creating a new OS window, configure the window to be always on top.
color/list.str: list of color specifications such as foreground=red
watcher/list.str: list of paths to watcher files
no_response/bool: Boolean, if true do not reply with the id of the new window
"#;

/// Fields that steer the remote-control exchange itself rather than the
/// launched window. They never appear on the decoded launch options.
pub const RC_ONLY_FIELDS: [&str; 4] = ["args", "match", "self", "no_response"];

static LAUNCH_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::parse(LAUNCH_PROTOCOL_SPEC).expect("launch field declarations must parse")
});

/// The process-wide `launch` schema.
pub fn launch_schema() -> &'static Schema {
    &LAUNCH_SCHEMA
}
