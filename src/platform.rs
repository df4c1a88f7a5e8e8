//! Platform-specific configuration

/// Submit shortcut display for help text
/// Ctrl+S works on all platforms; Cmd is not delivered to terminal apps
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Clear-field shortcut display
pub const CLEAR_SHORTCUT: &str = "Ctrl+U";

/// Clipboard hint in the acknowledgement dialog
/// - macOS/Windows: system clipboard is always there
/// - Linux: needs an X11/Wayland session
#[cfg(not(target_os = "linux"))]
pub const COPY_HINT: &str = "c: copy";

#[cfg(target_os = "linux")]
pub const COPY_HINT: &str = "c: copy (needs a desktop clipboard)";
