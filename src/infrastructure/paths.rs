//! Path handling for the Zellij sandbox, where the host is mounted at `/host`.

use std::path::PathBuf;

/// Directory holding the plugin's trace files.
///
/// `/host` points at the directory Zellij was started from, usually the
/// user's home, so this is typically `~/.local/share/zellij/listlayout`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("listlayout")
}

/// Maps `~` and `~/...` onto the `/host` mount; other paths are unchanged.
///
/// ```
/// use listlayout::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
