//! Path helpers for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is reachable under `/host`, which
//! Zellij maps to the directory the session was started from (usually `~`).

use std::path::PathBuf;

/// Sandbox view of the host home directory.
const HOST_ROOT: &str = "/host";

/// Directory holding Talentscope's trace files.
///
/// Resolves to `~/.local/share/zellij/talentscope` on the host when Zellij was
/// started from the home directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT)
        .join(".local")
        .join("share")
        .join("zellij")
        .join("talentscope")
}

/// Rewrites a `~`-prefixed path into its sandbox location.
///
/// # Examples
///
/// ```
/// use talentscope::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/hiring/candidates.json"), "/host/hiring/candidates.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/data/candidates.json"), "/data/candidates.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path == "~" {
        HOST_ROOT.to_string()
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("{HOST_ROOT}/{rest}")
    } else {
        path.to_string()
    }
}
