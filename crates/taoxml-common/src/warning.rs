//! Parser warnings with colored terminal output.
//!
//! Lenient parsing paths (a closing tag that names the wrong element, text
//! dropped outside the root) are reported here instead of failing the parse.
//! Each distinct message is printed once per process until the set is cleared.

use std::collections::HashSet;
use std::sync::{LazyLock, Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Messages already printed, keyed as `[component] message`.
static WARNED: LazyLock<Mutex<HashSet<String>>> = LazyLock::new(|| Mutex::new(HashSet::new()));

/// Warn about a lenient or suspicious construct (prints once per unique message).
///
/// Returns `true` if the message was printed, `false` if it had already been
/// reported since the last [`clear_warnings`].
///
/// # Example
/// ```
/// use taoxml_common::warning::warn_once;
///
/// let first = warn_once("Parser", "closing tag </b> closed <a>");
/// let again = warn_once("Parser", "closing tag </b> closed <a>");
/// assert!(first && !again);
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let fresh = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(key);

    if fresh {
        eprintln!("{}", format!("[taoxml {component}] ⚠ {message}").yellow());
    }
    fresh
}

/// Clear all recorded warnings (call before parsing an unrelated document).
pub fn clear_warnings() {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clear();
}
