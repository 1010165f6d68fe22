//! Page-level link and script policies.
//!
//! These are the decisions behind two page behaviours: following in-page
//! anchor links, and dropping external scripts that are not on an allowlist.
//! Only the decision lives here; acting on it is left to the caller.
//!
//! License: MIT OR APACHE 2.0

use lazy_static::lazy_static;
use log::warn;
use regex::Regex;

use crate::config::GatekeeperConfig;

lazy_static! {
    /// A fragment link: '#' followed by one or more id characters.
    static ref FRAGMENT_LINK: Regex = Regex::new(r"^#[a-zA-Z0-9\-_]+$").unwrap();
}

/// Returns true if `href` is a plain in-page fragment link such as `#about`.
///
/// Anything else, including selectors smuggled in after the '#', is refused.
pub fn is_valid_fragment_link(href: &str) -> bool {
    if FRAGMENT_LINK.is_match(href) {
        true
    } else {
        warn!("Refusing invalid fragment link: {:?}", href);
        false
    }
}

/// Decides which script sources are kept on the page.
#[derive(Debug, Clone)]
pub struct ScriptAllowlist {
    markers: Vec<String>,
}

impl ScriptAllowlist {
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            markers: markers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(config: &GatekeeperConfig) -> Self {
        Self::new(config.script_allowlist.iter().cloned())
    }

    /// Inline scripts (empty `src`) are always kept. External sources are
    /// kept only if they contain one of the allowlist markers.
    pub fn is_allowed(&self, src: &str) -> bool {
        if src.is_empty() || self.markers.iter().any(|m| src.contains(m.as_str())) {
            return true;
        }
        warn!("External script blocked: {}", src);
        false
    }
}

impl Default for ScriptAllowlist {
    fn default() -> Self {
        Self::from_config(&GatekeeperConfig::default())
    }
}

/// Checks `src` against the default allowlist.
pub fn is_allowed_script_src(src: &str) -> bool {
    ScriptAllowlist::default().is_allowed(src)
}
