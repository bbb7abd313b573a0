//! Configuration for page effects.
//!
//! Every field has a default matching the Relentless markup, and partial overrides
//! deserialize cleanly (`{"counter": {"duration_ms": 1500}}`).

use serde::{Deserialize, Serialize};

use crate::error::FxError;
use crate::watcher::VisibilityOptions;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub counter: CounterConfig,
    pub reveal: RevealConfig,
    pub nav: NavConfig,
    pub anchors: AnchorConfig,
    pub ambient: AmbientConfig,
}

impl Config {
    /// Parses a (possibly partial) JSON config.
    pub fn from_json(json: &str) -> Result<Self, FxError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Animated counters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub selector: String,
    pub duration_ms: f64,
    pub threshold: f64,
    pub root_margin: String,
    pub target_attr: String,
    pub decimal_attr: String,
    pub prefix_attr: String,
    pub suffix_attr: String,
}

impl CounterConfig {
    pub fn visibility(&self) -> VisibilityOptions {
        VisibilityOptions {
            threshold: self.threshold,
            root_margin: self.root_margin.clone(),
        }
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            selector: "[data-target]".to_string(),
            duration_ms: 2000.0,
            threshold: 0.3,
            root_margin: "0px".to_string(),
            target_attr: "data-target".to_string(),
            decimal_attr: "data-decimal".to_string(),
            prefix_attr: "data-prefix".to_string(),
            suffix_attr: "data-suffix".to_string(),
        }
    }
}

/// Scroll-reveal of content blocks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selectors: Vec<String>,
    pub threshold: f64,
    pub root_margin: String,
    /// Delay added per position within one visibility notification.
    pub stagger_ms: f64,
    pub pending_class: String,
    pub visible_class: String,
}

impl RevealConfig {
    pub fn visibility(&self) -> VisibilityOptions {
        VisibilityOptions {
            threshold: self.threshold,
            root_margin: self.root_margin.clone(),
        }
    }

    /// Selector list matching every animatable element.
    pub fn selector(&self) -> String {
        self.selectors.join(", ")
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selectors: [
                ".problem-card",
                ".step",
                ".impact-card",
                ".efficiency-stat",
                ".state-tag",
                ".methodology-note",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            stagger_ms: 100.0,
            pending_class: "animate-on-scroll".to_string(),
            visible_class: "visible".to_string(),
        }
    }
}

/// Navigation bar and mobile menu.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub nav_selector: String,
    pub menu_button_selector: String,
    pub menu_links_selector: String,
    /// Offsets strictly above this switch the nav to its scrolled style.
    pub scroll_threshold: f64,
    pub scrolled_class: String,
    pub active_class: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            nav_selector: ".nav".to_string(),
            menu_button_selector: ".mobile-menu-btn".to_string(),
            menu_links_selector: ".nav-links".to_string(),
            scroll_threshold: 50.0,
            scrolled_class: "scrolled".to_string(),
            active_class: "active".to_string(),
        }
    }
}

/// In-page anchors that scroll smoothly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorConfig {
    pub selector: String,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            selector: "a[href^=\"#\"]".to_string(),
        }
    }
}

/// Parallax and hover glow.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbientConfig {
    pub hero_selector: String,
    pub parallax_factor: f64,
    pub glow_selectors: Vec<String>,
    /// Only update glow variables on the card under the pointer.
    pub glow_hover_only: bool,
}

impl AmbientConfig {
    pub fn glow_selector(&self) -> String {
        self.glow_selectors.join(", ")
    }
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            hero_selector: ".hero-bg".to_string(),
            parallax_factor: 0.3,
            glow_selectors: [".impact-card", ".problem-card", ".step"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            glow_hover_only: false,
        }
    }
}
