//! Relentless FX Core (host-agnostic)
//!
//! Page effects for the Relentless marketing site, written against a small set of
//! host capabilities so the timing logic can run (and be tested) without a browser:
//! - counters that ease from zero to a target once they scroll into view
//! - staggered reveal of content cards
//! - navigation bar styling and the mobile menu toggle
//! - smooth in-page anchor scrolling offset by the nav bar
//! - hero parallax and cursor-tracked glow variables
//!
//! The browser bindings live in `relentless-fx-wasm`; tests drive the same code through
//! the fakes in `relentless-test-fixtures`.

pub mod ambient;
pub mod config;
pub mod counter;
pub mod easing;
pub mod effects;
pub mod error;
pub mod format;
pub mod host;
pub mod nav;
pub mod reveal;
pub mod smooth_scroll;
pub mod watcher;

// Re-exports for consumers (host adapters)
pub use ambient::AmbientEffects;
pub use config::{AmbientConfig, AnchorConfig, Config, CounterConfig, NavConfig, RevealConfig};
pub use counter::{CounterAnimator, CounterFrame, CounterSpec, CounterTask};
pub use effects::PageEffects;
pub use error::{CounterSpecError, FxError};
pub use host::{Element, FrameScheduler, Page, Rect, Timer};
pub use nav::{MenuState, NavState, NavigationController};
pub use reveal::RevealAnimator;
pub use smooth_scroll::{AnchorOutcome, SmoothScrollController};
pub use watcher::{Sighting, VisibilityLatch, VisibilityOptions, VisibilityWatcher, VisibleCallback};
