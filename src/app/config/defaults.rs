// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Promo**: Promotional notification schedule and dismissal lifetime
//! - **Forms**: Search latency, newsletter confirmation and control feedback
//! - **Scroll**: Floating call-to-action threshold and entrance animations
//! - **Layout**: Responsive breakpoints

// ==========================================================================
// Promo Notification Defaults
// ==========================================================================

/// Delay before the promo notification is shown (milliseconds).
pub const DEFAULT_PROMO_SHOW_DELAY_MS: u64 = 20_000;

/// How long the promo notification stays visible without interaction (milliseconds).
pub const DEFAULT_PROMO_AUTO_HIDE_MS: u64 = 8_000;

/// How long a user dismissal suppresses the notification (hours).
pub const DEFAULT_DISMISSAL_TTL_HOURS: u64 = 24;

// ==========================================================================
// Form Defaults
// ==========================================================================

/// Simulated latency of the search backend stub (milliseconds).
pub const DEFAULT_SEARCH_LATENCY_MS: u64 = 1_500;

/// How long the newsletter acknowledgment stays in the field (milliseconds).
pub const DEFAULT_NEWSLETTER_CONFIRMATION_MS: u64 = 3_000;

/// How long the swap button stays rotated after a press (milliseconds).
pub const DEFAULT_SWAP_RESET_MS: u64 = 300;

/// Delay before focus moves to the departure date after a flight card
/// pre-fills the search form (milliseconds).
pub const DEFAULT_CARD_FOCUS_DELAY_MS: u64 = 500;

// ==========================================================================
// Scroll Defaults
// ==========================================================================

/// Scroll offset at which the floating call-to-action appears.
pub const DEFAULT_CTA_THRESHOLD: f32 = 300.0;

/// Maximum configurable call-to-action threshold.
pub const MAX_CTA_THRESHOLD: f32 = 10_000.0;

/// Fraction of a block that must be inside the viewport to reveal it.
pub const REVEAL_INTERSECTION_RATIO: f32 = 0.1;

/// Duration of the entrance animation (milliseconds).
pub const REVEAL_DURATION_MS: u64 = 500;

/// Vertical distance an entering block travels.
pub const REVEAL_TRANSLATE: f32 = 20.0;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Below this window width the navigation collapses behind a hamburger.
pub const MOBILE_NAV_BREAKPOINT: f32 = 768.0;

/// Below this window width the sidebar becomes collapsible.
pub const MOBILE_SIDEBAR_BREAKPOINT: f32 = 1024.0;
