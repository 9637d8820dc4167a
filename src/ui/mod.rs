// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Every page region is a component following the Elm-style "state down,
//! messages up" pattern: a state type, a `Message`, an `update` that returns
//! an `Event` for the application, and a `view` fed by a `ViewContext`.
//!
//! # Page regions
//!
//! - [`navbar`] - Brand, section links and the mobile hamburger menu
//! - [`search_form`] - Trip-type toggle, city swap and search submission
//! - [`cards`] - Popular flights, offers and testimonials
//! - [`topics`] - Tabbed travel-information sidebar
//! - [`accordion`] - Frequently asked questions
//! - [`newsletter`] - Main and footer newsletter sign-up
//! - [`promo`] - Timed promotional notification
//!
//! # Shared Infrastructure
//!
//! - [`page_layout`] - Section geometry used for anchors and reveal
//! - [`scroll`] - Frame-coalesced scroll handling and entrance animations
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod accordion;
pub mod cards;
pub mod design_tokens;
pub mod navbar;
pub mod newsletter;
pub mod notifications;
pub mod page_layout;
pub mod promo;
pub mod scroll;
pub mod search_form;
pub mod styles;
pub mod theming;
pub mod topics;
