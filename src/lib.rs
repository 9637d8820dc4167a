// SPDX-License-Identifier: MPL-2.0
//! `skyway` drives the interactive parts of the SkyWay Travel landing page,
//! built with the Iced GUI framework.
//!
//! It covers the navigation menu, the flight search form, the tabbed
//! information sidebar, the FAQ accordion, newsletter sign-up, scroll-driven
//! entrance animations and a timed promotional notification whose dismissal
//! is remembered across sessions.

#![doc(html_root_url = "https://docs.rs/skyway/0.1.0")]

pub mod app;
pub mod domain;
pub mod error;
pub mod submission;
pub mod ui;

pub use app::config;
