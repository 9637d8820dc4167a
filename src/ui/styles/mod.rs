// SPDX-License-Identifier: MPL-2.0
//! Centralized styles shared by every landing-page section.

pub mod button;
pub mod container;

pub use button::{accent as button_accent, primary as button_primary};
