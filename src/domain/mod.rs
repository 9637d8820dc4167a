// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core interaction rules with ZERO external dependencies.
//!
//! This module contains pure value objects and state machines that the UI
//! layer drives. It depends on nothing but `std`, so every rule can be unit
//! tested without a window or a runtime.
//!
//! # Modules
//!
//! - [`accordion`]: Per-container toggle groups ([`Accordion`](accordion::Accordion))
//! - [`clock`]: Injectable time source ([`Clock`](clock::Clock))
//! - [`dismissal`]: Persisted promo dismissal ([`DismissalRecord`](dismissal::DismissalRecord))
//! - [`group`]: Radio-style exclusive groups ([`ExclusiveGroup`](group::ExclusiveGroup))
//! - [`timer`]: Cancellable one-shot alarms ([`OneShot`](timer::OneShot))
//! - [`trip`]: Trip types offered by the search form ([`TripType`](trip::TripType))

pub mod accordion;
pub mod clock;
pub mod dismissal;
pub mod group;
pub mod timer;
pub mod trip;
