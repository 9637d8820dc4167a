// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard and window events are translated into page intents. A
//! periodic tick runs only while a timer or toast needs it, and animation
//! frames are requested only while scroll work or a reveal is pending.

use super::{KeyIntent, Message};
use crate::domain::group::GroupKey;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Tick period for promo, form and toast timers.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Maps a key to the page intent it carries, if any.
#[must_use]
pub fn key_intent(key: &Key) -> Option<KeyIntent> {
    let Key::Named(named) = key else {
        return None;
    };
    let intent = match named {
        Named::Escape => KeyIntent::Escape,
        Named::ArrowRight | Named::ArrowDown => KeyIntent::Group(GroupKey::Next),
        Named::ArrowLeft | Named::ArrowUp => KeyIntent::Group(GroupKey::Previous),
        Named::Home => KeyIntent::Group(GroupKey::First),
        Named::End => KeyIntent::Group(GroupKey::Last),
        Named::Enter | Named::Space => KeyIntent::Group(GroupKey::Activate),
        _ => return None,
    };
    Some(intent)
}

/// Window resizes and keyboard input not captured by a widget.
///
/// Keys typed into a text field are captured by it and never reach the
/// page groups.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. })
            if matches!(status, event::Status::Ignored) =>
        {
            key_intent(&key).map(Message::Key)
        }
        _ => None,
    })
}

/// Creates a periodic tick subscription while any timer is armed.
pub fn create_tick_subscription(has_pending_timers: bool) -> Subscription<Message> {
    if has_pending_timers {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Creates the animation-frame subscription while frame work is pending.
pub fn create_frame_subscription(frame_needed: bool) -> Subscription<Message> {
    if frame_needed {
        window::frames().map(Message::Frame)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_map_to_group_navigation() {
        assert_eq!(
            key_intent(&Key::Named(Named::ArrowRight)),
            Some(KeyIntent::Group(GroupKey::Next))
        );
        assert_eq!(
            key_intent(&Key::Named(Named::ArrowDown)),
            Some(KeyIntent::Group(GroupKey::Next))
        );
        assert_eq!(
            key_intent(&Key::Named(Named::ArrowUp)),
            Some(KeyIntent::Group(GroupKey::Previous))
        );
        assert_eq!(
            key_intent(&Key::Named(Named::ArrowLeft)),
            Some(KeyIntent::Group(GroupKey::Previous))
        );
    }

    #[test]
    fn home_end_and_activation_keys() {
        assert_eq!(
            key_intent(&Key::Named(Named::Home)),
            Some(KeyIntent::Group(GroupKey::First))
        );
        assert_eq!(
            key_intent(&Key::Named(Named::End)),
            Some(KeyIntent::Group(GroupKey::Last))
        );
        assert_eq!(
            key_intent(&Key::Named(Named::Enter)),
            Some(KeyIntent::Group(GroupKey::Activate))
        );
        assert_eq!(
            key_intent(&Key::Named(Named::Space)),
            Some(KeyIntent::Group(GroupKey::Activate))
        );
    }

    #[test]
    fn escape_is_its_own_intent() {
        assert_eq!(key_intent(&Key::Named(Named::Escape)), Some(KeyIntent::Escape));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(key_intent(&Key::Named(Named::Tab)), None);
        assert_eq!(key_intent(&Key::Character("a".into())), None);
    }
}
