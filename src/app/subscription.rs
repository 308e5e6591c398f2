// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module routes native keyboard events to the gallery screen and
//! drives the periodic tick used for notification auto-dismiss.

use super::{Message, Screen};
use crate::config;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Creates the keyboard event subscription for the current screen.
///
/// Arrow-key navigation only applies on the gallery screen; other screens
/// handle their own widget events and need no raw routing. Events already
/// captured by a widget (e.g. a focused text input) are not forwarded.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Gallery => event::listen_with(|event, status, _window| {
            if let event::Event::Keyboard(..) = &event {
                match status {
                    event::Status::Ignored => Some(Message::RawEvent(event)),
                    event::Status::Captured => None,
                }
            } else {
                None
            }
        }),
        Screen::Settings | Screen::About => Subscription::none(),
    }
}

/// Creates a periodic tick subscription for notification auto-dismiss.
///
/// The tick only runs while notifications are showing, so an idle gallery
/// costs nothing.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(config::NOTIFICATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
