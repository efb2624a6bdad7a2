//! Message formatting utilities for client display.

use std::fmt::Display;

use chrono::{Local, TimeZone};
use relay_server::domain::{ChatMessage, SystemMessage};
use relay_shared::time::format_clock_time_in;

use crate::domain::IncomingFrame;

/// Shown when a frame carries no usable timestamp
const UNKNOWN_TIME: &str = "--:--";

/// Message formatter for client display
///
/// Times are shown as `HH:MM` in the formatter's time zone.
pub struct MessageFormatter<Tz: TimeZone> {
    tz: Tz,
}

impl MessageFormatter<Local> {
    /// Formatter using the local time zone
    pub fn local() -> Self {
        Self::new(Local)
    }
}

impl<Tz: TimeZone> MessageFormatter<Tz>
where
    Tz::Offset: Display,
{
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Format any received frame
    ///
    /// * `own_sender_id` - The current client's sender id (to mark as "you")
    pub fn format_frame(&self, frame: &IncomingFrame, own_sender_id: &str) -> String {
        match frame {
            IncomingFrame::System(message) => self.format_system(message),
            IncomingFrame::Chat(message) => self.format_chat(message, own_sender_id),
            IncomingFrame::Other(text) => self.format_raw(text),
        }
    }

    /// Format a system notice such as the welcome frame
    pub fn format_system(&self, message: &SystemMessage) -> String {
        format!(
            "\n*** {} ({})\n",
            message.content,
            self.clock_time(Some(message.timestamp.as_str()))
        )
    }

    /// Format a chat message
    pub fn format_chat(&self, message: &ChatMessage, own_sender_id: &str) -> String {
        let you_suffix = if message.sender_id == own_sender_id {
            " (you)"
        } else {
            ""
        };
        format!(
            "\n[{}] {}{}: {}\n",
            self.clock_time(message.timestamp.as_deref()),
            message.sender_id,
            you_suffix,
            message.content
        )
    }

    /// Format a binary message notification
    pub fn format_binary(&self, byte_count: usize) -> String {
        format!("\n← Received {} bytes of binary data\n", byte_count)
    }

    /// Format a raw text message (when parsing fails)
    pub fn format_raw(&self, text: &str) -> String {
        format!("\n← Received: {}\n", text)
    }

    fn clock_time(&self, timestamp: Option<&str>) -> String {
        timestamp
            .and_then(|value| format_clock_time_in(value, &self.tz))
            .unwrap_or_else(|| UNKNOWN_TIME.to_string())
    }
}
