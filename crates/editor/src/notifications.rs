//! Messages queued for the user.
//!
//! Frontends drain the queue; the editor only appends.

use std::collections::VecDeque;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
	Info,
	Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
	pub level: Level,
	pub message: String,
}

impl Notification {
	pub fn info(message: impl Into<String>) -> Self {
		Self {
			level: Level::Info,
			message: message.into(),
		}
	}

	pub fn error(message: impl Into<String>) -> Self {
		Self {
			level: Level::Error,
			message: message.into(),
		}
	}
}

impl fmt::Display for Notification {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.message)
	}
}

#[derive(Debug, Default)]
pub struct NotificationCenter {
	pending: VecDeque<Notification>,
}

impl NotificationCenter {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_empty(&self) -> bool {
		self.pending.is_empty()
	}

	pub fn len(&self) -> usize {
		self.pending.len()
	}

	pub fn clear(&mut self) {
		self.pending.clear();
	}

	pub fn push(&mut self, notification: Notification) {
		self.pending.push_back(notification);
	}

	pub fn iter(&self) -> impl Iterator<Item = &Notification> {
		self.pending.iter()
	}

	pub fn take_pending(&mut self) -> Vec<Notification> {
		self.pending.drain(..).collect()
	}
}
