//! The [`Editor`]: buffers plus everything the invocation pipeline needs.
//!
//! The editor owns the command registry, the ambient count/register session,
//! the macro recorder, and the queue of user-facing notifications. All command
//! execution goes through [`Editor::execute`].

use std::sync::Arc;

use serde_json::Value;
use strand_invocation::{
	Argument, CommandDescriptor, CommandRegistry, Host, InvocationResult, RegistryError, Session,
};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::buffer::{Buffer, BufferId};
use crate::commands;
use crate::config::Config;
use crate::notifications::{Notification, NotificationCenter};
use crate::recorder::MacroRecorder;

pub struct Editor {
	config: Config,
	buffers: Vec<Buffer>,
	active: Option<BufferId>,
	next_buffer_id: u64,
	session: Session,
	recorder: MacroRecorder,
	commands: Arc<CommandRegistry<Editor>>,
	cancellation: CancellationToken,
	notifications: NotificationCenter,
}

impl Editor {
	/// Creates an editor with the built-in commands.
	pub fn new(config: Config) -> Result<Self, RegistryError> {
		Ok(Self::with_commands(config, commands::builtin()?))
	}

	/// Creates an editor resolving identifiers against `commands`.
	pub fn with_commands(config: Config, commands: CommandRegistry<Editor>) -> Self {
		let recorder = MacroRecorder::new(config.history_limit);
		Self {
			config,
			buffers: Vec::new(),
			active: None,
			next_buffer_id: 0,
			session: Session::new(),
			recorder,
			commands: Arc::new(commands),
			cancellation: CancellationToken::new(),
			notifications: NotificationCenter::new(),
		}
	}

	/// Runs the command registered as `identifier`.
	///
	/// Failures are reported as notifications and returned, never propagated.
	pub async fn execute(&mut self, identifier: &str, argument: Option<&Value>) -> InvocationResult {
		strand_invocation::execute(self, identifier, argument).await
	}

	/// Opens a buffer holding `text` and makes it active.
	pub fn open(&mut self, text: &str) -> BufferId {
		let id = BufferId(self.next_buffer_id);
		self.next_buffer_id += 1;
		self.buffers.push(Buffer::with_undo_limit(id, text, self.config.undo_limit));
		self.active = Some(id);
		debug!(buffer = id.0, "Opened buffer");
		id
	}

	/// Closes a buffer. If it was active, the most recently opened remaining
	/// buffer becomes active.
	pub fn close(&mut self, id: BufferId) -> Option<Buffer> {
		let index = self.buffers.iter().position(|buffer| buffer.id() == id)?;
		let buffer = self.buffers.remove(index);
		if self.active == Some(id) {
			self.active = self.buffers.last().map(Buffer::id);
		}
		Some(buffer)
	}

	/// Makes `id` the active buffer. Returns `false` if no such buffer exists.
	pub fn focus(&mut self, id: BufferId) -> bool {
		let exists = self.buffer(id).is_some();
		if exists {
			self.active = Some(id);
		}
		exists
	}

	pub fn buffer(&self, id: BufferId) -> Option<&Buffer> {
		self.buffers.iter().find(|buffer| buffer.id() == id)
	}

	pub fn buffer_mut(&mut self, id: BufferId) -> Option<&mut Buffer> {
		self.buffers.iter_mut().find(|buffer| buffer.id() == id)
	}

	pub fn active_buffer(&self) -> Option<&Buffer> {
		self.buffer(self.active?)
	}

	pub fn active_buffer_mut(&mut self) -> Option<&mut Buffer> {
		self.buffer_mut(self.active?)
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	pub fn recorder(&self) -> &MacroRecorder {
		&self.recorder
	}

	pub fn recorder_mut(&mut self) -> &mut MacroRecorder {
		&mut self.recorder
	}

	pub fn notify(&mut self, notification: Notification) {
		self.notifications.push(notification);
	}

	pub fn notifications(&self) -> &NotificationCenter {
		&self.notifications
	}

	pub fn notifications_mut(&mut self) -> &mut NotificationCenter {
		&mut self.notifications
	}

	/// Cancels the current token and installs a fresh one for later work.
	///
	/// While a command runs, only its own handler can borrow the editor to call
	/// this. Playback and handlers holding the old token see the cancellation
	/// at their next check. To cancel from outside, keep a
	/// clone of [`Host::cancellation`] and cancel that instead.
	pub fn cancel(&mut self) {
		self.cancellation.cancel();
		self.cancellation = CancellationToken::new();
	}
}

impl Host for Editor {
	type Editor = Buffer;

	fn active_editor(&self) -> Option<&Buffer> {
		self.active_buffer()
	}

	fn active_editor_mut(&mut self) -> Option<&mut Buffer> {
		self.active_buffer_mut()
	}

	fn session(&self) -> &Session {
		&self.session
	}

	fn session_mut(&mut self) -> &mut Session {
		&mut self.session
	}

	fn commands(&self) -> Arc<CommandRegistry<Self>> {
		Arc::clone(&self.commands)
	}

	fn cancellation(&self) -> CancellationToken {
		self.cancellation.clone()
	}

	fn insert_undo_stop(&mut self) {
		if let Some(buffer) = self.active_buffer_mut() {
			buffer.insert_undo_stop();
		}
	}

	fn record_command(&mut self, descriptor: &Arc<CommandDescriptor<Self>>, argument: &Argument) {
		self.recorder.record(descriptor, argument);
	}

	fn report_error(&mut self, message: &str) {
		self.notify(Notification::error(message));
	}
}
