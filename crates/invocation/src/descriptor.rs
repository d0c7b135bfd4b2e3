use std::fmt;

use bitflags::bitflags;
use serde_json::Value;
use strand_primitives::BoxFutureLocal;

use crate::{Argument, CommandError, EditorContext, GlobalContext, Host};

/// What a handler produces.
pub type CommandResult = Result<Value, CommandError>;

/// Handler for a command that operates on the active editor.
pub type EditorHandler<H> = for<'a> fn(&'a mut EditorContext<'a, H>, Argument) -> BoxFutureLocal<'a, CommandResult>;

/// Handler for a command that does not need an editor.
pub type GlobalHandler<H> = for<'a> fn(&'a mut GlobalContext<'a, H>, Argument) -> BoxFutureLocal<'a, CommandResult>;

bitflags! {
	/// Invocation behavior of a command.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct CommandFlags: u8 {
		/// Fail without running when no editor is active.
		const REQUIRES_ACTIVE_EDITOR = 1 << 0;
		/// Never record the command for replay.
		const DO_NOT_REPLAY = 1 << 1;
	}
}

impl CommandFlags {
	pub const NONE: Self = Self::empty();
}

/// The two handler shapes. Which one a command has decides the context it
/// receives.
pub enum Handler<H> {
	Editor(EditorHandler<H>),
	Global(GlobalHandler<H>),
}

impl<H> Clone for Handler<H> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<H> Copy for Handler<H> {}

/// A named, executable command.
pub struct CommandDescriptor<H> {
	identifier: String,
	handler: Handler<H>,
	flags: CommandFlags,
}

impl<H> CommandDescriptor<H> {
	/// Creates a descriptor. [`CommandFlags::REQUIRES_ACTIVE_EDITOR`] is
	/// derived from the handler kind and overrides whatever `flags` says.
	pub fn new(identifier: impl Into<String>, handler: Handler<H>, flags: CommandFlags) -> Self {
		let flags = match handler {
			Handler::Editor(_) => flags | CommandFlags::REQUIRES_ACTIVE_EDITOR,
			Handler::Global(_) => flags - CommandFlags::REQUIRES_ACTIVE_EDITOR,
		};
		Self {
			identifier: identifier.into(),
			handler,
			flags,
		}
	}

	pub fn editor(identifier: impl Into<String>, handler: EditorHandler<H>, flags: CommandFlags) -> Self {
		Self::new(identifier, Handler::Editor(handler), flags)
	}

	pub fn global(identifier: impl Into<String>, handler: GlobalHandler<H>, flags: CommandFlags) -> Self {
		Self::new(identifier, Handler::Global(handler), flags)
	}

	pub fn identifier(&self) -> &str {
		&self.identifier
	}

	pub fn flags(&self) -> CommandFlags {
		self.flags
	}

	pub fn handler(&self) -> Handler<H> {
		self.handler
	}

	pub fn requires_active_editor(&self) -> bool {
		self.flags.contains(CommandFlags::REQUIRES_ACTIVE_EDITOR)
	}

	/// Whether successful invocations are handed to the recorder.
	pub fn is_replayable(&self) -> bool {
		!self.flags.contains(CommandFlags::DO_NOT_REPLAY)
	}
}

impl<H: Host> CommandDescriptor<H> {
	/// Runs the handler with `argument` as given.
	///
	/// Skips ambient enrichment, recording, and undo stops; the caller decides
	/// where undo groups end. Still refuses to run an editor command when no
	/// editor is active.
	pub async fn replay(&self, host: &mut H, argument: Argument) -> CommandResult {
		let cancellation = host.cancellation();
		match self.handler {
			Handler::Editor(handler) => {
				if host.active_editor().is_none() {
					return Err(CommandError::EditorRequired);
				}
				let mut cx = EditorContext::new(host, &cancellation);
				handler(&mut cx, argument).await
			}
			Handler::Global(handler) => {
				let mut cx = GlobalContext::new(host, &cancellation);
				handler(&mut cx, argument).await
			}
		}
	}
}

impl<H> fmt::Debug for CommandDescriptor<H> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CommandDescriptor")
			.field("identifier", &self.identifier)
			.field("flags", &self.flags)
			.finish_non_exhaustive()
	}
}
