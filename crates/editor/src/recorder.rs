//! Recording of successful commands for repetition and macros.

use std::collections::VecDeque;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use strand_invocation::{Argument, CommandDescriptor, CommandError, Register};
use thiserror::Error;
use tracing::{debug, trace};

use crate::Editor;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecorderError {
	#[error("already recording into register {0}")]
	AlreadyRecording(Register),
	#[error("not recording")]
	NotRecording,
	#[error("register {0} holds no macro")]
	EmptyRegister(Register),
	#[error("no command to repeat")]
	NothingToRepeat,
}

impl From<RecorderError> for CommandError {
	fn from(err: RecorderError) -> Self {
		CommandError::Failed(err.to_string())
	}
}

/// A command as it was successfully invoked.
#[derive(Debug, Clone)]
pub struct RecordedCommand {
	descriptor: Arc<CommandDescriptor<Editor>>,
	argument: Argument,
}

impl RecordedCommand {
	pub fn new(descriptor: Arc<CommandDescriptor<Editor>>, argument: Argument) -> Self {
		Self { descriptor, argument }
	}

	pub fn descriptor(&self) -> &Arc<CommandDescriptor<Editor>> {
		&self.descriptor
	}

	pub fn identifier(&self) -> &str {
		self.descriptor.identifier()
	}

	/// The argument the handler received, ambient fields included.
	pub fn argument(&self) -> &Argument {
		&self.argument
	}
}

#[derive(Debug)]
struct Recording {
	register: Register,
	commands: Vec<RecordedCommand>,
}

/// Keeps the most recent commands and the macros stored per register.
///
/// Commands flagged `DO_NOT_REPLAY` never enter either.
#[derive(Debug)]
pub struct MacroRecorder {
	history: VecDeque<RecordedCommand>,
	history_limit: usize,
	recording: Option<Recording>,
	macros: FxHashMap<Register, Vec<RecordedCommand>>,
}

impl MacroRecorder {
	pub fn new(history_limit: usize) -> Self {
		Self {
			history: VecDeque::with_capacity(history_limit.min(64)),
			history_limit,
			recording: None,
			macros: FxHashMap::default(),
		}
	}

	/// Appends a successful invocation to the history and to the macro being
	/// recorded, if any.
	pub fn record(&mut self, descriptor: &Arc<CommandDescriptor<Editor>>, argument: &Argument) {
		if !descriptor.is_replayable() {
			return;
		}
		let entry = RecordedCommand::new(Arc::clone(descriptor), argument.clone());
		trace!(command = entry.identifier(), "Recorded command");

		if let Some(recording) = &mut self.recording {
			recording.commands.push(entry.clone());
		}
		if self.history_limit == 0 {
			return;
		}
		if self.history.len() == self.history_limit {
			self.history.pop_front();
		}
		self.history.push_back(entry);
	}

	/// Most recent first.
	pub fn history(&self) -> impl Iterator<Item = &RecordedCommand> {
		self.history.iter().rev()
	}

	pub fn last(&self) -> Option<&RecordedCommand> {
		self.history.back()
	}

	pub fn start(&mut self, register: Register) -> Result<(), RecorderError> {
		if let Some(recording) = &self.recording {
			return Err(RecorderError::AlreadyRecording(recording.register));
		}
		debug!(%register, "Macro recording started");
		self.recording = Some(Recording {
			register,
			commands: Vec::new(),
		});
		Ok(())
	}

	/// Stores the recording in its register, replacing what was there.
	/// Returns the register and the number of commands stored.
	pub fn stop(&mut self) -> Result<(Register, usize), RecorderError> {
		let Recording { register, commands } = self.recording.take().ok_or(RecorderError::NotRecording)?;
		let len = commands.len();
		debug!(%register, commands = len, "Macro recording stopped");
		self.macros.insert(register, commands);
		Ok((register, len))
	}

	/// The register being recorded into.
	pub fn recording(&self) -> Option<Register> {
		self.recording.as_ref().map(|recording| recording.register)
	}

	pub fn macro_in(&self, register: Register) -> Option<&[RecordedCommand]> {
		self.macros.get(&register).map(Vec::as_slice)
	}

	/// Stores `commands` as the macro in `register`, dropping any that may
	/// not be replayed.
	pub fn set_macro(&mut self, register: Register, commands: Vec<RecordedCommand>) {
		let commands = commands
			.into_iter()
			.filter(|command| command.descriptor.is_replayable())
			.collect();
		self.macros.insert(register, commands);
	}
}
