use std::collections::hash_map::Entry;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::{CommandDescriptor, RegistryError};

/// Commands keyed by identifier.
pub struct CommandRegistry<H> {
	commands: FxHashMap<String, Arc<CommandDescriptor<H>>>,
}

impl<H> Default for CommandRegistry<H> {
	fn default() -> Self {
		Self {
			commands: FxHashMap::default(),
		}
	}
}

impl<H> CommandRegistry<H> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a command. Identifiers are unique.
	pub fn register(&mut self, descriptor: CommandDescriptor<H>) -> Result<Arc<CommandDescriptor<H>>, RegistryError> {
		match self.commands.entry(descriptor.identifier().to_owned()) {
			Entry::Occupied(entry) => Err(RegistryError::Duplicate(entry.key().clone())),
			Entry::Vacant(entry) => Ok(Arc::clone(entry.insert(Arc::new(descriptor)))),
		}
	}

	pub fn get(&self, identifier: &str) -> Option<&Arc<CommandDescriptor<H>>> {
		self.commands.get(identifier)
	}

	pub fn contains(&self, identifier: &str) -> bool {
		self.commands.contains_key(identifier)
	}

	pub fn len(&self) -> usize {
		self.commands.len()
	}

	pub fn is_empty(&self) -> bool {
		self.commands.is_empty()
	}

	/// Registered identifiers in sorted order.
	pub fn identifiers(&self) -> Vec<&str> {
		let mut identifiers: Vec<_> = self.commands.keys().map(String::as_str).collect();
		identifiers.sort_unstable();
		identifiers
	}

	pub fn iter(&self) -> impl Iterator<Item = &Arc<CommandDescriptor<H>>> {
		self.commands.values()
	}
}
