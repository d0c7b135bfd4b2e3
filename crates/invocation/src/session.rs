use crate::Register;

/// The pending count/register prefix typed before a command.
///
/// The pipeline folds this into the next invocation's argument and clears it
/// before the handler runs, so a handler that sets it (such as a count-digit
/// command) prepares the next invocation rather than itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AmbientState {
	count: u32,
	register: Option<Register>,
}

impl AmbientState {
	/// Pending count; `0` means none.
	pub fn count(&self) -> u32 {
		self.count
	}

	pub fn register(&self) -> Option<Register> {
		self.register
	}

	pub fn set_count(&mut self, count: u32) {
		self.count = count;
	}

	pub fn set_register(&mut self, register: Option<Register>) {
		self.register = register;
	}

	/// Appends a decimal digit to the pending count, clamped to `max`.
	pub fn push_digit(&mut self, digit: u32, max: u32) {
		self.count = self.count.saturating_mul(10).saturating_add(digit).min(max);
	}

	pub fn is_empty(&self) -> bool {
		self.count == 0 && self.register.is_none()
	}

	pub fn clear(&mut self) {
		*self = Self::default();
	}
}

/// Per-host invocation state.
#[derive(Debug, Default)]
pub struct Session {
	ambient: AmbientState,
	depth: usize,
}

impl Session {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn ambient(&self) -> &AmbientState {
		&self.ambient
	}

	pub fn ambient_mut(&mut self) -> &mut AmbientState {
		&mut self.ambient
	}

	/// Number of handlers currently running on this host. Zero outside any
	/// invocation; greater than one inside a nested invocation.
	pub fn depth(&self) -> usize {
		self.depth
	}

	pub(crate) fn enter(&mut self) {
		self.depth += 1;
	}

	pub(crate) fn exit(&mut self) {
		self.depth = self.depth.saturating_sub(1);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn push_digit_accumulates_and_clamps() {
		let mut ambient = AmbientState::default();
		ambient.push_digit(1, 10_000);
		ambient.push_digit(2, 10_000);
		assert_eq!(ambient.count(), 12);

		for _ in 0..8 {
			ambient.push_digit(9, 10_000);
		}
		assert_eq!(ambient.count(), 10_000);

		ambient.set_count(u32::MAX);
		ambient.push_digit(9, u32::MAX);
		assert_eq!(ambient.count(), u32::MAX);
	}

	#[test]
	fn clear_resets_both_fields() {
		let mut ambient = AmbientState::default();
		ambient.set_count(4);
		ambient.set_register(Some(Register::new('a')));
		assert!(!ambient.is_empty());

		ambient.clear();
		assert!(ambient.is_empty());
		assert_eq!(ambient, AmbientState::default());
	}
}
