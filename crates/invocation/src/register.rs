use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::CommandError;

/// A named storage slot, addressed by a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Register(char);

impl Register {
	/// The unnamed register.
	pub const DEFAULT: Self = Self('"');
	/// Where macros are recorded unless another register is selected.
	pub const MACRO: Self = Self('@');

	pub const fn new(name: char) -> Self {
		Self(name)
	}

	pub const fn name(self) -> char {
		self.0
	}
}

impl Default for Register {
	fn default() -> Self {
		Self::DEFAULT
	}
}

impl fmt::Display for Register {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl FromStr for Register {
	type Err = CommandError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let mut chars = s.chars();
		match (chars.next(), chars.next()) {
			(Some(name), None) => Ok(Self(name)),
			_ => Err(CommandError::InvalidArgument(format!("register must be a single character, got {s:?}"))),
		}
	}
}

impl From<char> for Register {
	fn from(name: char) -> Self {
		Self(name)
	}
}

impl From<Register> for Value {
	fn from(register: Register) -> Self {
		Value::String(register.0.to_string())
	}
}
