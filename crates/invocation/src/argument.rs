use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{AmbientState, CommandError, Register};

/// The keyed record a handler receives.
///
/// Fields that are absent and fields set to `null` are treated alike. The
/// pipeline adds `count` and `register` from the ambient prefix when the
/// caller did not supply them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Argument(Map<String, Value>);

impl Argument {
	pub const COUNT: &'static str = "count";
	pub const REGISTER: &'static str = "register";

	pub fn new() -> Self {
		Self::default()
	}

	/// Copies a caller-supplied value into a fresh record.
	///
	/// `None` and `null` give an empty record; anything else must be an object.
	pub fn from_raw(raw: Option<&Value>) -> Result<Self, CommandError> {
		match raw {
			None | Some(Value::Null) => Ok(Self::new()),
			Some(Value::Object(map)) => Ok(Self(map.clone())),
			Some(other) => Err(CommandError::InvalidArgument(format!(
				"expected an object, got {}",
				kind(other)
			))),
		}
	}

	/// Builder-style [`insert`](Self::insert).
	pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.insert(key, value);
		self
	}

	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
		self.0.insert(key.into(), value.into())
	}

	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key).filter(|value| !value.is_null())
	}

	pub fn contains(&self, key: &str) -> bool {
		self.get(key).is_some()
	}

	pub fn u64(&self, key: &str) -> Result<Option<u64>, CommandError> {
		self.typed(key, "a non-negative integer", Value::as_u64)
	}

	pub fn bool(&self, key: &str) -> Result<Option<bool>, CommandError> {
		self.typed(key, "a boolean", Value::as_bool)
	}

	pub fn string(&self, key: &str) -> Result<Option<&str>, CommandError> {
		self.typed(key, "a string", Value::as_str)
	}

	/// Like [`string`](Self::string), but the field must be present.
	pub fn required_string(&self, key: &'static str) -> Result<&str, CommandError> {
		self.string(key)?.ok_or(CommandError::MissingArgument(key))
	}

	/// The `count` field, if any.
	pub fn count(&self) -> Result<Option<u32>, CommandError> {
		self.u64(Self::COUNT)?
			.map(|count| {
				u32::try_from(count)
					.map_err(|_| CommandError::InvalidArgument(format!("count {count} is out of range")))
			})
			.transpose()
	}

	/// How many times a repeatable command should run: the count, or one when
	/// it is absent or zero.
	pub fn repetitions(&self) -> Result<usize, CommandError> {
		Ok(self.count()?.unwrap_or(0).max(1) as usize)
	}

	/// The `register` field, if any.
	pub fn register(&self) -> Result<Option<Register>, CommandError> {
		self.string(Self::REGISTER)?.map(str::parse).transpose()
	}

	pub fn as_map(&self) -> &Map<String, Value> {
		&self.0
	}

	pub fn into_value(self) -> Value {
		Value::Object(self.0)
	}

	/// Fills `count` and `register` from the ambient prefix where the caller
	/// left them out. A zero ambient count contributes nothing.
	pub(crate) fn inherit(&mut self, ambient: &AmbientState) {
		if !self.contains(Self::COUNT) && ambient.count() != 0 {
			self.insert(Self::COUNT, ambient.count());
		}
		if !self.contains(Self::REGISTER)
			&& let Some(register) = ambient.register()
		{
			self.insert(Self::REGISTER, register);
		}
	}

	fn typed<'a, T>(
		&'a self,
		key: &str,
		expected: &str,
		convert: impl FnOnce(&'a Value) -> Option<T>,
	) -> Result<Option<T>, CommandError> {
		match self.get(key) {
			None => Ok(None),
			Some(value) => convert(value)
				.map(Some)
				.ok_or_else(|| CommandError::InvalidArgument(format!("{key} must be {expected}, got {}", kind(value)))),
		}
	}
}

impl From<Map<String, Value>> for Argument {
	fn from(map: Map<String, Value>) -> Self {
		Self(map)
	}
}

fn kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}
