//! Named keybinding sets loaded from configuration.
//!
//! A binding file assigns each action a comma-separated list of
//! combinations:
//!
//! ```toml
//! [bindings]
//! quit = "ctrl+c, q"
//! search = "ctrl+/"
//! next-view = "tab, alt+right"
//! ```
//!
//! Every entry is resolved when the set is built, so an unsupported
//! combination is reported with the action it belongs to.

use indexmap::IndexMap;
#[cfg(feature = "toml")]
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::descriptor::KeyDescriptor;
use crate::split::parse_all;


/// Errors raised while loading a binding set.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The document is not valid TOML or has the wrong shape.
	#[cfg(feature = "toml")]
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// An action's combinations could not be parsed.
	#[error("invalid keybinding for action '{action}': {source}")]
	Binding {
		/// Action whose entry was rejected.
		action: String,
		/// The parse failure.
		#[source]
		source: crate::Error,
	},
}

/// On-disk shape of a binding file.
#[cfg(feature = "toml")]
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct BindingFile {
	#[serde(default)]
	bindings: IndexMap<String, String>,
}

/// Actions mapped to their parsed combinations, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingSet {
	bindings: IndexMap<String, Vec<KeyDescriptor>>,
}

impl BindingSet {
	/// Parses a TOML binding document.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::Toml`] for malformed documents and
	/// [`ConfigError::Binding`] for the first entry that fails to parse.
	#[cfg(feature = "toml")]
	pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
		let file: BindingFile = toml::from_str(text)?;
		Self::from_entries(file.bindings)
	}

	/// Resolves `(action, combinations)` pairs.
	///
	/// A repeated action replaces the earlier entry in place.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::Binding`] for the first entry that fails to parse.
	pub fn from_entries<I, K, V>(entries: I) -> Result<Self, ConfigError>
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: AsRef<str>,
	{
		let mut bindings = IndexMap::new();

		for (action, combos) in entries {
			let action = action.into();
			match parse_all(combos.as_ref()) {
				Ok(descriptors) => {
					debug!(%action, count = descriptors.len(), "loaded keybinding");
					bindings.insert(action, descriptors);
				}
				Err(source) => return Err(ConfigError::Binding { action, source }),
			}
		}

		Ok(Self { bindings })
	}

	/// Combinations bound to `action`.
	pub fn get(&self, action: &str) -> Option<&[KeyDescriptor]> {
		self.bindings.get(action).map(Vec::as_slice)
	}

	/// First action triggered by the same input as `descriptor`.
	pub fn action_for(&self, descriptor: &KeyDescriptor) -> Option<&str> {
		self.bindings
			.iter()
			.find(|(_, descriptors)| descriptors.iter().any(|d| d.same_input(descriptor)))
			.map(|(action, _)| action.as_str())
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &[KeyDescriptor])> {
		self.bindings.iter().map(|(action, descriptors)| (action.as_str(), descriptors.as_slice()))
	}

	pub fn len(&self) -> usize {
		self.bindings.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bindings.is_empty()
	}
}
