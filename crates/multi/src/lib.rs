//! Multi-value converter registry.
//!
//! A multi-value converter turns one delimited string into a materialized
//! container of converted elements. Each converter claims a subtree of the
//! container-shape hierarchy (its family) and competes with the other
//! registered converters for requests:
//!
//! - [`MultiConverterDef::accept`] decides whether a converter services a
//!   `(source, target)` pair: the source must exactly equal the declared
//!   source shape, and the target must lie in the family's shape subtree.
//!   Supertypes of the subtree root are rejected; requests for a general
//!   shape belong to the converter specializing in that general shape.
//! - [`MultiConverterDef::priority`] orders competing acceptors. Lower value
//!   wins. The value is `i32::MAX` minus the family root's hierarchy depth,
//!   so deeper (more specific) families win, and the depth tracks the probed
//!   platform revision rather than a hard-coded constant.
//! - [`MultiConverterDef::convert`] splits on commas, delegates each
//!   non-empty token to the element registry, and assembles the family's
//!   container. Absent or empty input is "no value" (`Ok(None)`), never an
//!   empty container.
//!
//! Converters are stateless statics; `accept`, `convert`, and `priority` are
//! pure functions of their inputs plus the probed platform, so one definition
//! can serve any number of threads.
//!
//! # Built-in Families
//!
//! - `collection` - Most general family, materializes a list
//! - `list` - Positional sequence
//! - `set` - Insertion-ordered duplicate elimination
//! - `sorted_set` - Ascending iteration, duplicate elimination
//! - `navigable_set` - Sorted set with nearest-neighbor navigation
//! - `deque` - Double-ended queue

use std::sync::LazyLock;

mod builtins;
mod error;
mod macros;
pub mod resolver;
mod value;

#[cfg(test)]
mod tests;

pub use error::ConvertError;
pub use manifold_element::{ElementType, ElementValue, convert_element};
pub use manifold_registry_core::{
	RegistryBuilder, RegistryEntry, RegistryIndex, RegistryMeta, RegistryMetadata, RegistryReg,
	RegistrySource, impl_registry_entry,
};
pub use manifold_types::{Hierarchy, HierarchyRevision, Platform, TypeDescriptor};
pub use value::{MultiValue, NavigableValues};

/// Registry wrapper for multi-value converter definitions.
pub struct MultiReg(pub &'static MultiConverterDef);
inventory::collect!(MultiReg);

impl RegistryReg<MultiConverterDef> for MultiReg {
	fn def(&self) -> &'static MultiConverterDef {
		self.0
	}
}

/// Definition of a multi-value converter family.
pub struct MultiConverterDef {
	/// Common registry metadata.
	pub meta: RegistryMeta,
	/// The single source shape this converter accepts. Always exact-matched,
	/// never assignability-matched.
	pub source: TypeDescriptor,
	/// Root of the target-shape subtree this converter claims.
	pub shape: TypeDescriptor,
	/// Materializes converted elements into the family's container.
	pub assemble: fn(Vec<ElementValue>) -> MultiValue,
}

impl MultiConverterDef {
	/// The declared source shape, exposed for registry-side filtering
	/// without invoking [`accept`](Self::accept).
	pub const fn source_type(&self) -> TypeDescriptor {
		self.source
	}

	/// Decides whether this converter services a `(source, target)` pair,
	/// against the probed platform hierarchy.
	pub fn accept(&self, source: Option<TypeDescriptor>, target: Option<TypeDescriptor>) -> bool {
		self.accept_in(Platform::current().hierarchy(), source, target)
	}

	/// [`accept`](Self::accept) against an explicit hierarchy.
	pub fn accept_in(
		&self,
		hierarchy: Hierarchy,
		source: Option<TypeDescriptor>,
		target: Option<TypeDescriptor>,
	) -> bool {
		let (Some(source), Some(target)) = (source, target) else {
			return false;
		};
		source == self.source && hierarchy.is_assignable(self.shape, target)
	}

	/// Tie-break ordering among competing acceptors. Lower value wins.
	///
	/// Computed from the probed platform; stable for the process lifetime.
	pub fn priority(&self) -> i32 {
		self.priority_in(Platform::current().hierarchy())
	}

	/// [`priority`](Self::priority) against an explicit hierarchy.
	pub fn priority_in(&self, hierarchy: Hierarchy) -> i32 {
		i32::MAX - hierarchy.capability_offset(self.shape) as i32
	}

	/// Converts a delimited raw value into this family's container.
	///
	/// Absent (`None`) and empty raw values both mean "no value" and yield
	/// `Ok(None)`. The target argument does not influence assembly; routing
	/// already happened in [`accept`](Self::accept).
	///
	/// With `Some` element type every non-empty token goes through the
	/// element delegate for that type and any failure fails the whole call;
	/// with `None` tokens are kept as raw text.
	pub fn convert(
		&self,
		raw: Option<&str>,
		target: Option<TypeDescriptor>,
		element: Option<ElementType>,
	) -> Result<Option<MultiValue>, ConvertError> {
		let _ = target;
		let Some(raw) = raw else {
			return Ok(None);
		};
		if raw.is_empty() {
			return Ok(None);
		}

		let mut elements = Vec::new();
		for token in raw.split(',') {
			if token.is_empty() {
				continue;
			}
			let value = match element {
				Some(element_type) => convert_element(token, element_type)?,
				None => ElementValue::Text(token.to_owned()),
			};
			elements.push(value);
		}

		Ok(Some((self.assemble)(elements)))
	}
}

impl core::fmt::Debug for MultiConverterDef {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("MultiConverterDef")
			.field("name", &self.meta.name)
			.field("source", &self.source)
			.field("shape", &self.shape)
			.finish()
	}
}

/// Indexed collection of all registered multi-value converters.
pub static MULTI_CONVERTERS: LazyLock<RegistryIndex<MultiConverterDef>> = LazyLock::new(|| {
	RegistryBuilder::new("multi-converters")
		.extend_inventory::<MultiReg>()
		.sort_default()
		.build()
});

/// Finds a multi-value converter by name, id, or alias.
pub fn find(name: &str) -> Option<&'static MultiConverterDef> {
	MULTI_CONVERTERS.get(name)
}

/// Returns all registered multi-value converters.
pub fn all() -> impl Iterator<Item = &'static MultiConverterDef> {
	MULTI_CONVERTERS.iter()
}

impl_registry_entry!(MultiConverterDef);
