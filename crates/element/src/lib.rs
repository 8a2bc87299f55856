//! Element delegate registry.
//!
//! Multi-value converters split a delimited string and hand each token to an
//! element delegate: the one capability this crate owns. A delegate converts a
//! single token into an [`ElementValue`] of its declared [`ElementType`].
//! Delegates are registered in a static list and resolved either by name or by
//! the element type they service.
//!
//! # Built-in Delegates
//!
//! - `text` - Identity conversion, keeps the token as raw text
//! - `boolean` - Strict `true`/`false` parsing
//! - `integer` - Signed 64-bit integer parsing
//! - `float` - 64-bit float parsing (totally ordered via `total_cmp`)

use std::collections::HashMap;
use std::sync::LazyLock;

mod builtins;
mod error;
mod macros;
mod value;

pub use error::ElementError;
pub use manifold_registry_core::{
	DuplicatePolicy, RegistryBuilder, RegistryEntry, RegistryIndex, RegistryMeta, RegistryMetadata,
	RegistryReg, RegistrySource, build_map, impl_registry_entry,
};
pub use value::ElementValue;

/// The element type a delegate produces.
///
/// Requests carry an `Option<ElementType>`; absence means "no element
/// conversion, keep tokens as raw text".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
	/// Raw text, kept as-is.
	Text,
	/// `true` / `false`.
	Boolean,
	/// Signed 64-bit integer.
	Integer,
	/// 64-bit float.
	Float,
}

impl ElementType {
	/// Stable lowercase name for logs and error messages.
	pub const fn name(self) -> &'static str {
		match self {
			Self::Text => "text",
			Self::Boolean => "boolean",
			Self::Integer => "integer",
			Self::Float => "float",
		}
	}
}

impl core::fmt::Display for ElementType {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(self.name())
	}
}

/// Registry wrapper for element delegate definitions.
pub struct ElementReg(pub &'static ElementConverterDef);
inventory::collect!(ElementReg);

impl RegistryReg<ElementConverterDef> for ElementReg {
	fn def(&self) -> &'static ElementConverterDef {
		self.0
	}
}

/// Definition of an element delegate.
///
/// Stateless after construction; the parse function must be a pure function
/// of the token so definitions can be shared across threads.
pub struct ElementConverterDef {
	/// Common registry metadata.
	pub meta: RegistryMeta,
	/// The element type this delegate produces.
	pub element_type: ElementType,
	/// Converts one token. Fails the whole surrounding conversion on error.
	pub parse: fn(&str) -> Result<ElementValue, ElementError>,
}

impl ElementConverterDef {
	/// Converts a single token into this delegate's element type.
	pub fn convert(&self, token: &str) -> Result<ElementValue, ElementError> {
		(self.parse)(token)
	}
}

impl core::fmt::Debug for ElementConverterDef {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("ElementConverterDef")
			.field("name", &self.meta.name)
			.field("element_type", &self.element_type)
			.finish()
	}
}

/// Indexed collection of all registered element delegates.
pub static ELEMENT_CONVERTERS: LazyLock<RegistryIndex<ElementConverterDef>> = LazyLock::new(|| {
	RegistryBuilder::new("element-converters")
		.extend_inventory::<ElementReg>()
		.sort_default()
		.build()
});

/// Secondary index: element type -> delegate.
static BY_TYPE: LazyLock<HashMap<ElementType, &'static ElementConverterDef>> =
	LazyLock::new(|| {
		build_map(
			"element-converters-by-type",
			ELEMENT_CONVERTERS.items(),
			DuplicatePolicy::for_build(),
			|def| Some(def.element_type),
		)
	});

/// Finds an element delegate by name, id, or alias.
pub fn find(name: &str) -> Option<&'static ElementConverterDef> {
	ELEMENT_CONVERTERS.get(name)
}

/// Finds the element delegate servicing the given element type.
pub fn for_type(element_type: ElementType) -> Option<&'static ElementConverterDef> {
	BY_TYPE.get(&element_type).copied()
}

/// Returns all registered element delegates.
pub fn all() -> impl Iterator<Item = &'static ElementConverterDef> {
	ELEMENT_CONVERTERS.iter()
}

/// Converts one token into the requested element type.
///
/// This is the boundary call multi-value converters make once per non-empty
/// token. Fails if no delegate services the type or the token is
/// unconvertible.
pub fn convert_element(token: &str, element_type: ElementType) -> Result<ElementValue, ElementError> {
	let def = for_type(element_type).ok_or(ElementError::NoConverter { element_type })?;
	def.convert(token)
}

impl_registry_entry!(ElementConverterDef);

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn builtins_are_registered() {
		for name in ["text", "boolean", "integer", "float"] {
			assert!(find(name).is_some(), "missing builtin delegate {name}");
		}
		assert_eq!(ELEMENT_CONVERTERS.len(), 4);
	}

	#[test]
	fn lookup_by_type_matches_lookup_by_name() {
		let by_name = find("integer").unwrap();
		let by_type = for_type(ElementType::Integer).unwrap();
		assert!(std::ptr::eq(by_name, by_type));
	}

	#[test]
	fn convert_element_routes_to_the_right_delegate() {
		assert_eq!(
			convert_element("42", ElementType::Integer).unwrap(),
			ElementValue::Integer(42)
		);
		assert_eq!(
			convert_element("42", ElementType::Text).unwrap(),
			ElementValue::Text("42".into())
		);
	}

	#[test]
	fn convert_element_propagates_parse_failure() {
		let err = convert_element("not-a-number", ElementType::Integer).unwrap_err();
		assert_eq!(
			err,
			ElementError::Unconvertible {
				token: "not-a-number".into(),
				target: ElementType::Integer,
			}
		);
	}
}
