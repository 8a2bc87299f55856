//! Converter resolution.
//!
//! More than one registered family can accept the same request: a tree-set
//! target is claimed by the navigable-set, sorted-set, set, and collection
//! families alike. Resolution filters by [`accept`] and then picks the
//! lowest priority value (the most specific family), tie-breaking on id so
//! the winner never depends on registration order.
//!
//! [`accept`]: crate::MultiConverterDef::accept

use manifold_types::{Hierarchy, Platform, TypeDescriptor};

use crate::{ConvertError, ElementType, MULTI_CONVERTERS, MultiConverterDef, MultiValue, RegistryEntry};

/// Finds the highest-priority converter accepting `(source, target)` against
/// the probed platform hierarchy.
pub fn find_converter(
	source: TypeDescriptor,
	target: TypeDescriptor,
) -> Option<&'static MultiConverterDef> {
	find_converter_in(Platform::current().hierarchy(), source, target)
}

/// [`find_converter`] against an explicit hierarchy.
pub fn find_converter_in(
	hierarchy: Hierarchy,
	source: TypeDescriptor,
	target: TypeDescriptor,
) -> Option<&'static MultiConverterDef> {
	let winner = MULTI_CONVERTERS
		.iter()
		.filter(|def| def.accept_in(hierarchy, Some(source), Some(target)))
		.min_by(|a, b| {
			a.priority_in(hierarchy)
				.cmp(&b.priority_in(hierarchy))
				.then_with(|| a.id().cmp(b.id()))
		});
	if let Some(def) = winner {
		tracing::debug!(converter = def.id(), %source, %target, "resolved multi-value converter");
	}
	winner
}

/// Converts a delimited raw value into the container shape requested by
/// `target`.
///
/// The convenience entry point over [`find_converter`]: resolves the
/// converter for `(text, target)` and invokes it. Surfaces
/// [`ConvertError::NoConverter`] when nothing claims the target shape;
/// absent/empty raw values still yield `Ok(None)`.
pub fn convert_multi(
	raw: Option<&str>,
	target: TypeDescriptor,
	element: Option<ElementType>,
) -> Result<Option<MultiValue>, ConvertError> {
	let def = find_converter(TypeDescriptor::Text, target)
		.ok_or(ConvertError::NoConverter { target })?;
	def.convert(raw, Some(target), element)
}
