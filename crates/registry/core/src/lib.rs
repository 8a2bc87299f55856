//! Shared registry infrastructure.
//!
//! This crate provides the foundational types every manifold registry is built
//! from:
//! - [`RegistrySource`]: Where a registry item was defined
//! - [`RegistryMeta`]: Common metadata struct for registry items
//! - [`RegistryEntry`]: Trait for accessing registry metadata
//! - [`RegistryIndex`] / [`RegistryBuilder`]: Inventory-backed lookup indexes
//!
//! Registries are process-wide `LazyLock` statics populated once from
//! `inventory` submissions and never mutated afterwards, so definitions can be
//! shared freely across threads.

mod index;

pub use index::{DuplicatePolicy, RegistryBuilder, RegistryIndex, RegistryReg, build_map};

/// Represents where a registry item was defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegistrySource {
	/// Built directly into the framework.
	Builtin,
	/// Defined in a library crate.
	Crate(&'static str),
}

impl core::fmt::Display for RegistrySource {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::Builtin => write!(f, "builtin"),
			Self::Crate(name) => write!(f, "crate:{name}"),
		}
	}
}

/// Common metadata for all registry item types.
///
/// This struct consolidates the standard fields shared across registry
/// definitions (element converters, multi-value converters), reducing
/// boilerplate and enabling generic introspection.
#[derive(Debug, Clone, Copy)]
pub struct RegistryMeta {
	/// Unique identifier (e.g., "manifold-multi::navigable_set").
	pub id: &'static str,
	/// Primary lookup name.
	pub name: &'static str,
	/// Alternative names for lookup (e.g., wire-style extension keys).
	pub aliases: &'static [&'static str],
	/// Description for help text.
	pub description: &'static str,
	/// Where this item was defined.
	pub source: RegistrySource,
}

impl RegistryMeta {
	/// Creates a new RegistryMeta with all fields specified.
	pub const fn new(
		id: &'static str,
		name: &'static str,
		aliases: &'static [&'static str],
		description: &'static str,
		source: RegistrySource,
	) -> Self {
		Self {
			id,
			name,
			aliases,
			description,
			source,
		}
	}

	/// Creates a minimal RegistryMeta with defaults for optional fields.
	pub const fn minimal(id: &'static str, name: &'static str, description: &'static str) -> Self {
		Self {
			id,
			name,
			aliases: &[],
			description,
			source: RegistrySource::Builtin,
		}
	}
}

/// Trait for accessing registry metadata from definition types.
///
/// Implement this trait to enable generic registry operations like duplicate
/// detection and introspection.
pub trait RegistryEntry {
	/// Returns the metadata struct for this registry item.
	fn meta(&self) -> &RegistryMeta;

	/// Returns the unique identifier.
	fn id(&self) -> &'static str {
		self.meta().id
	}

	/// Returns the primary lookup name.
	fn name(&self) -> &'static str {
		self.meta().name
	}

	/// Returns alternative names for lookup.
	fn aliases(&self) -> &'static [&'static str] {
		self.meta().aliases
	}

	/// Returns the description.
	fn description(&self) -> &'static str {
		self.meta().description
	}

	/// Returns where this item was defined.
	fn source(&self) -> RegistrySource {
		self.meta().source
	}
}

/// Trait for basic metadata access.
///
/// This trait provides the minimal metadata interface. Types implementing
/// [`RegistryEntry`] (with a `meta: RegistryMeta` field) get this automatically
/// via [`impl_registry_entry!`].
pub trait RegistryMetadata {
	/// Returns the unique identifier for this registry item.
	fn id(&self) -> &'static str;
	/// Returns the primary lookup name for this registry item.
	fn name(&self) -> &'static str;
	/// Returns where this registry item was defined.
	fn source(&self) -> RegistrySource;
}

/// Implements [`RegistryEntry`] and [`RegistryMetadata`] for a type with a `meta: RegistryMeta` field.
#[macro_export]
macro_rules! impl_registry_entry {
	($type:ty) => {
		impl $crate::RegistryEntry for $type {
			fn meta(&self) -> &$crate::RegistryMeta {
				&self.meta
			}
		}

		impl $crate::RegistryMetadata for $type {
			fn id(&self) -> &'static str {
				self.meta.id
			}
			fn name(&self) -> &'static str {
				self.meta.name
			}
			fn source(&self) -> $crate::RegistrySource {
				self.meta.source
			}
		}
	};
}
