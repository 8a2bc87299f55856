//! Centralized registry index infrastructure.
//!
//! Provides [`RegistryBuilder`] and [`RegistryIndex`] to eliminate boilerplate
//! across registries. Each registry uses the same pattern:
//!
//! ```rust,ignore
//! static ELEMENT_CONVERTERS: LazyLock<RegistryIndex<ElementConverterDef>> = LazyLock::new(|| {
//!     RegistryBuilder::new("element-converters")
//!         .extend_inventory::<ElementReg>()
//!         .sort_by(|a, b| a.name().cmp(b.name()))
//!         .build()
//! });
//! ```

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::RegistryEntry;

/// Trait for inventory wrapper types to expose their definition.
///
/// Implement this for your registry's wrapper type (e.g., `ElementReg`)
/// to allow [`RegistryBuilder::extend_inventory`] to extract definitions.
///
/// # Example
///
/// ```rust,ignore
/// pub struct ElementReg(pub &'static ElementConverterDef);
/// inventory::collect!(ElementReg);
///
/// impl RegistryReg<ElementConverterDef> for ElementReg {
///     fn def(&self) -> &'static ElementConverterDef { self.0 }
/// }
/// ```
pub trait RegistryReg<T: RegistryEntry + 'static>: 'static {
	/// Returns the static definition reference from this wrapper.
	fn def(&self) -> &'static T;
}

/// Policy for handling duplicate keys during index construction.
#[derive(Clone, Copy, Debug, Default)]
pub enum DuplicatePolicy {
	/// Panic with detailed error message.
	///
	/// Best for debug builds and CI - fails fast and loud.
	#[default]
	Panic,
	/// Keep the first definition seen for a key.
	FirstWins,
	/// Overwrite with the last definition seen.
	LastWins,
}

impl DuplicatePolicy {
	/// Returns the appropriate policy based on build configuration.
	///
	/// - Debug builds: `Panic` for immediate feedback
	/// - Release builds: `FirstWins` for graceful degradation
	#[inline]
	pub fn for_build() -> Self {
		if cfg!(debug_assertions) {
			DuplicatePolicy::Panic
		} else {
			DuplicatePolicy::FirstWins
		}
	}
}

/// Indexed collection of registry definitions with O(1) lookup.
///
/// Built via [`RegistryBuilder`], provides:
/// - O(1) lookup by name, id, or alias via [`get`](Self::get)
/// - Sorted iteration via [`items`](Self::items)
/// - Length inspection via [`len`](Self::len) and [`is_empty`](Self::is_empty)
///
/// The index is immutable after construction; see the crate docs for the
/// concurrency contract.
pub struct RegistryIndex<T: RegistryEntry + 'static> {
	items: Vec<&'static T>,
	by_key: HashMap<&'static str, &'static T>,
}

impl<T: RegistryEntry + 'static> RegistryIndex<T> {
	/// Looks up a definition by name, id, or alias.
	#[inline]
	pub fn get(&self, key: &str) -> Option<&'static T> {
		self.by_key.get(key).copied()
	}

	/// Returns all definitions in sorted order.
	#[inline]
	pub fn items(&self) -> &[&'static T] {
		&self.items
	}

	/// Returns the number of unique definitions (not keys).
	#[inline]
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns true if the index contains no definitions.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Returns an iterator over all definitions.
	#[inline]
	pub fn iter(&self) -> impl Iterator<Item = &'static T> + '_ {
		self.items.iter().copied()
	}
}

/// Builder for constructing a [`RegistryIndex`].
///
/// Collects definitions from inventory, applies sorting, validates for
/// duplicates, and produces the final index.
pub struct RegistryBuilder<T: RegistryEntry + 'static> {
	label: &'static str,
	defs: Vec<&'static T>,
	policy: DuplicatePolicy,
}

impl<T: RegistryEntry + 'static> RegistryBuilder<T> {
	/// Creates a new builder with the given label for error messages.
	pub fn new(label: &'static str) -> Self {
		Self {
			label,
			defs: Vec::new(),
			policy: DuplicatePolicy::for_build(),
		}
	}

	/// Sets the duplicate key handling policy.
	pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
		self.policy = policy;
		self
	}

	/// Adds a single definition to the builder.
	pub fn push(mut self, def: &'static T) -> Self {
		self.defs.push(def);
		self
	}

	/// Adds multiple definitions to the builder.
	pub fn extend<I: IntoIterator<Item = &'static T>>(mut self, defs: I) -> Self {
		self.defs.extend(defs);
		self
	}

	/// Collects all definitions from inventory via the wrapper type.
	///
	/// The wrapper type `R` must implement [`RegistryReg<T>`] to expose
	/// the underlying definition. The wrapper must also be collected via
	/// `inventory::collect!(R)`.
	pub fn extend_inventory<R>(mut self) -> Self
	where
		R: RegistryReg<T>,
		inventory::iter<R>: IntoIterator<Item = &'static R>,
	{
		for reg in inventory::iter::<R> {
			self.defs.push(reg.def());
		}
		self
	}

	/// Sorts definitions using the provided comparison function.
	pub fn sort_by<F: FnMut(&&'static T, &&'static T) -> Ordering>(mut self, cmp: F) -> Self {
		self.defs.sort_by(cmp);
		self
	}

	/// Sorts definitions by name, then id.
	///
	/// This is the default sort order for converter registries, keeping
	/// iteration deterministic regardless of link order.
	pub fn sort_default(mut self) -> Self {
		self.defs
			.sort_by(|a, b| a.name().cmp(b.name()).then_with(|| a.id().cmp(b.id())));
		self
	}

	/// Builds the index, validating for duplicates according to policy.
	///
	/// Every definition is indexed under its name, its id, and each of its
	/// aliases.
	///
	/// # Panics
	///
	/// Panics if duplicate keys are found and policy is [`DuplicatePolicy::Panic`].
	pub fn build(mut self) -> RegistryIndex<T> {
		let mut seen = std::collections::HashSet::with_capacity(self.defs.len());
		self.defs.retain(|d| seen.insert(*d as *const T as usize));

		let mut by_key = HashMap::with_capacity(self.defs.len() * 2);

		for &def in &self.defs {
			let meta = def.meta();
			self.insert_key(&mut by_key, meta.name, def);
			self.insert_key(&mut by_key, meta.id, def);
			for &alias in meta.aliases {
				self.insert_key(&mut by_key, alias, def);
			}
		}

		RegistryIndex {
			items: self.defs,
			by_key,
		}
	}

	fn insert_key(
		&self,
		map: &mut HashMap<&'static str, &'static T>,
		key: &'static str,
		def: &'static T,
	) {
		if let Some(&existing) = map.get(key) {
			if std::ptr::eq(existing, def) {
				return;
			}
			match self.policy {
				DuplicatePolicy::Panic => panic!(
					"duplicate registry key in {}: key={:?} existing_id={} new_id={}",
					self.label,
					key,
					existing.id(),
					def.id()
				),
				DuplicatePolicy::FirstWins => {}
				DuplicatePolicy::LastWins => {
					map.insert(key, def);
				}
			}
		} else {
			map.insert(key, def);
		}
	}
}

/// Builds a secondary index map with custom keys.
///
/// Use for registries needing non-string indexes (element type tags, numeric
/// IDs). Definitions for which `key_of` returns `None` are skipped.
pub fn build_map<T, K, F>(
	label: &'static str,
	items: &[&'static T],
	policy: DuplicatePolicy,
	mut key_of: F,
) -> HashMap<K, &'static T>
where
	T: 'static,
	K: Eq + std::hash::Hash + std::fmt::Debug,
	F: FnMut(&'static T) -> Option<K>,
{
	let mut map: HashMap<K, &'static T> = HashMap::with_capacity(items.len());

	for &item in items {
		let Some(key) = key_of(item) else { continue };

		if let Some(&existing) = map.get(&key) {
			if std::ptr::eq(existing, item) {
				continue;
			}
			match policy {
				DuplicatePolicy::Panic => {
					panic!("duplicate secondary key in {}: key={:?}", label, key)
				}
				DuplicatePolicy::FirstWins => {}
				DuplicatePolicy::LastWins => {
					map.insert(key, item);
				}
			}
		} else {
			map.insert(key, item);
		}
	}

	map
}
