//! Materialized conversion results.

use std::collections::{BTreeSet, VecDeque};
use std::ops::Bound::{Excluded, Unbounded};

use indexmap::IndexSet;

use manifold_element::ElementValue;

/// A materialized multi-value container.
///
/// Which variant a conversion produces is decided by the converter family,
/// not by the caller's target descriptor: routing to the right family is the
/// resolver's job, assembly is fixed per family.
///
/// Equality is the natural equality of each container: order-sensitive for
/// the sequence families, member-wise for the set families.
#[derive(Debug, Clone, PartialEq)]
pub enum MultiValue {
	/// Positional sequence; duplicates retained.
	List(Vec<ElementValue>),
	/// Insertion-ordered set; first occurrence wins.
	Set(IndexSet<ElementValue>),
	/// Ascending-ordered set.
	SortedSet(BTreeSet<ElementValue>),
	/// Ascending-ordered set with nearest-neighbor navigation.
	NavigableSet(NavigableValues),
	/// Double-ended queue; duplicates retained.
	Deque(VecDeque<ElementValue>),
}

impl MultiValue {
	/// Number of retained elements.
	pub fn len(&self) -> usize {
		match self {
			Self::List(v) => v.len(),
			Self::Set(v) => v.len(),
			Self::SortedSet(v) => v.len(),
			Self::NavigableSet(v) => v.len(),
			Self::Deque(v) => v.len(),
		}
	}

	/// Returns true if no elements were retained.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Borrows the list variant, if this is one.
	pub fn as_list(&self) -> Option<&Vec<ElementValue>> {
		match self {
			Self::List(v) => Some(v),
			_ => None,
		}
	}

	/// Borrows the insertion-ordered set variant, if this is one.
	pub fn as_set(&self) -> Option<&IndexSet<ElementValue>> {
		match self {
			Self::Set(v) => Some(v),
			_ => None,
		}
	}

	/// Borrows the sorted set variant, if this is one.
	pub fn as_sorted_set(&self) -> Option<&BTreeSet<ElementValue>> {
		match self {
			Self::SortedSet(v) => Some(v),
			_ => None,
		}
	}

	/// Borrows the navigable set variant, if this is one.
	pub fn as_navigable_set(&self) -> Option<&NavigableValues> {
		match self {
			Self::NavigableSet(v) => Some(v),
			_ => None,
		}
	}

	/// Borrows the deque variant, if this is one.
	pub fn as_deque(&self) -> Option<&VecDeque<ElementValue>> {
		match self {
			Self::Deque(v) => Some(v),
			_ => None,
		}
	}
}

/// An ascending-ordered, duplicate-free store with nearest-neighbor
/// navigation.
///
/// Iteration always runs in ascending element order; equality is member-wise
/// regardless of how many duplicates were eliminated on the way in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigableValues {
	values: BTreeSet<ElementValue>,
}

impl NavigableValues {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of distinct elements.
	pub fn len(&self) -> usize {
		self.values.len()
	}

	/// Returns true if the store holds no elements.
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Returns true if the store contains the value.
	pub fn contains(&self, value: &ElementValue) -> bool {
		self.values.contains(value)
	}

	/// Iterates in ascending element order.
	pub fn iter(&self) -> impl Iterator<Item = &ElementValue> {
		self.values.iter()
	}

	/// The least element.
	pub fn first(&self) -> Option<&ElementValue> {
		self.values.first()
	}

	/// The greatest element.
	pub fn last(&self) -> Option<&ElementValue> {
		self.values.last()
	}

	/// The greatest element strictly less than `value`.
	pub fn lower(&self, value: &ElementValue) -> Option<&ElementValue> {
		self.values.range(..value).next_back()
	}

	/// The greatest element less than or equal to `value`.
	pub fn floor(&self, value: &ElementValue) -> Option<&ElementValue> {
		self.values.range(..=value).next_back()
	}

	/// The least element greater than or equal to `value`.
	pub fn ceiling(&self, value: &ElementValue) -> Option<&ElementValue> {
		self.values.range(value..).next()
	}

	/// The least element strictly greater than `value`.
	pub fn higher(&self, value: &ElementValue) -> Option<&ElementValue> {
		self.values.range((Excluded(value), Unbounded)).next()
	}

	/// Borrows the underlying sorted set.
	pub fn as_sorted_set(&self) -> &BTreeSet<ElementValue> {
		&self.values
	}
}

impl FromIterator<ElementValue> for NavigableValues {
	fn from_iter<I: IntoIterator<Item = ElementValue>>(iter: I) -> Self {
		Self {
			values: iter.into_iter().collect(),
		}
	}
}

impl IntoIterator for NavigableValues {
	type Item = ElementValue;
	type IntoIter = std::collections::btree_set::IntoIter<ElementValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.values.into_iter()
	}
}

impl<'a> IntoIterator for &'a NavigableValues {
	type Item = &'a ElementValue;
	type IntoIter = std::collections::btree_set::Iter<'a, ElementValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.values.iter()
	}
}
