//! Converted element values with a total order.
//!
//! Sorted container families need `Ord`, so the float variant compares via
//! `total_cmp` and hashes its bit pattern. Equality and hashing agree: two
//! floats are equal exactly when their representations are identical.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::ElementType;

/// A single converted element.
///
/// One conversion produces homogeneous values, so cross-variant comparison
/// (ordered by variant tag) only matters for hand-built containers.
#[derive(Debug, Clone)]
pub enum ElementValue {
	/// Raw or requested text.
	Text(String),
	/// Parsed boolean.
	Boolean(bool),
	/// Parsed signed integer.
	Integer(i64),
	/// Parsed float.
	Float(f64),
}

impl ElementValue {
	/// The element type of this value.
	pub const fn element_type(&self) -> ElementType {
		match self {
			Self::Text(_) => ElementType::Text,
			Self::Boolean(_) => ElementType::Boolean,
			Self::Integer(_) => ElementType::Integer,
			Self::Float(_) => ElementType::Float,
		}
	}

	/// Variant tag for cross-variant ordering.
	const fn rank(&self) -> u8 {
		match self {
			Self::Text(_) => 0,
			Self::Boolean(_) => 1,
			Self::Integer(_) => 2,
			Self::Float(_) => 3,
		}
	}
}

impl PartialEq for ElementValue {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Eq for ElementValue {}

impl PartialOrd for ElementValue {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for ElementValue {
	fn cmp(&self, other: &Self) -> Ordering {
		match (self, other) {
			(Self::Text(a), Self::Text(b)) => a.cmp(b),
			(Self::Boolean(a), Self::Boolean(b)) => a.cmp(b),
			(Self::Integer(a), Self::Integer(b)) => a.cmp(b),
			(Self::Float(a), Self::Float(b)) => a.total_cmp(b),
			_ => self.rank().cmp(&other.rank()),
		}
	}
}

impl Hash for ElementValue {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.rank().hash(state);
		match self {
			Self::Text(v) => v.hash(state),
			Self::Boolean(v) => v.hash(state),
			Self::Integer(v) => v.hash(state),
			// Matches Eq: equal iff identical bit pattern.
			Self::Float(v) => v.to_bits().hash(state),
		}
	}
}

impl core::fmt::Display for ElementValue {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::Text(v) => f.write_str(v),
			Self::Boolean(v) => write!(f, "{v}"),
			Self::Integer(v) => write!(f, "{v}"),
			Self::Float(v) => write!(f, "{v}"),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::collections::BTreeSet;

	use super::*;

	#[test]
	fn integers_sort_numerically() {
		let set: BTreeSet<ElementValue> = [3, 1, 2]
			.into_iter()
			.map(ElementValue::Integer)
			.collect();
		let order: Vec<_> = set.into_iter().collect();
		assert_eq!(
			order,
			vec![
				ElementValue::Integer(1),
				ElementValue::Integer(2),
				ElementValue::Integer(3)
			]
		);
	}

	#[test]
	fn text_sorts_lexically() {
		let set: BTreeSet<ElementValue> = ["b", "a", "c"]
			.into_iter()
			.map(|s| ElementValue::Text(s.into()))
			.collect();
		let order: Vec<_> = set.into_iter().collect();
		assert_eq!(
			order,
			vec![
				ElementValue::Text("a".into()),
				ElementValue::Text("b".into()),
				ElementValue::Text("c".into())
			]
		);
	}

	#[test]
	fn floats_have_a_total_order() {
		// NaN is admissible under total_cmp; it sorts above infinity.
		let mut values = vec![
			ElementValue::Float(f64::NAN),
			ElementValue::Float(1.0),
			ElementValue::Float(f64::INFINITY),
			ElementValue::Float(-0.0),
			ElementValue::Float(0.0),
		];
		values.sort();
		assert_eq!(values[0], ElementValue::Float(-0.0));
		assert_eq!(values[1], ElementValue::Float(0.0));
		assert_eq!(values[2], ElementValue::Float(1.0));
		assert_eq!(values[3], ElementValue::Float(f64::INFINITY));
		assert!(matches!(values[4], ElementValue::Float(v) if v.is_nan()));
	}

	#[test]
	fn negative_zero_is_distinct_from_positive_zero() {
		// total_cmp equality is bit-pattern equality.
		assert_ne!(ElementValue::Float(-0.0), ElementValue::Float(0.0));
	}

	#[test]
	fn element_type_accessor() {
		assert_eq!(
			ElementValue::Boolean(true).element_type(),
			ElementType::Boolean
		);
		assert_eq!(ElementValue::Integer(0).element_type(), ElementType::Integer);
	}
}
