//! Ascending-ordered set converter family.

use crate::{MultiValue, multi_converter};

multi_converter!(sorted_set, {
	description: "Ascending iteration in natural element order, duplicate elimination",
	alias: "string-to-sorted-set",
	shape: SortedSet,
}, |elements| MultiValue::SortedSet(elements.into_iter().collect()));
