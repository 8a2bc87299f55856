//! Insertion-ordered set converter family.

use crate::{MultiValue, multi_converter};

multi_converter!(set, {
	description: "Insertion-ordered duplicate elimination, first occurrence wins",
	alias: "string-to-set",
	shape: Set,
}, |elements| MultiValue::Set(elements.into_iter().collect()));
