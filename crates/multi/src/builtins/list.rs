//! Positional-sequence converter family.

use crate::{MultiValue, multi_converter};

multi_converter!(list, {
	description: "Positional sequence, duplicates retained",
	alias: "string-to-list",
	shape: List,
}, |elements| MultiValue::List(elements));
