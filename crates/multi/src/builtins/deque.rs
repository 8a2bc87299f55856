//! Double-ended-queue converter family.

use crate::{MultiValue, multi_converter};

multi_converter!(deque, {
	description: "Double-ended queue, duplicates retained",
	alias: "string-to-deque",
	shape: Deque,
}, |elements| MultiValue::Deque(elements.into_iter().collect()));
