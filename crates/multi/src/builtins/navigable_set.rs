//! Navigable-set converter family.
//!
//! The representative deep family: it claims only the navigable subtree
//! (the navigable interface shape and the concrete tree/skip-list
//! implementations), rejecting the plain sorted-set and set shapes above it
//! even though its container would satisfy them.

use crate::{MultiValue, multi_converter};

multi_converter!(navigable_set, {
	description: "Sorted set with nearest-neighbor navigation",
	alias: "string-to-navigable-set",
	shape: NavigableSet,
}, |elements| MultiValue::NavigableSet(elements.into_iter().collect()));
