//! Most general converter family.
//!
//! Claims the whole collection subtree, so it backstops every container
//! request no converter specializes in. Its shallow hierarchy depth gives it
//! the largest priority value, so any more specific family that also accepts
//! a request wins the resolver's tie-break.

use crate::{MultiValue, multi_converter};

multi_converter!(collection, {
	description: "Most general family, materializes a list",
	alias: "string-to-collection",
	shape: Collection,
}, |elements| MultiValue::List(elements));
