//! Contract tests for the navigable-set family.
//!
//! These pin the public operation surface: the accept matrix, the no-value
//! contract, source-type exposure, platform-dependent priority, and safe
//! concurrent sharing of one definition.

use std::collections::BTreeSet;

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::{
	ElementType, ElementValue, Hierarchy, HierarchyRevision, MultiConverterDef, Platform,
	TypeDescriptor, find,
};

fn converter() -> &'static MultiConverterDef {
	find("string-to-navigable-set").expect("navigable-set converter registered")
}

#[test]
fn test_accept() {
	let converter = converter();

	assert!(!converter.accept(Some(TypeDescriptor::Text), Some(TypeDescriptor::Collection)));

	assert!(!converter.accept(Some(TypeDescriptor::Text), Some(TypeDescriptor::List)));
	assert!(!converter.accept(Some(TypeDescriptor::Text), Some(TypeDescriptor::ArrayList)));
	assert!(!converter.accept(Some(TypeDescriptor::Text), Some(TypeDescriptor::LinkedList)));

	assert!(!converter.accept(Some(TypeDescriptor::Text), Some(TypeDescriptor::Set)));
	assert!(!converter.accept(Some(TypeDescriptor::Text), Some(TypeDescriptor::SortedSet)));
	assert!(converter.accept(Some(TypeDescriptor::Text), Some(TypeDescriptor::NavigableSet)));
	assert!(converter.accept(Some(TypeDescriptor::Text), Some(TypeDescriptor::TreeSet)));
	assert!(converter.accept(Some(TypeDescriptor::Text), Some(TypeDescriptor::SkipListSet)));

	assert!(!converter.accept(Some(TypeDescriptor::Text), Some(TypeDescriptor::Queue)));
	assert!(!converter.accept(Some(TypeDescriptor::Text), Some(TypeDescriptor::BlockingQueue)));
	assert!(!converter.accept(Some(TypeDescriptor::Text), Some(TypeDescriptor::TransferQueue)));
	assert!(!converter.accept(Some(TypeDescriptor::Text), Some(TypeDescriptor::Deque)));
	assert!(!converter.accept(Some(TypeDescriptor::Text), Some(TypeDescriptor::BlockingDeque)));

	// Absent source refuses everything, absent target included.
	assert!(!converter.accept(None, Some(TypeDescriptor::NavigableSet)));
	assert!(!converter.accept(None, Some(TypeDescriptor::Text)));
	assert!(!converter.accept(None, None));
	assert!(!converter.accept(Some(TypeDescriptor::Text), None));

	// Source is exact-matched, never assignability-matched.
	assert!(!converter.accept(Some(TypeDescriptor::Collection), Some(TypeDescriptor::TreeSet)));
}

#[test]
fn test_convert() {
	let converter = converter();

	let expected: BTreeSet<ElementValue> =
		[1, 2, 3].into_iter().map(ElementValue::Integer).collect();

	// The target descriptor does not influence assembly; routing already
	// happened in accept.
	let result = converter
		.convert(
			Some("1,2,3"),
			Some(TypeDescriptor::List),
			Some(ElementType::Integer),
		)
		.unwrap()
		.unwrap();
	assert_eq!(result.as_navigable_set().unwrap().as_sorted_set(), &expected);

	let expected: BTreeSet<ElementValue> = [ElementValue::Text("123".into())].into();
	let result = converter
		.convert(
			Some("123"),
			Some(TypeDescriptor::NavigableSet),
			Some(ElementType::Text),
		)
		.unwrap()
		.unwrap();
	assert_eq!(result.as_navigable_set().unwrap().as_sorted_set(), &expected);

	assert_eq!(
		converter
			.convert(None, Some(TypeDescriptor::Collection), Some(ElementType::Integer))
			.unwrap(),
		None
	);
	assert_eq!(
		converter
			.convert(Some(""), Some(TypeDescriptor::Collection), None)
			.unwrap(),
		None
	);
}

#[test]
fn test_convert_without_element_type_keeps_raw_text() {
	let result = converter()
		.convert(Some("b,a,b"), Some(TypeDescriptor::NavigableSet), None)
		.unwrap()
		.unwrap();

	let order: Vec<_> = result.as_navigable_set().unwrap().iter().cloned().collect();
	assert_eq!(
		order,
		vec![ElementValue::Text("a".into()), ElementValue::Text("b".into())]
	);
}

#[test]
fn test_convert_skips_empty_tokens() {
	let result = converter()
		.convert(
			Some("1,,2,"),
			Some(TypeDescriptor::NavigableSet),
			Some(ElementType::Integer),
		)
		.unwrap()
		.unwrap();

	let expected: BTreeSet<ElementValue> = [1, 2].into_iter().map(ElementValue::Integer).collect();
	assert_eq!(result.as_navigable_set().unwrap().as_sorted_set(), &expected);
}

#[test]
fn test_convert_fails_whole_call_on_bad_token() {
	// Tokens are not trimmed, so " 2" is unconvertible; no partial
	// container comes back.
	let err = converter()
		.convert(
			Some("1, 2,3"),
			Some(TypeDescriptor::NavigableSet),
			Some(ElementType::Integer),
		)
		.unwrap_err();
	assert_eq!(
		err.to_string(),
		"cannot convert token \" 2\" into integer"
	);
}

#[test]
fn test_get_source_type() {
	assert_eq!(converter().source_type(), TypeDescriptor::Text);
}

#[test]
fn test_get_priority() {
	// The offset follows the probed hierarchy revision: 4 in the base
	// hierarchy, 6 once the sequenced ancestors are spliced in.
	let hierarchy = Platform::current().hierarchy();
	let expected_offset = match hierarchy.revision() {
		HierarchyRevision::Base => 4,
		HierarchyRevision::Sequenced => 6,
	};
	assert_eq!(converter().priority(), i32::MAX - expected_offset);
}

#[test]
fn test_priority_is_injectable_per_revision() {
	let converter = converter();
	let base = converter.priority_in(Hierarchy::new(HierarchyRevision::Base));
	let sequenced = converter.priority_in(Hierarchy::new(HierarchyRevision::Sequenced));

	assert_eq!(base, i32::MAX - 4);
	assert_eq!(sequenced, i32::MAX - 6);
	assert_eq!(base - sequenced, 2);
}

#[test]
fn test_shared_definition_across_threads() {
	let converter = converter();

	std::thread::scope(|scope| {
		for chunk in 0..8i64 {
			scope.spawn(move || {
				for i in 0..100 {
					let n = chunk * 100 + i;
					let raw = format!("{n},{},{n}", n + 1);
					let result = converter
						.convert(
							Some(&raw),
							Some(TypeDescriptor::NavigableSet),
							Some(ElementType::Integer),
						)
						.unwrap()
						.unwrap();

					// Each call's output depends only on its own inputs.
					let expected: BTreeSet<ElementValue> =
						[n, n + 1].into_iter().map(ElementValue::Integer).collect();
					assert_eq!(
						result.as_navigable_set().unwrap().as_sorted_set(),
						&expected
					);
					assert!(converter
						.accept(Some(TypeDescriptor::Text), Some(TypeDescriptor::TreeSet)));
				}
			});
		}
	});
}

proptest! {
	#[test]
	fn convert_matches_reference_sorted_set(values in proptest::collection::vec(any::<i64>(), 1..20)) {
		let raw = values
			.iter()
			.map(|v| v.to_string())
			.collect::<Vec<_>>()
			.join(",");

		let result = converter()
			.convert(
				Some(&raw),
				Some(TypeDescriptor::NavigableSet),
				Some(ElementType::Integer),
			)
			.unwrap()
			.unwrap();

		let expected: BTreeSet<ElementValue> =
			values.into_iter().map(ElementValue::Integer).collect();
		prop_assert_eq!(result.as_navigable_set().unwrap().as_sorted_set(), &expected);
	}
}
