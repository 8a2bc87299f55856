//! Container-shape taxonomy and platform capability probe.
//!
//! Converters never inspect real collection values to decide routing; they
//! compare [`TypeDescriptor`]s against the modeled container hierarchy. The
//! hierarchy comes in revisions ([`HierarchyRevision`]) because newer platform
//! generations splice additional shared ancestors (the "sequenced" interfaces)
//! between the base collection shape and the ordered families. The active
//! revision is detected once by the [`Platform`] probe; everything derived from
//! it ([`Hierarchy::is_assignable`], [`Hierarchy::capability_offset`]) stays a
//! pure function so tests can inject either revision.

mod hierarchy;
mod platform;

pub use hierarchy::{Hierarchy, HierarchyRevision};
pub use platform::Platform;

/// Runtime descriptor for a requested or declared type.
///
/// Descriptors name shapes, not instances: a request for [`NavigableSet`]
/// means "any container satisfying navigable-set semantics", while a request
/// for [`TreeSet`] names the concrete ordered-tree implementation. [`Text`] is
/// the single source shape converters accept.
///
/// [`NavigableSet`]: TypeDescriptor::NavigableSet
/// [`TreeSet`]: TypeDescriptor::TreeSet
/// [`Text`]: TypeDescriptor::Text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
	/// Delimited text, the source shape of every converter in this framework.
	Text,
	/// Anything that can be iterated. Root of the container hierarchy.
	Iterable,
	/// General finite container.
	Collection,
	/// Collection with a defined encounter order and both-ends access.
	/// Only reachable in the extended hierarchy revision.
	SequencedCollection,
	/// Positional sequence.
	List,
	/// Contiguous-storage list.
	ArrayList,
	/// Node-linked list (also a deque).
	LinkedList,
	/// Duplicate-eliminating container.
	Set,
	/// Set with a defined encounter order.
	/// Only reachable in the extended hierarchy revision.
	SequencedSet,
	/// Hash-based set.
	HashSet,
	/// Set iterating in ascending element order.
	SortedSet,
	/// Sorted set with nearest-neighbor navigation.
	NavigableSet,
	/// Balanced-tree navigable set.
	TreeSet,
	/// Concurrent skip-list navigable set.
	SkipListSet,
	/// FIFO container.
	Queue,
	/// Queue with blocking insertion/removal.
	BlockingQueue,
	/// Blocking queue with handoff semantics.
	TransferQueue,
	/// Double-ended queue.
	Deque,
	/// Deque with blocking insertion/removal.
	BlockingDeque,
}

impl TypeDescriptor {
	/// Every descriptor, in declaration order. Handy for exhaustive tests.
	pub const ALL: [TypeDescriptor; 19] = [
		Self::Text,
		Self::Iterable,
		Self::Collection,
		Self::SequencedCollection,
		Self::List,
		Self::ArrayList,
		Self::LinkedList,
		Self::Set,
		Self::SequencedSet,
		Self::HashSet,
		Self::SortedSet,
		Self::NavigableSet,
		Self::TreeSet,
		Self::SkipListSet,
		Self::Queue,
		Self::BlockingQueue,
		Self::TransferQueue,
		Self::Deque,
		Self::BlockingDeque,
	];

	/// Stable lowercase name for logs and error messages.
	pub const fn name(self) -> &'static str {
		match self {
			Self::Text => "text",
			Self::Iterable => "iterable",
			Self::Collection => "collection",
			Self::SequencedCollection => "sequenced-collection",
			Self::List => "list",
			Self::ArrayList => "array-list",
			Self::LinkedList => "linked-list",
			Self::Set => "set",
			Self::SequencedSet => "sequenced-set",
			Self::HashSet => "hash-set",
			Self::SortedSet => "sorted-set",
			Self::NavigableSet => "navigable-set",
			Self::TreeSet => "tree-set",
			Self::SkipListSet => "skip-list-set",
			Self::Queue => "queue",
			Self::BlockingQueue => "blocking-queue",
			Self::TransferQueue => "transfer-queue",
			Self::Deque => "deque",
			Self::BlockingDeque => "blocking-deque",
		}
	}
}

impl core::fmt::Display for TypeDescriptor {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(self.name())
	}
}
