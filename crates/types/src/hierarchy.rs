//! Revisioned container-shape hierarchy.
//!
//! Assignability and priority offsets both derive from the same edge table,
//! so a revision that splices new ancestors in automatically deepens every
//! family below the splice point by the same amount. That is what keeps the
//! relative ordering among sibling converter families stable across platform
//! generations.

use crate::TypeDescriptor;

/// Generation of the modeled platform hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HierarchyRevision {
	/// The classic hierarchy: ordered families hang directly off
	/// [`Collection`](TypeDescriptor::Collection).
	Base,
	/// The extended hierarchy with the shared sequenced ancestors
	/// ([`SequencedCollection`](TypeDescriptor::SequencedCollection),
	/// [`SequencedSet`](TypeDescriptor::SequencedSet)) spliced in.
	Sequenced,
}

impl HierarchyRevision {
	/// Probes which hierarchy revision this build models.
	///
	/// Compile-time capability: the `sequenced-collections` feature (default
	/// on) selects the extended revision. Callers that need a specific
	/// revision regardless of the build construct a [`Hierarchy`] directly.
	pub fn detect() -> Self {
		if cfg!(feature = "sequenced-collections") {
			Self::Sequenced
		} else {
			Self::Base
		}
	}
}

/// Assignability and depth queries over one hierarchy revision.
///
/// Cheap to copy; holds no state beyond the revision tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hierarchy {
	revision: HierarchyRevision,
}

impl Hierarchy {
	/// Creates a hierarchy for the given revision.
	pub const fn new(revision: HierarchyRevision) -> Self {
		Self { revision }
	}

	/// Returns the revision this hierarchy models.
	pub const fn revision(self) -> HierarchyRevision {
		self.revision
	}

	/// Direct supertypes of a descriptor in this revision.
	///
	/// Multiple parents are real: a linked list is both a list and a deque,
	/// and a blocking deque is both a deque and a blocking queue.
	pub fn supertypes(self, ty: TypeDescriptor) -> &'static [TypeDescriptor] {
		use TypeDescriptor::*;
		let sequenced = matches!(self.revision, HierarchyRevision::Sequenced);
		match ty {
			Text | Iterable => &[],
			Collection => &[Iterable],
			SequencedCollection => &[Collection],
			List if sequenced => &[SequencedCollection],
			List => &[Collection],
			ArrayList => &[List],
			LinkedList => &[List, Deque],
			Set => &[Collection],
			SequencedSet => &[SequencedCollection, Set],
			HashSet => &[Set],
			SortedSet if sequenced => &[SequencedSet],
			SortedSet => &[Set],
			NavigableSet => &[SortedSet],
			TreeSet => &[NavigableSet],
			SkipListSet => &[NavigableSet],
			Queue => &[Collection],
			BlockingQueue => &[Queue],
			TransferQueue => &[BlockingQueue],
			Deque if sequenced => &[Queue, SequencedCollection],
			Deque => &[Queue],
			BlockingDeque => &[Deque, BlockingQueue],
		}
	}

	/// Returns true if a value of shape `ty` satisfies a request for
	/// `ancestor`.
	///
	/// Reflexive: every shape is assignable to itself. The source shape
	/// [`Text`](TypeDescriptor::Text) has no ancestors and satisfies only
	/// itself.
	pub fn is_assignable(self, ancestor: TypeDescriptor, ty: TypeDescriptor) -> bool {
		ty == ancestor || self.ancestors(ty).contains(&ancestor)
	}

	/// All distinct strict ancestors of a descriptor.
	pub fn ancestors(self, ty: TypeDescriptor) -> Vec<TypeDescriptor> {
		let mut out: Vec<TypeDescriptor> = Vec::new();
		let mut work: Vec<TypeDescriptor> = self.supertypes(ty).to_vec();
		while let Some(parent) = work.pop() {
			if !out.contains(&parent) {
				out.push(parent);
				work.extend_from_slice(self.supertypes(parent));
			}
		}
		out
	}

	/// Priority offset for a converter family rooted at `shape`.
	///
	/// The offset is the number of distinct strict ancestors of the family's
	/// root shape. Deeper (more specific) families get larger offsets and
	/// therefore smaller priority values, which is what lets them win the
	/// resolver's tie-break.
	pub fn capability_offset(self, shape: TypeDescriptor) -> u32 {
		self.ancestors(shape).len() as u32
	}
}
