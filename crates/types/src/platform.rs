//! One-time platform capability probe.

use std::sync::OnceLock;

use crate::hierarchy::{Hierarchy, HierarchyRevision};

static PLATFORM: OnceLock<Platform> = OnceLock::new();

/// Detected platform capabilities, probed once per process.
///
/// Converter priorities must be a pure function of the platform, not of input
/// data, so the probe runs at most once and the result is shared. Tests that
/// need a specific revision bypass the probe with [`Platform::with_hierarchy`].
#[derive(Debug, Clone, Copy)]
pub struct Platform {
	hierarchy: Hierarchy,
}

impl Platform {
	/// Returns the probed platform for this process.
	///
	/// The first caller performs the probe; concurrent first calls observe
	/// the same result.
	pub fn current() -> &'static Platform {
		PLATFORM.get_or_init(|| {
			let revision = HierarchyRevision::detect();
			tracing::debug!(?revision, "platform hierarchy probe");
			Platform {
				hierarchy: Hierarchy::new(revision),
			}
		})
	}

	/// Builds a platform around an explicit hierarchy, skipping the probe.
	pub const fn with_hierarchy(hierarchy: Hierarchy) -> Self {
		Self { hierarchy }
	}

	/// The container hierarchy this platform exposes.
	pub const fn hierarchy(&self) -> Hierarchy {
		self.hierarchy
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn probe_is_stable_across_calls() {
		let first = Platform::current().hierarchy();
		let second = Platform::current().hierarchy();
		assert_eq!(first, second);
	}

	#[test]
	fn probe_matches_build_configuration() {
		let expected = if cfg!(feature = "sequenced-collections") {
			HierarchyRevision::Sequenced
		} else {
			HierarchyRevision::Base
		};
		assert_eq!(Platform::current().hierarchy().revision(), expected);
	}
}
