use thiserror::Error;

use crate::ElementType;

/// Errors from the element delegate boundary.
///
/// A failed token fails the whole surrounding conversion; callers never get a
/// partial container.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ElementError {
	/// The token cannot be parsed into the requested element type.
	#[error("cannot convert token {token:?} into {target}")]
	Unconvertible {
		/// The offending token, exactly as split from the raw value.
		token: String,
		/// The requested element type.
		target: ElementType,
	},
	/// No delegate is registered for the requested element type.
	#[error("no element converter registered for {element_type}")]
	NoConverter {
		/// The requested element type.
		element_type: ElementType,
	},
}

impl ElementError {
	/// Convenience constructor for parse failures.
	pub fn unconvertible(token: &str, target: ElementType) -> Self {
		Self::Unconvertible {
			token: token.to_owned(),
			target,
		}
	}
}
