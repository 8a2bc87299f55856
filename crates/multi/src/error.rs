use thiserror::Error;

use manifold_element::ElementError;
use manifold_types::TypeDescriptor;

/// Errors from multi-value conversion.
///
/// An unsupported `(source, target)` pair is not an error at the converter
/// level - `accept` simply returns false - but the resolver surfaces it as
/// [`NoConverter`](Self::NoConverter) when nothing claims a request.
/// Conversion is deterministic; no failure here is transient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
	/// A token failed element conversion, or no element delegate exists for
	/// the requested element type. The whole conversion fails; bad tokens
	/// are never skipped.
	#[error(transparent)]
	Element(#[from] ElementError),
	/// No registered converter accepts the requested target shape.
	#[error("no converter accepts target shape {target}")]
	NoConverter {
		/// The requested target shape.
		target: TypeDescriptor,
	},
}
