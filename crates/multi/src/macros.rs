//! Registration macro for multi-value converter families.

/// Registers a converter family in the
/// [`MULTI_CONVERTERS`](crate::MULTI_CONVERTERS) registry.
///
/// The `alias` is the wire-style extension key callers use for name-keyed
/// lookup (e.g. `"string-to-navigable-set"`).
///
/// # Examples
///
/// ```ignore
/// multi_converter!(navigable_set, {
///     description: "Sorted set with nearest-neighbor navigation",
///     alias: "string-to-navigable-set",
///     shape: NavigableSet,
/// }, |elements| MultiValue::NavigableSet(elements.into_iter().collect()));
/// ```
#[macro_export]
macro_rules! multi_converter {
	($name:ident, {
		description: $desc:expr,
		alias: $alias:expr,
		shape: $shape:ident $(,)?
	}, $assemble:expr) => {
		paste::paste! {
			#[allow(non_upper_case_globals)]
			static [<MULTI_ $name:upper>]: $crate::MultiConverterDef = $crate::MultiConverterDef {
				meta: $crate::RegistryMeta {
					id: concat!(env!("CARGO_PKG_NAME"), "::", stringify!($name)),
					name: stringify!($name),
					aliases: &[$alias],
					description: $desc,
					source: $crate::RegistrySource::Crate(env!("CARGO_PKG_NAME")),
				},
				source: $crate::TypeDescriptor::Text,
				shape: $crate::TypeDescriptor::$shape,
				assemble: $assemble,
			};

			inventory::submit! {
				$crate::MultiReg(&[<MULTI_ $name:upper>])
			}
		}
	};
}
