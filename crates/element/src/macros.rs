//! Registration macro for element delegates.

/// Registers an element delegate in the
/// [`ELEMENT_CONVERTERS`](crate::ELEMENT_CONVERTERS) registry.
///
/// # Examples
///
/// ```ignore
/// element_converter!(integer, {
///     description: "Signed 64-bit integer parsing",
///     element_type: Integer,
/// }, |token| {
///     token
///         .parse::<i64>()
///         .map(ElementValue::Integer)
///         .map_err(|_| ElementError::unconvertible(token, ElementType::Integer))
/// });
/// ```
#[macro_export]
macro_rules! element_converter {
	($name:ident, {
		description: $desc:expr,
		element_type: $et:ident $(,)?
	}, $parse:expr) => {
		paste::paste! {
			#[allow(non_upper_case_globals)]
			static [<ELEMENT_ $name:upper>]: $crate::ElementConverterDef = $crate::ElementConverterDef {
				meta: $crate::RegistryMeta {
					id: concat!(env!("CARGO_PKG_NAME"), "::", stringify!($name)),
					name: stringify!($name),
					aliases: &[],
					description: $desc,
					source: $crate::RegistrySource::Crate(env!("CARGO_PKG_NAME")),
				},
				element_type: $crate::ElementType::$et,
				parse: $parse,
			};

			inventory::submit! {
				$crate::ElementReg(&[<ELEMENT_ $name:upper>])
			}
		}
	};
}
