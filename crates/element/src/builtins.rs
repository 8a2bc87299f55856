//! Built-in element delegates.
//!
//! Tokens arrive exactly as split from the raw value; no trimming happens
//! here, so `" 2"` is not a valid integer token.

use crate::{ElementError, ElementType, ElementValue, element_converter};

element_converter!(text, {
	description: "Identity conversion, keeps the token as raw text",
	element_type: Text,
}, |token| Ok(ElementValue::Text(token.to_owned())));

element_converter!(boolean, {
	description: "Strict true/false parsing",
	element_type: Boolean,
}, |token| {
	token
		.parse::<bool>()
		.map(ElementValue::Boolean)
		.map_err(|_| ElementError::unconvertible(token, ElementType::Boolean))
});

element_converter!(integer, {
	description: "Signed 64-bit integer parsing",
	element_type: Integer,
}, |token| {
	token
		.parse::<i64>()
		.map(ElementValue::Integer)
		.map_err(|_| ElementError::unconvertible(token, ElementType::Integer))
});

element_converter!(float, {
	description: "64-bit float parsing",
	element_type: Float,
}, |token| {
	token
		.parse::<f64>()
		.map(ElementValue::Float)
		.map_err(|_| ElementError::unconvertible(token, ElementType::Float))
});

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use crate::{ElementError, ElementType, ElementValue, find};

	#[test]
	fn text_is_identity() {
		let def = find("text").unwrap();
		assert_eq!(def.convert(" raw ").unwrap(), ElementValue::Text(" raw ".into()));
	}

	#[test]
	fn boolean_is_strict() {
		let def = find("boolean").unwrap();
		assert_eq!(def.convert("true").unwrap(), ElementValue::Boolean(true));
		assert_eq!(def.convert("false").unwrap(), ElementValue::Boolean(false));
		// No case folding, no yes/no synonyms.
		assert!(def.convert("True").is_err());
		assert!(def.convert("1").is_err());
	}

	#[test]
	fn integer_rejects_untrimmed_tokens() {
		let def = find("integer").unwrap();
		assert_eq!(def.convert("-7").unwrap(), ElementValue::Integer(-7));
		assert_eq!(
			def.convert(" 7").unwrap_err(),
			ElementError::unconvertible(" 7", ElementType::Integer)
		);
	}

	#[test]
	fn float_parses_standard_forms() {
		let def = find("float").unwrap();
		assert_eq!(def.convert("1.5").unwrap(), ElementValue::Float(1.5));
		assert_eq!(def.convert("-2e3").unwrap(), ElementValue::Float(-2000.0));
		assert!(def.convert("one").is_err());
	}
}
