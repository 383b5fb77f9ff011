//! Native kind to wire type tag classification.

use super::error::{CallError, CallResult};
use crate::types::{NativeValue, TypeTag};

/// Classify a native value into a wire type tag.
///
/// Numeric values default to `double`. A narrower numeric hint is honored
/// verbatim; values are not range-checked against it.
pub fn classify(value: &NativeValue, hint: Option<TypeTag>) -> CallResult<TypeTag> {
    let natural = match value {
        NativeValue::Boolean(_) => TypeTag::Logical,
        NativeValue::Text(_) => TypeTag::Char,
        NativeValue::Scalar(_) | NativeValue::Vector { .. } | NativeValue::Matrix(_) => {
            TypeTag::Double
        }
    };

    match hint {
        None => Ok(natural),
        Some(tag) if tag == natural => Ok(tag),
        Some(tag) if natural.is_numeric() && tag.is_numeric() => Ok(tag),
        Some(tag) => Err(CallError::InvalidType {
            kind: value.kind_name().to_string(),
            tag,
        }),
    }
}
