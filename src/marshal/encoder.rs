//! Native value to wire value encoding.
//!
//! All encoders are pure. Matrices are flattened column-major so that
//! `data[i + j * rows] == matrix[i][j]`.

use super::error::{CallError, CallResult};
use super::type_mapper::classify;
use crate::types::{NativeValue, Orientation, Primitive, Request, Shape, TypeTag, WireValue};

/// A native value plus the optional hints used to encode it
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub value: NativeValue,
    pub type_hint: Option<TypeTag>,
    /// Overrides the natural shape; the data keeps its column-major order
    pub shape_hint: Option<Shape>,
}

impl Argument {
    pub fn new(value: NativeValue) -> Self {
        Self {
            value,
            type_hint: None,
            shape_hint: None,
        }
    }

    pub fn with_type(mut self, tag: TypeTag) -> Self {
        self.type_hint = Some(tag);
        self
    }

    pub fn with_shape(mut self, rows: usize, cols: usize) -> Self {
        self.shape_hint = Some(Shape(rows, cols));
        self
    }
}

impl From<NativeValue> for Argument {
    fn from(value: NativeValue) -> Self {
        Argument::new(value)
    }
}

/// Character count as the service measures it (UTF-16 code units)
pub fn text_length(s: &str) -> usize {
    s.encode_utf16().count()
}

pub fn encode_scalar(v: f64, tag: TypeTag) -> WireValue {
    WireValue {
        data: vec![Primitive::Number(v)],
        shape: Shape::SCALAR,
        type_tag: tag,
    }
}

pub fn encode_boolean(b: bool) -> WireValue {
    WireValue {
        data: vec![Primitive::Bool(b)],
        shape: Shape::SCALAR,
        type_tag: TypeTag::Logical,
    }
}

/// Encode text as one string token.
///
/// The shape declares `(1, characters)` even though `data` always has a
/// single entry.
pub fn encode_text(s: &str) -> WireValue {
    WireValue {
        data: vec![Primitive::Text(s.to_string())],
        shape: Shape(1, text_length(s)),
        type_tag: TypeTag::Char,
    }
}

pub fn encode_vector(seq: &[f64], tag: TypeTag, orientation: Orientation) -> WireValue {
    let n = seq.len();
    let shape = match orientation {
        Orientation::Row => Shape(1, n),
        Orientation::Column => Shape(n, 1),
    };
    WireValue {
        data: seq.iter().copied().map(Primitive::Number).collect(),
        shape,
        type_tag: tag,
    }
}

/// Encode a row-major matrix into column-major wire data.
///
/// Fails with `ShapeMismatch` on ragged rows.
pub fn encode_matrix(rows: &[Vec<f64>], tag: TypeTag) -> CallResult<WireValue> {
    let row_count = rows.len();
    let col_count = rows.first().map_or(0, Vec::len);

    if rows.iter().any(|row| row.len() != col_count) {
        return Err(CallError::ShapeMismatch {
            shape: Shape(row_count, col_count),
            expected: row_count * col_count,
            actual: rows.iter().map(Vec::len).sum(),
        });
    }

    let mut data = Vec::with_capacity(row_count * col_count);
    for j in 0..col_count {
        for row in rows {
            data.push(Primitive::Number(row[j]));
        }
    }

    Ok(WireValue {
        data,
        shape: Shape(row_count, col_count),
        type_tag: tag,
    })
}

/// Encode one argument, applying its type and shape hints
pub fn encode(arg: &Argument) -> CallResult<WireValue> {
    let tag = classify(&arg.value, arg.type_hint)?;

    let mut wire = match &arg.value {
        NativeValue::Scalar(v) => encode_scalar(*v, tag),
        NativeValue::Boolean(b) => encode_boolean(*b),
        NativeValue::Text(s) => encode_text(s),
        NativeValue::Vector {
            values,
            orientation,
        } => encode_vector(values, tag, *orientation),
        NativeValue::Matrix(rows) => encode_matrix(rows, tag)?,
    };

    if let Some(hint) = arg.shape_hint {
        let actual = match &arg.value {
            NativeValue::Text(s) => text_length(s),
            _ => wire.data.len(),
        };
        if hint.element_count() != Some(actual) {
            return Err(CallError::ShapeMismatch {
                shape: hint,
                expected: hint.element_count().unwrap_or(usize::MAX),
                actual,
            });
        }
        wire.shape = hint;
    }

    Ok(wire)
}

pub fn build_request(output_count: usize, arguments: Vec<WireValue>) -> CallResult<Request> {
    if output_count < 1 {
        return Err(CallError::InvalidArity {
            requested: output_count,
        });
    }
    Ok(Request {
        output_count,
        arguments,
        output_format: None,
    })
}

/// Encode every argument and build the request.
///
/// Arity is checked before any argument is encoded.
pub fn encode_request(output_count: usize, args: &[Argument]) -> CallResult<Request> {
    if output_count < 1 {
        return Err(CallError::InvalidArity {
            requested: output_count,
        });
    }
    let arguments = args.iter().map(encode).collect::<CallResult<Vec<_>>>()?;
    build_request(output_count, arguments)
}
