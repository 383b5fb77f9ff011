//! Wire value to native value decoding.
//!
//! The exact inverse of the encoder: `matrix[i][j] = data[i + j * rows]`.
//! Decoding never fabricates values; anything the response does not supply
//! is an error.

use super::encoder::text_length;
use super::error::{CallError, CallResult, ProtocolErrorKind};
use crate::types::{Lhs, NativeValue, Orientation, Primitive, Response, Shape, SuccessBody, TypeTag, WireValue};
use tracing::debug;

/// Short name of a primitive's JSON kind, used in error messages
fn primitive_kind(p: &Primitive) -> &'static str {
    match p {
        Primitive::Bool(_) => "boolean",
        Primitive::Number(_) => "number",
        Primitive::Text(_) => "string",
        Primitive::Other(_) => "nested",
    }
}

fn decode_primitive(p: &Primitive, tag: TypeTag) -> CallResult<NativeValue> {
    let decoded = match tag {
        TypeTag::Char => p.as_str().map(|s| NativeValue::Text(s.to_string())),
        TypeTag::Logical => p.as_bool().map(NativeValue::Boolean),
        t if t.is_numeric() => p.as_f64().map(NativeValue::Scalar),
        _ => None,
    };
    decoded.ok_or_else(|| CallError::InvalidType {
        kind: primitive_kind(p).to_string(),
        tag,
    })
}

fn check_element_count(wv: &WireValue) -> CallResult<()> {
    match wv.shape.element_count() {
        Some(expected) if expected == wv.data.len() => Ok(()),
        expected => Err(CallError::ShapeMismatch {
            shape: wv.shape,
            expected: expected.unwrap_or(usize::MAX),
            actual: wv.data.len(),
        }),
    }
}

/// First element of a wire value
pub fn decode_scalar(wv: &WireValue) -> CallResult<NativeValue> {
    let first = wv.data.first().ok_or(CallError::EmptyPayload {
        tag: wv.type_tag,
        shape: wv.shape,
    })?;
    decode_primitive(first, wv.type_tag)
}

/// Numeric data of a numeric or logical value, in wire order.
///
/// Orientation is shape metadata only and does not affect the order.
pub fn decode_vector(wv: &WireValue) -> CallResult<Vec<f64>> {
    if !(wv.type_tag.is_numeric() || wv.type_tag == TypeTag::Logical) {
        return Err(CallError::InvalidType {
            kind: "array".to_string(),
            tag: wv.type_tag,
        });
    }
    check_element_count(wv)?;

    wv.data
        .iter()
        .map(|p| {
            p.as_f64().ok_or_else(|| CallError::InvalidType {
                kind: primitive_kind(p).to_string(),
                tag: wv.type_tag,
            })
        })
        .collect()
}

/// Rebuild a row-major matrix from column-major wire data
pub fn decode_matrix(wv: &WireValue) -> CallResult<Vec<Vec<f64>>> {
    let values = decode_vector(wv)?;
    let (rows, cols) = (wv.shape.rows(), wv.shape.cols());

    Ok((0..rows)
        .map(|i| (0..cols).map(|j| values[i + j * rows]).collect())
        .collect())
}

/// Decode a whole wire value according to its tag and shape
pub fn decode_value(wv: &WireValue) -> CallResult<NativeValue> {
    match wv.type_tag {
        TypeTag::Char => {
            if wv.data.len() <= 1 {
                return decode_scalar(wv);
            }
            // Multi-row character arrays arrive as one token per row
            let rows = wv
                .data
                .iter()
                .map(|p| {
                    p.as_str().ok_or_else(|| CallError::InvalidType {
                        kind: primitive_kind(p).to_string(),
                        tag: TypeTag::Char,
                    })
                })
                .collect::<CallResult<Vec<_>>>()?;
            Ok(NativeValue::Text(rows.join("\n")))
        }
        TypeTag::Struct | TypeTag::Cell => Err(CallError::InvalidType {
            kind: "nested".to_string(),
            tag: wv.type_tag,
        }),
        _ if wv.shape == Shape::SCALAR => decode_scalar(wv),
        _ if wv.shape.rows() == 1 => Ok(NativeValue::Vector {
            values: decode_vector(wv)?,
            orientation: Orientation::Row,
        }),
        _ if wv.shape.cols() == 1 => Ok(NativeValue::Vector {
            values: decode_vector(wv)?,
            orientation: Orientation::Column,
        }),
        _ => decode_matrix(wv).map(NativeValue::Matrix),
    }
}

/// Split a packed single envelope into one scalar wire value per entry
fn unpack(wv: &WireValue, output_count: usize) -> CallResult<Vec<WireValue>> {
    if wv.data.len() < output_count {
        return Err(CallError::MissingOutput {
            index: wv.data.len(),
            requested: output_count,
            available: wv.data.len(),
        });
    }

    Ok(wv
        .data
        .iter()
        .take(output_count)
        .map(|p| WireValue {
            data: vec![p.clone()],
            shape: match p {
                Primitive::Text(s) => Shape(1, text_length(s)),
                _ => Shape::SCALAR,
            },
            type_tag: wv.type_tag,
        })
        .collect())
}

/// Pick the first `output_count` wire values, detecting the response layout
pub fn select_outputs(lhs: &Lhs, output_count: usize) -> CallResult<Vec<WireValue>> {
    match lhs {
        Lhs::Many(values) => {
            debug!(
                available = values.len(),
                requested = output_count,
                "response carries one wire value per output"
            );
            if values.len() < output_count {
                return Err(CallError::MissingOutput {
                    index: values.len(),
                    requested: output_count,
                    available: values.len(),
                });
            }
            Ok(values[..output_count].to_vec())
        }
        Lhs::One(value) if output_count == 1 => {
            debug!("response carries a single envelope");
            Ok(vec![value.clone()])
        }
        Lhs::One(value) => {
            debug!(
                packed = value.data.len(),
                requested = output_count,
                "response packs outputs positionally in one envelope"
            );
            unpack(value, output_count)
        }
    }
}

/// Decode the first `output_count` outputs of a response.
///
/// A failure response yields its classified protocol error.
pub fn decode_outputs(response: &Response, output_count: usize) -> CallResult<Vec<NativeValue>> {
    if output_count < 1 {
        return Err(CallError::InvalidArity {
            requested: output_count,
        });
    }

    match response {
        Response::Success(body) => select_outputs(&body.lhs, output_count)?
            .iter()
            .map(decode_value)
            .collect(),
        Response::Failure {
            status_code,
            diagnostic,
        } => Err(CallError::Protocol {
            kind: ProtocolErrorKind::from_status(*status_code),
            status: *status_code,
            diagnostic: diagnostic.clone(),
        }),
    }
}

/// Interpret a status line and body as a response.
///
/// A success status with a body that is not a response envelope is a
/// protocol error carrying the raw body.
pub fn parse_response(status: u16, body: &str) -> CallResult<Response> {
    if !(200..300).contains(&status) {
        return Ok(Response::Failure {
            status_code: status,
            diagnostic: body.to_string(),
        });
    }

    serde_json::from_str::<SuccessBody>(body)
        .map(Response::Success)
        .map_err(|_| CallError::Protocol {
            kind: ProtocolErrorKind::Other,
            status,
            diagnostic: body.to_string(),
        })
}
