//! Core type definitions for native and wire values.
//!
//! Everything here is a call-scoped value object: built once per invocation,
//! never mutated afterwards, and dropped once the caller has its native
//! values back.

use crate::constants::{INF_TOKEN, NAN_TOKEN, NEG_INF_TOKEN};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Value, json};
use std::fmt;

/// Largest magnitude at which every integer is exactly representable in f64
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

// ============================================================================
// Native Values
// ============================================================================

/// Orientation of a one-dimensional sequence
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Row,
    Column,
}

/// A value as the application sees it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum NativeValue {
    Scalar(f64),
    Boolean(bool),
    Text(String),
    Vector {
        values: Vec<f64>,
        orientation: Orientation,
    },
    /// Row-major: `matrix[row][col]`
    Matrix(Vec<Vec<f64>>),
}

impl NativeValue {
    pub fn row_vector(values: impl Into<Vec<f64>>) -> Self {
        NativeValue::Vector {
            values: values.into(),
            orientation: Orientation::Row,
        }
    }

    pub fn column_vector(values: impl Into<Vec<f64>>) -> Self {
        NativeValue::Vector {
            values: values.into(),
            orientation: Orientation::Column,
        }
    }

    /// Short name of the native kind, used in error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            NativeValue::Scalar(_) => "scalar",
            NativeValue::Boolean(_) => "boolean",
            NativeValue::Text(_) => "text",
            NativeValue::Vector { .. } => "vector",
            NativeValue::Matrix(_) => "matrix",
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            NativeValue::Scalar(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            NativeValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            NativeValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Values of a vector, regardless of orientation
    pub fn as_slice(&self) -> Option<&[f64]> {
        match self {
            NativeValue::Vector { values, .. } => Some(values),
            _ => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&[Vec<f64>]> {
        match self {
            NativeValue::Matrix(rows) => Some(rows),
            _ => None,
        }
    }
}

// ============================================================================
// Wire Values
// ============================================================================

/// Wire type tag (`mwtype`)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Double,
    Single,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Char,
    Logical,
    Struct,
    Cell,
}

impl TypeTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Double => "double",
            TypeTag::Single => "single",
            TypeTag::Int8 => "int8",
            TypeTag::Int16 => "int16",
            TypeTag::Int32 => "int32",
            TypeTag::Int64 => "int64",
            TypeTag::Uint8 => "uint8",
            TypeTag::Uint16 => "uint16",
            TypeTag::Uint32 => "uint32",
            TypeTag::Uint64 => "uint64",
            TypeTag::Char => "char",
            TypeTag::Logical => "logical",
            TypeTag::Struct => "struct",
            TypeTag::Cell => "cell",
        }
    }

    /// Floating point and integer tags
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            TypeTag::Double
                | TypeTag::Single
                | TypeTag::Int8
                | TypeTag::Int16
                | TypeTag::Int32
                | TypeTag::Int64
                | TypeTag::Uint8
                | TypeTag::Uint16
                | TypeTag::Uint32
                | TypeTag::Uint64
        )
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared dimensions (`mwsize`) as `(rows, cols)`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape(pub usize, pub usize);

impl Shape {
    pub const SCALAR: Shape = Shape(1, 1);

    pub fn rows(&self) -> usize {
        self.0
    }

    pub fn cols(&self) -> usize {
        self.1
    }

    /// `rows * cols`, or `None` when the declared size overflows
    pub fn element_count(&self) -> Option<usize> {
        self.0.checked_mul(self.1)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.1)
    }
}

/// A single `mwdata` entry
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Primitive {
    Bool(bool),
    Number(f64),
    Text(String),
    /// Nested content of `struct`/`cell` values, kept as raw JSON
    Other(Value),
}

impl Primitive {
    /// Numeric view of the entry, including the NaN/Inf string tokens
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Primitive::Number(n) => Some(*n),
            Primitive::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Primitive::Text(s) => match s.as_str() {
                NAN_TOKEN => Some(f64::NAN),
                INF_TOKEN | "+Inf" => Some(f64::INFINITY),
                NEG_INF_TOKEN => Some(f64::NEG_INFINITY),
                _ => None,
            },
            Primitive::Other(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Primitive::Bool(b) => Some(*b),
            Primitive::Number(n) => Some(*n != 0.0),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Primitive::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for Primitive {
    fn from(n: f64) -> Self {
        Primitive::Number(n)
    }
}

impl From<bool> for Primitive {
    fn from(b: bool) -> Self {
        Primitive::Bool(b)
    }
}

impl From<&str> for Primitive {
    fn from(s: &str) -> Self {
        Primitive::Text(s.to_string())
    }
}

impl Primitive {
    pub fn to_json(&self) -> Value {
        match self {
            Primitive::Bool(b) => Value::Bool(*b),
            Primitive::Number(n) => number_to_json(*n),
            Primitive::Text(s) => Value::String(s.clone()),
            Primitive::Other(v) => v.clone(),
        }
    }
}

impl Serialize for Primitive {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

// -0.0 has no integer form and must stay a float to keep its sign
fn is_negative_zero(n: f64) -> bool {
    n == 0.0 && n.is_sign_negative()
}

/// Convert a number to its JSON form.
///
/// Whole numbers become integers; NaN and infinities become string tokens
/// since JSON has no literal for them.
fn number_to_json(n: f64) -> Value {
    if n.is_nan() {
        Value::String(NAN_TOKEN.to_string())
    } else if n.is_infinite() {
        let token = if n > 0.0 { INF_TOKEN } else { NEG_INF_TOKEN };
        Value::String(token.to_string())
    } else if n.fract() == 0.0 && n.abs() <= MAX_EXACT_INTEGER && !is_negative_zero(n) {
        Value::Number(serde_json::Number::from(n as i64))
    } else {
        serde_json::Number::from_f64(n)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

/// One argument or output on the wire
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WireValue {
    /// Column-major element data; a single string token for `char`
    #[serde(rename = "mwdata")]
    pub data: Vec<Primitive>,
    #[serde(rename = "mwsize")]
    pub shape: Shape,
    #[serde(rename = "mwtype")]
    pub type_tag: TypeTag,
}

impl WireValue {
    pub fn to_json(&self) -> Value {
        json!({
            "mwdata": self.data.iter().map(Primitive::to_json).collect::<Vec<_>>(),
            "mwsize": [self.shape.0, self.shape.1],
            "mwtype": self.type_tag.as_str(),
        })
    }
}

// ============================================================================
// Request / Response
// ============================================================================

/// How the service should lay out its response
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    Large,
    Small,
}

impl OutputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Large => "large",
            OutputMode::Small => "small",
        }
    }
}

/// How the service should encode NaN and infinities
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NanInfFormat {
    #[default]
    String,
    Object,
}

impl NanInfFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            NanInfFormat::String => "string",
            NanInfFormat::Object => "object",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OutputFormat {
    pub mode: OutputMode,
    pub nan_inf_format: NanInfFormat,
}

impl OutputFormat {
    pub fn to_json(&self) -> Value {
        json!({
            "mode": self.mode.as_str(),
            "nanInfFormat": self.nan_inf_format.as_str(),
        })
    }
}

/// Request body for one function invocation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Request {
    #[serde(rename = "nargout")]
    pub output_count: usize,
    #[serde(rename = "rhs")]
    pub arguments: Vec<WireValue>,
    #[serde(
        rename = "outputFormat",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub output_format: Option<OutputFormat>,
}

impl Request {
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    /// The request body as JSON, built directly so it cannot fail
    pub fn to_json(&self) -> Value {
        let mut body = json!({
            "nargout": self.output_count,
            "rhs": self.arguments.iter().map(WireValue::to_json).collect::<Vec<_>>(),
        });
        if let (Some(format), Value::Object(map)) = (self.output_format, &mut body) {
            map.insert("outputFormat".to_string(), format.to_json());
        }
        body
    }
}

/// The `lhs` member of a success body.
///
/// The service documents both a single envelope and per-output access, so
/// both layouts are accepted and told apart when decoding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Lhs {
    /// One wire value per output
    Many(Vec<WireValue>),
    /// A single envelope, possibly holding packed outputs
    One(WireValue),
}

/// Success response body
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SuccessBody {
    pub lhs: Lhs,
}

/// Outcome of one exchange with the service
#[derive(Clone, Debug, PartialEq)]
pub enum Response {
    Success(SuccessBody),
    Failure { status_code: u16, diagnostic: String },
}
