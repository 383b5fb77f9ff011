//! Marshaling between native values and the array-exchange wire format
//!
//! This module converts application values into `{mwdata, mwsize, mwtype}`
//! wire values and back.
//!
//! ## Layout
//!
//! Matrices are row-major on the native side and column-major on the wire.
//! Vectors keep their order; orientation only changes the declared shape.
//!
//! ## Error Handling
//!
//! All operations return `CallResult<T>` which uses the `CallError` type.
//! Encoding errors (`InvalidType`, `ShapeMismatch`, `InvalidArity`) are raised
//! before anything is sent. Decoding errors (`EmptyPayload`, `MissingOutput`)
//! mean the response does not match the requested arity or shape.

mod decoder;
mod encoder;
mod error;
mod type_mapper;

pub use decoder::*;
pub use encoder::*;
pub use error::*;
pub use type_mapper::*;
