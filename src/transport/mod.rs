//! Transport-facing glue
//!
//! The core reaches the service only through the narrow [`Transport`]
//! contract: one request in, exactly one reply or failure out. No retries
//! happen here; the remote function may not be idempotent.
//!
//! - `HttpTransport`: blocking HTTP implementation
//! - `FunctionClient`: encode, send once, classify, decode
//! - `Endpoint`: explicit `<base>/<archive>/<function>` address

mod client;
mod endpoint;
mod error_mapper;
mod http;
mod traits;

pub use client::*;
pub use endpoint::*;
pub use error_mapper::*;
pub use http::*;
pub use traits::*;
