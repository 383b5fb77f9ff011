//! Client-side marshaling for array-exchange numerical function services.
//!
//! Native values are encoded into `{mwdata, mwsize, mwtype}` wire values,
//! posted to a remote function endpoint, and the response is decoded back
//! into native values. Failures are reported through a closed taxonomy
//! ([`CallError`]).
//!
//! ```ignore
//! use numwire::{Argument, Endpoint, FunctionClient, HttpTransport, NativeValue};
//!
//! let transport = HttpTransport::new()?;
//! let client = FunctionClient::new(transport);
//! let endpoint = Endpoint::new("http://localhost:9910", "sinewave", "sine");
//! let outputs = client.call(endpoint.as_str(), 1, &[Argument::new(NativeValue::Scalar(2.0))])?;
//! ```

pub mod constants;
pub mod downsample;
pub mod logging;
pub mod marshal;
pub mod settings;
pub mod transport;
pub mod types;

pub use downsample::downsample;
pub use marshal::*;
pub use transport::*;
pub use types::*;
