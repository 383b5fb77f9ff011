//! Protocol and default constants.
//!
//! Centralizes the wire field names and defaults so the encoder, decoder,
//! and settings agree on a single value.

// ============================================================================
// Wire Protocol
// ============================================================================

/// Content type of request and success response bodies
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Token used for NaN in numeric `mwdata` arrays
pub const NAN_TOKEN: &str = "NaN";

/// Token used for positive infinity in numeric `mwdata` arrays
pub const INF_TOKEN: &str = "Inf";

/// Token used for negative infinity in numeric `mwdata` arrays
pub const NEG_INF_TOKEN: &str = "-Inf";

// ============================================================================
// Client Defaults
// ============================================================================

/// Default request deadline in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Default base address of a local function service
pub const DEFAULT_BASE_URL: &str = "http://localhost:9910";

/// Default maximum number of points handed to a chart
pub const DEFAULT_MAX_DISPLAY_POINTS: usize = 1000;

/// Directory name under the platform config dir
pub const SETTINGS_DIR_NAME: &str = "numwire";

/// Settings file name
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "numwire=info";
