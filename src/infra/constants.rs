// =============================================================================
// DIAGNOSIS SERVICE
// =============================================================================

/// Diagnosis service endpoint (fixed, not user-configurable)
pub const DIAGNOSE_ENDPOINT: &str = "http://127.0.0.1:8000/api/diagnose";

/// Timeout for a single diagnosis request in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// EVENT LOOP
// =============================================================================

/// Poll interval for terminal events in milliseconds
pub const EVENT_POLL_MS: u64 = 16;

/// Spinner frame advance interval while a request is in flight (ms)
pub const SPINNER_INTERVAL_MS: u64 = 80;

/// Spinner frames (braille dots)
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

// =============================================================================
// LAYOUT
// =============================================================================

/// Maximum width of the centered content column
pub const CONTENT_MAX_WIDTH: u16 = 72;

/// Height of the symptoms text area (including borders)
pub const SYMPTOMS_HEIGHT: u16 = 7;

/// Symptoms text area height while a result is on screen
pub const SYMPTOMS_COMPACT_HEIGHT: u16 = 3;

// =============================================================================
// LOGGING
// =============================================================================

/// Directory for the log file, relative to the working directory
pub const LOG_DIR: &str = ".healthbridge";

/// Log file name inside `LOG_DIR`
pub const LOG_FILE: &str = "healthbridge.log";

/// Default tracing filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
