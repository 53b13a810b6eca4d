//! Common types used throughout Solidafy Paginator

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type, one per database row
pub type JsonObject = serde_json::Map<String, JsonValue>;
