//! JSON output types for machine-readable CLI output.
//!
//! With `--json` the command prints one [`EngraveReport`] to stderr instead
//! of colored status lines. Stdout stays reserved for the WAV data.

use serde::{Deserialize, Serialize};

/// Error codes for CLI-level failures.
///
/// Library failures pass their own `PATTERN_XXX` code through.
pub mod error_codes {
    /// Output file or stream could not be written
    pub const OUTPUT_WRITE: &str = "CLI_001";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "PATTERN_003")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl JsonError {
    /// Creates a new JSON error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Pie-specific statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PieReport {
    /// Revolutions started
    pub revolutions: usize,
    /// First radius in mm
    pub start_radius_mm: f64,
    /// Last radius in mm
    pub final_radius_mm: f64,
}

/// Summary of one engrave run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngraveReport {
    /// Whether the file was generated and written
    pub success: bool,
    /// Pattern name as given on the command line
    pub pattern: String,
    /// Where the WAV went (`-` for stdout)
    pub output: String,
    /// Total bytes written, header included
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_bytes: Option<usize>,
    /// BLAKE3 hash of the PCM payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcm_hash: Option<String>,
    /// Spiral statistics for the pie pattern
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pie: Option<PieReport>,
    /// Errors encountered
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub errors: Vec<JsonError>,
}

impl EngraveReport {
    /// Creates a failed report with a single error.
    pub fn failure(pattern: &str, output: &str, error: JsonError) -> Self {
        Self {
            success: false,
            pattern: pattern.to_string(),
            output: output.to_string(),
            total_bytes: None,
            pcm_hash: None,
            pie: None,
            errors: vec![error],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_failure_report_serialization() {
        let report = EngraveReport::failure(
            "spiral",
            "-",
            JsonError::new("PATTERN_003", "unknown pattern 'spiral'"),
        );
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"success\":false"));
        assert!(json.contains("PATTERN_003"));
        assert!(!json.contains("pcm_hash"));
        assert!(!json.contains("total_bytes"));
    }

    #[test]
    fn test_success_report_round_trip() {
        let report = EngraveReport {
            success: true,
            pattern: "pie".to_string(),
            output: "out/a.wav".to_string(),
            total_bytes: Some(246_960_044),
            pcm_hash: Some("ab".repeat(32)),
            pie: Some(PieReport {
                revolutions: 12,
                start_radius_mm: 25.0,
                final_radius_mm: 25.01628,
            }),
            errors: vec![],
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(!json.contains("errors"));
        let parsed: EngraveReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
