//! Canonical name lookups for free text.

use crate::service::NetworkService;
use crate::store::NetworkStore;
use crate::taxonomy::Normalizer;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct NormalizeRequest {
    /// Free-text values to resolve, e.g. "machine learning" or "CUNY Hunter College"
    pub values: Vec<String>,
}

/// Resolve interest strings to their canonical tags.
pub fn handle_normalize_interest<S: NetworkStore>(
    service: &NetworkService<S>,
    request: &NormalizeRequest,
) -> String {
    format_normalized(service.interest_normalizer(), &request.values, "interest")
}

/// Resolve school strings to their canonical names.
pub fn handle_normalize_school<S: NetworkStore>(
    service: &NetworkService<S>,
    request: &NormalizeRequest,
) -> String {
    format_normalized(service.school_normalizer(), &request.values, "school")
}

fn format_normalized(normalizer: &Normalizer, values: &[String], kind: &str) -> String {
    if values.is_empty() {
        return format!("No {} values given.\n", kind);
    }

    let mut output = String::new();
    for value in values {
        let canonical = normalizer.normalize(value);
        if canonical.is_empty() {
            output.push_str(&format!("  • '{}' → (no {})\n", value, kind));
        } else {
            output.push_str(&format!("  • '{}' → {}\n", value, canonical));
        }
    }
    output
}
