//! Waitlist invite codes.

use crate::error::ReferralError;
use crate::types::{WaitlistEntry, first_name};
use serde::Serialize;

/// Canonical form of an invite code: trimmed and uppercased ASCII alphanumerics.
pub fn normalize_invite_code(raw: &str) -> Result<String, ReferralError> {
    let code = raw.trim();
    if code.is_empty() {
        return Err(ReferralError::EmptyCode);
    }
    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ReferralError::MalformedCode(code.to_string()));
    }
    Ok(code.to_ascii_uppercase())
}

/// Result of looking up an invite code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Referral {
    pub code: String,
    /// First name of the person who shared the code, when the code is known.
    pub referrer: Option<String>,
}

impl Referral {
    pub fn new(code: String, entry: Option<&WaitlistEntry>) -> Self {
        Self {
            code,
            referrer: entry.map(|e| first_name(e.name.as_deref()).to_string()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.referrer.is_some()
    }
}
