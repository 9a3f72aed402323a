//! Wall-clock echo resolver

use chrono::Local;
use sparcs_api_types::DateEcho;

/// Produce a [`DateEcho`] for the moment of the call
///
/// The two timestamps are read independently, so they may differ by a few
/// milliseconds within one response. That is part of the contract.
pub fn now_echo() -> DateEcho {
    DateEcho {
        now: Local::now().to_rfc2822(),
        hello: format!("hello at {}", Local::now().to_rfc2822()),
    }
}
