//! Fixed topic names for the reputation service.
//!
//! These strings are part of the service contract and must match exactly.

/// Request topic for file reputation lookups.
pub const GET_FILE_REPUTATION: &str = "/mcafee/service/tie/file/reputation";

/// Request topic for setting an enterprise file reputation.
pub const SET_FILE_REPUTATION: &str = "/mcafee/service/tie/file/reputation/set";

/// Request topic for file first-reference lookups.
pub const GET_FILE_FIRST_REFS: &str = "/mcafee/service/tie/file/agents";

/// Request topic for certificate reputation lookups.
pub const GET_CERT_REPUTATION: &str = "/mcafee/service/tie/cert/reputation";

/// Request topic for setting an enterprise certificate reputation.
pub const SET_CERT_REPUTATION: &str = "/mcafee/service/tie/cert/reputation/set";

/// Request topic for certificate first-reference lookups.
pub const GET_CERT_FIRST_REFS: &str = "/mcafee/service/tie/cert/agents";

/// Event topic for file detections.
pub const EVENT_FILE_DETECTION: &str = "/mcafee/event/tie/file/detection";

/// Event topic for first-instance observations of a file.
pub const EVENT_FILE_FIRST_INSTANCE: &str = "/mcafee/event/tie/file/firstinstance";

/// Event topic for broadcast file reputation changes.
pub const EVENT_FILE_REPUTATION_CHANGE: &str = "/mcafee/event/tie/file/repchange/broadcast";

/// Event topic for broadcast certificate reputation changes.
pub const EVENT_CERT_REPUTATION_CHANGE: &str = "/mcafee/event/tie/cert/repchange/broadcast";

/// Event topic for external provider file reputation reports.
pub const EVENT_EXTERNAL_FILE_REPORT: &str = "/mcafee/event/external/file/report";
