//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every outgoing request (method, url) and the size of the reply body.
    pub log_requests: bool,

    /// Log session file reads and writes.
    pub log_session: bool,

    /// Anything about handling the tariff/period Selection
    pub log_selection: bool,

    /// Log decoded reply payloads (can contain personal data, keep off).
    pub log_payloads: bool,
}

pub const DF: LogFlags = LogFlags {
    log_requests: true,
    log_session: true,
    log_selection: false,

    log_payloads: false,
};
