//! Host header normalization.

/// Lowercases a host and strips a trailing `:<port>`.
///
/// Only an all-digit suffix after the last colon is treated as a port.
pub fn normalize_host(host: &str) -> String {
    let host = host.trim();
    let without_port = match host.rsplit_once(':') {
        Some((name, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => name,
        _ => host,
    };

    without_port.to_ascii_lowercase()
}

/// First DNS label of a normalized host, matched against artist slugs and subdomains.
pub fn first_label(host: &str) -> &str {
    host.split('.').next().unwrap_or(host)
}
