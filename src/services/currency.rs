//! Currencies the bank holds accounts in.

pub const USD: &str = "USD";
pub const EUR: &str = "EUR";

const SUPPORTED: [&str; 2] = [USD, EUR];

/// Exact, case-sensitive match against the supported ISO codes.
pub fn is_supported(currency: &str) -> bool {
    SUPPORTED.contains(&currency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_only() {
        assert!(is_supported("USD"));
        assert!(is_supported("EUR"));
        assert!(!is_supported("usd"));
        assert!(!is_supported("CAD"));
        assert!(!is_supported(""));
    }
}
