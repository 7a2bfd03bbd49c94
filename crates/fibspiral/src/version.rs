//! Version information.

/// Get the version string.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Binary name and version, as shown in the TUI log.
#[must_use]
pub fn full_version() -> String {
    format!("fibspiral {}", version())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_not_empty() {
        assert!(!version().is_empty());
    }

    #[test]
    fn full_version_names_binary() {
        assert!(full_version().starts_with("fibspiral "));
        assert!(full_version().ends_with(version()));
    }
}
