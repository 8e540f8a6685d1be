/// Decides which dependency sources are trusted.
///
/// A dependency is trusted when it was rebuilt from source by the service or
/// shipped by Red Hat. Everything else (Maven Central, unknown jars) is not.
pub struct TrustPolicy;

/// Where a dependency came from, as shown by the source marker of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrustSource {
    Rebuilt,
    RedHat,
    Unknown,
}

impl TrustPolicy {
    pub const REBUILT: &'static str = "rebuilt";
    pub const REDHAT: &'static str = "redhat";

    pub fn classify(source: &str) -> TrustSource {
        match source {
            Self::REBUILT => TrustSource::Rebuilt,
            Self::REDHAT => TrustSource::RedHat,
            _ => TrustSource::Unknown,
        }
    }

    pub fn is_trusted_source(source: &str) -> bool {
        Self::classify(source) != TrustSource::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trusted_sources() {
        assert!(TrustPolicy::is_trusted_source("rebuilt"));
        assert!(TrustPolicy::is_trusted_source("redhat"));
        assert!(!TrustPolicy::is_trusted_source("central"));
        assert!(!TrustPolicy::is_trusted_source(""));
    }

    #[test]
    fn test_classification_is_case_sensitive() {
        assert_eq!(TrustPolicy::classify("Rebuilt"), TrustSource::Unknown);
        assert_eq!(TrustPolicy::classify("redhat"), TrustSource::RedHat);
    }
}
