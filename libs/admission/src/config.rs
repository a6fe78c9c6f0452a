/// Digest algorithms accepted when no override is configured.
pub const DEFAULT_DIGEST_ALGORITHMS: &[&str] = &["sha256", "sha384", "sha512"];

/// Admission settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Algorithms allowed before the `:` in an image digest.
    pub digest_algorithms: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            digest_algorithms: DEFAULT_DIGEST_ALGORITHMS
                .iter()
                .map(|a| a.to_string())
                .collect(),
        }
    }
}

impl ValidationConfig {
    /// Reads `BERTH_DIGEST_ALGORITHMS` (comma separated). Unset or blank keeps the defaults.
    pub fn from_env() -> Self {
        std::env::var("BERTH_DIGEST_ALGORITHMS")
            .ok()
            .map(|raw| Self::from_algorithm_list(&raw))
            .unwrap_or_default()
    }

    fn from_algorithm_list(raw: &str) -> Self {
        let digest_algorithms: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string)
            .collect();

        if digest_algorithms.is_empty() {
            Self::default()
        } else {
            Self { digest_algorithms }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_list_parsing() {
        let config = ValidationConfig::from_algorithm_list(" sha256 , blake3,");
        assert_eq!(config.digest_algorithms, vec!["sha256", "blake3"]);
    }

    #[test]
    fn test_blank_list_falls_back_to_defaults() {
        assert_eq!(
            ValidationConfig::from_algorithm_list(" , "),
            ValidationConfig::default()
        );
    }
}
