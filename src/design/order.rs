//! Order metadata handed to the checkout and fulfillment glue.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::options::{DesignMode, Placement, ShirtColor, ShirtSize};

/// Fields describing one printable order.
///
/// Stored verbatim by checkout and replayed at fulfillment; the digest lets
/// the replaying side check it still has the artifact that was previewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderMetadata {
    pub shirt_color: ShirtColor,
    pub size: ShirtSize,
    pub mode: DesignMode,
    pub placement: Placement,
    pub artifact_sha256: String,
    pub width: u32,
    pub height: u32,
}

impl OrderMetadata {
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// True when `artifact` is the exact artifact these fields describe.
    pub fn matches(&self, artifact: &[u8]) -> bool {
        artifact_digest(artifact) == self.artifact_sha256
    }
}

/// Lowercase hex SHA-256 of an artifact.
pub fn artifact_digest(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(bytes: &[u8]) -> OrderMetadata {
        OrderMetadata {
            shirt_color: ShirtColor::White,
            size: ShirtSize::Xl,
            mode: DesignMode::Ascii,
            placement: Placement::Back,
            artifact_sha256: artifact_digest(bytes),
            width: 4606,
            height: 5787,
        }
    }

    #[test]
    fn test_digest_of_empty_input() {
        assert_eq!(
            artifact_digest(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_toml_fields() {
        let toml = metadata(b"art").to_toml().unwrap();
        assert!(toml.contains("shirt_color = \"white\""));
        assert!(toml.contains("size = \"XL\""));
        assert!(toml.contains("mode = \"ascii\""));
        assert!(toml.contains("placement = \"back\""));
        assert!(toml.contains("width = 4606"));
        let parsed: OrderMetadata = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, metadata(b"art"));
    }

    #[test]
    fn test_matches_artifact() {
        let meta = metadata(b"art");
        assert!(meta.matches(b"art"));
        assert!(!meta.matches(b"arT"));
    }
}
