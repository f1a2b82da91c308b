//! MEME report version tokens.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Oldest report version the parser accepts.
pub const MINIMUM_SUPPORTED_VERSION: [u32; 2] = [3, 0];

/// A version declared by a `MEME version <token>` header.
///
/// Versions compare numerically, one dot-separated component at a time,
/// with missing trailing components treated as zero (`3` == `3.0`).
/// The original token is kept for display.
#[derive(Debug, Clone, Serialize)]
pub struct FormatVersion {
    #[serde(rename = "version")]
    raw: String,
    #[serde(skip)]
    components: Vec<u32>,
}

impl FormatVersion {
    /// Parses a header version token such as `4.11.2` or `3.0`.
    ///
    /// Each component contributes its leading digits, so `5.0.5-beta`
    /// parses as `5.0.5`. Parsing stops at the first component that does
    /// not start with a digit. Returns `None` if the token has no numeric
    /// leading component at all.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        let mut components = Vec::new();
        for part in token.split('.') {
            let digits_end = part
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(part.len());
            let Ok(value) = part[..digits_end].parse::<u32>() else {
                break;
            };
            components.push(value);
            if digits_end < part.len() {
                break;
            }
        }

        if components.is_empty() {
            return None;
        }

        Some(Self {
            raw: token.to_string(),
            components,
        })
    }

    /// Returns `true` if this version is 3.0 or later.
    #[must_use]
    pub fn is_supported(&self) -> bool {
        compare_components(&self.components, &MINIMUM_SUPPORTED_VERSION) != Ordering::Less
    }

    /// The token as written in the report.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The numeric components that take part in comparisons.
    #[must_use]
    pub fn components(&self) -> &[u32] {
        &self.components
    }
}

fn compare_components(a: &[u32], b: &[u32]) -> Ordering {
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| {
            let left = a.get(i).copied().unwrap_or(0);
            let right = b.get(i).copied().unwrap_or(0);
            left.cmp(&right)
        })
        .find(|ord| *ord != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

impl PartialEq for FormatVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FormatVersion {}

impl PartialOrd for FormatVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FormatVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_components(&self.components, &other.components)
    }
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("3.0", &[3, 0])]
    #[case::three_part("4.11.2", &[4, 11, 2])]
    #[case::single("5", &[5])]
    #[case::suffix("5.0.5-beta", &[5, 0, 5])]
    #[case::trailing_text("3.0rc1", &[3, 0])]
    fn parse_extracts_numeric_components(#[case] token: &str, #[case] expected: &[u32]) {
        let version = FormatVersion::parse(token).unwrap();
        assert_eq!(version.components(), expected);
        assert_eq!(version.as_str(), token);
    }

    #[rstest]
    #[case::empty("")]
    #[case::word("unknown")]
    #[case::leading_dot(".5")]
    fn parse_rejects_non_numeric_tokens(#[case] token: &str) {
        assert!(FormatVersion::parse(token).is_none());
    }

    #[rstest]
    #[case("3.0", true)]
    #[case("3", true)]
    #[case("3.0.1", true)]
    #[case("4.11.2", true)]
    #[case("5.5.4", true)]
    #[case("2.4", false)]
    #[case("2.99.99", false)]
    #[case("0.1", false)]
    fn support_threshold_is_three_point_zero(#[case] token: &str, #[case] supported: bool) {
        let version = FormatVersion::parse(token).unwrap();
        assert_eq!(version.is_supported(), supported, "version {token}");
    }

    #[test]
    fn comparison_pads_missing_components() {
        let short = FormatVersion::parse("3").unwrap();
        let long = FormatVersion::parse("3.0.0").unwrap();
        assert_eq!(short, long);

        let older = FormatVersion::parse("4.9").unwrap();
        let newer = FormatVersion::parse("4.11").unwrap();
        assert!(older < newer);
    }

    #[test]
    fn display_uses_original_token() {
        let version = FormatVersion::parse("4.11.2").unwrap();
        assert_eq!(version.to_string(), "4.11.2");
    }
}
