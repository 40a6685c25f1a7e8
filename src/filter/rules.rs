// src/filter/rules.rs
// What gets stripped: excluded materials and the placeholder face range

use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;

/// Materials stripped when nothing else is configured.
pub const DEFAULT_EXCLUDED_MATERIALS: [&str; 3] = [
    "245_257_63_235_4_3",
    "245_256_63_235_4_4",
    "245_256_63_235_4_3",
];

/// Inclusive range of first-vertex indices whose face lines are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FaceRange {
    pub min: u32,
    pub max: u32,
}

impl Default for FaceRange {
    fn default() -> Self {
        Self { min: 1, max: 48 }
    }
}

impl fmt::Display for FaceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

impl FaceRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, index: u32) -> bool {
        (self.min..=self.max).contains(&index)
    }

    /// Vertex indices are 1-based, so the range must start at 1 or later
    /// and must not be empty.
    pub fn validate(&self) -> Result<(), String> {
        if self.min == 0 {
            return Err(format!("face range {self} starts at 0; vertex indices are 1-based"));
        }
        if self.min > self.max {
            return Err(format!("face range {self} is empty"));
        }
        Ok(())
    }

    /// True if `line` is a face line (`f ` prefix) whose text up to the
    /// first `/` is exactly the decimal form of an index in this range.
    ///
    /// `f 480/1/1` does not match a range ending at 48, and `f 01/1/1` does
    /// not match 1: the whole token is compared, never a substring.
    pub fn matches_face(&self, line: &str) -> bool {
        let Some(rest) = line.strip_prefix("f ") else {
            return false;
        };
        let Some((head, _)) = rest.split_once('/') else {
            return false;
        };
        parse_canonical_index(head).is_some_and(|index| self.contains(index))
    }
}

/// Parse an unsigned decimal with no sign and no leading zeros.
fn parse_canonical_index(token: &str) -> Option<u32> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if token.len() > 1 && token.starts_with('0') {
        return None;
    }
    token.parse().ok()
}

/// The read-only rule set applied to every line of every file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRules {
    excluded_materials: HashSet<String>,
    face_range: FaceRange,
}

impl Default for FilterRules {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_MATERIALS, FaceRange::default())
    }
}

impl FilterRules {
    pub fn new<I, S>(excluded_materials: I, face_range: FaceRange) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded_materials: excluded_materials.into_iter().map(Into::into).collect(),
            face_range,
        }
    }

    pub fn is_excluded(&self, material: &str) -> bool {
        self.excluded_materials.contains(material)
    }

    pub fn excluded_materials(&self) -> &HashSet<String> {
        &self.excluded_materials
    }

    pub fn face_range(&self) -> FaceRange {
        self.face_range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // FaceRange::matches_face
    // ============================================================================

    #[test]
    fn test_boundaries_are_inclusive() {
        let range = FaceRange::default();
        assert!(range.matches_face("f 1/1/1 2/2/2 3/3/3"));
        assert!(range.matches_face("f 48/1/1 2/2/2 3/3/3"));
        assert!(!range.matches_face("f 49/1/1 2/2/2 3/3/3"));
    }

    #[test]
    fn test_whole_token_is_compared() {
        let range = FaceRange::default();
        assert!(!range.matches_face("f 480/1/1 2/2/2 3/3/3"));
        assert!(!range.matches_face("f 148/1/1"));
        assert!(!range.matches_face("f 01/1/1"));
        assert!(!range.matches_face("f +1/1/1"));
        assert!(!range.matches_face("f 0/1/1"));
    }

    #[test]
    fn test_requires_slash_after_index() {
        let range = FaceRange::default();
        assert!(!range.matches_face("f 1 2 3"));
        assert!(!range.matches_face("f 12"));
        assert!(range.matches_face("f 12//3 4//5 6//7"));
    }

    #[test]
    fn test_requires_exact_face_prefix() {
        let range = FaceRange::default();
        assert!(!range.matches_face("f  1/1/1"));
        assert!(!range.matches_face(" f 1/1/1"));
        assert!(!range.matches_face("f\t1/1/1"));
        assert!(!range.matches_face("fo 1/1/1"));
        assert!(!range.matches_face("vt 1/1/1"));
    }

    #[test]
    fn test_only_first_reference_counts() {
        let range = FaceRange::default();
        assert!(!range.matches_face("f 50/1/1 1/2/2 2/3/3"));
        assert!(range.matches_face("f 3/1/1 500/2/2 501/3/3"));
    }

    #[test]
    fn test_huge_index_does_not_match() {
        let range = FaceRange::new(1, u32::MAX);
        assert!(!range.matches_face("f 99999999999999999999/1/1"));
    }

    #[test]
    fn test_custom_range() {
        let range = FaceRange::new(10, 12);
        assert!(!range.matches_face("f 9/1/1"));
        assert!(range.matches_face("f 10/1/1"));
        assert!(range.matches_face("f 12/1/1"));
        assert!(!range.matches_face("f 13/1/1"));
    }

    // ============================================================================
    // FaceRange::validate
    // ============================================================================

    #[test]
    fn test_validate() {
        assert!(FaceRange::default().validate().is_ok());
        assert!(FaceRange::new(5, 5).validate().is_ok());
        assert!(FaceRange::new(0, 48).validate().unwrap_err().contains("1-based"));
        assert!(FaceRange::new(10, 2).validate().unwrap_err().contains("empty"));
    }

    #[test]
    fn test_display() {
        assert_eq!(FaceRange::default().to_string(), "1..=48");
    }

    // ============================================================================
    // FilterRules
    // ============================================================================

    #[test]
    fn test_default_rules() {
        let rules = FilterRules::default();
        assert_eq!(rules.excluded_materials().len(), 3);
        assert!(rules.is_excluded("245_257_63_235_4_3"));
        assert!(rules.is_excluded("245_256_63_235_4_4"));
        assert!(rules.is_excluded("245_256_63_235_4_3"));
        assert!(!rules.is_excluded("wood"));
        assert_eq!(rules.face_range(), FaceRange::default());
    }

    #[test]
    fn test_material_match_is_exact() {
        let rules = FilterRules::new(["wood"], FaceRange::default());
        assert!(rules.is_excluded("wood"));
        assert!(!rules.is_excluded("Wood"));
        assert!(!rules.is_excluded("wood2"));
        assert!(!rules.is_excluded(""));
    }
}
