//! File matching functionality
//!
//! This module decides, from a file's name alone, whether it belongs to the
//! selection and which progressive number it carries.

use log::warn;

use super::criteria::SelectionCriteria;

/// Outcome of checking one filename against the criteria
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Prefix, suffix and range all match
    Selected(i64),
    /// Prefix and suffix match but no progressive number could be read
    Unparseable,
    /// The file is not part of the selection
    Rejected,
}

impl Verdict {
    pub fn is_selected(&self) -> bool {
        matches!(self, Verdict::Selected(_))
    }
}

/// True iff `name` starts with `prefix` (case-sensitive)
pub fn matches_prefix(name: &str, prefix: &str) -> bool {
    name.starts_with(prefix)
}

/// True when there is no suffix, otherwise a case-insensitive `ends_with`
pub fn matches_suffix(name: &str, suffix: Option<&str>) -> bool {
    match suffix {
        None => true,
        Some(suffix) => name.to_uppercase().ends_with(&suffix.to_uppercase()),
    }
}

/// Reads the progressive number following the prefix
///
/// The number spans from the end of the prefix up to the first `.` after it
/// (or the end of the name). Leading digits are enough: `IMG_12-edit.jpg`
/// yields 12.
///
/// The search for the `.` starts after the prefix, so a prefix containing a
/// dot still works: `shot.12.jpg` with prefix `shot.` yields 12.
pub fn extract_progressive(name: &str, prefix: &str) -> Option<i64> {
    let rest = name.strip_prefix(prefix)?;
    let end = rest.find('.').unwrap_or(rest.len());
    parse_leading_integer(&rest[..end])
}

/// Decides whether a file with the given name is part of the selection
pub fn classify(name: &str, criteria: &SelectionCriteria) -> Verdict {
    if !matches_prefix(name, criteria.prefix()) || !matches_suffix(name, criteria.suffix()) {
        return Verdict::Rejected;
    }

    match extract_progressive(name, criteria.prefix()) {
        Some(progressive) if criteria.contains(progressive) => Verdict::Selected(progressive),
        Some(_) => Verdict::Rejected,
        None => {
            warn!("Unable to find an integer progressive for {name}. Skipping");
            Verdict::Unparseable
        }
    }
}

/// True iff the name matches prefix, suffix and range
pub fn is_selected(name: &str, criteria: &SelectionCriteria) -> bool {
    classify(name, criteria).is_selected()
}

/// Parses a base-10 integer from the start of `value`
///
/// Leading whitespace and a single sign are allowed; parsing stops at the
/// first non-digit. Returns `None` when there are no digits or the number
/// does not fit.
pub(crate) fn parse_leading_integer(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits_end == 0 {
        return None;
    }

    let magnitude: i64 = unsigned[..digits_end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria(suffix: Option<&str>, from: i64, to: i64) -> SelectionCriteria {
        SelectionCriteria::new("IMG_", suffix, from, to)
    }

    #[test]
    fn test_matches_prefix_is_case_sensitive() {
        assert!(matches_prefix("IMG_1.JPG", "IMG_"));
        assert!(!matches_prefix("img_1.JPG", "IMG_"));
        assert!(!matches_prefix("DSC_1.JPG", "IMG_"));
    }

    #[test]
    fn test_matches_suffix_ignores_case() {
        assert!(matches_suffix("IMG_5.JPG", Some("jpg")));
        assert!(matches_suffix("IMG_5.JPG", Some("JPG")));
        assert!(matches_suffix("IMG_5.jpg", Some("JPG")));
        assert!(!matches_suffix("IMG_5.PNG", Some("jpg")));
        assert!(matches_suffix("IMG_5.PNG", None));
    }

    #[test]
    fn test_extract_progressive() {
        assert_eq!(extract_progressive("IMG_10.JPG", "IMG_"), Some(10));
        assert_eq!(extract_progressive("IMG_0042.JPG", "IMG_"), Some(42));
        assert_eq!(extract_progressive("IMG_7", "IMG_"), Some(7));
        assert_eq!(extract_progressive("IMG_3.tar.gz", "IMG_"), Some(3));
        assert_eq!(extract_progressive("IMG_12-edit.jpg", "IMG_"), Some(12));
        assert_eq!(extract_progressive("IMG_0.JPG", "IMG_"), Some(0));
        assert_eq!(extract_progressive("IMG_abc.JPG", "IMG_"), None);
        assert_eq!(extract_progressive("IMG_.JPG", "IMG_"), None);
        assert_eq!(extract_progressive("DSC_1.JPG", "IMG_"), None);
        assert_eq!(extract_progressive("IMG.v2_5.jpg", "IMG.v2_"), Some(5));
        assert_eq!(extract_progressive("shot.12.jpg", "shot."), Some(12));
    }

    #[test]
    fn test_parse_leading_integer() {
        assert_eq!(parse_leading_integer("12"), Some(12));
        assert_eq!(parse_leading_integer("  12"), Some(12));
        assert_eq!(parse_leading_integer("-3x"), Some(-3));
        assert_eq!(parse_leading_integer("+8"), Some(8));
        assert_eq!(parse_leading_integer("x1"), None);
        assert_eq!(parse_leading_integer("-"), None);
        assert_eq!(parse_leading_integer(""), None);
        assert_eq!(parse_leading_integer("99999999999999999999"), None);
    }

    #[test]
    fn test_prefix_mismatch_is_never_selected() {
        let wide = criteria(None, i64::MIN, i64::MAX);
        for name in ["DSC_1.JPG", "img_1.JPG", "xIMG_1.JPG", "IM_1.JPG"] {
            assert!(!is_selected(name, &wide), "{name} should not be selected");
        }
    }

    #[test]
    fn test_reference_selection() {
        let criteria = criteria(Some("JPG"), 10, 12);
        let selected: Vec<&str> = [
            "IMG_9.JPG",
            "IMG_10.JPG",
            "IMG_11.PNG",
            "IMG_11.JPG",
            "IMG_12.JPG",
            "IMG_13.JPG",
        ]
        .into_iter()
        .filter(|name| is_selected(name, &criteria))
        .collect();

        assert_eq!(selected, vec!["IMG_10.JPG", "IMG_11.JPG", "IMG_12.JPG"]);
    }

    #[test]
    fn test_zero_progressive_is_selected_when_in_range() {
        assert_eq!(
            classify("IMG_0.JPG", &criteria(None, 0, 5)),
            Verdict::Selected(0)
        );
        assert_eq!(classify("IMG_0.JPG", &criteria(None, 1, 5)), Verdict::Rejected);
    }

    #[test]
    fn test_unparseable_progressive() {
        let criteria = criteria(Some("jpg"), 0, 100);
        assert_eq!(classify("IMG_abc.jpg", &criteria), Verdict::Unparseable);
        // Suffix mismatch is rejected before the progressive is looked at
        assert_eq!(classify("IMG_abc.png", &criteria), Verdict::Rejected);
    }
}
