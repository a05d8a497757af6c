//! Failure message composition.
//!
//! Every guard failure carries a reason built from two parts: an optional
//! caller-supplied extended message and the base diagnostic produced by the
//! assessment. Both are terminated with a period and joined by a newline.

/// Picks the singular or plural form of a noun for `count`.
///
/// Only a count of exactly `1` is singular. Negative counts, including `-1`,
/// take the plural form.
///
/// # Examples
///
/// ```
/// use nebula_guard::foundation::pluralize;
///
/// assert_eq!(pluralize(1, "element", "elements"), "element");
/// assert_eq!(pluralize(0, "element", "elements"), "elements");
/// assert_eq!(pluralize(-1, "element", "elements"), "elements");
/// ```
#[inline]
pub fn pluralize<'a, N>(count: N, singular: &'a str, plural: &'a str) -> &'a str
where
    N: PartialEq + From<u8>,
{
    if count == N::from(1) { singular } else { plural }
}

/// Composes a failure reason from a base message and an optional extension.
///
/// A blank extension (empty or whitespace-only) is treated as absent.
///
/// # Examples
///
/// ```
/// use nebula_guard::foundation::compose;
///
/// assert_eq!(compose("Base", None), "Base.");
/// assert_eq!(compose("Base", Some("  ")), "Base.");
/// assert_eq!(compose("Base", Some("Extended")), "Extended.\nBase.");
/// ```
#[must_use]
pub fn compose(base: &str, extended: Option<&str>) -> String {
    match extended.filter(|text| !text.trim().is_empty()) {
        Some(text) => format!("{text}.\n{base}."),
        None => format!("{base}."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(-2, "Plural")]
    #[case(-1, "Plural")]
    #[case(0, "Plural")]
    #[case(1, "Single")]
    #[case(2, "Plural")]
    fn test_pluralize(#[case] count: i32, #[case] expected: &str) {
        assert_eq!(pluralize(count, "Single", "Plural"), expected);
    }

    #[rstest]
    #[case(1, "", "")]
    #[case(1, " ", " ")]
    #[case(2, "Single", "")]
    fn test_pluralize_keeps_blank_forms(
        #[case] count: usize,
        #[case] singular: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(pluralize(count, singular, ""), expected);
    }

    #[rstest]
    #[case("", None, ".")]
    #[case("", Some(""), ".")]
    #[case("", Some(" "), ".")]
    #[case("Base", None, "Base.")]
    #[case("Base", Some(""), "Base.")]
    #[case("Base", Some("\t \n"), "Base.")]
    #[case("Base", Some("Extended"), "Extended.\nBase.")]
    #[case("", Some("Extended"), "Extended.\n.")]
    fn test_compose(#[case] base: &str, #[case] extended: Option<&str>, #[case] expected: &str) {
        assert_eq!(compose(base, extended), expected);
    }

    #[test]
    fn test_compose_keeps_extension_untrimmed() {
        assert_eq!(compose("Base", Some(" padded ")), " padded .\nBase.");
    }
}
