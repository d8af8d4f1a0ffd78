//! Slug generation for company codes
//!
//! A company's primary key is derived from its display name once, at creation.

/// Utility for turning display names into URL-safe lowercase identifiers
pub struct Slugifier;

impl Slugifier {
    /// Convert a display name into a slug
    ///
    /// Runs of whitespace and separators (`-`, `_`, `.`, `/`) collapse into a
    /// single `-`; other non-alphanumeric characters are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use biztime::core::slug::Slugifier;
    ///
    /// assert_eq!(Slugifier::slugify("Apple Computer"), "apple-computer");
    /// assert_eq!(Slugifier::slugify("IBM"), "ibm");
    /// assert_eq!(Slugifier::slugify("  Acme, Inc.  "), "acme-inc");
    /// ```
    pub fn slugify(name: &str) -> String {
        let mut slug = String::with_capacity(name.len());
        let mut pending_dash = false;

        for c in name.chars().flat_map(char::to_lowercase) {
            if c.is_alphanumeric() {
                if pending_dash && !slug.is_empty() {
                    slug.push('-');
                }
                pending_dash = false;
                slug.push(c);
            } else if c.is_whitespace() || matches!(c, '-' | '_' | '.' | '/') {
                pending_dash = true;
            }
        }

        slug
    }
}
