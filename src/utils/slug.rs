//! URL slugification for taxonomy terms.
//!
//! Terms keep CJK ideographs as-is and lose everything that is not
//! URL-safe, so `"Rust 异步 编程!"` becomes `"rust-异步-编程"`.

/// Slug used when a term cleans down to nothing.
pub const PLACEHOLDER_SLUG: &str = "uncategorized";

/// Convert a taxonomy term to a URL-safe slug.
///
/// - lower-cases Latin letters
/// - keeps CJK ideographs, `a-z`, `0-9`, `_` and whitespace, drops the rest
/// - trims, then joins whitespace runs with a single `-`
///
/// Existing hyphens count as whitespace, which keeps the function
/// idempotent: `slugify_term(&slugify_term(s)) == slugify_term(s)`.
///
/// Empty input, or input with nothing left after cleaning, yields
/// [`PLACEHOLDER_SLUG`].
pub fn slugify_term(text: &str) -> String {
    let lower = text.to_lowercase();
    let cleaned: String = lower
        .chars()
        .filter(|&c| is_kept(c))
        .map(|c| if c == '-' { ' ' } else { c })
        .collect();

    let slug = cleaned.split_whitespace().collect::<Vec<_>>().join("-");
    if slug.is_empty() {
        PLACEHOLDER_SLUG.to_owned()
    } else {
        slug
    }
}

/// Characters that survive slugification.
#[inline]
fn is_kept(c: char) -> bool {
    is_cjk_ideograph(c)
        || c.is_ascii_lowercase()
        || c.is_ascii_digit()
        || c == '_'
        || c == '-'
        || c.is_whitespace()
}

/// CJK Unified Ideographs, basic block (U+4E00..=U+9FA5).
#[inline]
pub fn is_cjk_ideograph(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn is_valid_slug_char(c: char) -> bool {
        is_cjk_ideograph(c) || c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-'
    }

    #[test]
    fn test_slugify_term_latin() {
        assert_eq!(slugify_term("Go"), "go");
        assert_eq!(slugify_term("Rust Async"), "rust-async");
    }

    #[test]
    fn test_slugify_term_keeps_cjk() {
        assert_eq!(slugify_term("容器"), "容器");
        assert_eq!(slugify_term("Rust 异步 编程!"), "rust-异步-编程");
    }

    #[test]
    fn test_slugify_term_collapses_whitespace() {
        assert_eq!(slugify_term("  hello   world  "), "hello-world");
        assert_eq!(slugify_term("a\t\nb"), "a-b");
    }

    #[test]
    fn test_slugify_term_removes_punctuation() {
        assert_eq!(slugify_term("C++"), "c");
        assert_eq!(slugify_term("what? why!"), "what-why");
        assert_eq!(slugify_term("snake_case"), "snake_case");
    }

    #[test]
    fn test_slugify_term_hyphens_are_separators() {
        assert_eq!(slugify_term("rust-async"), "rust-async");
        assert_eq!(slugify_term("--edge--"), "edge");
        assert_eq!(slugify_term("a - b"), "a-b");
        assert_eq!(slugify_term("-"), PLACEHOLDER_SLUG);
    }

    #[test]
    fn test_slugify_term_placeholder() {
        assert_eq!(slugify_term(""), PLACEHOLDER_SLUG);
        assert_eq!(slugify_term("!!!"), PLACEHOLDER_SLUG);
        assert_eq!(slugify_term("   "), PLACEHOLDER_SLUG);
        assert_eq!(slugify_term("日本語ですか？"), "日本語");
    }

    #[test]
    fn test_slugify_term_is_idempotent() {
        let inputs = [
            "Go",
            "Rust 异步 编程!",
            "  Spaces   everywhere ",
            "already-a-slug",
            "a - b",
            "--edge--",
            "Ünïcödé Letters",
            "",
            "#",
            "v1.2.3 release",
        ];
        for input in inputs {
            let once = slugify_term(input);
            assert_eq!(slugify_term(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_slugify_term_output_charset() {
        let inputs = ["Hello, World!", "容器 & Docker", "Ω mega", "tab\there", "x_y-z 9"];
        for input in inputs {
            let slug = slugify_term(input);
            assert!(slug.chars().all(is_valid_slug_char), "{slug:?}");
            assert!(!slug.starts_with('-') && !slug.ends_with('-'), "{slug:?}");
        }
    }

    proptest! {
        #[test]
        fn test_slugify_term_idempotent_for_any_text(text in "\\PC*") {
            let once = slugify_term(&text);
            prop_assert_eq!(slugify_term(&once), once);
        }

        #[test]
        fn test_slugify_term_idempotent_for_term_like_text(
            text in "[a-zA-Z0-9 _\\-\u{4e00}-\u{9fa5}!?.#+]{0,40}"
        ) {
            let once = slugify_term(&text);
            prop_assert_eq!(slugify_term(&once), once);
        }

        #[test]
        fn test_slugify_term_charset_for_any_text(text in "\\PC*") {
            let slug = slugify_term(&text);
            prop_assert!(!slug.is_empty());
            prop_assert!(slug.chars().all(is_valid_slug_char), "{:?} -> {:?}", text, slug);
            prop_assert!(!slug.starts_with('-') && !slug.ends_with('-'), "{:?}", slug);
            prop_assert!(!slug.contains("--"), "{:?}", slug);
        }
    }
}
