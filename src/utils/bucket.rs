//! Initial-letter buckets for taxonomy index pages.
//!
//! Latin terms group by their first letter, CJK terms by the first letter
//! of the romanized first character (`容器` → `R`), and everything else
//! lands in the `#` bucket. The catch-all term ("uncategorized") gets its
//! own bucket that always sorts last.

use super::slug::slugify_term;
use deunicode::deunicode_char;
use std::fmt;

/// Grouping key for a taxonomy term.
///
/// Variant order is the render order: letters A–Z, then `#`, then the
/// catch-all bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bucket {
    /// Uppercase Latin letter
    Letter(char),
    /// Digits, symbols and anything that does not romanize to a letter
    Symbol,
    /// Reserved bucket for the catch-all term
    CatchAll,
}

impl Bucket {
    /// HTML anchor id used by the navigation line.
    pub fn anchor(self, catch_all: &str) -> String {
        match self {
            Self::Letter(c) => c.to_ascii_lowercase().to_string(),
            Self::Symbol => "symbol".to_owned(),
            Self::CatchAll => slugify_term(catch_all),
        }
    }

    /// Heading text for the bucket.
    pub fn label(self, catch_all: &str) -> String {
        match self {
            Self::CatchAll => catch_all.to_owned(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(c) => write!(f, "{c}"),
            Self::Symbol => f.write_str("#"),
            Self::CatchAll => f.write_str("*"),
        }
    }
}

/// Compute the bucket of a term from its first character only.
pub fn bucket_for(term: &str) -> Bucket {
    let Some(first) = term.chars().next() else {
        return Bucket::Symbol;
    };

    if first.is_ascii_alphabetic() {
        return Bucket::Letter(first.to_ascii_uppercase());
    }

    romanized_initial(first).map_or(Bucket::Symbol, Bucket::Letter)
}

/// First letter of the romanization of `c`, uppercased.
fn romanized_initial(c: char) -> Option<char> {
    let romanized = deunicode_char(c)?;
    let initial = romanized.chars().next()?;
    initial
        .is_ascii_alphabetic()
        .then(|| initial.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn all_buckets() -> Vec<Bucket> {
        ('A'..='Z')
            .map(Bucket::Letter)
            .chain([Bucket::Symbol, Bucket::CatchAll])
            .collect()
    }

    #[test]
    fn test_bucket_latin() {
        assert_eq!(bucket_for("Go"), Bucket::Letter('G'));
        assert_eq!(bucket_for("rust"), Bucket::Letter('R'));
        assert_eq!(bucket_for("zig"), Bucket::Letter('Z'));
    }

    #[test]
    fn test_bucket_cjk_romanized() {
        assert_eq!(bucket_for("容器"), Bucket::Letter('R'));
        assert_eq!(bucket_for("日志"), Bucket::Letter('R'));
        assert_eq!(bucket_for("数据库"), Bucket::Letter('S'));
        assert_eq!(bucket_for("编程"), Bucket::Letter('B'));
    }

    #[test]
    fn test_bucket_accented_latin() {
        assert_eq!(bucket_for("Élan"), Bucket::Letter('E'));
    }

    #[test]
    fn test_bucket_symbols() {
        assert_eq!(bucket_for(""), Bucket::Symbol);
        assert_eq!(bucket_for("2024"), Bucket::Symbol);
        assert_eq!(bucket_for("#hash"), Bucket::Symbol);
        assert_eq!(bucket_for(".NET"), Bucket::Symbol);
    }

    #[test]
    fn test_bucket_only_first_char_matters() {
        assert_eq!(bucket_for("A容器"), Bucket::Letter('A'));
        assert_eq!(bucket_for("容a"), Bucket::Letter('R'));
        assert_eq!(bucket_for("1abc"), Bucket::Symbol);
    }

    #[test]
    fn test_bucket_ordering_is_total() {
        let mut buckets = vec![
            Bucket::CatchAll,
            Bucket::Symbol,
            Bucket::Letter('Z'),
            Bucket::Letter('A'),
            Bucket::Letter('M'),
        ];
        buckets.sort();
        assert_eq!(
            buckets,
            vec![
                Bucket::Letter('A'),
                Bucket::Letter('M'),
                Bucket::Letter('Z'),
                Bucket::Symbol,
                Bucket::CatchAll,
            ]
        );
    }

    #[test]
    fn test_bucket_anchor_and_label() {
        assert_eq!(Bucket::Letter('G').anchor("未分类"), "g");
        assert_eq!(Bucket::Symbol.anchor("未分类"), "symbol");
        assert_eq!(Bucket::CatchAll.anchor("Untagged"), "untagged");
        assert_eq!(Bucket::CatchAll.anchor("未分类"), "未分类");
        assert_eq!(Bucket::CatchAll.anchor("No Tags"), "no-tags");
        assert_eq!(Bucket::Letter('G').label("未分类"), "G");
        assert_eq!(Bucket::Symbol.label("未分类"), "#");
        assert_eq!(Bucket::CatchAll.label("未分类"), "未分类");
    }

    proptest! {
        #[test]
        fn test_any_permutation_sorts_to_render_order(
            buckets in Just(all_buckets()).prop_shuffle()
        ) {
            let mut buckets = buckets;
            buckets.sort();
            prop_assert_eq!(buckets, all_buckets());
        }

        #[test]
        fn test_bucket_for_is_letter_or_symbol(term in "\\PC*") {
            match bucket_for(&term) {
                Bucket::Letter(c) => prop_assert!(c.is_ascii_uppercase(), "{:?} -> {:?}", term, c),
                Bucket::Symbol => {}
                Bucket::CatchAll => prop_assert!(false, "{:?} landed in the catch-all", term),
            }
        }

        #[test]
        fn test_catch_all_anchor_is_a_slug(label in "\\PC*") {
            let anchor = Bucket::CatchAll.anchor(&label);
            prop_assert!(!anchor.contains(char::is_whitespace), "{:?}", anchor);
        }
    }
}
