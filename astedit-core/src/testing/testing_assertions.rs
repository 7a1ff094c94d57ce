//! Assertions over rendered fragments

use crate::render::Fragment;

/// The text of every leaf, in order, with empty leaves dropped.
pub fn leaf_texts(fragment: &Fragment) -> Vec<String> {
    fragment
        .leaves()
        .into_iter()
        .map(|leaf| leaf.leaf_text().to_string())
        .filter(|text| !text.is_empty())
        .collect()
}

/// Assert the fragment's non-empty leaves read exactly `expected`.
#[track_caller]
pub fn assert_leaf_texts(fragment: &Fragment, expected: &[&str]) {
    let actual = leaf_texts(fragment);
    assert_eq!(
        actual, expected,
        "leaf texts differ\n  actual:   {:?}\n  expected: {:?}",
        actual, expected
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Layout, TextClass, TokenKind};

    #[test]
    fn test_leaf_texts_skip_empty_leaves() {
        let fragment = Fragment::group(Layout::Inline, vec![
            Fragment::token(TokenKind::Keyword, "return"),
            Fragment::text("", TextClass::Plain),
            Fragment::text("x", TextClass::Identifier),
        ]);
        assert_eq!(leaf_texts(&fragment), vec!["return", "x"]);
    }
}
