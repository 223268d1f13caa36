use super::*;

#[test]
fn every_listed_keyword_resolves() {
    for kw in KEYWORDS {
        assert!(is_keyword(kw), "{kw} should be a keyword");
        assert_eq!(classify_local(kw), TokenKind::Keyword, "{kw}");
    }
}

#[test]
fn keyword_list_is_sorted_and_unique() {
    let mut sorted = KEYWORDS.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted, KEYWORDS.to_vec());
}

#[test]
fn prefix_is_not_keyword() {
    assert_eq!(classify_local("classify"), TokenKind::IdentifierLocal);
    assert_eq!(classify_local("ends"), TokenKind::IdentifierLocal);
    assert_eq!(classify_local("iff"), TokenKind::IdentifierLocal);
    assert_eq!(classify_local("defined"), TokenKind::IdentifierLocal);
}

#[test]
fn truncation_is_not_keyword() {
    assert!(!is_keyword("clas"));
    assert!(!is_keyword("e"));
    assert!(!is_keyword("unles"));
}

#[test]
fn uppercase_spelling_is_not_keyword() {
    assert!(!is_keyword("Class"));
    assert!(!is_keyword("END"));
    assert!(!is_keyword("Self"));
}

#[test]
fn out_of_range_lengths_rejected() {
    assert!(!is_keyword(""));
    assert!(!is_keyword("x"));
    assert!(!is_keyword("defined??"));
    assert!(!is_keyword("a_very_long_identifier"));
}

#[test]
fn underscore_names_are_identifiers() {
    assert_eq!(classify_local("_"), TokenKind::IdentifierLocal);
    assert_eq!(classify_local("_end"), TokenKind::IdentifierLocal);
    assert_eq!(classify_local("self_"), TokenKind::IdentifierLocal);
}
