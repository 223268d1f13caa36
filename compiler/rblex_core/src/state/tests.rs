use super::*;

#[test]
fn names_are_screaming_snake_case() {
    assert_eq!(State::Start.name(), "START");
    assert_eq!(State::SawDoubleAt.name(), "SAW_DOUBLE_AT");
    assert_eq!(State::InStringEscape.name(), "IN_STRING_ESCAPE");
    assert_eq!(State::InSingleStringEscape.name(), "IN_SINGLE_STRING_ESCAPE");
    assert_eq!(State::InHexNumber.to_string(), "IN_HEX_NUMBER");
}

#[test]
fn accept_displays_its_kind() {
    let accept = State::Accept(TokenKind::RangeExclusive);
    assert_eq!(accept.name(), "ACCEPT");
    assert_eq!(accept.to_string(), "ACCEPT(RANGE_EXCLUSIVE)");
}

#[test]
fn only_accept_is_accepting() {
    assert!(State::Accept(TokenKind::Unknown).is_accepting());
    assert!(!State::Start.is_accepting());
    assert!(!State::InRange.is_accepting());
}
