use crate::error::Error;
use super::*;

#[test]
fn test_numeric_mapping() {
    assert_eq!(IntersectResult::None.as_u8(), 0);
    assert_eq!(IntersectResult::Partial.as_u8(), 1);
    assert_eq!(IntersectResult::Full.as_u8(), 2);
    assert_eq!(u8::from(IntersectResult::Full), 2);
}

#[test]
fn test_try_from_u8() {
    assert_eq!(IntersectResult::try_from(0).unwrap(), IntersectResult::None);
    assert_eq!(IntersectResult::try_from(1).unwrap(), IntersectResult::Partial);
    assert_eq!(IntersectResult::try_from(2).unwrap(), IntersectResult::Full);
}

#[test]
fn test_try_from_out_of_range() {
    match IntersectResult::try_from(3) {
        Err(Error::InvalidParameter(msg)) => assert!(msg.contains('3')),
        other => panic!("expected InvalidParameter, got {:?}", other),
    }
}

#[test]
fn test_is_visible() {
    assert!(!IntersectResult::None.is_visible());
    assert!(IntersectResult::Partial.is_visible());
    assert!(IntersectResult::Full.is_visible());
}
