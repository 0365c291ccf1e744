extern crate alloc;

use crate::{Group, ParseGroupError};
use alloc::string::ToString;

#[test]
fn test_all_is_positional() {
    assert_eq!(
        Group::ALL,
        [
            Group::Top,
            Group::High,
            Group::Median,
            Group::Low,
            Group::Bottom
        ]
    );
    for (position, group) in Group::ALL.into_iter().enumerate() {
        assert_eq!(group.position(), position);
    }
}

#[test]
fn test_ordering_follows_rank() {
    assert!(Group::Top < Group::High);
    assert!(Group::High < Group::Median);
    assert!(Group::Median < Group::Low);
    assert!(Group::Low < Group::Bottom);
}

#[test]
fn test_display() {
    assert_eq!(Group::Top.to_string(), "top");
    assert_eq!(Group::High.to_string(), "high");
    assert_eq!(Group::Median.to_string(), "median");
    assert_eq!(Group::Low.to_string(), "low");
    assert_eq!(Group::Bottom.to_string(), "bottom");
}

#[test]
fn test_parse_roundtrips_display() {
    for group in Group::ALL {
        assert_eq!(group.to_string().parse::<Group>(), Ok(group));
    }
}

#[test]
fn test_parse_ignores_ascii_case() {
    assert_eq!("MEDIAN".parse::<Group>(), Ok(Group::Median));
    assert_eq!("Bottom".parse::<Group>(), Ok(Group::Bottom));
}

#[test]
fn test_parse_rejects_unknown_names() {
    assert_eq!("middle".parse::<Group>(), Err(ParseGroupError));
    assert_eq!("".parse::<Group>(), Err(ParseGroupError));
    assert_eq!(" top".parse::<Group>(), Err(ParseGroupError));
}

#[test]
fn test_parse_error_message() {
    assert_eq!(
        ParseGroupError.to_string(),
        "unrecognized quintile group name"
    );
}
