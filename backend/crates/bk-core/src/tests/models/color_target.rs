use crate::ColorTarget;

use std::str::FromStr;

#[test]
fn test_color_target_as_str() {
    assert_eq!(ColorTarget::Primary.as_str(), "primary");
    assert_eq!(ColorTarget::Secondary.as_str(), "secondary");
}

#[test]
fn test_color_target_from_str() {
    assert_eq!(
        ColorTarget::from_str("primary").unwrap(),
        ColorTarget::Primary
    );
    assert_eq!(
        ColorTarget::from_str("secondary").unwrap(),
        ColorTarget::Secondary
    );
    assert!(ColorTarget::from_str("tertiary").is_err());
}

#[test]
fn test_color_target_default() {
    assert_eq!(ColorTarget::default(), ColorTarget::Primary);
}
