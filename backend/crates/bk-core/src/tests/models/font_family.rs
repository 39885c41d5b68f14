use crate::FontFamily;

use std::str::FromStr;

#[test]
fn test_font_catalogue_has_fifteen_entries_starting_with_arial() {
    assert_eq!(FontFamily::ALL.len(), 15);
    assert_eq!(FontFamily::ALL[0], FontFamily::Arial);
    assert_eq!(FontFamily::ALL[14], FontFamily::Impact);
}

#[test]
fn test_font_from_str_matches_every_catalogue_name() {
    for font in FontFamily::ALL {
        assert_eq!(FontFamily::from_str(font.as_str()).unwrap(), font);
    }
}

#[test]
fn test_font_from_str_is_case_sensitive() {
    assert!(FontFamily::from_str("arial").is_err());
    assert!(FontFamily::from_str("Wingdings").is_err());
}

#[test]
fn test_font_serializes_as_display_name() {
    let json = serde_json::to_string(&FontFamily::TimesNewRoman).unwrap();
    assert_eq!(json, "\"Times New Roman\"");
    assert_eq!(FontFamily::ComicSansMs.to_string(), "Comic Sans MS");
}
