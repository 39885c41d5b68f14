//! Fonts offered by the branding editor.
//!
//! The stored record keeps the font as a plain string, so a value outside
//! this catalogue can still round-trip through the backend. The catalogue
//! only constrains what the editor offers.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FontFamily {
    #[default]
    #[serde(rename = "Arial")]
    Arial,
    #[serde(rename = "Helvetica")]
    Helvetica,
    #[serde(rename = "Times New Roman")]
    TimesNewRoman,
    #[serde(rename = "Times")]
    Times,
    #[serde(rename = "Courier New")]
    CourierNew,
    #[serde(rename = "Courier")]
    Courier,
    #[serde(rename = "Verdana")]
    Verdana,
    #[serde(rename = "Georgia")]
    Georgia,
    #[serde(rename = "Palatino")]
    Palatino,
    #[serde(rename = "Garamond")]
    Garamond,
    #[serde(rename = "Bookman")]
    Bookman,
    #[serde(rename = "Comic Sans MS")]
    ComicSansMs,
    #[serde(rename = "Trebuchet MS")]
    TrebuchetMs,
    #[serde(rename = "Arial Black")]
    ArialBlack,
    #[serde(rename = "Impact")]
    Impact,
}

impl FontFamily {
    /// Catalogue in display order
    pub const ALL: [FontFamily; 15] = [
        FontFamily::Arial,
        FontFamily::Helvetica,
        FontFamily::TimesNewRoman,
        FontFamily::Times,
        FontFamily::CourierNew,
        FontFamily::Courier,
        FontFamily::Verdana,
        FontFamily::Georgia,
        FontFamily::Palatino,
        FontFamily::Garamond,
        FontFamily::Bookman,
        FontFamily::ComicSansMs,
        FontFamily::TrebuchetMs,
        FontFamily::ArialBlack,
        FontFamily::Impact,
    ];

    /// Name as stored in `user_settings.font_family`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Arial => "Arial",
            Self::Helvetica => "Helvetica",
            Self::TimesNewRoman => "Times New Roman",
            Self::Times => "Times",
            Self::CourierNew => "Courier New",
            Self::Courier => "Courier",
            Self::Verdana => "Verdana",
            Self::Georgia => "Georgia",
            Self::Palatino => "Palatino",
            Self::Garamond => "Garamond",
            Self::Bookman => "Bookman",
            Self::ComicSansMs => "Comic Sans MS",
            Self::TrebuchetMs => "Trebuchet MS",
            Self::ArialBlack => "Arial Black",
            Self::Impact => "Impact",
        }
    }
}

impl FromStr for FontFamily {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        Self::ALL
            .into_iter()
            .find(|font| font.as_str() == s)
            .ok_or_else(|| CoreError::InvalidFontFamily {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl std::fmt::Display for FontFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
