pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::color_target::ColorTarget;
pub use models::font_family::FontFamily;
pub use models::user_settings::{
    DEFAULT_FONT_FAMILY, DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR, UserSettings,
};
