pub mod color_target;
pub mod font_family;
pub mod user_settings;
