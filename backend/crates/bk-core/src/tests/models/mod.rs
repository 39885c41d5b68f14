mod color_target;
mod font_family;
mod user_settings;
