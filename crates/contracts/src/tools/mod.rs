pub mod t100_color_picker;
pub mod t101_tag_picker;
