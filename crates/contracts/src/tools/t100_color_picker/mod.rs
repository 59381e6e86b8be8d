pub mod record;

pub use record::{build_eds_url, colors_to_html_list, decode_colors, ColorRecord};
