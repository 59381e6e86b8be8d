pub mod api;
pub mod commit;
pub mod item;
pub mod view;

pub use view::ColorPicker;
