pub mod config;
pub mod host;
pub mod load_state;
pub mod selectable_list;
