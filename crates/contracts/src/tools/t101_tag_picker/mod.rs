pub mod record;

pub use record::{decode_tagging, tags_to_text, TagRecord, TaggingDocument};
