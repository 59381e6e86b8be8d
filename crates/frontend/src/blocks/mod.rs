//! One-shot DOM decorators for authored blocks.

pub mod b200_hero;
pub mod b201_quote;
