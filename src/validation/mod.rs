//! Validation Engine
//!
//! Attribute predicates shared by every markup node.

pub mod engine;

pub use engine::{
    all_of, allowed_callback_event, allowed_language, allowed_method, allowed_voice,
    in_vocabulary, in_vocabulary_optional, int_between, int_between_optional, numeric,
    numeric_optional, numeric_or_wait, numeric_or_wait_optional, one_of, one_of_optional,
    required, touch_tone_keys, Checks,
};
