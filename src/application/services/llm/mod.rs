//! Prompt text and reply parsing for the model calls

pub mod prompt_builder;
pub mod scene_parser;

pub use prompt_builder::{
    build_classification_prompt, build_image_prompt, build_relevance_prompt,
    build_scene_breakdown_prompt,
};
pub use scene_parser::parse_scene_breakdown;
