//! Prompt construction and reply parsing for the text model.

pub mod assembler;
pub mod character;
pub mod library;
pub mod regenerate;
pub mod sequence;
pub mod tables;

pub use assembler::{build_user_prompt, PromptConfig, SLIDE_SYSTEM_PROMPT};
pub use character::{build_character_prompt, parse_character_description, CHARACTER_SYSTEM_PROMPT};
pub use regenerate::{build_regenerate_prompt, parse_regenerated_slide, RegenerateContext, REGENERATE_SYSTEM_PROMPT};
pub use sequence::{analyzer_system_prompt, build_analysis_prompt, build_sequence, parse_content_analysis};
