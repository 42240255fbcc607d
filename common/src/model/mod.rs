pub mod content;
pub mod folder;
pub mod generation;
pub mod placeholder;
pub mod template;
