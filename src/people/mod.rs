pub mod cards;
pub mod json_ld;
pub mod merge;
pub mod parser;
pub mod text;
pub mod types;
pub mod url;

// Re-export the main types for easy importing
pub use parser::PeopleParser;
pub use types::{ParserConfig, ProfileRecord};
