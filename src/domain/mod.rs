//! Domain layer - Tiddler conversion logic

pub mod filename;
pub mod markup;
pub mod tags;
pub mod tiddler;

pub use filename::{output_file_name, sanitize_title};
pub use markup::transform;
pub use tags::LanguageSet;
pub use tiddler::{TagFilter, Tiddler};
