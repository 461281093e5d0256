pub mod entry;
pub mod kana;
pub mod normalize;
pub mod parser;
pub mod preprocess;
pub mod reading;
pub mod render;
pub mod state;
pub mod token;

pub use normalize::normalize_tokens;
pub use parser::parse_input;
pub use reading::Reading;
pub use render::{RubySpan, render_with_ruby};
