pub mod generator;
pub mod prompt;
pub mod schema;

pub use generator::GeminiGenerator;
