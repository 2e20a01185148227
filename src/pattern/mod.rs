mod error;
mod lexer;
mod segment;

pub use error::{PatternError, PatternResult};
pub use lexer::{parse_pattern, parse_segment};
pub use segment::{Pattern, PatternSegments, Segment};
