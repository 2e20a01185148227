use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("parameter segment '{segment}' in pattern '{pattern}' is missing a name")]
    ParameterMissingName { pattern: String, segment: String },
    #[error("parameter name '{name}' in pattern '{pattern}' contains ':'")]
    ParameterNameContainsColon { pattern: String, name: String },
}

pub type PatternResult<T> = Result<T, PatternError>;
