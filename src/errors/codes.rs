use serde::{Deserialize, Serialize};

/// Coarse classification of router failures.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouterErrorCode {
    /// Bad or ambiguous route table; surfaced at construction.
    ConstructionConflict = 1000,
    InvalidOptions = 1001,
    NoMatch = 2000,
    MissingRequiredParameter = 3000,
    UnregisteredRoute = 3001,
    TornDown = 4000,
}

impl RouterErrorCode {
    pub fn as_u16(self) -> u16 {
        self as u16
    }

    pub fn name(self) -> &'static str {
        match self {
            RouterErrorCode::ConstructionConflict => "construction_conflict",
            RouterErrorCode::InvalidOptions => "invalid_options",
            RouterErrorCode::NoMatch => "no_match",
            RouterErrorCode::MissingRequiredParameter => "missing_required_parameter",
            RouterErrorCode::UnregisteredRoute => "unregistered_route",
            RouterErrorCode::TornDown => "torn_down",
        }
    }
}
