use crate::model::AnchorId;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EditError {
    #[error("unknown anchor {0}")]
    UnknownAnchor(AnchorId),
    #[error("parameter '{0}' must be finite")]
    NonFinite(&'static str),
    #[error("parameter '{param}' out of range [{min}, {max}], got {got}")]
    OutOfRange {
        param: &'static str,
        min: f32,
        max: f32,
        got: f32,
    },
}

impl EditError {
    /// Stable code reported across the wasm boundary.
    pub fn code(&self) -> &'static str {
        match self {
            EditError::UnknownAnchor(_) => "invalid_id",
            EditError::NonFinite(_) => "non_finite",
            EditError::OutOfRange { .. } => "out_of_range",
        }
    }
}

pub type Result<T, E = EditError> = std::result::Result<T, E>;
