use crate::validator::ValidationError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid graph spec: {0}")]
    Json(#[from] serde_json::Error),

    #[error("graph spec has {} defect(s): {}", .0.len(), join_defects(.0))]
    Invalid(Vec<ValidationError>),

    #[error("viewport script error on line {line}: unexpected `{context}`")]
    Script { line: usize, context: String },
}

fn join_defects(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
