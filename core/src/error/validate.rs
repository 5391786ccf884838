use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidateError {
    #[error("invalid chart pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("unreadable entry while scanning: {0}")]
    Glob(#[from] glob::GlobError),
}
