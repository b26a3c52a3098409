use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestErrorKind {
    Syntax,
    Shape,
}

/// Rejection of a submitted course document. Either variant leaves the
/// previously rendered preview in place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    #[error("invalid JSON syntax: {0}")]
    Syntax(String),
    #[error("unexpected JSON shape: {0}")]
    Shape(String),
}

impl IngestError {
    pub fn kind(&self) -> IngestErrorKind {
        match self {
            Self::Syntax(_) => IngestErrorKind::Syntax,
            Self::Shape(_) => IngestErrorKind::Shape,
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template '{name}' failed: {source}")]
    Template {
        name: String,
        #[source]
        source: tera::Error,
    },
    #[error("unable to serialize view: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("{0}")]
    Io(String),
}

impl RenderError {
    pub fn template(name: &str, source: tera::Error) -> Self {
        Self::Template {
            name: name.to_string(),
            source,
        }
    }
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("{0}")]
    Io(String),
    #[error("invalid settings: {0}")]
    Settings(String),
}

pub struct ExitCode;

impl ExitCode {
    pub const SUCCESS: i32 = 0;
    pub const ERROR: i32 = 1;
    pub const INVALID_INPUT: i32 = 2;
    pub const RENDER_FAILED: i32 = 3;
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Ingest(_) => ExitCode::INVALID_INPUT,
            Self::Render(_) => ExitCode::RENDER_FAILED,
            Self::Io(_) | Self::Settings(_) => ExitCode::ERROR,
        }
    }
}
