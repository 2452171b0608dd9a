use super::Format;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse {format} data: {details} (at line ~{line})")]
    Parse {
        format: Format,
        line: usize,
        details: String,
    },

    #[error("the '{0}' format is not supported for this read operation")]
    UnsupportedReadFormat(Format),

    #[error("entity '{0}' is defined more than once in the document")]
    DuplicateEntity(String),

    #[error("failed to serialize {format} output: {details}")]
    Serialize { format: Format, details: String },
}

impl Error {
    pub fn parse(format: Format, line: usize, details: impl Into<String>) -> Self {
        Self::Parse {
            format,
            line,
            details: details.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            return Error::Io {
                source: e.into(),
            };
        }
        if e.is_syntax() || e.is_data() || e.is_eof() {
            return Error::parse(Format::Json, e.line(), e.to_string());
        }
        Error::Serialize {
            format: Format::Json,
            details: e.to_string(),
        }
    }
}
