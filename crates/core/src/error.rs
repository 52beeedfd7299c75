use leon::{ParseError, RenderError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Input was closed before the command was complete.")]
    InputClosed,

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("✗ \"{}\" is not yet supported. Sorry!", .0)]
    UnsupportedKind(String),

    #[error("Unknown selection: \"{}\"", .0)]
    UnknownChoice(String),

    #[error("Nothing to choose from for \"{}\"", .0)]
    EmptyMenu(String),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("No blocks were found in the block catalog. Is `{}` empty?", .path)]
    EmptyCatalog { path: String },

    #[error("Error encoding value: {}", .0)]
    Json(#[from] serde_json::Error),

    #[error("Error parsing command template: {}", .0)]
    Parse(#[from] ParseError),

    #[error("Error rendering command template: {}", .0)]
    Render(#[from] RenderError),

    #[error("No clipboard tool is available (tried {}).", .0)]
    ClipboardUnavailable(String),

    #[error("Clipboard tool `{}` exited with a failure.", .0)]
    ClipboardFailed(String),

    #[error("Desktop notifications are not supported on this platform.")]
    NotifierUnavailable,

    #[error("Notification tool `{}` exited with a failure.", .0)]
    NotifyFailed(String),
}

impl Error {
    pub fn empty_catalog(path: String) -> Self {
        Self::EmptyCatalog { path }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
