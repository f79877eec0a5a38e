use thiserror::Error;

pub type HtmlResult<T> = Result<T, HtmlError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HtmlError {
    #[error("Invalid tag '{tag}': tags must start with a letter and contain only letters, digits or '-'")]
    InvalidTag { tag: String },

    #[error("Invalid attribute name '{name}'")]
    InvalidAttribute { name: String },

    #[error("Page configuration is missing required field 'title'")]
    MissingTitle,

    #[error("Invalid doctype '{value}'. Expected one of: transitional401, strict401, html5")]
    InvalidDocType { value: String },

    #[error("Invalid language tag '{lang}'")]
    InvalidLang { lang: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<serde_yaml::Error> for HtmlError {
    fn from(err: serde_yaml::Error) -> Self {
        HtmlError::ConfigError(err.to_string())
    }
}

impl From<std::io::Error> for HtmlError {
    fn from(err: std::io::Error) -> Self {
        HtmlError::Io(err.to_string())
    }
}
