use colored::Colorize;
use std::fmt;
use std::io;

use crate::student::Field;

/// A field value rejected by the record model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    field: Field,
    message: String,
}

impl ValidationError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// Builds the standard message for a field's character-class rule.
    pub fn for_field(field: Field) -> Self {
        let message = match field {
            Field::FirstName => "The first name should only contain letters",
            Field::LastName => "The last name should only contain letters",
            Field::CourseName => {
                "The course name should only contain letters, numbers, and spaces"
            }
        };
        Self::new(field, message)
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug)]
pub enum RegistrationError {
    Validation(ValidationError),
    IoError {
        operation: String,
        path: Option<String>,
        source: io::Error,
    },
    JsonError {
        path: String,
        source: serde_json::Error,
    },
    PromptError(dialoguer::Error),
    Other(anyhow::Error),
}

/// The "technical" half of an error report: what kind of failure happened
/// and the underlying error text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechnicalDetail {
    pub category: String,
    pub description: String,
}

impl TechnicalDetail {
    pub fn new(category: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            description: description.into(),
        }
    }
}

impl RegistrationError {
    pub fn io_error(operation: impl Into<String>, path: Option<String>, source: io::Error) -> Self {
        Self::IoError {
            operation: operation.into(),
            path,
            source,
        }
    }

    pub fn json_error(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::JsonError {
            path: path.into(),
            source,
        }
    }

    pub fn technical_detail(&self) -> TechnicalDetail {
        match self {
            Self::Validation(err) => TechnicalDetail::new("ValidationError", err.message()),
            Self::IoError { source, .. } => {
                TechnicalDetail::new(format!("IoError({:?})", source.kind()), source.to_string())
            }
            Self::JsonError { source, .. } => TechnicalDetail::new(
                format!("JsonError({:?})", source.classify()),
                source.to_string(),
            ),
            Self::PromptError(err) => TechnicalDetail::new("PromptError", err.to_string()),
            Self::Other(err) => TechnicalDetail::new("Error", format!("{err:#}")),
        }
    }
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{} {}", "✗".red().bold(), err),
            Self::IoError {
                operation,
                path,
                source,
            } => {
                writeln!(
                    f,
                    "{} I/O error during: {}",
                    "✗".red().bold(),
                    operation.yellow()
                )?;
                if let Some(path) = path {
                    writeln!(f, "  {} Path: {}", "→".blue(), path)?;
                }
                write!(f, "  {} Error: {}", "→".blue(), source)
            }
            Self::JsonError { path, source } => {
                writeln!(f, "{} Malformed enrollment data", "✗".red().bold())?;
                writeln!(f, "  {} Path: {}", "→".blue(), path.yellow())?;
                write!(f, "  {} Error: {}", "→".blue(), source)
            }
            Self::PromptError(err) => write!(f, "{} Prompt failed: {}", "✗".red().bold(), err),
            Self::Other(err) => write!(f, "{} {}", "✗".red().bold(), err),
        }
    }
}

impl std::error::Error for RegistrationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::IoError { source, .. } => Some(source),
            Self::JsonError { source, .. } => Some(source),
            Self::PromptError(err) => Some(err),
            Self::Other(err) => Some(err.as_ref()),
        }
    }
}

impl From<ValidationError> for RegistrationError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<io::Error> for RegistrationError {
    fn from(err: io::Error) -> Self {
        Self::IoError {
            operation: "unknown".to_string(),
            path: None,
            source: err,
        }
    }
}

impl From<anyhow::Error> for RegistrationError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err)
    }
}

impl From<dialoguer::Error> for RegistrationError {
    fn from(err: dialoguer::Error) -> Self {
        Self::PromptError(err)
    }
}

pub type Result<T> = std::result::Result<T, RegistrationError>;
