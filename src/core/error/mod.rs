use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigInvalidJson,

    ValidationInvalidArgument,

    ScaffoldInvalidName,
    ScaffoldToolExists,
    ScaffoldWriteFailed,

    InternalIoError,
    InternalJsonError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ConfigInvalidJson => "config.invalid_json",

            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",

            ErrorCode::ScaffoldInvalidName => "scaffold.invalid_name",
            ErrorCode::ScaffoldToolExists => "scaffold.tool_exists",
            ErrorCode::ScaffoldWriteFailed => "scaffold.write_failed",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
    pub retryable: Option<bool>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInvalidJsonDetails {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidArgumentDetails {
    pub field: String,
    pub problem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidNameDetails {
    pub field: String,
    pub raw: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolExistsDetails {
    pub tool: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    pub existing_paths: Vec<String>,
}

/// Context for a scaffold write that stopped part way through.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaffoldWriteFailedDetails {
    pub step: String,
    pub path: String,
    pub error: String,
    pub created_dirs: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalIoErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalJsonErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

fn to_details<T: Serialize>(details: T) -> Value {
    serde_json::to_value(details).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
            retryable: None,
        }
    }

    pub fn validation_invalid_argument(
        field: impl Into<String>,
        problem: impl Into<String>,
        id: Option<String>,
    ) -> Self {
        let details = to_details(InvalidArgumentDetails {
            field: field.into(),
            problem: problem.into(),
            id,
        });

        Self::new(
            ErrorCode::ValidationInvalidArgument,
            "Invalid argument",
            details,
        )
    }

    pub fn scaffold_invalid_name(field: impl Into<String>, raw: impl Into<String>) -> Self {
        let field = field.into();
        let raw = raw.into();
        let message = format!(
            "{} '{}' must contain at least one alphabetic character",
            field, raw
        );

        Self::new(
            ErrorCode::ScaffoldInvalidName,
            message,
            to_details(InvalidNameDetails { field, raw }),
        )
        .with_hint("Choose a name made of letters, e.g. 'parser'")
    }

    pub fn scaffold_tool_exists(
        tool: impl Into<String>,
        parent: Option<String>,
        existing_paths: Vec<String>,
    ) -> Self {
        let tool = tool.into();
        let message = match &parent {
            Some(parent) => format!("Subtool '{}' already exists under '{}'", tool, parent),
            None => format!("Tool '{}' already exists", tool),
        };

        Self::new(
            ErrorCode::ScaffoldToolExists,
            message,
            to_details(ToolExistsDetails {
                tool,
                parent,
                existing_paths,
            }),
        )
        .with_hint("Pick a different name or remove the existing directories first")
    }

    pub fn scaffold_write_failed(details: ScaffoldWriteFailedDetails) -> Self {
        let message = format!(
            "Scaffold write failed while trying to {} ({})",
            details.step, details.path
        );
        let leftovers = !details.created_dirs.is_empty();

        let mut err = Self::new(ErrorCode::ScaffoldWriteFailed, message, to_details(details));
        err.retryable = Some(true);
        if leftovers {
            err = err.with_hint(
                "Directories created before the failure were left in place; remove them before retrying",
            );
        }
        err.with_hint("Check permissions and free disk space, then retry")
    }

    pub fn config_invalid_json(path: impl Into<String>, err: serde_json::Error) -> Self {
        let details = to_details(ConfigInvalidJsonDetails {
            path: path.into(),
            error: err.to_string(),
        });

        Self::new(
            ErrorCode::ConfigInvalidJson,
            "Invalid JSON in configuration",
            details,
        )
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let details = to_details(InternalIoErrorDetails {
            error: error.into(),
            context,
        });

        Self::new(ErrorCode::InternalIoError, "IO error", details)
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        let details = to_details(InternalJsonErrorDetails {
            error: error.into(),
            context,
        });

        Self::new(ErrorCode::InternalJsonError, "JSON error", details)
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}
