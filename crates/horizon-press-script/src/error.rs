//! Error types for the scripting bridge.

/// Result type alias for scripting operations.
pub type Result<T> = std::result::Result<T, ScriptError>;

/// Category of a [`ScriptError`], as seen by scripts.
///
/// The category name prefixes every error message so Lua code catching an
/// error with `pcall` can tell the categories apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No document is open.
    NoDocOpen,
    /// No item name was given and nothing is selected.
    NoValidObject,
    /// A named item, or a selected character's color, was not found.
    NotFound,
    /// The item is not of the kind the accessor needs.
    WrongFrameType,
    /// Generic failure, such as an out-of-range page number.
    Runtime,
}

impl ErrorKind {
    /// The category name surfaced to scripts.
    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::NoDocOpen => "NoDocOpenError",
            ErrorKind::NoValidObject => "NoValidObjectError",
            ErrorKind::NotFound => "NotFoundError",
            ErrorKind::WrongFrameType => "WrongFrameTypeError",
            ErrorKind::Runtime => "RuntimeError",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors raised by accessors and the script host.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// The call needs an open document.
    #[error("NoDocOpenError: Command does not make sense without an open document.")]
    NoDocument,

    /// An empty item name was given with no selection to fall back on.
    #[error("NoValidObjectError: Cannot use empty string for object name when there is no selection")]
    NoSelection,

    /// Lookup failure.
    #[error("NotFoundError: {0}")]
    NotFound(String),

    /// The resolved item has the wrong kind for the accessor.
    #[error("WrongFrameTypeError: {0}")]
    WrongFrameType(String),

    /// Generic runtime failure.
    #[error("RuntimeError: {0}")]
    Runtime(String),

    /// Error from the Lua interpreter, possibly carrying a domain error
    /// raised inside an accessor.
    #[error("Lua error: {0}")]
    Lua(#[from] mlua::Error),

    /// The host configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ScriptError {
    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a wrong-frame-type error.
    pub fn wrong_frame_type(message: impl Into<String>) -> Self {
        Self::WrongFrameType(message.into())
    }

    /// Create a runtime error.
    pub fn runtime(message: impl Into<String>) -> Self {
        Self::Runtime(message.into())
    }

    /// Returns the script-visible category of this error.
    ///
    /// Interpreter errors report the category of the domain error they
    /// carry, or [`ErrorKind::Runtime`] if they carry none.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScriptError::NoDocument => ErrorKind::NoDocOpen,
            ScriptError::NoSelection => ErrorKind::NoValidObject,
            ScriptError::NotFound(_) => ErrorKind::NotFound,
            ScriptError::WrongFrameType(_) => ErrorKind::WrongFrameType,
            ScriptError::Lua(err) => Self::from_lua_error(err).map_or(ErrorKind::Runtime, Self::kind),
            ScriptError::Runtime(_) | ScriptError::Config(_) => ErrorKind::Runtime,
        }
    }

    /// Finds the domain error carried by an interpreter error.
    ///
    /// Errors raised by accessors reach the host wrapped in one or more
    /// callback layers; this unwraps them.
    pub fn from_lua_error(error: &mlua::Error) -> Option<&ScriptError> {
        match error {
            mlua::Error::ExternalError(cause) => cause.downcast_ref::<ScriptError>(),
            mlua::Error::CallbackError { cause, .. } => Self::from_lua_error(cause),
            mlua::Error::WithContext { cause, .. } => Self::from_lua_error(cause),
            _ => None,
        }
    }
}

/// Errors raised while loading a [`ScriptHostConfig`](crate::ScriptHostConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The TOML source could not be parsed.
    #[error("Invalid script host configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The global table name is not a Lua identifier.
    #[error("Invalid table name '{0}': must be a Lua identifier")]
    InvalidTableName(String),
}
