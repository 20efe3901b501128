// ---------------------------------------------------------------------------
// Handler reply
// ---------------------------------------------------------------------------

/// Text produced by one handler call. Errors are soft: they are printed like
/// any other reply and the menu loop carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub is_error: bool,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}
