use rowan::TextRange;
use serde::Serialize;

/// Diagnostic kinds ordered by priority (highest priority first).
///
/// Priority rationale:
/// - An unclosed body cascades over everything after it
/// - Expected-token errors are root causes the user should fix first
/// - Unexpected-token runs are often consequences of the above
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    UnclosedBody,

    ExpectedRParen,
    ExpectedLBrace,
    ExpectedComma,
    ExpectedSemicolon,
    ExpectedIdentifier,
    ExpectedPattern,
    ExpectedDeclaration,

    UnexpectedToken,
}

impl DiagnosticKind {
    /// Default severity for this kind. Everything the parser reports today
    /// is an error; the severity channel exists for downstream passes.
    pub fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnclosedBody => "missing closing `}`",
            Self::ExpectedRParen => "expected `)`",
            Self::ExpectedLBrace => "expected `{`",
            Self::ExpectedComma => "expected `,`",
            Self::ExpectedSemicolon => "expected `;`",
            Self::ExpectedIdentifier => "expected identifier",
            Self::ExpectedPattern => "expected pattern",
            Self::ExpectedDeclaration => "expected class, interface, enum, or record",
            Self::UnexpectedToken => "unexpected token",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single message bound to a text range of the parsed source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub(crate) kind: DiagnosticKind,
    pub(crate) range: TextRange,
    pub(crate) message: String,
}

impl Diagnostic {
    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self {
            kind,
            range,
            message: kind.fallback_message().to_string(),
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}: {}",
            self.severity(),
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )
    }
}
