//! Presentation modes for values with errors.
//!
//! ## Purpose
//!
//! A `DisplayMode` decides how a value and its error are rendered as text.
//! It never takes part in any numeric result.
//!
//! ## Key concepts
//!
//! * **Left operand wins**: binary operations keep the mode of the left operand.
//! * **Copy-paste modes**: the constructor-echo modes render text that reads
//!   like the expression that built the value.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Display Mode
// ============================================================================

/// How a value with error is rendered by `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayMode {
    /// LaTeX notation: `1.5 \pm 0.1` (default).
    #[default]
    Latex,

    /// Plain text: `1.5 +- 0.1`.
    PlusMinus,

    /// Constructor echo: `ValueWithError(1.5,0.1)`.
    ConstructorEcho,

    /// Constructor echo including the mode: `ValueWithError(1.5,0.1,ConstructorEchoWithMode)`.
    ConstructorEchoWithMode,
}

impl DisplayMode {
    /// Stable name of the mode, as used in the constructor-echo rendering.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            DisplayMode::Latex => "Latex",
            DisplayMode::PlusMinus => "PlusMinus",
            DisplayMode::ConstructorEcho => "ConstructorEcho",
            DisplayMode::ConstructorEchoWithMode => "ConstructorEchoWithMode",
        }
    }

    /// Write `value` and `error` in this mode.
    pub fn render<V: Display>(self, f: &mut Formatter<'_>, value: V, error: V) -> Result {
        match self {
            DisplayMode::Latex => write!(f, "{} \\pm {}", value, error),
            DisplayMode::PlusMinus => write!(f, "{} +- {}", value, error),
            DisplayMode::ConstructorEcho => write!(f, "ValueWithError({},{})", value, error),
            DisplayMode::ConstructorEchoWithMode => {
                write!(f, "ValueWithError({},{},{})", value, error, self.name())
            }
        }
    }
}

impl Display for DisplayMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.name())
    }
}
