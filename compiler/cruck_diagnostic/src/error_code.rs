use std::fmt;

/// Error codes for all interpreter diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Structure errors (braces, entry point)
/// - E1xxx: Statement syntax errors
/// - E2xxx: Evaluation errors
/// - E3xxx: Resource errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Structure Errors (E0xxx)
    /// Unbalanced braces
    E0001,
    /// Entry-point block never closed
    E0002,
    /// Entry point required but missing
    E0003,

    // Statement Errors (E1xxx)
    /// Unsupported function declaration
    E1001,
    /// Missing semicolon or bad syntax
    E1002,
    /// Unknown statement
    E1003,

    // Evaluation Errors (E2xxx)
    /// Undeclared variable
    E2001,
    /// Integer overflow
    E2002,

    // Resource Errors (E3xxx)
    /// Step or time budget exhausted
    E3001,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: [ErrorCode; 9] = [
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E3001,
    ];

    /// Get the numeric code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E3001 => "E3001",
        }
    }

    /// Parse a code from its string form, ignoring ASCII case.
    pub fn parse(code: &str) -> Option<ErrorCode> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(code.trim()))
    }

    /// Check if this is a statement syntax error (E1xxx range).
    pub fn is_syntax_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Long-form explanation shown by `cruck explain`.
    pub fn explanation(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => {
                "Every `{` must be matched by a later `}`. The error points either at a \
                 closing brace with nothing left to close, or at the end of the source \
                 when a block was left open."
            }
            ErrorCode::E0002 => {
                "The `func main() {` header was found but its block never closes. \
                 Add the missing `}` after the last statement of `main`."
            }
            ErrorCode::E0003 => {
                "The run was configured to require an entry point and no \
                 `func main() {` header exists. Wrap the program in `func main() { ... }` \
                 or run without `--require-main`."
            }
            ErrorCode::E1001 => {
                "Only the `main` entry point may be declared. Programs with several \
                 functions are not supported; inline the statements into `main`."
            }
            ErrorCode::E1002 => {
                "A statement must end with `;`, and a block header must end with `{`. \
                 The error points at the end of the line where the terminator is missing."
            }
            ErrorCode::E1003 => {
                "The line does not match any statement form. Supported statements are \
                 `print`, `var`, `x = a + b;`, `while x < N {` and `if x <op> N {`."
            }
            ErrorCode::E2001 => {
                "A variable was read before being declared. Declare it with \
                 `var name = value;` before its first use."
            }
            ErrorCode::E2002 => {
                "An integer literal or the result of an addition does not fit in a \
                 signed 64-bit integer."
            }
            ErrorCode::E3001 => {
                "The run executed more steps, or ran longer, than its budget allows. \
                 This usually means a `while` guard variable is never advanced toward \
                 its bound."
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
