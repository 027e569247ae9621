use super::Column;

#[derive(PartialEq, Clone)]
pub struct Error {
    code: u16,
    column: Column,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            column: 0..0,
        }
    }

    pub fn in_column(&self, column: &Column) -> Error {
        debug_assert_eq!(self.column, 0..0);
        Error {
            code: self.code,
            column: column.clone(),
        }
    }

    /// Char span of the offending input, when known.
    pub fn column(&self) -> &Column {
        &self.column
    }
}

pub enum ErrorCode {
    InvalidInput = 1,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if (0..0) != self.column {
            write!(
                f,
                "Error {{ {} ({}..{}) }}",
                self.to_string(),
                self.column.start,
                self.column.end
            )
        } else {
            write!(f, "Error {{ {} }}", self.to_string())
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            1 => "invalid calculator input",
            _ => "",
        };
        if code_str.is_empty() {
            write!(f, "calculator error {}", self.code)
        } else {
            write!(f, "{}", code_str)
        }
    }
}
