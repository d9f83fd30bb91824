/// Error code registry for fnkit
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 7000-7999: Validation errors
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_INVALID_VALUE: u16 = 1005;
    pub const CONFIG_PARSE_ERROR: u16 = 1007;

    // Validation errors (7000-7999)
    pub const VALIDATION_GENERIC: u16 = 7000;
    pub const VALIDATION_EMPTY_INPUT: u16 = 7001;
}

/// Short human description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        ErrorCode::CONFIG_NOT_FOUND => "Configuration file not found",
        ErrorCode::CONFIG_INVALID_VALUE => "Configuration value out of range",
        ErrorCode::CONFIG_PARSE_ERROR => "Configuration file could not be parsed",
        ErrorCode::VALIDATION_GENERIC => "Generic validation error",
        ErrorCode::VALIDATION_EMPTY_INPUT => "Input sequence must not be empty",
        _ => "Unknown error code",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_are_described() {
        assert_eq!(
            describe_error_code(ErrorCode::VALIDATION_EMPTY_INPUT),
            "Input sequence must not be empty"
        );
        assert_eq!(
            describe_error_code(ErrorCode::CONFIG_PARSE_ERROR),
            "Configuration file could not be parsed"
        );
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(describe_error_code(4242), "Unknown error code");
    }
}
