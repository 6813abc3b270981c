//! Exit code constants for the hbr CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input, missing episode)
//! - 2: Validation failure (structure, schema, or semantic problems in a key file)
//! - 3: Execution failure (one or more outfiles were not encoded)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable files, or nothing to do.
pub const USER_ERROR: i32 = 1;

/// Validation failure: a key file was rejected.
pub const VALIDATION_FAILURE: i32 = 2;

/// Execution failure: HandBrakeCLI could not be run or failed for an outfile.
pub const EXECUTION_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, VALIDATION_FAILURE, EXECUTION_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn exit_codes_have_expected_values() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(USER_ERROR, 1);
        assert_eq!(VALIDATION_FAILURE, 2);
        assert_eq!(EXECUTION_FAILURE, 3);
    }
}
