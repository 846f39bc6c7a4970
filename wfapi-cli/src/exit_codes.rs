/// Exit codes for CI/automation.
pub const SUCCESS: i32 = 0;
pub const INVALID_INPUT: i32 = 2;
pub const REMOTE_ERROR: i32 = 3;
pub const RUNTIME_ERROR: i32 = 4;
