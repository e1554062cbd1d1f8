/// Minimum username length in characters
pub const USERNAME_MIN_LEN: usize = 3;

/// Maximum username length in characters
pub const USERNAME_MAX_LEN: usize = 32;

/// Minimum password length in characters
pub const PASSWORD_MIN_LEN: usize = 6;

/// Maximum password length in characters (bcrypt input cap)
pub const PASSWORD_MAX_LEN: usize = 72;

/// Default bcrypt cost factor for stored password hashes
pub const DEFAULT_BCRYPT_COST: u32 = 12;

/// Maximum request body size in bytes (100 KiB)
/// Requests carry a username, a password and a couple of integers;
/// anything near this limit is garbage.
pub const MAX_BODY_BYTES: usize = 102_400;
