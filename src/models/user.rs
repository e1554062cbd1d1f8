use sqlx::FromRow;

/// User row as stored in the users table.
///
/// Deliberately not `Serialize`: `password` holds the bcrypt hash and must
/// never reach a client. Login builds its own response from the public
/// fields.
#[derive(Debug, Clone, FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    /// Salted bcrypt hash of the password
    pub password: String,
    /// Cumulative playtime in seconds
    pub time: i64,
    pub kills: i64,
    pub freezes: i64,
    pub hooks: i64,
    pub fires: i64,
}
