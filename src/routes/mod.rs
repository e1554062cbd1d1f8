pub mod health;
pub mod login;
pub mod online;
pub mod register;
pub mod time;
pub mod validation;

pub use health::health_check;
pub use login::login_user;
pub use online::{get_online, set_online};
pub use register::register_user;
pub use time::{get_time, update_time};
