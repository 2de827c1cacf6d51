//! 用户模块

pub mod handler;
pub mod memory;
pub mod model;
#[cfg(feature = "database")]
pub mod postgres;
pub mod router;
pub mod service;

pub use handler::AppState;
pub use memory::MemoryUserStore;
pub use model::{User, UserChanges};
#[cfg(feature = "database")]
pub use postgres::PgUserStore;
pub use service::UserStore;
