//! 应用层

pub mod user;
