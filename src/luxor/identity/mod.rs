//! 身份模块
//!
//! 提供按安装环境稳定的匿名用户 ID（UUID v4），一次生成、本地持久化

pub mod dao;
pub mod service;

pub use dao::IdentityDao;
pub use service::{is_valid_user_id, IdentityProvider, USER_ID_STORAGE_KEY};
