//! 收藏模块
//!
//! 实现 Luxor 客户端的收藏同步功能（乐观更新 + 失败回滚）

pub mod api;
pub mod listener;
pub mod models;
pub mod service;

// 重新导出主要类型和函数
pub use api::{FavoritesApi, FavoritesStore};
pub use listener::{EmptyFavoritesListener, FavoritesListener};
pub use models::{
    FavoriteRecord, FavoritesSyncerConfig, PhotoAttribution, PhotoLinks, PhotoRecord, PhotoUrls,
};
pub use service::FavoritesSyncer;
