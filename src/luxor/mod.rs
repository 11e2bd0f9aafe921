pub mod client;
pub mod db;
pub mod favorites;
pub mod identity;
pub mod search;
pub mod types;

// 重新导出收藏同步相关类型和函数
pub use favorites::{
    FavoriteRecord, FavoritesListener, FavoritesSyncer, FavoritesSyncerConfig, PhotoRecord,
};

// 重新导出身份相关函数
pub use identity::{is_valid_user_id, IdentityProvider};
