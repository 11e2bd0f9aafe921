pub mod luxor;

// 重新导出常用类型和函数，方便外部使用
pub use luxor::{
    client::{LuxorClient, LuxorConfig},
    favorites::{FavoriteRecord, FavoritesListener, FavoritesSyncer, PhotoRecord},
    identity::is_valid_user_id,
    search::SearchData,
};
