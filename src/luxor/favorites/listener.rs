//! 收藏监听器回调接口

use async_trait::async_trait;

/// 收藏监听器回调接口（由界面层注册，用于驱动渲染）
#[async_trait]
pub trait FavoritesListener: Send + Sync {
    /// 收藏列表发生变更（重载或切换成功后），参数为 JSON 数组字符串
    async fn on_favorites_changed(&self, favorites_json: String);

    /// 同步出错（重载失败或切换被回滚），参数为面向用户的错误文案
    async fn on_sync_error(&self, message: String);
}

/// 默认空实现（无操作）
pub struct EmptyFavoritesListener;

#[async_trait]
impl FavoritesListener for EmptyFavoritesListener {
    async fn on_favorites_changed(&self, _favorites_json: String) {
        // 默认不做任何处理
    }

    async fn on_sync_error(&self, _message: String) {
        // 默认不做任何处理
    }
}
