//! 收藏 HTTP API 客户端
//!
//! 负责所有收藏相关的 HTTP 请求。三个逻辑操作（列表 / 创建 / 按图片 ID
//! 删除）在这里被翻译成 HTTP 调用，结果一律规范化为 [`StoreResult`]，
//! 任何异常都不会越过本层边界向上传播。

use crate::luxor::favorites::models::{FavoriteRecord, PhotoRecord};
use crate::luxor::types::{handle_http_response, StoreResult};
use async_trait::async_trait;
use tracing::{debug, info};

/// 收藏远端存储的抽象接口
///
/// 同步状态组件只依赖此接口，不感知 HTTP 细节；测试中用脚本化实现替换。
#[async_trait]
pub trait FavoritesStore: Send + Sync {
    /// 拉取当前用户的全部收藏（服务端按创建时间倒序返回，最新在前）
    async fn list_favorites(&self) -> StoreResult<Vec<FavoriteRecord>>;

    /// 创建收藏（重复的 (user, photo_id) 由服务端原地更新快照）
    async fn create_favorite(&self, photo: &PhotoRecord) -> StoreResult<FavoriteRecord>;

    /// 按图片 ID 删除收藏
    async fn delete_favorite(&self, photo_id: &str) -> StoreResult<serde_json::Value>;
}

/// 收藏相关的 HTTP API 客户端
pub struct FavoritesApi {
    client: reqwest::Client,
    api_base_url: String,
    user_id: String,
}

impl FavoritesApi {
    /// 创建新的收藏 API 客户端
    ///
    /// `client` 应该已经在外部配置好 `X-User-ID` 拦截器
    pub fn new(client: reqwest::Client, api_base_url: String, user_id: String) -> Self {
        Self {
            client,
            api_base_url,
            user_id,
        }
    }
}

#[async_trait]
impl FavoritesStore for FavoritesApi {
    async fn list_favorites(&self) -> StoreResult<Vec<FavoriteRecord>> {
        let url = format!("{}/favorites", self.api_base_url);

        info!("[FavoritesAPI] 📡 请求收藏列表");
        debug!("[FavoritesAPI]   请求URL: {}, 用户ID: {}", url, self.user_id);

        let response = self.client.get(&url).send().await;
        let result: StoreResult<Vec<FavoriteRecord>> =
            handle_http_response(response, "收藏列表").await;

        if result.success {
            info!(
                "[FavoritesAPI] ✅ 收藏列表响应，条目数: {}",
                result.data.as_ref().map(|d| d.len()).unwrap_or(0)
            );
        }
        result
    }

    async fn create_favorite(&self, photo: &PhotoRecord) -> StoreResult<FavoriteRecord> {
        let url = format!("{}/favorites", self.api_base_url);

        info!("[FavoritesAPI] 📡 创建收藏: photo_id={}", photo.id);
        debug!("[FavoritesAPI]   请求URL: {}, 用户ID: {}", url, self.user_id);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&serde_json::json!({
                "photo_id": photo.id,
                "photo_data": photo,
            }))
            .send()
            .await;

        let result: StoreResult<FavoriteRecord> = handle_http_response(response, "创建收藏").await;

        // 成功但缺少回显记录的响应按逻辑失败处理，调用方要么拿到完整的
        // 强类型记录，要么回滚，不需要再推断 payload 形状
        if result.success && result.data.is_none() {
            return StoreResult::failure("响应中缺少 data 字段");
        }

        if result.success {
            info!("[FavoritesAPI] ✅ 创建收藏成功: photo_id={}", photo.id);
        }
        result
    }

    async fn delete_favorite(&self, photo_id: &str) -> StoreResult<serde_json::Value> {
        let url = format!("{}/favorites/{}", self.api_base_url, photo_id);

        info!("[FavoritesAPI] 📡 删除收藏: photo_id={}", photo_id);
        debug!("[FavoritesAPI]   请求URL: {}, 用户ID: {}", url, self.user_id);

        let response = self.client.delete(&url).send().await;
        let result: StoreResult<serde_json::Value> =
            handle_http_response(response, "删除收藏").await;

        if result.success {
            info!("[FavoritesAPI] ✅ 删除收藏成功: photo_id={}", photo_id);
        }
        result
    }
}
