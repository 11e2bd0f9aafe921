//! Luxor 客户端核心实现模块
//!
//! 此模块包含 Luxor 客户端的装配逻辑：本地身份、收藏同步器和检索
//! 适配器的创建与串联。

use crate::luxor::db::create_sqlite_pool_with_migration;
use crate::luxor::favorites::{
    EmptyFavoritesListener, FavoriteRecord, FavoritesApi, FavoritesListener, FavoritesStore,
    FavoritesSyncer, PhotoRecord,
};
use crate::luxor::identity::IdentityProvider;
use crate::luxor::search::{SearchApi, SearchData};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

/// 客户端配置
#[derive(Clone, Debug)]
pub struct LuxorConfig {
    /// HTTP API 基础地址
    pub api_base_url: String,
    /// 本地 SQLite 数据库 URL（身份持久化）
    ///
    /// 例如：`sqlite://luxor.db?mode=rwc`
    pub db_url: String,
}

impl LuxorConfig {
    /// 创建默认配置
    pub fn new() -> Self {
        Self {
            api_base_url: "http://localhost:8000/api".to_string(),
            db_url: "sqlite://luxor.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LuxorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Luxor 客户端
///
/// 照片检索 + 收藏同步的统一入口
pub struct LuxorClient {
    pub(crate) config: LuxorConfig,
    user_id: Option<String>,
    // 收藏同步器（乐观更新状态机）
    pub(crate) favorites_syncer: Option<Arc<FavoritesSyncer>>,
    // 收藏远端存储（保留引用以便更换监听器时重建同步器）
    favorites_store: Option<Arc<dyn FavoritesStore>>,
    // 检索 API 客户端
    search_api: Option<SearchApi>,
    // 收藏监听器（可由调用方注册）
    favorites_listener: Arc<dyn FavoritesListener>,
}

impl LuxorClient {
    /// 创建新的客户端
    /// - `config`: 客户端配置
    pub fn new(config: LuxorConfig) -> Self {
        Self {
            config,
            user_id: None,
            favorites_syncer: None,
            favorites_store: None,
            search_api: None,
            favorites_listener: Arc::new(EmptyFavoritesListener),
        }
    }

    /// 注册收藏监听器
    pub fn set_favorites_listener(&mut self, listener: Arc<dyn FavoritesListener>) {
        self.favorites_listener = listener.clone();

        // 若同步器已存在，则用新的监听器重建同步器，保持回调一致
        if let Some(store) = &self.favorites_store {
            self.favorites_syncer = Some(Arc::new(FavoritesSyncer::with_store(
                store.clone(),
                listener,
            )));
        }
    }

    /// 启动客户端：准备本地存储和身份，装配各组件，并触发首次收藏同步
    pub async fn start(&mut self) -> Result<()> {
        info!(
            "[Client] 🚀 启动 Luxor 客户端 (api={})",
            self.config.api_base_url
        );

        // 本地 SQLite（身份持久化）
        let pool = create_sqlite_pool_with_migration(&self.config.db_url)
            .await
            .context(format!("连接SQLite数据库失败: {}", self.config.db_url))?;

        // 获取或创建匿名用户 ID
        let identity = IdentityProvider::new(pool);
        let user_id = identity.get_or_create_user_id().await;
        info!("[Client] 👤 当前用户 ID: {}", user_id);

        // 创建带身份拦截器的 HTTP 客户端（X-User-ID 通过 default_headers 自动添加）
        let http_client = reqwest::ClientBuilder::new()
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::HeaderName::from_static("x-user-id"),
                    reqwest::header::HeaderValue::from_str(&user_id)
                        .context("无效的用户 ID")?,
                );
                headers
            })
            .build()
            .context("创建 HTTP 客户端失败")?;

        // 装配收藏同步器和检索客户端
        let store: Arc<dyn FavoritesStore> = Arc::new(FavoritesApi::new(
            http_client.clone(),
            self.config.api_base_url.clone(),
            user_id.clone(),
        ));
        let syncer = Arc::new(FavoritesSyncer::with_store(
            store.clone(),
            self.favorites_listener.clone(),
        ));
        self.favorites_store = Some(store);
        self.favorites_syncer = Some(syncer.clone());
        self.search_api = Some(SearchApi::new(
            http_client,
            self.config.api_base_url.clone(),
            user_id.clone(),
        ));
        self.user_id = Some(user_id);

        // 启动收藏列表初始同步任务（会话内状态从远端重建）
        tokio::spawn(async move {
            info!("[Client] 🔄 启动收藏列表初始同步任务");
            syncer.reload().await;
        });

        Ok(())
    }

    /// 当前匿名用户 ID（未启动时为 None）
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// 按关键词分页检索图片
    pub async fn search_photos(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> Result<SearchData> {
        let api = self
            .search_api
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("客户端尚未启动"))?;
        let result = api.search_photos(query, page, per_page).await;
        if result.success {
            result
                .data
                .ok_or_else(|| anyhow::anyhow!("响应中缺少 data 字段"))
        } else {
            Err(anyhow::anyhow!(result.failure_message("图片检索失败")))
        }
    }

    /// 切换一张图片的收藏状态（乐观更新，失败自动回滚并填充错误文案）
    pub async fn toggle_favorite(&self, photo: &PhotoRecord) -> Result<()> {
        let syncer = self
            .favorites_syncer
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("收藏同步器未初始化"))?;
        syncer.toggle_favorite(photo).await;
        Ok(())
    }

    /// 手动重载收藏列表
    pub async fn reload_favorites(&self) -> Result<()> {
        let syncer = self
            .favorites_syncer
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("收藏同步器未初始化"))?;
        syncer.reload().await;
        Ok(())
    }

    /// 获取完整收藏记录序列（最新在前）
    pub async fn get_favorites(&self) -> Result<Vec<FavoriteRecord>> {
        let syncer = self
            .favorites_syncer
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("收藏同步器未初始化"))?;
        Ok(syncer.get_favorites().await)
    }

    /// 判断一张图片当前是否已收藏
    pub async fn is_favorite(&self, photo_id: &str) -> Result<bool> {
        let syncer = self
            .favorites_syncer
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("收藏同步器未初始化"))?;
        Ok(syncer.is_favorite(photo_id).await)
    }

    /// 当前收藏同步错误文案（无错误时为 None）
    pub async fn favorites_error(&self) -> Result<Option<String>> {
        let syncer = self
            .favorites_syncer
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("收藏同步器未初始化"))?;
        Ok(syncer.error().await)
    }

    /// 关闭收藏同步错误提示
    pub async fn clear_favorites_error(&self) -> Result<()> {
        let syncer = self
            .favorites_syncer
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("收藏同步器未初始化"))?;
        syncer.clear_error().await;
        Ok(())
    }
}
