//! 图片检索 HTTP API 客户端
//!
//! 负责调用后端的 Unsplash 检索代理接口

use crate::luxor::search::types::SearchData;
use crate::luxor::types::{handle_http_response, StoreResult};
use tracing::{debug, info};

/// 单页结果数上限（后端代理的契约）
pub const MAX_PER_PAGE: u32 = 30;

/// 把分页参数收敛到后端契约内：page 从 1 起，per_page 在 1..=30
fn clamp_paging(page: u32, per_page: u32) -> (u32, u32) {
    (page.max(1), per_page.clamp(1, MAX_PER_PAGE))
}

/// 图片检索 API 客户端
pub struct SearchApi {
    client: reqwest::Client,
    api_base_url: String,
    user_id: String,
}

impl SearchApi {
    /// 创建新的检索 API 客户端
    ///
    /// `client` 应该已经在外部配置好 `X-User-ID` 拦截器
    pub fn new(client: reqwest::Client, api_base_url: String, user_id: String) -> Self {
        Self {
            client,
            api_base_url,
            user_id,
        }
    }

    /// 按关键词分页检索图片
    pub async fn search_photos(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> StoreResult<SearchData> {
        let (page, per_page) = clamp_paging(page, per_page);
        let url = format!("{}/unsplash/search", self.api_base_url);

        info!(
            "[SearchAPI] 📡 检索图片: query={}, page={}, per_page={}",
            query, page, per_page
        );
        debug!("[SearchAPI]   请求URL: {}, 用户ID: {}", url, self.user_id);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("query", query),
                ("page", &page.to_string()),
                ("per_page", &per_page.to_string()),
            ])
            .send()
            .await;

        let result: StoreResult<SearchData> = handle_http_response(response, "图片检索").await;

        if result.success {
            if let Some(data) = &result.data {
                info!(
                    "[SearchAPI] ✅ 检索完成，本页 {} 条，共 {} 条 / {} 页",
                    data.results.len(),
                    data.total,
                    data.total_pages
                );
            }
        }
        result
    }
}
