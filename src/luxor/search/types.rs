//! 图片检索 API DTO

use crate::luxor::favorites::models::PhotoRecord;
use crate::luxor::types::deserialize_vec_or_null;
use serde::Deserialize;

/// 检索响应数据（一页结果 + 总量信息）
#[derive(Debug, Clone, Deserialize)]
pub struct SearchData {
    #[serde(default, deserialize_with = "deserialize_vec_or_null")]
    pub results: Vec<PhotoRecord>,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub total_pages: i64,
}
