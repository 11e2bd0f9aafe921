//! 收藏模块数据模型定义

use serde::{Deserialize, Serialize};

/// 各分辨率档位的图片地址（raw/full/regular/small/thumb，均可缺失）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoUrls {
    #[serde(default)]
    pub raw: Option<String>,
    #[serde(default)]
    pub full: Option<String>,
    #[serde(default)]
    pub regular: Option<String>,
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub thumb: Option<String>,
}

/// 图片的外链集合（self/html/download，均可缺失）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoLinks {
    #[serde(default, rename = "self")]
    pub self_link: Option<String>,
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub download: Option<String>,
}

/// 摄影师署名信息
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoAttribution {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    /// 显示名称
    #[serde(default)]
    pub name: Option<String>,
    /// 作品集主页（可缺失）
    #[serde(default)]
    pub portfolio_url: Option<String>,
    /// 头像地址（可缺失）
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// 图片元数据快照
///
/// 收藏或检索时对远端图片元数据的一次性快照。除 `id` 外的字段服务端都
/// 可能不返回，缺失或为 null 时统一落到 `None`，未知字段直接忽略。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRecord {
    /// 图片 ID（由图片源分配，稳定不变）
    pub id: String,
    /// 像素宽度
    #[serde(default)]
    pub width: Option<i64>,
    /// 像素高度
    #[serde(default)]
    pub height: Option<i64>,
    /// 描述
    #[serde(default)]
    pub description: Option<String>,
    /// 无障碍替代文本
    #[serde(default)]
    pub alt_description: Option<String>,
    /// 各分辨率档位的图片地址
    #[serde(default)]
    pub urls: Option<PhotoUrls>,
    /// 外链集合
    #[serde(default)]
    pub links: Option<PhotoLinks>,
    /// 摄影师署名
    #[serde(default)]
    pub user: Option<PhotoAttribution>,
    /// 图片源侧的创建时间（ISO-8601 字符串，区别于收藏记录自身的时间戳）
    #[serde(default)]
    pub created_at: Option<String>,
}

/// 收藏记录（服务端行的完整映射）
///
/// 同一 (user_id, photo_id) 至多一条；重复收藏时服务端原地更新快照。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteRecord {
    /// 服务端分配的自增 ID
    pub id: i64,
    /// 归属的匿名用户 ID（UUID v4）
    pub user_id: String,
    /// 图片 ID
    pub photo_id: String,
    /// 收藏时的图片元数据快照
    pub photo_data: PhotoRecord,
    /// 收藏记录创建时间（服务端分配）
    #[serde(default)]
    pub created_at: Option<String>,
    /// 收藏记录更新时间（服务端分配）
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// 收藏同步器配置
pub struct FavoritesSyncerConfig {
    /// 匿名用户 ID（UUID v4）
    pub user_id: String,
    /// API 基础 URL
    pub api_base_url: String,
}
