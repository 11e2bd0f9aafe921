//! 身份提供方
//!
//! 为当前安装环境提供稳定的匿名用户 ID（UUID v4）：首次调用时生成并
//! 持久化，之后原样返回持久化的值，绝不自动轮换。所有收藏操作都以这个
//! ID 为归属范围。

use crate::luxor::identity::dao::IdentityDao;
use sqlx::{Pool, Sqlite};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// 匿名用户 ID 的固定存储键
pub const USER_ID_STORAGE_KEY: &str = "luxor_user_id";

/// 校验字符串是否为带连字符的 UUID v4
/// （版本半字节固定为 4，变体半字节属于 {8,9,a,b}，大小写不敏感）
pub fn is_valid_user_id(value: &str) -> bool {
    // uuid crate 也接受不带连字符的 simple 形式，这里先卡死标准形状
    let bytes = value.as_bytes();
    if bytes.len() != 36
        || bytes[8] != b'-'
        || bytes[13] != b'-'
        || bytes[18] != b'-'
        || bytes[23] != b'-'
    {
        return false;
    }
    match Uuid::try_parse(value) {
        Ok(parsed) => {
            parsed.get_version_num() == 4 && parsed.get_variant() == uuid::Variant::RFC4122
        }
        Err(_) => false,
    }
}

/// 身份提供方
pub struct IdentityProvider {
    dao: IdentityDao,
}

impl IdentityProvider {
    /// 创建新的身份提供方
    pub fn new(db: Pool<Sqlite>) -> Self {
        Self {
            dao: IdentityDao::new(db),
        }
    }

    /// 获取或创建匿名用户 ID
    ///
    /// 持久化写入失败时进入降级模式：记一条警告并照常返回新生成的值，
    /// 本次会话仍然可用，只是身份无法在重启后保留。
    pub async fn get_or_create_user_id(&self) -> String {
        match self.dao.get(USER_ID_STORAGE_KEY).await {
            Ok(Some(existing)) => {
                debug!("[Identity] 使用已持久化的用户 ID: {}", existing);
                return existing;
            }
            Ok(None) => {}
            Err(e) => {
                warn!("[Identity] 读取本地身份失败: {:?}，将生成新的用户 ID", e);
            }
        }

        let fresh = Uuid::new_v4().to_string();
        match self.dao.put(USER_ID_STORAGE_KEY, &fresh).await {
            Ok(_) => {
                info!("[Identity] ✨ 生成并持久化新的用户 ID: {}", fresh);
            }
            Err(e) => {
                warn!(
                    "[Identity] ⚠️ 持久化用户 ID 失败（降级模式，重启后身份不保留）: {:?}",
                    e
                );
            }
        }
        fresh
    }
}
