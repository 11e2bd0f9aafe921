//! Luxor 后端统一响应结构与 HTTP 规范化处理
//!
//! 后端所有接口都返回 `{success, data?, message?, error?}` 形式的信封。
//! 适配层的约定：任何传输层异常（网络错误、非 2xx 状态、解析失败）都在
//! 这里被吞掉并转换成 `success=false` 的 [`StoreResult`]，绝不向上层抛出，
//! 同步状态组件因此永远不需要分辨传输细节。

use serde::{Deserialize, Deserializer};
use tracing::{debug, error};

/// 反序列化数组字段，处理 null 值
pub(crate) fn deserialize_vec_or_null<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let opt = Option::<Vec<T>>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// 统一的请求结果信封（包含 success、data、message、error）
///
/// 既可以直接从后端 JSON 反序列化，也可以在本地构造（传输失败时）。
/// data 字段可能为 null 或缺失，因此使用 `Option<T>`。
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct StoreResult<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    /// 业务层提示信息（服务端填写，面向用户）
    #[serde(default)]
    pub message: Option<String>,
    /// 错误详情（服务端或本地填写，用于日志）
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> StoreResult<T> {
    /// 本地构造一个失败结果（传输失败 / 响应不合法时使用）
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(error.into()),
        }
    }

    /// 面向用户的失败文案：取服务端的 message，没有则回退到给定的默认文案
    ///
    /// error 字段是底层原因，只进日志，不直接展示给用户
    pub fn failure_message(&self, fallback: &str) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// 通用 HTTP 响应处理函数：把一次 reqwest 调用的所有失败形态规范化
///
/// 入参直接接收 `send().await` 的结果，网络异常、非 2xx、body 读取失败、
/// JSON 反序列化失败都转换为 `success=false` 的结果，底层原因只记日志。
/// 所有适配器共用此方法。
pub async fn handle_http_response<T: serde::de::DeserializeOwned>(
    response: Result<reqwest::Response, reqwest::Error>,
    operation_name: &str,
) -> StoreResult<T> {
    let response = match response {
        Ok(r) => r,
        Err(e) => {
            error!("[HTTP] {}网络请求失败: {:?}", operation_name, e);
            return StoreResult::failure(format!("网络请求失败: {}", e));
        }
    };

    let status = response.status();

    // 读取 body bytes（只能读取一次）
    let body_bytes = match response.bytes().await {
        Ok(b) => b,
        Err(e) => {
            error!("[HTTP] {}读取响应 body 失败: {:?}", operation_name, e);
            return StoreResult::failure(format!("读取响应失败: {}", e));
        }
    };
    let body_str = String::from_utf8_lossy(&body_bytes);
    debug!("[HTTP] {}响应 Body: {}", operation_name, body_str);

    // 非 2xx 时后端通常仍返回信封（如校验失败的 400），优先解析其中的 message；
    // 解析不出来再按 HTTP 状态报错
    if !status.is_success() {
        error!(
            "[HTTP] {}请求失败，HTTP状态: {}, 响应: {}",
            operation_name, status, body_str
        );
        if let Ok(mut envelope) = serde_json::from_slice::<StoreResult<T>>(&body_bytes) {
            envelope.success = false;
            return envelope;
        }
        return StoreResult::failure(format!("HTTP 错误 {}", status));
    }

    match serde_json::from_slice::<StoreResult<T>>(&body_bytes) {
        Ok(envelope) => envelope,
        Err(e) => {
            error!(
                "[HTTP] {}反序列化失败: {:?}\n原始响应: {}",
                operation_name, e, body_str
            );
            StoreResult::failure(format!("反序列化响应失败: {}", e))
        }
    }
}
