//! 收藏同步服务层
//!
//! 维护"本端已知"的收藏集合，实现乐观更新 + 失败回滚的同步状态机：
//! 切换收藏时先同步修改本地成员集（界面立即可见），再发起远端调用，
//! 成功则与服务端回显对账，失败则把第一步的变更原样撤销。

use crate::luxor::favorites::api::{FavoritesApi, FavoritesStore};
use crate::luxor::favorites::listener::{EmptyFavoritesListener, FavoritesListener};
use crate::luxor::favorites::models::{FavoriteRecord, FavoritesSyncerConfig, PhotoRecord};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

/// 重载失败时的默认文案
const RELOAD_FALLBACK: &str = "加载收藏列表失败";
/// 添加收藏失败时的默认文案
const ADD_FALLBACK: &str = "添加收藏失败";
/// 取消收藏失败时的默认文案
const REMOVE_FALLBACK: &str = "取消收藏失败";

/// 同步状态（会话内存态，不做本地持久化，每次会话启动时从远端重建）
#[derive(Default)]
struct FavoritesState {
    /// 完整收藏记录的有序序列（保持服务端返回顺序，最新在前）
    favorites: Vec<FavoriteRecord>,
    /// 收藏成员集（photo_id），用于 O(1) 成员判断
    member_ids: HashSet<String>,
    /// 尚未落定的切换操作占用的 photo_id（同一图片的并发切换保护）
    in_flight: HashSet<String>,
    /// 是否正在重载
    is_loading: bool,
    /// 面向用户的可关闭错误文案
    error: Option<String>,
}

/// 收藏同步器
pub struct FavoritesSyncer {
    /// 收藏远端存储（HTTP 适配器或测试替身）
    store: Arc<dyn FavoritesStore>,
    /// 收藏监听器
    listener: Arc<dyn FavoritesListener>,
    /// 同步状态（单把锁，乐观变更与对账/回滚是两段独立的临界区）
    state: Mutex<FavoritesState>,
}

impl FavoritesSyncer {
    /// 创建新的收藏同步器（使用默认空监听器）
    pub fn new(store: Arc<dyn FavoritesStore>) -> Self {
        Self::with_store(store, Arc::new(EmptyFavoritesListener))
    }

    /// 创建新的收藏同步器（注入远端存储与监听器）
    pub fn with_store(store: Arc<dyn FavoritesStore>, listener: Arc<dyn FavoritesListener>) -> Self {
        Self {
            store,
            listener,
            state: Mutex::new(FavoritesState::default()),
        }
    }

    /// 创建新的收藏同步器（内部构造 HTTP 适配器）
    ///
    /// `client` 应该已经在外部配置好 `X-User-ID` 拦截器
    pub fn with_listener(
        config: FavoritesSyncerConfig,
        client: reqwest::Client,
        listener: Arc<dyn FavoritesListener>,
    ) -> Self {
        info!(
            "[FavSync] 创建收藏同步器，用户ID: {}, API: {}",
            config.user_id, config.api_base_url
        );
        let api = FavoritesApi::new(client, config.api_base_url, config.user_id);
        Self::with_store(Arc::new(api), listener)
    }

    /// 重载收藏列表（会话启动或手动刷新时调用，整体替换本地状态）
    ///
    /// 本方法永远正常返回：任何失败都转化为 `error` 字段，
    /// `is_loading` 在所有退出路径上都会被复位。
    pub async fn reload(&self) {
        info!("[FavSync] 🔄 开始重载收藏列表...");
        {
            let mut st = self.state.lock().await;
            st.is_loading = true;
            st.error = None;
        }

        let mut result = self.store.list_favorites().await;
        let listed = if result.success { result.data.take() } else { None };

        let (changed_json, error_msg) = {
            let mut st = self.state.lock().await;
            let outcome = match listed {
                Some(list) => {
                    // 顺序以服务端为准（倒序、最新在前是存储侧契约），不在本端重排
                    st.member_ids = list.iter().map(|r| r.photo_id.clone()).collect();
                    st.favorites = list;
                    info!(
                        "[FavSync] ✅ 收藏列表重载完成，共 {} 条",
                        st.favorites.len()
                    );
                    (serde_json::to_string(&st.favorites).ok(), None)
                }
                None => {
                    // 逻辑失败、传输失败或 payload 不是序列：清空本地状态，
                    // 底层原因只进日志
                    if let Some(detail) = &result.error {
                        error!("[FavSync] 重载收藏失败: {}", detail);
                    } else if result.success {
                        error!("[FavSync] 重载收藏失败: 响应中缺少收藏序列");
                    }
                    st.favorites = Vec::new();
                    st.member_ids = HashSet::new();
                    let msg = result.failure_message(RELOAD_FALLBACK);
                    st.error = Some(msg.clone());
                    (None, Some(msg))
                }
            };
            st.is_loading = false;
            outcome
        };

        if let Some(json) = changed_json {
            self.listener.on_favorites_changed(json).await;
        }
        if let Some(msg) = error_msg {
            self.listener.on_sync_error(msg).await;
        }
    }

    /// 切换一张图片的收藏状态
    ///
    /// 第一步的乐观变更在任何网络往返之前同步完成，期间界面可继续读取
    /// 状态；远端落定后要么对账提交，要么回滚并填充 `error`。
    /// 同一图片上一次切换尚未落定时，后续切换直接忽略。
    pub async fn toggle_favorite(&self, photo: &PhotoRecord) {
        // 第一段临界区：乐观变更成员集 + 占用 in-flight
        let was_favorite = {
            let mut st = self.state.lock().await;
            if st.in_flight.contains(&photo.id) {
                debug!(
                    "[FavSync] 图片 {} 的上一次切换尚未落定，忽略本次操作",
                    photo.id
                );
                return;
            }
            let was = st.member_ids.contains(&photo.id);
            if was {
                st.member_ids.remove(&photo.id);
            } else {
                st.member_ids.insert(photo.id.clone());
            }
            st.in_flight.insert(photo.id.clone());
            was
        };

        debug!(
            "[FavSync] 切换收藏: photo_id={}, 动作={}",
            photo.id,
            if was_favorite { "移除" } else { "添加" }
        );

        // 远端调用（网络挂起点）与第二段临界区：对账或回滚
        let (changed_json, error_msg) = if was_favorite {
            self.settle_remove(photo).await
        } else {
            self.settle_add(photo).await
        };

        if let Some(json) = changed_json {
            self.listener.on_favorites_changed(json).await;
        }
        if let Some(msg) = error_msg {
            self.listener.on_sync_error(msg).await;
        }
    }

    /// 添加路径的落定：提交服务端回显，或回滚乐观变更
    async fn settle_add(&self, photo: &PhotoRecord) -> (Option<String>, Option<String>) {
        let result = self.store.create_favorite(photo).await;
        // 缺少回显记录的"成功"同样按失败回滚，保证成员集与记录序列一致
        let echoed = if result.success { result.data.clone() } else { None };

        let mut st = self.state.lock().await;
        st.in_flight.remove(&photo.id);
        match echoed {
            Some(record) => {
                // 防御性去重：先移除同 photo_id 的旧记录，再插到头部
                st.favorites.retain(|r| r.photo_id != record.photo_id);
                st.favorites.insert(0, record);
                info!("[FavSync] ✅ 添加收藏成功: photo_id={}", photo.id);
                (serde_json::to_string(&st.favorites).ok(), None)
            }
            None => {
                if let Some(detail) = &result.error {
                    error!("[FavSync] 添加收藏失败: {}", detail);
                }
                st.member_ids.remove(&photo.id);
                let msg = result.failure_message(ADD_FALLBACK);
                st.error = Some(msg.clone());
                (None, Some(msg))
            }
        }
    }

    /// 移除路径的落定：过滤记录序列，或回滚乐观变更
    async fn settle_remove(&self, photo: &PhotoRecord) -> (Option<String>, Option<String>) {
        let result = self.store.delete_favorite(&photo.id).await;

        let mut st = self.state.lock().await;
        st.in_flight.remove(&photo.id);
        if result.success {
            st.favorites.retain(|r| r.photo_id != photo.id);
            info!("[FavSync] ✅ 取消收藏成功: photo_id={}", photo.id);
            (serde_json::to_string(&st.favorites).ok(), None)
        } else {
            if let Some(detail) = &result.error {
                error!("[FavSync] 取消收藏失败: {}", detail);
            }
            st.member_ids.insert(photo.id.clone());
            let msg = result.failure_message(REMOVE_FALLBACK);
            st.error = Some(msg.clone());
            (None, Some(msg))
        }
    }

    /// 关闭错误提示（无其它副作用）
    pub async fn clear_error(&self) {
        let mut st = self.state.lock().await;
        st.error = None;
    }

    /// 获取完整收藏记录序列（服务端顺序，最新在前）
    pub async fn get_favorites(&self) -> Vec<FavoriteRecord> {
        self.state.lock().await.favorites.clone()
    }

    /// 获取收藏成员集快照
    pub async fn member_ids(&self) -> HashSet<String> {
        self.state.lock().await.member_ids.clone()
    }

    /// 判断一张图片当前是否已收藏
    pub async fn is_favorite(&self, photo_id: &str) -> bool {
        self.state.lock().await.member_ids.contains(photo_id)
    }

    /// 是否正在重载
    pub async fn is_loading(&self) -> bool {
        self.state.lock().await.is_loading
    }

    /// 当前错误文案（无错误时为 None）
    pub async fn error(&self) -> Option<String> {
        self.state.lock().await.error.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::luxor::types::StoreResult;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Once;
    use tokio::sync::Notify;

    static INIT_LOGGER: Once = Once::new();

    fn init_test_logger() {
        INIT_LOGGER.call_once(|| {
            use tracing_subscriber::prelude::*;
            use tracing_subscriber::EnvFilter;

            let filter_layer = EnvFilter::new("info,luxor_sdk_core=debug");

            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .with_test_writer();

            tracing_subscriber::registry()
                .with(filter_layer)
                .with(fmt_layer)
                .init();
        });
    }

    /// 脚本化的远端存储替身：每个操作按预置结果队列依次出队
    #[derive(Default)]
    struct MockStore {
        list_results: std::sync::Mutex<VecDeque<StoreResult<Vec<FavoriteRecord>>>>,
        create_results: std::sync::Mutex<VecDeque<StoreResult<FavoriteRecord>>>,
        delete_results: std::sync::Mutex<VecDeque<StoreResult<serde_json::Value>>>,
        create_calls: AtomicUsize,
        delete_calls: AtomicUsize,
        /// 设置后，create 调用会先通知 `entered` 再等待 `release`（用于在
        /// 远端落定之前观察乐观状态）
        create_gate: Option<(Arc<Notify>, Arc<Notify>)>,
    }

    #[async_trait]
    impl FavoritesStore for MockStore {
        async fn list_favorites(&self) -> StoreResult<Vec<FavoriteRecord>> {
            self.list_results
                .lock()
                .unwrap()
                .pop_front()
                .expect("测试脚本中没有预置 list 结果")
        }

        async fn create_favorite(&self, _photo: &PhotoRecord) -> StoreResult<FavoriteRecord> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            if let Some((entered, release)) = &self.create_gate {
                entered.notify_one();
                release.notified().await;
            }
            self.create_results
                .lock()
                .unwrap()
                .pop_front()
                .expect("测试脚本中没有预置 create 结果")
        }

        async fn delete_favorite(&self, _photo_id: &str) -> StoreResult<serde_json::Value> {
            self.delete_calls.fetch_add(1, Ordering::SeqCst);
            self.delete_results
                .lock()
                .unwrap()
                .pop_front()
                .expect("测试脚本中没有预置 delete 结果")
        }
    }

    fn photo(id: &str) -> PhotoRecord {
        PhotoRecord {
            id: id.to_string(),
            ..Default::default()
        }
    }

    fn record(id: i64, photo_id: &str) -> FavoriteRecord {
        FavoriteRecord {
            id,
            user_id: "f47ac10b-58cc-4372-a567-0e02b2c3d479".to_string(),
            photo_id: photo_id.to_string(),
            photo_data: photo(photo_id),
            created_at: Some("2024-01-01T00:00:00Z".to_string()),
            updated_at: None,
        }
    }

    fn ok<T>(data: T) -> StoreResult<T> {
        StoreResult {
            success: true,
            data: Some(data),
            message: None,
            error: None,
        }
    }

    fn logical_failure<T>(message: &str) -> StoreResult<T> {
        StoreResult {
            success: false,
            data: None,
            message: Some(message.to_string()),
            error: None,
        }
    }

    /// 校验成员集与记录序列的一致性不变量
    async fn assert_consistent(syncer: &FavoritesSyncer) {
        let favorites = syncer.get_favorites().await;
        let ids: HashSet<String> = favorites.iter().map(|r| r.photo_id.clone()).collect();
        assert_eq!(ids.len(), favorites.len(), "记录序列中存在重复 photo_id");
        assert_eq!(ids, syncer.member_ids().await, "成员集与记录序列不一致");
    }

    #[tokio::test]
    async fn reload_with_empty_store_clears_state() {
        init_test_logger();
        let store = MockStore::default();
        store.list_results.lock().unwrap().push_back(ok(vec![]));

        let syncer = FavoritesSyncer::new(Arc::new(store));
        syncer.reload().await;

        assert!(syncer.get_favorites().await.is_empty());
        assert!(!syncer.is_loading().await);
        assert_eq!(syncer.error().await, None);
        assert_consistent(&syncer).await;
    }

    #[tokio::test]
    async fn reload_populates_membership_from_store_order() {
        init_test_logger();
        let store = MockStore::default();
        store
            .list_results
            .lock()
            .unwrap()
            .push_back(ok(vec![record(2, "p2"), record(1, "p1")]));

        let syncer = FavoritesSyncer::new(Arc::new(store));
        syncer.reload().await;

        let favorites = syncer.get_favorites().await;
        assert_eq!(favorites.len(), 2);
        // 顺序以服务端为准，不在本端重排
        assert_eq!(favorites[0].photo_id, "p2");
        assert_eq!(favorites[1].photo_id, "p1");
        assert!(syncer.is_favorite("p1").await);
        assert!(syncer.is_favorite("p2").await);
        assert!(!syncer.is_favorite("p3").await);
        assert_consistent(&syncer).await;
    }

    #[tokio::test]
    async fn reload_twice_with_unchanged_store_is_idempotent() {
        init_test_logger();
        let store = MockStore::default();
        {
            let mut lists = store.list_results.lock().unwrap();
            lists.push_back(ok(vec![record(1, "p1")]));
            lists.push_back(ok(vec![record(1, "p1")]));
        }

        let syncer = FavoritesSyncer::new(Arc::new(store));
        syncer.reload().await;
        let first_ids: Vec<String> = syncer
            .get_favorites()
            .await
            .iter()
            .map(|r| r.photo_id.clone())
            .collect();
        let first_members = syncer.member_ids().await;

        syncer.reload().await;
        let second_ids: Vec<String> = syncer
            .get_favorites()
            .await
            .iter()
            .map(|r| r.photo_id.clone())
            .collect();

        assert_eq!(first_ids, second_ids);
        assert_eq!(first_members, syncer.member_ids().await);
        assert_consistent(&syncer).await;
    }

    #[tokio::test]
    async fn reload_logical_failure_resets_state_with_store_message() {
        init_test_logger();
        let store = MockStore::default();
        {
            let mut lists = store.list_results.lock().unwrap();
            lists.push_back(ok(vec![record(1, "p1")]));
            lists.push_back(logical_failure("服务器开小差了"));
        }

        let syncer = FavoritesSyncer::new(Arc::new(store));
        syncer.reload().await;
        assert!(syncer.is_favorite("p1").await);

        syncer.reload().await;
        assert!(syncer.get_favorites().await.is_empty());
        assert!(syncer.member_ids().await.is_empty());
        assert_eq!(syncer.error().await.as_deref(), Some("服务器开小差了"));
        assert!(!syncer.is_loading().await);
        assert_consistent(&syncer).await;
    }

    #[tokio::test]
    async fn reload_transport_failure_uses_generic_fallback() {
        init_test_logger();
        let store = MockStore::default();
        store
            .list_results
            .lock()
            .unwrap()
            .push_back(StoreResult::failure("connection refused"));

        let syncer = FavoritesSyncer::new(Arc::new(store));
        syncer.reload().await;

        assert!(syncer.get_favorites().await.is_empty());
        // 底层原因只进日志，用户看到的是默认文案
        assert_eq!(syncer.error().await.as_deref(), Some(RELOAD_FALLBACK));
        assert!(!syncer.is_loading().await);
        assert_consistent(&syncer).await;
    }

    #[tokio::test]
    async fn toggle_add_is_optimistic_then_commits() {
        init_test_logger();
        let entered = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let mut store = MockStore::default();
        store.create_gate = Some((entered.clone(), release.clone()));
        store
            .create_results
            .lock()
            .unwrap()
            .push_back(ok(record(1, "p1")));

        let syncer = Arc::new(FavoritesSyncer::new(Arc::new(store)));
        let task = {
            let syncer = syncer.clone();
            tokio::spawn(async move { syncer.toggle_favorite(&photo("p1")).await })
        };

        // 远端尚未落定：乐观变更已对界面可见，记录序列尚未更新
        entered.notified().await;
        assert!(syncer.is_favorite("p1").await);
        assert!(syncer.get_favorites().await.is_empty());

        release.notify_one();
        task.await.unwrap();

        // 落定后：恰好一条 p1 记录，状态一致
        let favorites = syncer.get_favorites().await;
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].photo_id, "p1");
        assert!(syncer.is_favorite("p1").await);
        assert_eq!(syncer.error().await, None);
        assert_consistent(&syncer).await;
    }

    #[tokio::test]
    async fn toggle_add_logical_failure_rolls_back() {
        init_test_logger();
        let store = MockStore::default();
        store
            .create_results
            .lock()
            .unwrap()
            .push_back(logical_failure("boom"));

        let syncer = FavoritesSyncer::new(Arc::new(store));
        syncer.toggle_favorite(&photo("p1")).await;

        assert!(!syncer.is_favorite("p1").await);
        assert!(syncer.get_favorites().await.is_empty());
        assert_eq!(syncer.error().await.as_deref(), Some("boom"));
        assert_consistent(&syncer).await;
    }

    #[tokio::test]
    async fn toggle_add_transport_failure_rolls_back_with_fallback() {
        init_test_logger();
        let store = MockStore::default();
        store
            .create_results
            .lock()
            .unwrap()
            .push_back(StoreResult::failure("connection reset by peer"));

        let syncer = FavoritesSyncer::new(Arc::new(store));
        syncer.toggle_favorite(&photo("p1")).await;

        assert!(!syncer.is_favorite("p1").await);
        assert_eq!(syncer.error().await.as_deref(), Some(ADD_FALLBACK));
        assert_consistent(&syncer).await;
    }

    #[tokio::test]
    async fn toggle_add_without_echoed_record_rolls_back() {
        init_test_logger();
        let store = MockStore::default();
        // success=true 但缺少回显记录：必须按失败回滚，否则成员集与记录
        // 序列会永久分叉
        store.create_results.lock().unwrap().push_back(StoreResult {
            success: true,
            data: None,
            message: None,
            error: None,
        });

        let syncer = FavoritesSyncer::new(Arc::new(store));
        syncer.toggle_favorite(&photo("p1")).await;

        assert!(!syncer.is_favorite("p1").await);
        assert_eq!(syncer.error().await.as_deref(), Some(ADD_FALLBACK));
        assert_consistent(&syncer).await;
    }

    #[tokio::test]
    async fn toggle_remove_commits_and_filters_record() {
        init_test_logger();
        let store = MockStore::default();
        store
            .list_results
            .lock()
            .unwrap()
            .push_back(ok(vec![record(2, "p2"), record(1, "p1")]));
        store
            .delete_results
            .lock()
            .unwrap()
            .push_back(ok(serde_json::json!({})));

        let syncer = FavoritesSyncer::new(Arc::new(store));
        syncer.reload().await;
        syncer.toggle_favorite(&photo("p1")).await;

        assert!(!syncer.is_favorite("p1").await);
        assert!(syncer.is_favorite("p2").await);
        let favorites = syncer.get_favorites().await;
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].photo_id, "p2");
        assert_eq!(syncer.error().await, None);
        assert_consistent(&syncer).await;
    }

    #[tokio::test]
    async fn toggle_remove_failure_rolls_back() {
        init_test_logger();
        let store = MockStore::default();
        store
            .list_results
            .lock()
            .unwrap()
            .push_back(ok(vec![record(1, "p1")]));
        store
            .delete_results
            .lock()
            .unwrap()
            .push_back(logical_failure("收藏不存在"));

        let syncer = FavoritesSyncer::new(Arc::new(store));
        syncer.reload().await;
        syncer.toggle_favorite(&photo("p1")).await;

        // 回滚后 p1 仍是收藏成员，记录未被移除
        assert!(syncer.is_favorite("p1").await);
        assert_eq!(syncer.get_favorites().await.len(), 1);
        assert_eq!(syncer.error().await.as_deref(), Some("收藏不存在"));
        assert_consistent(&syncer).await;
    }

    #[tokio::test]
    async fn toggle_sequence_keeps_single_record_per_photo() {
        init_test_logger();
        let store = MockStore::default();
        {
            let mut creates = store.create_results.lock().unwrap();
            creates.push_back(ok(record(1, "p1")));
            creates.push_back(ok(record(3, "p1")));
        }
        store
            .delete_results
            .lock()
            .unwrap()
            .push_back(ok(serde_json::json!({})));

        let syncer = FavoritesSyncer::new(Arc::new(store));
        syncer.toggle_favorite(&photo("p1")).await;
        syncer.toggle_favorite(&photo("p1")).await;
        syncer.toggle_favorite(&photo("p1")).await;

        let favorites = syncer.get_favorites().await;
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].photo_id, "p1");
        assert_eq!(favorites[0].id, 3);
        assert_consistent(&syncer).await;
    }

    #[tokio::test]
    async fn toggle_while_same_photo_in_flight_is_ignored() {
        init_test_logger();
        let entered = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let mut store = MockStore::default();
        store.create_gate = Some((entered.clone(), release.clone()));
        store
            .create_results
            .lock()
            .unwrap()
            .push_back(ok(record(1, "p1")));

        let store = Arc::new(store);
        let syncer = Arc::new(FavoritesSyncer::new(store.clone()));
        let task = {
            let syncer = syncer.clone();
            tokio::spawn(async move { syncer.toggle_favorite(&photo("p1")).await })
        };

        entered.notified().await;
        // 第一次切换尚未落定，第二次切换被直接忽略，不发起远端调用
        syncer.toggle_favorite(&photo("p1")).await;
        assert!(syncer.is_favorite("p1").await);

        release.notify_one();
        task.await.unwrap();

        assert_eq!(store.create_calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.delete_calls.load(Ordering::SeqCst), 0);
        assert_eq!(syncer.get_favorites().await.len(), 1);
        assert_consistent(&syncer).await;
    }

    #[tokio::test]
    async fn clear_error_only_clears_error() {
        init_test_logger();
        let store = MockStore::default();
        store
            .create_results
            .lock()
            .unwrap()
            .push_back(logical_failure("boom"));

        let syncer = FavoritesSyncer::new(Arc::new(store));
        syncer.toggle_favorite(&photo("p1")).await;
        assert_eq!(syncer.error().await.as_deref(), Some("boom"));

        syncer.clear_error().await;
        assert_eq!(syncer.error().await, None);
        assert!(syncer.get_favorites().await.is_empty());
        assert_consistent(&syncer).await;
    }

    /// 记录回调的监听器（校验界面层收到的事件）
    #[derive(Default)]
    struct RecordingListener {
        events: std::sync::Mutex<Vec<String>>,
    }

    #[async_trait]
    impl FavoritesListener for RecordingListener {
        async fn on_favorites_changed(&self, favorites_json: String) {
            self.events
                .lock()
                .unwrap()
                .push(format!("changed:{}", favorites_json));
        }

        async fn on_sync_error(&self, message: String) {
            self.events.lock().unwrap().push(format!("error:{}", message));
        }
    }

    #[tokio::test]
    async fn listener_receives_change_and_error_callbacks() {
        init_test_logger();
        let store = MockStore::default();
        store.list_results.lock().unwrap().push_back(ok(vec![]));
        store
            .create_results
            .lock()
            .unwrap()
            .push_back(logical_failure("boom"));

        let listener = Arc::new(RecordingListener::default());
        let syncer = FavoritesSyncer::with_store(Arc::new(store), listener.clone());

        syncer.reload().await;
        syncer.toggle_favorite(&photo("p1")).await;

        let events = listener.events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert!(events[0].starts_with("changed:"));
        assert_eq!(events[1], "error:boom");
    }
}
