//! Luxor CLI 客户端（测试版）
//!
//! 非交互式 CLI，用于测试和展示图片检索 + 收藏同步功能
//! 启动时通过命令行参数指定检索关键词，自动装配客户端，
//! 展示检索结果并切换一张图片的收藏状态

use anyhow::Result;
use clap::Parser;
use luxor_sdk_core::luxor::client::{LuxorClient, LuxorConfig};
use luxor_sdk_core::luxor::favorites::FavoritesListener;
use std::sync::Arc;
use tokio::time::{sleep, Duration};
use tracing::{error, info};

/// Luxor CLI 客户端
#[derive(Parser, Debug)]
#[command(name = "luxor-cli")]
#[command(about = "Luxor CLI 客户端 - 用于测试和展示图片检索与收藏功能", long_about = None)]
struct Args {
    /// 检索关键词（默认: mountains）
    #[arg(short, long, default_value = "mountains")]
    query: String,

    /// 页码（从 1 起）
    #[arg(short, long, default_value = "1")]
    page: u32,

    /// 每页条数（1-30）
    #[arg(long, default_value = "10")]
    per_page: u32,

    /// 要切换收藏状态的图片 ID（缺省时取检索结果的第一张）
    #[arg(short, long)]
    toggle: Option<String>,

    /// HTTP API 基础地址
    #[arg(long, default_value = "http://localhost:8000/api")]
    api: String,

    /// 本地 SQLite 数据库 URL（身份持久化）
    #[arg(long, default_value = "sqlite://luxor.db?mode=rwc")]
    db: String,

    /// 日志级别（默认: info,luxor_sdk_core=debug）
    #[arg(long, default_value = "info,luxor_sdk_core=debug")]
    log_level: String,
}

/// 初始化日志（同时输出到 stdout 和文件）
fn init_logger(log_level: &str) {
    use std::fs::OpenOptions;
    use std::io;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    // 优先使用环境变量 RUST_LOG（如果设置了），否则使用命令行参数
    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // 创建日志文件（追加模式）
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("debug.log")
        .expect("无法创建日志文件 debug.log");

    // 输出到 stdout（控制台），保留 ANSI 颜色代码用于终端显示
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout)
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .with_ansi(true);

    // 输出到文件，禁用 ANSI 颜色代码（文件不需要颜色）
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(log_file)
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    info!("[CLI] 📝 日志已同时输出到控制台和文件: debug.log");
}

/// 设置监听器（输出所有收藏状态变更）
fn setup_listeners(client: &mut LuxorClient) {
    struct CliFavoritesListener;
    #[async_trait::async_trait]
    impl FavoritesListener for CliFavoritesListener {
        async fn on_favorites_changed(&self, favorites_json: String) {
            info!("[CLI/Favorites] ⭐ 收藏列表变更: {}", favorites_json);
        }

        async fn on_sync_error(&self, message: String) {
            error!("[CLI/Favorites] ❌ 同步出错: {}", message);
        }
    }
    client.set_favorites_listener(Arc::new(CliFavoritesListener));
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 初始化日志
    init_logger(&args.log_level);

    info!("[CLI] 🚀 Luxor CLI 客户端（测试模式）");
    info!("[CLI] 🔍 检索关键词: {}", args.query);
    info!("[CLI] 📄 页码: {}, 每页: {}", args.page, args.per_page);

    // 创建客户端
    let config = LuxorConfig {
        api_base_url: args.api.clone(),
        db_url: args.db.clone(),
    };
    let mut client = LuxorClient::new(config);

    // 设置监听器
    setup_listeners(&mut client);

    // 启动（本地身份 + 首次收藏同步）
    info!("[CLI] 🔗 正在启动客户端...");
    client
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("启动失败: {}", e))?;
    info!(
        "[CLI] ✅ 启动成功！用户ID: {}",
        client.user_id().unwrap_or("<未知>")
    );

    // 等待初始同步落定后展示当前收藏
    sleep(Duration::from_millis(500)).await;
    if let Ok(favorites) = client.get_favorites().await {
        info!("[CLI] 📋 当前收藏（共 {} 条）:", favorites.len());
        for f in favorites.iter().take(5) {
            info!(
                "[CLI]   - {} | {}",
                f.photo_id,
                f.photo_data
                    .description
                    .as_deref()
                    .or(f.photo_data.alt_description.as_deref())
                    .unwrap_or("<无描述>")
            );
        }
    }

    // 检索
    let data = match client
        .search_photos(&args.query, args.page, args.per_page)
        .await
    {
        Ok(data) => {
            info!(
                "[CLI] 🖼️ 检索到 {} 张图片（共 {} 张 / {} 页）:",
                data.results.len(),
                data.total,
                data.total_pages
            );
            for photo in data.results.iter() {
                info!(
                    "[CLI]   - {} | {} | 已收藏: {}",
                    photo.id,
                    photo
                        .description
                        .as_deref()
                        .or(photo.alt_description.as_deref())
                        .unwrap_or("<无描述>"),
                    client.is_favorite(&photo.id).await.unwrap_or(false)
                );
            }
            data
        }
        Err(e) => {
            error!("[CLI] 检索失败: {}", e);
            return Err(e);
        }
    };

    // 切换收藏：优先使用 --toggle 指定的图片，否则取检索结果的第一张
    let target = match &args.toggle {
        Some(photo_id) => data.results.iter().find(|p| &p.id == photo_id).cloned(),
        None => data.results.first().cloned(),
    };

    if let Some(photo) = target {
        info!("[CLI] ⭐ 切换收藏状态: {}", photo.id);
        client.toggle_favorite(&photo).await?;

        if let Ok(Some(message)) = client.favorites_error().await {
            error!("[CLI] ❌ 切换失败: {}", message);
            client.clear_favorites_error().await?;
        } else {
            info!(
                "[CLI] ✅ 切换完成，当前状态: {}",
                if client.is_favorite(&photo.id).await? {
                    "已收藏"
                } else {
                    "未收藏"
                }
            );
        }
    } else {
        info!("[CLI] 💡 没有可切换的图片（检索结果为空或 --toggle 未命中）");
    }

    // 展示最终收藏列表
    let favorites = client.get_favorites().await?;
    info!("[CLI] 📋 最终收藏（共 {} 条）:", favorites.len());
    for f in favorites.iter().take(10) {
        info!("[CLI]   - {} | 收藏于 {}", f.photo_id, f.created_at.as_deref().unwrap_or("<未知>"));
    }

    info!("[CLI] 👋 程序退出");
    Ok(())
}
