use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use product_api::app::products::{MemoryProductStore, PgProductStore, ProductStore};
use product_api::infrastructure::{database::DatabaseManager, logger::Logger, shutdown};
use product_api::{build_router, AppConfig, AppState};

#[derive(Debug, Parser)]
#[command(name = "product-api", version, about = "Product CRUD HTTP API")]
struct Cli {
    /// TOML 配置文件路径
    #[arg(short, long, env = "APP_CONFIG")]
    config: Option<PathBuf>,

    /// 使用内存存储，不连接数据库
    #[arg(long)]
    in_memory: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).context("加载配置失败")?;

    Logger::init(&config.logging.level);
    info!("启动 Product API ({} 环境)", config.environment);

    let (store, database): (Arc<dyn ProductStore>, Option<DatabaseManager>) = if cli.in_memory {
        info!("使用内存存储");
        let store: Arc<dyn ProductStore> = Arc::new(MemoryProductStore::new());
        (store, None)
    } else {
        let database = DatabaseManager::new(&config.database)
            .await
            .context("初始化数据库失败")?;
        let store: Arc<dyn ProductStore> =
            Arc::new(PgProductStore::new(database.get_pool().clone()));
        (store, Some(database))
    };

    let app = build_router(AppState::new(store), &config)?;

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("无法绑定到 {}", addr))?;

    info!("🚀 服务运行在 http://{}", listener.local_addr()?);
    info!("   跨域允许来源: {}", config.cors.allowed_origin);
    if !config.is_production() {
        info!("📖 API 文档: http://{}/docs", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await
        .context("服务运行失败")?;

    if let Some(database) = database {
        database.close().await;
    }
    info!("服务已停止");
    Ok(())
}
