//! 库存读取服务
//!
//! 连接文档数据库并打印 `ePortfolio.inventory` 集合中的全部文档：
//! - 从环境变量（及 `.env` 文件）加载连接串
//! - 建立连接并校验凭据
//! - 按存储顺序逐行输出文档（stdout），日志输出到 stderr

mod service;
mod source;
mod state;

use common::config::AppConfig;
use common::errors::AppResult;
use common::utils::IdGenerator;
use service::InventoryService;
use source::MongoSource;
use state::ReaderState;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SERVICE_NAME: &str = "inventory-reader";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // .env is optional; variables already set in the environment win
    dotenvy::dotenv().ok();

    // 初始化日志追踪
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let run_id = IdGenerator::run_id();
    info!(service = SERVICE_NAME, run_id = %run_id, "启动读取");

    if let Err(err) = run(&run_id).await {
        error!(run_id = %run_id, code = err.code(), error = %err, "读取失败");
        return Err(err.into());
    }
    Ok(())
}

async fn run(run_id: &str) -> AppResult<()> {
    // 加载配置
    let config = AppConfig::load_with_service(SERVICE_NAME)?;

    // 建立连接
    let state = ReaderState::connect(config).await?;
    let service = InventoryService::new(MongoSource::new(&state));

    // 读取并打印
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    service.read_all(&mut out, run_id).await?;

    Ok(())
}
