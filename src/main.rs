use clap::Parser;
use employee_facade::utils::{logger, validation::Validate};
use employee_facade::{api, build_router, CliConfig, EmployeeAggregator, HttpEmployeeSource};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 驗證配置
    if let Err(e) = config.validate() {
        eprintln!("❌ Configuration validation failed: {}", e);
        std::process::exit(1);
    }

    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_logger(settings.log_format, config.verbose);

    tracing::info!("Starting employee-facade");
    tracing::debug!("Resolved settings: {:?}", settings);

    // 建立下游客戶端與聚合器
    let source = HttpEmployeeSource::new(&settings.downstream_base_url)?;
    tracing::info!("Downstream employee API: {}", source.base_url());
    let aggregator = Arc::new(EmployeeAggregator::new(source));

    let router = build_router(aggregator);
    if let Err(e) = api::serve(router, settings.bind_address).await {
        tracing::error!("❌ Server stopped with error ({}): {}", e.kind(), e);
        return Err(e.into());
    }

    Ok(())
}
