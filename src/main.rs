use anyhow::Context;
use capacity_estimator::app::interactive;
use capacity_estimator::core::ConfigProvider;
use capacity_estimator::export::table;
use capacity_estimator::utils::error::ErrorSeverity;
use capacity_estimator::utils::{logger, validation::Validate};
use capacity_estimator::{
    CapacityEstimator, CliConfig, EstimatorError, LocalStorage, RunConfig, Session,
};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting capacity-estimator");
    tracing::debug!("CLI config: {:?}", cli);

    // 載入並合併配置
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    let storage = LocalStorage::new(config.output_path().to_string());
    tracing::info!("📁 Exports go to: {}", storage.base_path());
    let estimator = CapacityEstimator::new(storage, config.file_stem());

    if cli.interactive {
        let mut session = Session::new(config.inputs());
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        interactive::run(&mut session, &estimator, stdin.lock(), &mut stdout)
            .context("interactive session aborted")?;
        tracing::info!("Session closed");
        return Ok(());
    }

    let formats = match config.export_formats() {
        Ok(formats) => formats,
        Err(e) => exit_with(&e),
    };

    match estimator.run(&config.inputs(), &formats) {
        Ok(outcome) => {
            if let Some(name) = &config.scenario_name {
                println!("Scenario: {}", name);
            }
            println!("Data Capacity Requirements");
            print!("{}", table::render_results(&outcome.report.result));
            for path in &outcome.written {
                println!("📁 Output saved to: {}", path);
            }
        }
        Err(e) => exit_with(&e),
    }

    Ok(())
}

fn load_config(cli: &CliConfig) -> capacity_estimator::Result<RunConfig> {
    if let Some(path) = &cli.config {
        tracing::info!("📁 Loading scenario from: {}", path);
    }
    let scenario = cli.load_scenario()?;
    let config = cli.resolve(scenario.as_ref());
    config.validate()?;
    Ok(config)
}

fn exit_with(e: &EstimatorError) -> ! {
    tracing::error!(
        "❌ capacity-estimator failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
