use beer_live_search::core::widgets;
use beer_live_search::utils::error::{ErrorSeverity, SearchError};
use beer_live_search::utils::output::render_table;
use beer_live_search::utils::{logger, validation::Validate};
use beer_live_search::{CliConfig, Outcome};
use clap::Parser;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting beer-live-search");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(config).await {
        tracing::error!(
            "❌ Live search failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run(config: CliConfig) -> Result<(), SearchError> {
    let format = config.output_format()?;
    let settings = config.settings()?;

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        return Err(e);
    }

    let search = Arc::new(widgets::from_settings(&settings)?);
    let mut field = search.field();
    tracing::info!(
        "🔍 Widget {} ({} -> {})",
        settings.widget.name,
        settings.widget.field_selector,
        settings.widget.table_selector
    );

    match &config.type_text {
        Some(text) => {
            let handles = search.type_text(&mut field, text);
            let keystrokes = handles.len();
            for handle in handles {
                log_outcome(handle.await.unwrap_or(Outcome::Dropped));
            }
            tracing::info!("Typed {} keystrokes into {}", keystrokes, field.selector());
        }
        None => {
            // 每一行視為輸入框的完整內容
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await? {
                field.set_value(line);
                let outcome = search.keyup(&field).await.unwrap_or(Outcome::Dropped);
                log_outcome(outcome);
                println!("{}", render_table(&search.snapshot().await, format)?);
            }
            return Ok(());
        }
    }

    println!("{}", render_table(&search.snapshot().await, format)?);
    Ok(())
}

fn log_outcome(outcome: Outcome) {
    match outcome {
        Outcome::Applied { rows } => tracing::info!("✅ Table updated with {} rows", rows),
        Outcome::Stale => tracing::debug!("Skipped a superseded response"),
        Outcome::Dropped => tracing::info!("Search failed, table unchanged"),
    }
}
