use clap::Parser;
use review_convert::config::USAGE;
use review_convert::core::ConfigProvider;
use review_convert::utils::{logger, validation::Validate};
use review_convert::{
    CliConfig, ConversionEngine, ConvertError, LocalStorage, ReviewPipeline, TomlConfig,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let mut config = CliConfig::parse();

    if config.input.is_none() {
        println!("{}", USAGE);
        std::process::exit(1);
    }

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Some(settings_path) = config.config.clone() {
        tracing::debug!("Loading settings from: {}", settings_path);
        let settings = TomlConfig::from_file(&settings_path)
            .and_then(|settings| settings.validate().map(|_| settings));
        match settings {
            Ok(settings) => config.merge_settings(&settings),
            Err(e) => exit_with(&e),
        }
    }

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let review_url = config.review_url().to_string();
    let pipeline = ReviewPipeline::new(LocalStorage::new(), config);
    let engine = ConversionEngine::new(pipeline);

    match engine.run().await {
        Ok(report) => {
            tracing::info!("📁 Output saved to: {}", report.output_path);
            print!("{}", report.status_message(&review_url));
        }
        Err(e) => exit_with(&e),
    }
}

fn exit_with(e: &ConvertError) -> ! {
    tracing::error!(
        "❌ Conversion failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
