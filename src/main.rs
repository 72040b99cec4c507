use clap::Parser;
use poolsweep::cli::Cli;
use poolsweep::config::{self, SweepConfig, REGION_ENV};
use poolsweep::providers::aws::{load_sdk_config, AmplifyRegistry, CognitoPools, LambdaFunctions};
use poolsweep::sweep;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Fail before touching any provider when the region is missing.
    let Some(region) = config::region_from_env() else {
        eprintln!(
            "Please define the {REGION_ENV} environment variable for the region you're trying to clean. e.g. {REGION_ENV}=us-west-2 poolsweep"
        );
        std::process::exit(1);
    };

    // Initialize logging with INFO level
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let config = SweepConfig::new(region, cli.delay_ms, cli.page_size);
    let sdk_config = load_sdk_config(&config.region).await;

    let admin = CognitoPools::new(&sdk_config, config.page_size);
    let registry = AmplifyRegistry::new(&sdk_config);
    let functions = LambdaFunctions::new(&sdk_config);

    sweep::run(&admin, &registry, &functions, &config).await?;

    Ok(())
}
