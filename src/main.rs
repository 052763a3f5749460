use clap::error::ErrorKind as ClapErrorKind;
use clap::Parser;
use console::style;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use template_scaffold::{
    cli::{validate_args, CliArgs},
    core::{ScaffoldConfig, ScaffoldError, ScaffoldResult},
    manifest::local::FsManifestStore,
    package_manager::client_for,
    registry::HttpRegistryClient,
    reporting::ConsoleReporter,
    App,
};

#[tokio::main]
async fn main() {
    let config = ScaffoldConfig::from_env();

    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion) => {
            let _ = e.print();
            return;
        }
        Err(e) => exit_with(
            &ScaffoldError::InvalidArguments {
                message: e.kind().as_str().unwrap_or("invalid arguments").to_string(),
            },
            &config,
            Some(e.render().to_string()),
        ),
    };

    init_tracing(args.verbose);

    if let Err(error) = run(&args, &config).await {
        exit_with(&error, &config, None);
    }
}

async fn run(args: &CliArgs, config: &ScaffoldConfig) -> ScaffoldResult<()> {
    let cwd = std::env::current_dir().map_err(|e| ScaffoldError::io(".", e))?;

    // 1. 引数検証
    let request = validate_args(args, &cwd, client_for).await?;

    // 2. 依存関係の構築
    let app = App::new(
        client_for(request.package_manager()),
        HttpRegistryClient::new(config.registry_url()),
        FsManifestStore::new(),
        ConsoleReporter::new(),
        config.clone(),
    );

    // 3. 実行
    app.run(&request, &cwd).await
}

/// 診断ログの初期化（RUST_LOG が指定されていればそちらを優先）
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn exit_with(error: &ScaffoldError, config: &ScaffoldConfig, detail: Option<String>) -> ! {
    eprintln!("{} {}", style("✗").red().bold(), style(error).red());
    if let Some(detail) = detail {
        eprintln!("{}", detail.trim_end());
    }
    if let Some(suggestion) = error.suggestion(config.issue_tracker_url()) {
        eprintln!("  {}", style(suggestion).dim());
    }
    std::process::exit(error.exit_code());
}
