use clap::Parser;
use node_flag_audit::adapters::outbound::console::StderrProgressReporter;
use node_flag_audit::adapters::outbound::filesystem::FileSystemReader;
use node_flag_audit::adapters::outbound::network::{NpmRegistryClient, OsvClient};
use node_flag_audit::adapters::outbound::system::SysinfoHostFacts;
use node_flag_audit::application::dto::AuditRequest;
use node_flag_audit::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use node_flag_audit::application::use_cases::{CheckDependenciesUseCase, RunAuditUseCase};
use node_flag_audit::cli::Args;
use node_flag_audit::config::{self, AuditConfig};
use node_flag_audit::shared::{ExitCode, Result};
use node_flag_audit::telemetry;
use std::process;

#[tokio::main]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    telemetry::init_tracing(args.verbose);

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let file_config = load_config(&args)?;
    let request = build_request(&args, &file_config);
    let format = args.format.or(file_config.format).unwrap_or_default();
    tracing::info!(
        environment = %request.environment,
        format = %format,
        check_dependencies = request.check_dependencies,
        "Starting audit"
    );

    // Create adapters (Dependency Injection)
    let dependency_check = if request.check_dependencies {
        Some(CheckDependenciesUseCase::new(
            NpmRegistryClient::new()?,
            OsvClient::new()?,
        ))
    } else {
        None
    };

    let use_case = RunAuditUseCase::new(
        SysinfoHostFacts::new(),
        FileSystemReader::new(),
        dependency_check,
        StderrProgressReporter::new(),
    );

    let response = use_case.execute(request).await?;

    eprintln!("{}", FormatterFactory::progress_message(format));
    let formatter = FormatterFactory::create(format, args.use_color(format));
    let formatted_output = formatter.format(&response.result)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output.clone()));
    presenter.present(&formatted_output)?;

    if args.fail_on_findings && response.has_blocking_findings() {
        return Ok(ExitCode::FindingsDetected);
    }
    Ok(ExitCode::Success)
}

/// Explicit `--config` path, else auto-discovery in the project directory
fn load_config(args: &Args) -> Result<AuditConfig> {
    if let Some(path) = &args.config {
        let loaded = config::load_config_from_path(path)?;
        eprintln!("📋 Loaded config from: {}", path.display());
        return Ok(loaded);
    }

    match config::discover_config(&args.path)? {
        Some(discovered) => {
            eprintln!(
                "📋 Auto-discovered config file: {}",
                args.path.join(config::CONFIG_FILENAME).display()
            );
            Ok(discovered)
        }
        None => Ok(AuditConfig::default()),
    }
}

/// Merges CLI flags over the config file; the CLI always wins
fn build_request(args: &Args, file_config: &AuditConfig) -> AuditRequest {
    let node_env = std::env::var("NODE_ENV").ok();
    let environment =
        config::resolve_environment(args.env, file_config.environment, node_env.as_deref());

    let request = AuditRequest::new(args.path.clone(), environment);
    if args.check_deps || file_config.check_dependencies.unwrap_or(false) {
        request.with_dependency_check(file_config.ignore_packages.clone())
    } else {
        request
    }
}
