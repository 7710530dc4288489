use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use sluglink::cli::{Cli, Commands, ConfigCommands};
use sluglink::config::{StaticConfig, init_config_with};
use sluglink::errors::SluglinkError;

#[actix_web::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Some(Commands::Config {
        action: ConfigCommands::Generate { output, force },
    }) = &cli.command
    {
        return generate_config(output.as_deref(), *force);
    }

    let mut config = match StaticConfig::load_from(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "{}",
                SluglinkError::config(format!("failed to load configuration: {}", e))
                    .format_colored()
            );
            return ExitCode::FAILURE;
        }
    };
    cli.apply_overrides(&mut config);
    let logging = config.logging.clone();
    init_config_with(config);

    // 日志 guard 必须存活到进程结束
    let _log_guard = match sluglink::system::init_logging(&logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    match sluglink::runtime::modes::run_server().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<SluglinkError>() {
                Some(err) => eprintln!("{}", err.format_colored()),
                None => eprintln!("Server error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn generate_config(output: Option<&str>, force: bool) -> ExitCode {
    let Some(path) = output else {
        print!("{}", StaticConfig::generate_sample_config());
        return ExitCode::SUCCESS;
    };

    if Path::new(path).exists() && !force {
        eprintln!("{} already exists, use --force to overwrite", path);
        return ExitCode::FAILURE;
    }

    match StaticConfig::default().save_to_file(path) {
        Ok(()) => {
            println!("Sample configuration written to {}", path);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!(
                "{}",
                SluglinkError::file_operation(format!("cannot write {}: {}", path, e))
                    .format_colored()
            );
            ExitCode::FAILURE
        }
    }
}
