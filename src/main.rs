//! apprec CLI entry point

use std::process::ExitCode;

use clap::Parser;

use apprec::cli::{
    app::{load_merged_config, run_list_inputs, run_record, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    init_logging,
    presenter::Presenter,
    RecordOptions,
};
use apprec::domain::audio::{AudioFormat, SampleFormat};
use apprec::domain::config::AppConfig;
use apprec::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let presenter = Presenter::new();

    // Build CLI config from args
    let cli_config = AppConfig {
        audio_format: cli
            .audio_format
            .map(|f| AudioFormat::from(f).to_string()),
        sample_format: cli.sample_format.clone(),
        server: cli.server.clone(),
    };

    // Handle subcommands
    match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        Some(Commands::Inputs) => {
            let config = load_merged_config(cli_config).await;
            return run_list_inputs(config.server().map(str::to_string)).await;
        }
        None => {}
    }

    let Some(destination) = cli.destination else {
        presenter.error("Missing destination file");
        return ExitCode::from(EXIT_USAGE_ERROR);
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    let format = match config.audio_format.as_deref().map(str::parse::<AudioFormat>) {
        Some(Ok(f)) => f,
        Some(Err(e)) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
        None => AudioFormat::default(),
    };

    let sample_format = match config
        .sample_format
        .as_deref()
        .map(str::parse::<SampleFormat>)
    {
        Some(Ok(f)) => f,
        Some(Err(e)) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
        None => SampleFormat::default(),
    };

    let options = RecordOptions {
        destination,
        format,
        sample_format,
        server: config.server().map(str::to_string),
    };

    run_record(options).await
}
