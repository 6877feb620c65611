//! Main app runners

use std::process::ExitCode;

use crate::application::ports::ConfigStore;
use crate::application::{
    InputDirectory, RecordSessionUseCase, SessionCallbacks, SessionEnd, SessionRequest,
};
use crate::domain::audio::AudioInput;
use crate::domain::config::AppConfig;
use crate::infrastructure::{PactlAudioServer, ParecRecorder, XdgConfigStore};

use super::args::RecordOptions;
use super::presenter::Presenter;
use super::signals::listen_for_interrupt;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Message shown when nothing can be recorded
pub const NO_INPUTS_MESSAGE: &str = "No inputs right now.";

/// Pick an input interactively and record it
pub async fn run_record(options: RecordOptions) -> ExitCode {
    let presenter = Presenter::new();
    presenter.banner();

    let server = match PactlAudioServer::connect(options.server.clone()).await {
        Ok(server) => server,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let inputs = match InputDirectory::new(&server).list_routable_inputs().await {
        Ok(inputs) => inputs,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if inputs.is_empty() {
        presenter.output(NO_INPUTS_MESSAGE);
        return ExitCode::from(EXIT_ERROR);
    }

    presenter.input_list(&inputs);
    let chosen = match presenter.choose_input(inputs.len()) {
        Ok(index) => inputs[index].clone(),
        Err(e) => {
            presenter.error(&format!("No input chosen: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let interrupt = match listen_for_interrupt() {
        Ok(interrupt) => interrupt,
        Err(e) => {
            presenter.error(&format!("Cannot watch for Ctrl+C: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let recorder = ParecRecorder::new(options.sample_format, options.server);
    let use_case = RecordSessionUseCase::new(server, recorder);

    let request = SessionRequest {
        input: chosen,
        format: options.format,
        destination: options.destination.clone(),
        interrupt,
    };

    let destination = options.destination.display().to_string();
    let callbacks = SessionCallbacks {
        on_recording_start: Some(Box::new(move |input: &AudioInput| {
            Presenter::new().info(&format!("Recording {} into {}", input.name, destination));
        })),
    };

    let report = use_case.execute(request, callbacks).await;

    match report.end {
        SessionEnd::Completed => presenter.info(&format!(
            "Recorder exited, output at {}",
            options.destination.display()
        )),
        SessionEnd::Cancelled => presenter.success(&format!(
            "Recording stopped, output at {}",
            options.destination.display()
        )),
        SessionEnd::Faulted(ref message) => {
            presenter.warn(&format!("Recording aborted: {}", message))
        }
    }

    // A faulted session has already been logged and unwound.
    ExitCode::from(EXIT_SUCCESS)
}

/// Print the recordable inputs and exit
pub async fn run_list_inputs(server: Option<String>) -> ExitCode {
    let presenter = Presenter::new();

    let server = match PactlAudioServer::connect(server).await {
        Ok(server) => server,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match InputDirectory::new(&server).list_routable_inputs().await {
        Ok(inputs) if inputs.is_empty() => {
            presenter.output(NO_INPUTS_MESSAGE);
            ExitCode::from(EXIT_ERROR)
        }
        Ok(inputs) => {
            presenter.input_list(&inputs);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Load and merge configuration from file and CLI.
///
/// `cli_config.server` already carries `PULSE_SERVER` when no flag was given.
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Merge: defaults < file < env/cli
    AppConfig::defaults().merge(file_config).merge(cli_config)
}
