//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::audio::{AudioFormat, SampleFormat};

/// apprec - record the audio of one application
#[derive(Parser, Debug)]
#[command(name = "apprec")]
#[command(version)]
#[command(about = "Record the audio of a single PulseAudio application to a file")]
#[command(long_about = None)]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    /// File to record into
    #[arg(value_name = "DESTINATION", required = true)]
    pub destination: Option<PathBuf>,

    /// Container format of the recording
    #[arg(short = 'f', long, value_name = "FORMAT")]
    pub audio_format: Option<FormatArg>,

    /// Raw sample format (e.g. s16le, s24le, float32le)
    #[arg(long, value_name = "SAMPLE")]
    pub sample_format: Option<String>,

    /// Sound server to connect to instead of the local one
    #[arg(short = 's', long, value_name = "SERVER", env = "PULSE_SERVER")]
    pub server: Option<String>,

    /// Show debug logs
    #[arg(short = 'v', long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the applications that can be recorded
    Inputs,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Audio format argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Wav,
}

impl From<FormatArg> for AudioFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Wav => AudioFormat::Wav,
        }
    }
}

impl From<AudioFormat> for FormatArg {
    fn from(format: AudioFormat) -> Self {
        match format {
            AudioFormat::Wav => FormatArg::Wav,
        }
    }
}

/// Parsed options for a recording run
#[derive(Debug, Clone)]
pub struct RecordOptions {
    pub destination: PathBuf,
    pub format: AudioFormat,
    pub sample_format: SampleFormat,
    pub server: Option<String>,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["audio_format", "sample_format", "server"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_destination() {
        let cli = Cli::try_parse_from(["apprec", "/tmp/foo.wav"]).unwrap();
        assert_eq!(cli.destination, Some(PathBuf::from("/tmp/foo.wav")));
        assert!(cli.audio_format.is_none());
        assert!(!cli.verbose);
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_parses_audio_format() {
        let cli = Cli::try_parse_from(["apprec", "--audio-format", "wav", "out.wav"]).unwrap();
        assert_eq!(cli.audio_format, Some(FormatArg::Wav));
    }

    #[test]
    fn cli_rejects_unknown_audio_format() {
        assert!(Cli::try_parse_from(["apprec", "--audio-format", "mp3", "out.mp3"]).is_err());
    }

    #[test]
    fn cli_requires_destination() {
        assert!(Cli::try_parse_from(["apprec"]).is_err());
    }

    #[test]
    fn cli_parses_inputs_without_destination() {
        let cli = Cli::try_parse_from(["apprec", "inputs"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Inputs)));
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::try_parse_from(["apprec", "config", "set", "sample_format", "s24le"]).unwrap();
        if let Some(Commands::Config {
            action: ConfigAction::Set { key, value },
        }) = cli.command
        {
            assert_eq!(key, "sample_format");
            assert_eq!(value, "s24le");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn format_arg_converts_to_audio_format() {
        assert_eq!(AudioFormat::from(FormatArg::Wav), AudioFormat::Wav);
        assert_eq!(FormatArg::from(AudioFormat::Wav), FormatArg::Wav);
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("audio_format"));
        assert!(is_valid_config_key("server"));
        assert!(!is_valid_config_key("api_key"));
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
