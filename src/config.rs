//! Configuration and CLI argument handling

use clap::Parser;

use crate::services::VoicePreference;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "kettlebell-coach")]
#[command(about = "A state-managed HTTP server that runs kettlebell workout session timers")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Coach voice for spoken cues and beeps
    #[arg(long, value_enum, default_value_t = VoicePreference::Female)]
    pub voice: VoicePreference,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["kettlebell-coach"]).unwrap();
        assert_eq!(config.address(), "127.0.0.1:20554");
        assert_eq!(config.voice, VoicePreference::Female);
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn voice_and_verbose_flags() {
        let config =
            Config::try_parse_from(["kettlebell-coach", "--voice", "off", "-v", "-p", "9000"]).unwrap();
        assert_eq!(config.voice, VoicePreference::Off);
        assert_eq!(config.log_level(), "debug");
        assert_eq!(config.port, 9000);
    }
}
