use std::path::PathBuf;

use clap::Parser;

use super::config::{CleanupEndpointSetting, Settings};

/// Submits a list of audio files for transcription and stores the transcripts.
#[derive(Debug, Parser)]
#[command(name = "ausis-batch")]
#[command(version)]
#[command(about = "Batch transcription against a remote ausis transcription service")]
pub struct Cli {
    /// Listing file with one input audio path per line
    #[arg(long = "in-f", value_name = "FILE")]
    pub in_f: PathBuf,

    /// Output directory for transcriptions
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: PathBuf,

    /// Transcriber base URL
    #[arg(long)]
    pub url: Option<String>,

    /// Transcriber model (recognizer id)
    #[arg(long)]
    pub model: Option<String>,

    /// Speakers count
    #[arg(long)]
    pub speakers: Option<u32>,

    /// Use the legacy cleanup endpoint
    #[arg(long = "old-clean")]
    pub old_clean: bool,

    /// Transcription API secret key
    #[arg(long, env = "AUSIS_API_KEY", hide_env_values = true)]
    pub key: Option<String>,

    /// Workers count
    #[arg(long)]
    pub workers: Option<usize>,

    /// Do not fetch or write the restored (`.sync.txt`) transcript
    #[arg(long = "no-restored")]
    pub no_restored: bool,

    /// Settings file (TOML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Applies command-line overrides on top of file and environment settings.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(url) = &self.url {
            settings.service.base_url = url.clone();
        }
        if let Some(model) = &self.model {
            settings.service.recognizer = model.clone();
        }
        if let Some(speakers) = self.speakers {
            settings.service.speakers = Some(speakers);
        }
        if self.old_clean {
            settings.service.cleanup = CleanupEndpointSetting::Legacy;
        }
        if let Some(key) = &self.key {
            settings.service.api_key = Some(key.clone());
        }
        if let Some(workers) = self.workers {
            settings.dispatch.workers = workers;
        }
        if self.no_restored {
            settings.artifacts.fetch_restored = false;
        }
    }
}
