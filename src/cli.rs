//! Command-line interface definition using clap.
//!
//! This module defines [`Args`], the CLI argument structure, and the
//! conversion from flags into an [`AnalysisConfig`].

use clap::Parser;

use crate::config::AnalysisConfig;

/// Analyze an exported chat log and print a JSON report of sentiment,
/// activity and conversation patterns.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatpulse")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatpulse chat.txt
    chatpulse chat.txt -o report.json --pretty
    cat chat.txt | chatpulse - --skip-system
    chatpulse chat.txt --rolling-window 10 --starter-gap-hours 8")]
pub struct Args {
    /// Path to the chat export, or `-` for stdin
    pub input: String,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Skip WhatsApp service notices (joins, leaves, encryption banners)
    #[arg(long)]
    pub skip_system: bool,

    /// Messages averaged by the rolling sentiment
    #[arg(long, value_name = "N")]
    pub rolling_window: Option<usize>,

    /// Messages inspected for a negativity cluster
    #[arg(long, value_name = "N")]
    pub cluster_window: Option<usize>,

    /// Hours of silence before a message starts a new conversation
    #[arg(long, value_name = "N")]
    pub starter_gap_hours: Option<i64>,
}

impl Args {
    /// Returns `true` if the input should be read from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.input == "-"
    }

    /// Builds the analysis configuration from the flags.
    ///
    /// A cluster window narrower than the default cluster size also
    /// narrows the cluster size so the configuration stays valid.
    pub fn analysis_config(&self) -> AnalysisConfig {
        let mut config = AnalysisConfig::new().with_skip_system_messages(self.skip_system);
        if let Some(window) = self.rolling_window {
            config = config.with_rolling_window(window);
        }
        if let Some(window) = self.cluster_window {
            let min_count = config.cluster_min_count.min(window);
            config = config
                .with_cluster_window(window)
                .with_cluster_min_count(min_count);
        }
        if let Some(hours) = self.starter_gap_hours {
            config = config.with_starter_gap_hours(hours);
        }
        config
    }
}
