use std::path::PathBuf;

use checklist_core::export;
use checklist_core::FilterCriterion;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "checklist")]
#[command(about = "Keep a small to-do list from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Optional path to the storage file
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Answer yes to every confirmation
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Quick capture: checklist "buy milk"
    #[arg(trailing_var_arg = true)]
    pub note: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a note
    #[command(alias = "new")]
    Add {
        /// Due date (YYYY-MM-DD)
        #[arg(short, long, value_name = "DATE")]
        due: Option<String>,
        /// Note text
        text: Vec<String>,
    },
    /// List notes
    #[command(alias = "ls")]
    List {
        /// Show only notes with this status
        #[arg(short, long, value_enum, default_value_t = StatusFilter::All)]
        status: StatusFilter,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Replace the text of a note
    Edit {
        /// Note number as shown by `list`
        number: usize,
        /// New text (opens $EDITOR when omitted)
        text: Vec<String>,
    },
    /// Mark a note complete
    #[command(alias = "done")]
    Complete {
        /// Note number as shown by `list`
        number: usize,
    },
    /// Delete a note
    #[command(alias = "rm")]
    Delete {
        /// Note number as shown by `list`
        number: usize,
    },
    /// Delete all notes
    Clear,
    /// Export notes
    Export {
        /// Export format
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        /// Optional output file or directory (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum StatusFilter {
    All,
    Pending,
    Complete,
}

impl From<StatusFilter> for FilterCriterion {
    fn from(value: StatusFilter) -> Self {
        match value {
            StatusFilter::All => Self::All,
            StatusFilter::Pending => Self::Pending,
            StatusFilter::Complete => Self::Complete,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Markdown,
}

impl From<ExportFormat> for export::ExportFormat {
    fn from(value: ExportFormat) -> Self {
        match value {
            ExportFormat::Json => Self::Json,
            ExportFormat::Markdown => Self::Markdown,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
