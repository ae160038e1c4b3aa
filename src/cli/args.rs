use clap::Args;

/// Exactly one context source
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct ContextArgs {
    /// Use the focused note (see --active)
    #[arg(long)]
    pub active_note: bool,

    /// Use the given text as the selection (`-` reads stdin)
    #[arg(long)]
    pub selection: Option<String>,

    /// Use a note by vault path (`.md` optional)
    #[arg(long)]
    pub note: Option<String>,

    /// Use every markdown note under a folder
    #[arg(long)]
    pub folder: Option<String>,

    /// Use every note carrying a tag
    #[arg(long)]
    pub tag: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ChainArgs {
    /// Chain type: llm_chain or retrieval_qa
    pub chain: String,

    /// Chat model by display name or id (defaults to the configured one)
    #[arg(long)]
    pub model: Option<String>,

    /// Context source for retrieval QA (defaults to the configured one)
    #[arg(long)]
    pub context: Option<String>,

    /// Note path, folder path, or tag for the context source
    #[arg(long, default_value = "")]
    pub key: String,

    /// Selected text for the selection source (`-` reads stdin)
    #[arg(long)]
    pub selection: Option<String>,

    /// JSON chat history to continue (`-` reads stdin)
    #[arg(long)]
    pub history: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct WindowArgs {
    /// JSON chat history file (`-` reads stdin)
    #[arg(long)]
    pub history: String,

    /// Number of messages to keep (defaults to two per configured turn)
    #[arg(long)]
    pub size: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// JSON chat history file (`-` reads stdin)
    #[arg(long)]
    pub history: String,

    /// Vault folder to save into (defaults to the configured folder)
    #[arg(long)]
    pub folder: Option<String>,

    /// Name the note with a UTC timestamp instead of local time
    #[arg(long)]
    pub utc: bool,
}
