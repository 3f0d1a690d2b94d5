use clap::Parser;

/// Terminal analytics dashboard for suburb property listings
#[derive(Parser, Debug, Clone)]
#[command(
    name = "suburb-lens",
    about = "Terminal analytics dashboard for suburb property listings",
    version
)]
pub struct Settings {
    /// Suburb to query on startup
    #[arg(long, default_value = "Belmont North")]
    pub suburb: String,

    /// Restrict the query to one property type (e.g. "House", "Unit")
    #[arg(long)]
    pub property_type: Option<String>,

    /// Display theme
    #[arg(long, default_value = "auto", value_parser = ["light", "dark", "classic", "auto"])]
    pub theme: String,

    /// Use the built-in sample listings instead of the network
    #[arg(long)]
    pub sample: bool,

    /// HTTP timeout in seconds (1-120)
    #[arg(long, default_value = "15", value_parser = clap::value_parser!(u64).range(1..=120))]
    pub timeout_secs: u64,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<std::path::PathBuf>,
}
