use clap::Parser;
use marquee::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "marquee", about = "Terminal movie browser for TMDB")]
struct Args {
    /// Result language, e.g. "en-US"
    #[arg(short, long)]
    language: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to marquee.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("marquee.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("marquee: {e}");
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(&file_config, args.language.as_deref());

    let Some(api_key) = resolved.api_key.clone() else {
        eprintln!(
            "marquee: TMDB API key must be set (config file [tmdb].api_key or TMDB_API_KEY env var)"
        );
        std::process::exit(1);
    };

    log::info!("Marquee starting up (language: {})", resolved.language);

    marquee::tui::run(resolved, api_key)
}
