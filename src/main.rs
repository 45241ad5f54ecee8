use clap::Parser;
use jot::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jot", about = "Terminal checklist")]
struct Args {
    /// Directory holding the saved list (default: ~/.jot)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to jot.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("jot.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Jot starting up");

    let config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("jot: {e}");
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(&config, args.data_dir.as_deref())?;

    jot::tui::run(resolved)
}
