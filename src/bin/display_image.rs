use clap::Parser;
use phone_text_detect::cli::{self, ViewerArgs};
use phone_text_detect::viewer;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = ViewerArgs::parse();
    cli::init_tracing(&args.log_level);

    match viewer::view(&args.path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(code = e.code(), "viewer failed");
            eprintln!("{}", e);
            ExitCode::from(1)
        }
    }
}
