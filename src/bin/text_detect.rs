use clap::Parser;
use phone_text_detect::cli::{self, DetectArgs};
use phone_text_detect::detect::{self, RESULT_WINDOW_TITLE};
use phone_text_detect::{display, engines, DetectConfig};
use std::process::ExitCode;

/// Status for usage, load, engine and later failures (C's `return -1`)
const FAILURE: u8 = 255;

fn main() -> ExitCode {
    let args = match DetectArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(FAILURE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    cli::init_tracing(&args.log_level);

    let config = DetectConfig::from(args);
    tracing::info!(
        "Starting text_detect v{} (engines: {:?})",
        env!("CARGO_PKG_VERSION"),
        engines::available()
    );

    let mut stdout = std::io::stdout().lock();
    let result = detect::detect(&config, engines::create, &mut stdout).and_then(|detection| {
        if config.display {
            display::show_and_wait(RESULT_WINDOW_TITLE, &detection.annotated)?;
        }
        Ok(())
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(code = e.code(), "text_detect failed");
            eprintln!("Error: {}", e);
            ExitCode::from(FAILURE)
        }
    }
}
