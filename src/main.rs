use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use pagequad::error::{EXIT_OK, EXIT_UNKNOWN};
use pagequad::{DetectorConfig, PageDetector};

#[derive(Parser)]
#[command(name = "pagequad")]
#[command(version)]
#[command(about = "Detect the corner coordinates of a document page in a photograph")]
struct Cli {
    /// Input image containing a document page
    #[arg(value_name = "IMAGE")]
    input_image: PathBuf,

    /// Path to the output JSON file
    #[arg(value_name = "OUTPUT")]
    output_file: PathBuf,

    /// Activate debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> ExitCode {
    let args = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if args.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .init();

    let detector = PageDetector::new(DetectorConfig::default());
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        detector.detect_file(&args.input_image, &args.output_file)
    }));

    let code = match outcome {
        Ok(Ok(_)) => EXIT_OK,
        Ok(Err(err)) => {
            error!("{err}");
            err.exit_code()
        }
        // A panic below us is an unanticipated failure; report the catch-all
        // code instead of the runtime's abort status.
        Err(_) => {
            error!("detection failed unexpectedly");
            EXIT_UNKNOWN
        }
    };
    ExitCode::from(code)
}
