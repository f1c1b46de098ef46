use std::io;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use log::{error, info};

use bit_mnist::cli::{Args, Mode};
use bit_mnist::dataset::{convert, verify};
use bit_mnist::Config;

// A negative return reaches the shell as 255
const FAILURE: u8 = 255;

fn main() -> ExitCode {
    pretty_env_logger::init();
    let args = match Args::try_parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(err) => return usage(err),
    };
    let config = Config::default();

    let result = match args.mode() {
        Mode::Pack => pack(&config),
        Mode::Verify => verify(&config, &mut io::stdout().lock()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}. Exiting.", err);
            ExitCode::from(FAILURE)
        }
    }
}

// Help and version requests succeed, every other parse failure is fatal
fn usage(err: clap::Error) -> ExitCode {
    let _ = err.print();
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => ExitCode::from(FAILURE),
    }
}

fn pack(config: &Config) -> bit_mnist::Result<()> {
    let now = Instant::now();
    let stats = convert(config)?;
    info!(
        "Wrote {} images ({} bytes) to {} [{}ms]",
        stats.images(),
        stats.bytes,
        config.packed.display(),
        now.elapsed().as_millis()
    );
    Ok(())
}
