use std::ffi::OsString;

use clap::Parser;

// Single-dash long flag kept for old scripts
const SINGLE_DASH_TEST_FLAG: &str = "-test";

/// Pack the MNIST training and test images into one bit per pixel, or print
/// the first packed images back as pixel grids.
#[derive(Parser, Debug)]
#[command(version, about, args_override_self = true)]
pub struct Args {
    /// Read the packed file back and print its first images instead of packing
    #[arg(short = 't', long = "test")]
    pub test: bool,

    // Stray words anywhere on the command line are accepted and ignored
    #[arg(hide = true)]
    pub rest: Vec<OsString>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Pack,
    Verify,
}

impl Args {
    // Parse a full argument list, program name first, accepting `-test`
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Args::try_parse_from(normalize_args(args))
    }

    pub fn mode(&self) -> Mode {
        if self.test {
            Mode::Verify
        } else {
            Mode::Pack
        }
    }
}

// Rewrite `-test` to `--test` wherever it appears after the program name,
// so clap does not read it as a cluster of short flags
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(i, arg)| {
            if i > 0 && arg == SINGLE_DASH_TEST_FLAG {
                OsString::from("--test")
            } else {
                arg
            }
        })
        .collect()
}
