//! Command-line driver for the `dce-uuid` crate.
//!
//! Implements the contract fixed in the library's own documentation:
//! `uuid [-1] [-n COUNT] [-r] [-d] [-o FILE] [-v {1|3|4}] [UUID|NS NAME]`.
//! This binary is a thin shell over [`dce_uuid`]; all the interesting
//! bit-twiddling lives in the library so it can be tested without a
//! process boundary.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use dce_uuid::{Generate, Generator, Namespace, UuidError, UUID};

/// Generate or decode DCE 1.1 / RFC 4122 UUIDs.
#[derive(Debug, Parser)]
#[command(name = "uuid", version, about, long_about = None)]
struct Cli {
    /// Iterate from nil: reset to the nil UUID before each generation
    /// instead of letting the previous call's output carry over.
    #[arg(short = '1')]
    iterate: bool,

    /// Number of UUIDs to produce.
    #[arg(short = 'n', value_name = "COUNT", default_value_t = 1)]
    count: u32,

    /// Emit raw 16-byte binary output instead of the canonical string form.
    #[arg(short = 'r')]
    raw: bool,

    /// Decode the given UUID instead of generating one.
    #[arg(short = 'd')]
    decode: bool,

    /// Write output to FILE instead of stdout.
    #[arg(short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// UUID version to generate.
    #[arg(short = 'v', value_name = "VERSION", default_value_t = 1)]
    version: u8,

    /// For `-d`: the UUID to decode. For `-v 3`: the namespace (one of
    /// `DNS`, `URL`, `OID`, `X500`, or an arbitrary namespace UUID) followed
    /// by the name to hash.
    #[arg(value_name = "ARGS")]
    args: Vec<String>,
}

fn main() -> ExitCode {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("uuid:ERROR: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), UuidError> {
    let mut sink: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(
            File::create(path)
                .map_err(|err| UuidError::SystemError(format!("fopen: {err}")))?,
        ),
        None => Box::new(io::stdout()),
    };

    if cli.decode {
        return decode(cli, sink.as_mut());
    }

    encode(cli, sink.as_mut())
}

fn decode(cli: &Cli, out: &mut dyn Write) -> Result<(), UuidError> {
    let [target] = cli.args.as_slice() else {
        return Err(UuidError::InvalidArgument(
            "decode mode (-d) takes exactly one UUID argument".into(),
        ));
    };

    let uuid = UUID::from_str(target)?;
    write!(out, "{}", uuid.describe())
        .map_err(|err| UuidError::SystemError(format!("write: {err}")))
}

fn encode(cli: &Cli, out: &mut dyn Write) -> Result<(), UuidError> {
    let what = generate_request(cli)?;

    let mut generator = Generator::new();

    for _ in 0..cli.count {
        if cli.iterate {
            generator = Generator::new();
        }

        let current = generator.generate(what.clone())?;

        emit(&current, cli.raw, out)?;
    }

    Ok(())
}

fn generate_request(cli: &Cli) -> Result<Generate<'_>, UuidError> {
    match cli.version {
        1 => {
            if !cli.args.is_empty() {
                return Err(UuidError::InvalidArgument(
                    "version 1 takes no positional arguments".into(),
                ));
            }
            Ok(Generate::V1 {
                multicast_random: false,
            })
        }
        3 => {
            let [namespace, name] = cli.args.as_slice() else {
                return Err(UuidError::InvalidArgument(
                    "version 3 requires NAMESPACE and NAME arguments".into(),
                ));
            };
            let namespace = Namespace::from_str(namespace)
                .map_err(|err| UuidError::InvalidArgument(err.to_string()))?;
            Ok(Generate::V3 { namespace, name })
        }
        4 => {
            if !cli.args.is_empty() {
                return Err(UuidError::InvalidArgument(
                    "version 4 takes no positional arguments".into(),
                ));
            }
            Ok(Generate::V4)
        }
        other => Err(UuidError::InvalidArgument(format!(
            "unsupported version '{other}'; must be 1, 3 or 4"
        ))),
    }
}

fn emit(uuid: &UUID, raw: bool, out: &mut dyn Write) -> Result<(), UuidError> {
    let result = if raw {
        out.write_all(&uuid.pack())
    } else {
        writeln!(out, "{uuid}")
    };

    result.map_err(|err| UuidError::SystemError(format!("write: {err}")))
}
