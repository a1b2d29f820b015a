use std::{env, fs, process::ExitCode};

use crate::{
    config::Invocation,
    emit, fetch,
    logging::{self, LogOptions},
    Error, Schema, Table,
};

/// Usage text for the generator built around `S`.
#[must_use]
pub fn usage<S: Schema>(program: &str) -> String {
    let [headers, datatype, varname, outfile] = S::EXAMPLE;
    format!(
        "Usage: {program} url headers datatype varname outfile\n\
         Example: {program} {} {headers} {datatype} {varname} {outfile}",
        S::SOURCE
    )
}

/// Fetches, builds and writes one table.
///
/// # Errors
///
/// The first failure of any stage; nothing is written unless every line
/// parsed.
pub fn run<S: Schema>(invocation: &Invocation) -> Result<Table<S>, Error> {
    let text = fetch::fetch(&invocation.source)?;
    let table = Table::<S>::from_text(&text)?;
    let out = emit::render::<S>(table.records(), invocation)?;

    fs::write(&invocation.outfile, out).map_err(|source| Error::Write {
        path: invocation.outfile.clone(),
        source,
    })?;

    Ok(table)
}

/// Entry point shared by the generator binaries.
#[must_use]
pub fn main<S: Schema>() -> ExitCode {
    let program = env::args().next().unwrap_or_else(|| S::BIN.to_string());
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        println!("{}", usage::<S>(&program));
        return ExitCode::SUCCESS;
    }

    let invocation = match Invocation::from_args(program.clone(), args) {
        Ok(x) => x,
        Err(e) => {
            eprintln!("{e}");
            println!("{}", usage::<S>(&program));
            return ExitCode::FAILURE;
        }
    };

    logging::init(LogOptions::from_env());

    match run::<S>(&invocation) {
        Ok(_) => {
            println!("wrote {}", invocation.outfile.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
