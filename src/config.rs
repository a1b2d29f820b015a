use std::{ffi::OsString, path::PathBuf};

use thiserror::Error;

/// The five positional arguments every generator takes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program name as invoked, recorded in the generated file.
    pub program: String,
    pub source: String,
    /// Comma separated header names, as given.
    pub headers: String,
    pub datatype: String,
    pub varname: String,
    pub outfile: PathBuf,
}

/// Arguments that don't form an [`Invocation`]; callers print usage.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgsError {
    #[error("expected 5 arguments")]
    Missing,
    #[error("unexpected arguments {0:?}")]
    Unexpected(Vec<OsString>),
    #[error("{0}")]
    Invalid(String),
}

impl Invocation {
    /// Reads exactly five positional arguments.
    ///
    /// # Errors
    ///
    /// Too few, too many, or non UTF-8 arguments.
    pub fn from_args(
        program: String,
        mut args: pico_args::Arguments,
    ) -> Result<Self, ArgsError> {
        let mut next = || -> Result<String, ArgsError> {
            match args.free_from_str::<String>() {
                Ok(x) => Ok(x),
                Err(pico_args::Error::MissingArgument) => Err(ArgsError::Missing),
                Err(e) => Err(ArgsError::Invalid(e.to_string())),
            }
        };

        let source = next()?;
        let headers = next()?;
        let datatype = next()?;
        let varname = next()?;
        let outfile = next()?;

        let rest = args.finish();
        if !rest.is_empty() {
            return Err(ArgsError::Unexpected(rest));
        }

        Ok(Self {
            program,
            source,
            headers,
            datatype,
            varname,
            outfile: outfile.into(),
        })
    }

    /// Header names to include, blanks skipped.
    pub fn includes(&self) -> impl Iterator<Item = &str> {
        self.headers
            .split(',')
            .map(str::trim)
            .filter(|x| !x.is_empty())
    }

    /// The invocation as a single line, for provenance comments.
    #[must_use]
    pub fn command_line(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.program,
            self.source,
            self.headers,
            self.datatype,
            self.varname,
            self.outfile.display()
        )
    }
}
