use std::path::Path;

use proc_macro2::{Literal, TokenStream};
use quote::quote;
use thiserror::Error;

use crate::{config::Invocation, schema::Schema};

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum EmitError {
    #[error("{what} {value:?} is not valid Rust: {reason}")]
    Syntax {
        what: &'static str,
        value: String,
        reason: String,
    },
}

/// Language of the generated file, picked from the output path.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Language {
    C,
    Rust,
}

impl Language {
    #[must_use]
    pub fn of(path: &Path) -> Self {
        match path.extension() {
            Some(ext) if ext == "rs" => Self::Rust,
            _ => Self::C,
        }
    }
}

/// Renders `records` as a source file for the declaration in `invocation`.
///
/// # Errors
///
/// Only for Rust output, when a header, type or variable name doesn't parse.
pub fn render<S: Schema>(
    records: &[S::Record],
    invocation: &Invocation,
) -> Result<String, EmitError> {
    let out = match Language::of(&invocation.outfile) {
        Language::C => render_c::<S>(records, invocation),
        Language::Rust => render_rust::<S>(records, invocation)?,
    };

    tracing::info!(records = records.len(), bytes = out.len(), "rendered table");

    Ok(out)
}

#[must_use]
pub fn render_c<S: Schema>(records: &[S::Record], invocation: &Invocation) -> String {
    let Invocation { datatype, varname, .. } = invocation;

    let mut lines = vec![format!("/* Generated via {} */", invocation.command_line())];
    lines.extend(invocation.includes().map(|x| format!("#include \"{x}\"")));
    lines.push(String::new());
    lines.push(format!("size_t {varname}_len = {};", records.len()));
    lines.push(format!("{datatype} {varname}[] = {{"));
    lines.extend(records.iter().map(|x| format!("  {},", S::c_row(x))));
    lines.push("};\n".into());

    lines.join("\n")
}

/// Renders a `const` length and a `static` array of struct literals.
///
/// # Errors
///
/// When a header isn't a path, the type isn't a path, or the variable isn't
/// an identifier.
pub fn render_rust<S: Schema>(
    records: &[S::Record],
    invocation: &Invocation,
) -> Result<String, EmitError> {
    let uses = invocation
        .includes()
        .map(|x| syntax::<syn::Path>("header", x))
        .collect::<Result<Vec<_>, _>>()?;
    let datatype = syntax::<syn::Path>("type", &invocation.datatype)?;
    let varname = syntax::<syn::Ident>("variable", &invocation.varname)?;
    let len = syntax::<syn::Ident>(
        "variable",
        &format!("{}_LEN", invocation.varname.to_uppercase()),
    )?;

    let n = Literal::usize_unsuffixed(records.len());
    let rows = records.iter().map(S::rust_fields);

    let tokens: TokenStream = quote! {
        #(use #uses;)*

        pub const #len: usize = #n;

        #[allow(non_upper_case_globals)]
        pub static #varname: [#datatype; #len] = [#(#datatype { #rows }),*];
    };

    let file = syn::parse2::<syn::File>(tokens).map_err(|e| EmitError::Syntax {
        what: "table",
        value: invocation.varname.clone(),
        reason: e.to_string(),
    })?;

    Ok(format!(
        "// @generated via {}\n\n{}",
        invocation.command_line(),
        prettyplease::unparse(&file)
    ))
}

fn syntax<T: syn::parse::Parse>(what: &'static str, value: &str) -> Result<T, EmitError> {
    syn::parse_str::<T>(value).map_err(|e| EmitError::Syntax {
        what,
        value: value.to_string(),
        reason: e.to_string(),
    })
}
