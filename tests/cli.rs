use std::{fs, process::Command};

use indoc::indoc;

use ucd_tablegen::{cli, config::Invocation, fetch::FetchError, mapping::IdnaMap, Error};

const IDNA: &str = indoc! {"
    # IdnaMappingTable.txt
    0041          ; mapped     ; 0061       # 1.1  LATIN CAPITAL LETTER A
    0061..007A    ; valid                   # 1.1  LATIN SMALL LETTER A..Z
    FA6E..FA6F    ; disallowed              # NA   <reserved-FA6E>..<reserved-FA6F>
"};

const CASEFOLD: &str = indoc! {"
    0041; C; 0061; # LATIN CAPITAL LETTER A
    00DF; F; 0073 0073; # LATIN SMALL LETTER SHARP S
"};

fn generator(bin: &str) -> Command {
    Command::new(match bin {
        "idnamap-gen" => env!("CARGO_BIN_EXE_idnamap-gen"),
        _ => env!("CARGO_BIN_EXE_casefold-gen"),
    })
}

#[test]
fn run_writes_c_table() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("IdnaMappingTable.txt");
    let outfile = dir.path().join("ares_idnamap.c");
    fs::write(&source, IDNA).unwrap();

    let invocation = Invocation {
        program: "idnamap-gen".into(),
        source: source.display().to_string(),
        headers: "ares_idnamap.h".into(),
        datatype: "ares_idnamap_data_t".into(),
        varname: "ares_idnamap_data".into(),
        outfile: outfile.clone(),
    };
    let table = cli::run::<IdnaMap>(&invocation).unwrap();
    assert_eq!(table.len(), 2);

    let out = fs::read_to_string(&outfile).unwrap();
    let lines = out.lines().collect::<Vec<_>>();
    assert_eq!(lines[0], format!("/* Generated via {} */", invocation.command_line()));
    assert_eq!(lines[1], "#include \"ares_idnamap.h\"");
    assert_eq!(lines[2], "");
    assert_eq!(lines[3], "size_t ares_idnamap_data_len = 2;");
    assert_eq!(lines[4], "ares_idnamap_data_t ares_idnamap_data[] = {");
    assert_eq!(
        lines[5],
        "  {       0x41,       0x41, 3, {       0x61,        0x0,        0x0 } },"
    );
    assert_eq!(
        lines[6],
        "  {     0xfa6e,     0xfa6f, 1, {        0x0,        0x0,        0x0 } },"
    );
    assert_eq!(lines[7], "};");
    assert_eq!(lines.len(), 8);
}

#[test]
fn run_fails_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("IdnaMappingTable.txt");
    let outfile = dir.path().join("out.c");
    fs::write(&source, "0041 ; mapped ; 0061\n0042 ; bogus\n").unwrap();

    let mut invocation = Invocation {
        program: "idnamap-gen".into(),
        source: source.display().to_string(),
        headers: String::new(),
        datatype: "t".into(),
        varname: "v".into(),
        outfile: outfile.clone(),
    };
    assert!(matches!(
        cli::run::<IdnaMap>(&invocation),
        Err(Error::Format { line: 2, .. })
    ));
    assert!(!outfile.exists());

    invocation.source = dir.path().join("missing.txt").display().to_string();
    assert!(matches!(
        cli::run::<IdnaMap>(&invocation),
        Err(Error::Fetch(FetchError::Read { .. }))
    ));

    fs::write(&source, IDNA).unwrap();
    invocation.source = source.display().to_string();
    invocation.outfile = dir.path().join("no/such/dir/out.c");
    assert!(matches!(
        cli::run::<IdnaMap>(&invocation),
        Err(Error::Write { .. })
    ));
}

#[test]
fn binary_reports_success() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("CaseFolding.txt");
    let outfile = dir.path().join("casefold.c");
    fs::write(&source, CASEFOLD).unwrap();

    let output = generator("casefold-gen")
        .args([
            source.to_str().unwrap(),
            "ares_setup.h,ares_casefold.h",
            "ares_casefold_data_t",
            "ares_casefold_data",
            outfile.to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        format!("wrote {}\n", outfile.display())
    );

    let out = fs::read_to_string(&outfile).unwrap();
    assert!(out.contains("#include \"ares_setup.h\"\n#include \"ares_casefold.h\"\n\n"));
    assert!(out.contains("size_t ares_casefold_data_len = 1;\n"));
    assert!(out.contains("  {       0x41,       0x61 },\n"));
}

#[test]
fn binary_writes_rust_table() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("IdnaMappingTable.txt");
    let outfile = dir.path().join("data.rs");
    fs::write(&source, IDNA).unwrap();

    let status = generator("idnamap-gen")
        .args([
            source.to_str().unwrap(),
            "crate::IdnaMapData",
            "IdnaMapData",
            "idna_map_data",
            outfile.to_str().unwrap(),
        ])
        .status()
        .unwrap();

    assert!(status.success());
    let out = fs::read_to_string(&outfile).unwrap();
    assert!(out.starts_with("// @generated via "));
    assert!(out.contains("pub const IDNA_MAP_DATA_LEN: usize = 2;"));
}

#[test]
fn binary_rejects_wrong_argument_count() {
    for bin in ["idnamap-gen", "casefold-gen"] {
        let output = generator(bin).args(["only", "three", "args"]).output().unwrap();
        assert_eq!(output.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&output.stdout).starts_with("Usage: "));
        assert!(String::from_utf8_lossy(&output.stderr).contains("expected 5 arguments"));

        let output = generator(bin)
            .args(["a", "b", "c", "d", "e", "f"])
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&output.stderr).contains("unexpected arguments [\"f\"]"));
    }
}

#[test]
fn binary_fails_on_empty_table() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("IdnaMappingTable.txt");
    let outfile = dir.path().join("out.c");
    fs::write(&source, "# nothing here\n0041..007A ; valid\n").unwrap();

    let output = generator("idnamap-gen")
        .args([source.to_str().unwrap(), "a.h", "t", "v", outfile.to_str().unwrap()])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("no codepoints parsed"));
    assert!(!outfile.exists());
}
