use rustyline::DefaultEditor;

use ucd_tablegen::{casefold::CaseFold, mapping::IdnaMap, parse, Schema};

fn show<S: Schema>(name: &str, line: &str) {
    match S::parse(line) {
        Ok(Some(parsed)) => {
            println!("{name}::parse == {parsed:?}");
            println!("{name}::normalize == {:?}", S::normalize(parsed));
        }
        Ok(None) => println!("{name}::parse == skipped"),
        Err(e) => println!("{name}::parse == {e}"),
    }
}

fn main() {
    let mut rl = DefaultEditor::new().expect("Failed to init editor");
    while let Ok(ref line) = rl.readline(">> ") {
        let data = parse::strip_comment(line);
        if !data.trim().is_empty() {
            show::<IdnaMap>("IdnaMap", data);
            show::<CaseFold>("CaseFold", data);
        }
        rl.add_history_entry(line).expect("Failed to save history");
    }
}
