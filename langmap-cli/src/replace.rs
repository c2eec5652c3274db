use std::path::Path;

use langmap::{
    DomainTable, Error, LangmapFormat, LoadOptions, MessageStore, Substitution,
    files::write_text, substitute_file_with, traits::Parser,
};

/// Everything the replace command needs, as parsed from the command line.
#[derive(Debug, Clone)]
pub struct ReplaceOptions {
    pub input: String,
    pub output: String,
    pub langmap: String,
    pub domain: String,
    pub strict: bool,
    /// Where to write the loaded messages: a `.langmap` path re-serializes the domain,
    /// anything else gets the whole store as JSON, `-` for stdout.
    pub dump: Option<String>,
}

/// Run the replace command: load the language map, substitute the input and write the
/// output. Diagnostics and summaries go to stderr as they happen.
pub fn run_replace_command(options: &ReplaceOptions) -> Result<Substitution, Error> {
    let load_options = LoadOptions::new().with_strict(options.strict);

    let report = substitute_file_with(
        &options.input,
        &options.output,
        &options.langmap,
        &options.domain,
        &load_options,
        |store, load| {
            for line in load.messages() {
                eprintln!("{}", line);
            }
            match &options.dump {
                Some(dump) => dump_store(store, &options.domain, dump),
                None => Ok(()),
            }
        },
    )?;

    eprintln!("{}", report.substitution.summary(&options.output));
    Ok(report.substitution)
}

fn dump_store(store: &MessageStore, domain: &str, target: &str) -> Result<(), Error> {
    if target.ends_with(".langmap") {
        let empty = DomainTable::new();
        let table = store.domain(domain).unwrap_or(&empty);
        return LangmapFormat::from_table(table).write_to(target);
    }

    let json = store.to_json()?;
    if target == "-" {
        println!("{}", json);
        Ok(())
    } else {
        write_text(Path::new(target), &json)
    }
}
