use clap::{Parser, error::ErrorKind};
use langmap::MAIN_DOMAIN;
use langmap_cli::{ReplaceOptions, run_replace_command};

/// Replace every key of a language map with its message in a text file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The input file to process
    input: String,

    /// The output file to write the results to
    output: String,

    /// The language map file holding the key/message records
    langmap: String,

    /// Domain to load the language map into and substitute from
    #[arg(short, long, default_value = MAIN_DOMAIN)]
    domain: String,

    /// Fail instead of overwriting when a key appears twice
    #[arg(long)]
    strict: bool,

    /// Also write the loaded messages to this path: `.langmap` re-serializes the domain,
    /// anything else gets JSON (`-` for stdout)
    #[arg(long, value_name = "PATH")]
    dump: Option<String>,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // Usage problems exit with 1, not clap's default of 2.
            e.print().ok();
            std::process::exit(1);
        }
    };

    let options = ReplaceOptions {
        input: args.input,
        output: args.output,
        langmap: args.langmap,
        domain: args.domain,
        strict: args.strict,
        dump: args.dump,
    };

    if let Err(e) = run_replace_command(&options) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
