use clap::Parser;

/// Print the current user's locale (e.g. `en_US`), for choosing a language map.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {}

fn main() {
    let _args = Args::parse();
    println!("{}", langmap::current_locale());
}
