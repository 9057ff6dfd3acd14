//! Cool compiler CLI.
//!
//! Thin argument dispatch over the command implementations in the
//! library crate.

use coolc::commands::lex_file;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    match args[1].as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: coolc lex <file.cl>...");
                std::process::exit(1);
            }
            let mut code = 0;
            for path in &args[2..] {
                code = code.max(lex_file(path));
            }
            std::process::exit(code);
        }
        "--version" | "-V" => {
            println!("coolc {}", env!("CARGO_PKG_VERSION"));
        }
        "--help" | "-h" | "help" => print_usage(),
        other => {
            eprintln!("coolc: unknown command '{other}'");
            print_usage();
            std::process::exit(1);
        }
    }
}

/// Initialize logging from `RUST_LOG`; silent by default.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage() {
    println!("Usage: coolc <command> [args]");
    println!();
    println!("Commands:");
    println!("  lex <file.cl>...   Tokenize files and dump the token stream");
    println!();
    println!("Options:");
    println!("  -h, --help         Show this help");
    println!("  -V, --version      Show version");
}
