use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
};

use clap::Parser;
use intcalc::{
    evaluate_with,
    interpreter::{
        parser::core::ParseMode,
        shell::{DEFAULT_BANNER, ErrorPolicy, Shell, ShellConfig, format_result},
    },
};

/// intcalc reads arithmetic lines and prints their integer value.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates a single expression and exits.
    #[arg(short, long, conflicts_with = "file")]
    expr: Option<String>,

    /// Reads lines from a file instead of standard input.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Rejects unexpected and trailing tokens instead of ignoring them.
    #[arg(short, long)]
    strict: bool,

    /// Stops at the first line that fails to evaluate.
    #[arg(short, long)]
    abort_on_error: bool,

    /// Text written before each line is read.
    #[arg(short, long, default_value = "> ")]
    prompt: String,

    /// Text printed before every result, in the shell and with `--expr`.
    #[arg(short, long)]
    label: Option<String>,

    /// Prints neither the banner nor prompts.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let mode = if args.strict { ParseMode::Strict } else { ParseMode::Permissive };

    if let Some(expr) = &args.expr {
        match evaluate_with(expr, mode) {
            Ok(value) => println!("{}", format_result(args.label.as_deref(), value)),
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            },
        }
        return;
    }

    let input: Box<dyn BufRead> = match &args.file {
        Some(path) => {
            let file = File::open(path).unwrap_or_else(|_| {
                                           eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                     path.display());
                                           std::process::exit(1);
                                       });
            Box::new(BufReader::new(file))
        },
        None => Box::new(io::stdin().lock()),
    };

    let quiet = args.quiet || args.file.is_some();
    let config = ShellConfig { prompt:   if quiet { String::new() } else { args.prompt },
                               banner:   (!quiet).then(|| DEFAULT_BANNER.to_string()),
                               mode,
                               on_error: if args.abort_on_error {
                                   ErrorPolicy::Abort
                               } else {
                                   ErrorPolicy::Continue
                               },
                               label:    args.label, };

    let mut shell = Shell::new(input, io::stdout().lock(), config);
    if let Err(e) = shell.run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
