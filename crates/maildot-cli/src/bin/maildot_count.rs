// maildot-count: Count dotted variants without generating them.
//
// A local-part of n characters has 2^(n-1) dotted variants, so the count
// is computed directly from the canonical length; nothing is materialized
// and even ceiling-free 64-character locals answer instantly.
//
// Usage:
//   maildot-count [OPTIONS] [ADDRESS...]
//
// Options:
//   -m, --max-local N   Local-part length ceiling (default: 20)
//   -h, --help          Print help

use std::io::{self, BufRead, Write};

use maildot_gen::MaildotHandle;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if maildot_cli::wants_help(&args) {
        println!("maildot-count: Count dotted variants without generating them.");
        println!();
        println!("Usage: maildot-count [OPTIONS] [ADDRESS...]");
        println!();
        println!("If ADDRESS arguments are given, counts each of them.");
        println!("Otherwise reads addresses from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -m, --max-local N   Local-part length ceiling (default: 20)");
        println!("  -h, --help          Print this help");
        return;
    }

    let (handle, args) = maildot_cli::handle_from_args(&args);
    let addresses: Vec<String> = args.into_iter().filter(|a| !a.starts_with('-')).collect();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let count_one = |input: &str,
                     handle: &MaildotHandle,
                     out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        match handle.count(input) {
            Ok(count) => {
                let _ = writeln!(out, "{input}: {count}");
            }
            Err(e) => {
                let _ = writeln!(out, "{input}: ({e})");
            }
        }
    };

    if addresses.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            count_one(input, &handle, &mut out);
        }
    } else {
        for input in &addresses {
            count_one(input, &handle, &mut out);
        }
    }
}
