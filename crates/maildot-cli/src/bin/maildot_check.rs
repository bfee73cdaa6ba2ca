// maildot-check: Validate addresses and print their canonical form.
//
// Reads addresses from arguments or stdin (one per line) and prints:
//   C: canonical-address    (valid; dots stripped from the local-part)
//   W: address (reason)     (rejected)
//
// Usage:
//   maildot-check [OPTIONS] [ADDRESS...]
//
// Options:
//   -m, --max-local N   Local-part length ceiling (default: 20)
//   -h, --help          Print help

use std::io::{self, BufRead, Write};

use maildot_gen::MaildotHandle;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if maildot_cli::wants_help(&args) {
        println!("maildot-check: Validate addresses and print their canonical form.");
        println!();
        println!("Usage: maildot-check [OPTIONS] [ADDRESS...]");
        println!();
        println!("Reads addresses from arguments or stdin (one per line). Prints:");
        println!("  C: canonical-address    (valid)");
        println!("  W: address (reason)     (rejected)");
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

    let check_one = |input: &str,
                     handle: &MaildotHandle,
                     out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        match handle.check(input) {
            Ok(address) => {
                let _ = writeln!(out, "C: {}", address.canonical());
            }
            Err(e) => {
                let _ = writeln!(out, "W: {input} ({e})");
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
            check_one(input, &handle, &mut out);
        }
    } else {
        for input in &addresses {
            check_one(input, &handle, &mut out);
        }
    }
}
