// maildot-expand: Generate dotted variants of addresses.
//
// Takes addresses as arguments, or reads them from stdin (one per line),
// and prints every dotted variant that routes to the same mailbox at a
// dot-insensitive provider. Output for each address is a header with the
// total count followed by the variants, dot-free form first.
//
// Usage:
//   maildot-expand [OPTIONS] [ADDRESS...]
//
// Options:
//   -p, --page N        Print only page N of the variants (1-based)
//   -s, --page-size N   Variants per page (default: 50)
//   -m, --max-local N   Local-part length ceiling (default: 20)
//   -h, --help          Print help

use std::io::{self, BufRead, Write};

use maildot_gen::{DEFAULT_PAGE_SIZE, MaildotHandle, VariantSet};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if maildot_cli::wants_help(&args) {
        println!("maildot-expand: Generate dotted variants of addresses.");
        println!();
        println!("Usage: maildot-expand [OPTIONS] [ADDRESS...]");
        println!();
        println!("If ADDRESS arguments are given, expands each of them.");
        println!("Otherwise reads addresses from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -p, --page N        Print only page N of the variants (1-based)");
        println!("  -s, --page-size N   Variants per page (default: 50)");
        println!("  -m, --max-local N   Local-part length ceiling (default: 20)");
        println!("  -h, --help          Print this help");
        return;
    }

    let (handle, args) = maildot_cli::handle_from_args(&args);
    let (page, args) = maildot_cli::parse_value_flag(&args, "--page", "-p");
    let (page_size, args) = maildot_cli::parse_value_flag(&args, "--page-size", "-s");

    let page = page.map(|v| {
        let p = maildot_cli::parse_usize("--page", &v);
        if p == 0 {
            maildot_cli::fatal("page numbers start at 1");
        }
        p - 1
    });
    let page_size = page_size
        .map(|v| maildot_cli::parse_usize("--page-size", &v))
        .unwrap_or(DEFAULT_PAGE_SIZE);

    let addresses: Vec<String> = args.into_iter().filter(|a| !a.starts_with('-')).collect();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let expand_one = |input: &str,
                      handle: &MaildotHandle,
                      out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        match handle.expand(input) {
            Ok(set) => write_variants(input, &set, page, page_size, out),
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
            expand_one(input, &handle, &mut out);
        }
    } else {
        for input in &addresses {
            expand_one(input, &handle, &mut out);
        }
    }
}

/// Print one address block: count header, then the requested variants.
fn write_variants(
    input: &str,
    set: &VariantSet,
    page: Option<usize>,
    page_size: usize,
    out: &mut io::BufWriter<io::StdoutLock<'_>>,
) {
    match page {
        None => {
            let _ = writeln!(out, "{input}: {} variants", set.len());
            for v in set.iter() {
                let _ = writeln!(out, "  {v}");
            }
        }
        Some(p) => {
            let pages = set.page_count(page_size);
            let _ = writeln!(
                out,
                "{input}: {} variants (page {}/{pages})",
                set.len(),
                p + 1
            );
            for v in set.page(p, page_size) {
                let _ = writeln!(out, "  {v}");
            }
        }
    }
}
