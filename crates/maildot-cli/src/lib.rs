// maildot-cli: shared utilities for CLI tools.

use std::process;

use maildot_gen::MaildotHandle;

/// Parse one value-carrying flag out of the argument list.
///
/// Accepts `LONG=VALUE`, `LONG VALUE`, and `SHORT VALUE` forms. Returns the
/// value (if present) and the remaining arguments with the flag removed.
pub fn parse_value_flag(args: &[String], long: &str, short: &str) -> (Option<String>, Vec<String>) {
    let prefix = format!("{long}=");
    let mut value = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(v) = arg.strip_prefix(&prefix) {
            value = Some(v.to_string());
        } else if arg == long || arg == short {
            if i + 1 < args.len() {
                value = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {arg} requires a value");
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Parse a numeric flag value, exiting with a clear message on junk.
pub fn parse_usize(flag: &str, value: &str) -> usize {
    value
        .parse()
        .unwrap_or_else(|_| fatal(&format!("invalid number for {flag}: {value}")))
}

/// Build a handle from the common `--max-local` flag.
///
/// Returns the handle and the remaining arguments.
pub fn handle_from_args(args: &[String]) -> (MaildotHandle, Vec<String>) {
    let (max_local, remaining) = parse_value_flag(args, "--max-local", "-m");
    let mut handle = MaildotHandle::new();
    if let Some(v) = max_local {
        handle.set_max_local_chars(parse_usize("--max-local", &v));
    }
    (handle, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn value_flag_equals_form() {
        let (v, rest) = parse_value_flag(&args(&["--page=3", "a@x"]), "--page", "-p");
        assert_eq!(v.as_deref(), Some("3"));
        assert_eq!(rest, args(&["a@x"]));
    }

    #[test]
    fn value_flag_separate_form() {
        let (v, rest) = parse_value_flag(&args(&["--page", "3", "a@x"]), "--page", "-p");
        assert_eq!(v.as_deref(), Some("3"));
        assert_eq!(rest, args(&["a@x"]));
    }

    #[test]
    fn value_flag_short_form() {
        let (v, rest) = parse_value_flag(&args(&["-p", "3", "a@x"]), "--page", "-p");
        assert_eq!(v.as_deref(), Some("3"));
        assert_eq!(rest, args(&["a@x"]));
    }

    #[test]
    fn value_flag_absent() {
        let (v, rest) = parse_value_flag(&args(&["a@x", "b@y"]), "--page", "-p");
        assert_eq!(v, None);
        assert_eq!(rest, args(&["a@x", "b@y"]));
    }

    #[test]
    fn value_flag_last_occurrence_wins() {
        let (v, _) = parse_value_flag(&args(&["-p", "1", "--page=2"]), "--page", "-p");
        assert_eq!(v.as_deref(), Some("2"));
    }

    #[test]
    fn handle_from_args_applies_max_local() {
        let (handle, rest) = handle_from_args(&args(&["--max-local", "8", "a@x"]));
        assert_eq!(handle.max_local_chars(), 8);
        assert_eq!(rest, args(&["a@x"]));
    }

    #[test]
    fn wants_help_detects_both_forms() {
        assert!(wants_help(&args(&["--help"])));
        assert!(wants_help(&args(&["a@x", "-h"])));
        assert!(!wants_help(&args(&["a@x"])));
    }
}
