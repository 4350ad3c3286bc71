use nameparts::ParsedName;
use std::env;
use std::io;
use std::io::prelude::*;
use std::io::BufReader;
use std::process;

const USAGE: &str = "
Usage:
    nameparts parse <name>
    nameparts parse -
    nameparts report <name>

With the `parse` command, nameparts decomposes its argument and prints the
result as JSON. If `-` is the argument, it expects newline-separated names
on stdin and prints one JSON object per line (a blank line for unparsable
input). With a direct argument it exits with status 0 on success and 1 if
the name is unparsable.

With the `report` command, it prints a human-readable breakdown of the
argument: the raw input, each slot, and the rendered form.
";

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() > 2 && args[1] == "parse" {
        parse_mode(&args);
    } else if args.len() > 2 && args[1] == "report" {
        report_mode(&args);
    } else {
        eprintln!("{}", USAGE);
        process::exit(64);
    }
}

fn parse_mode(args: &[String]) {
    if args[2] == "-" {
        let reader = BufReader::new(io::stdin());
        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => break,
            };

            let parsed = ParsedName::parse(&line);
            let output = if parsed.is_unparsable() {
                String::new()
            } else {
                serde_json::to_string(&parsed).unwrap_or_default()
            };

            if writeln!(io::stdout(), "{}", output).is_err() {
                break;
            }
        }
    } else {
        let parsed = ParsedName::parse(&args[2..].join(" "));
        if parsed.is_unparsable() {
            process::exit(1);
        }
        println!("{}", serde_json::to_string(&parsed).unwrap_or_default());
    }
}

fn report_mode(args: &[String]) {
    let parsed = ParsedName::parse(&args[2..].join(" "));
    print!("{}", parsed.report());
    if parsed.is_unparsable() {
        process::exit(1);
    }
}
