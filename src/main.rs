mod report;

use regplay::{Flags, Playground};
use std::io::{self, IsTerminal, Read};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = setup_logging(config.verbosity, config.quiet) {
        eprintln!("error: failed to initialize logging: {err}");
        std::process::exit(1);
    }

    let playground = build_playground(&config);
    report::print_session(&playground, config.color);

    if playground.error().is_some() {
        std::process::exit(1);
    }
}

struct CliConfig {
    pattern: Option<String>,
    flags: Option<Flags>,
    template: Option<String>,
    input: Option<String>,
    filter: Option<String>,
    select: Option<usize>,
    sample: bool,
    highlight: bool,
    color: bool,
    verbosity: u8,
    quiet: bool,
}

fn build_playground(config: &CliConfig) -> Playground {
    let mut playground = Playground::new();
    playground.set_highlight(config.highlight);
    if config.sample {
        playground.load_sample();
    }

    if let Some(flags) = config.flags {
        playground.set_flags(flags);
    }
    if let Some(template) = &config.template {
        playground.set_template(template.as_str());
    }
    if let Some(input) = &config.input {
        playground.set_text(input.as_str());
    }
    if let Some(pattern) = &config.pattern {
        playground.set_pattern(pattern.as_str());
    }
    if let Some(filter) = &config.filter {
        playground.set_filter(filter.as_str());
    }
    if let Some(n) = config.select {
        playground.select(n.saturating_sub(1));
    }

    log::info!("evaluated /{}/{}: {}", playground.pattern(), playground.flags(), playground.match_count_label());
    playground
}

fn setup_logging(verbosity: u8, quiet: bool) -> Result<(), log::SetLoggerError> {
    let level = match verbosity {
        0 => stderrlog::LogLevelNum::Warn,
        1 => stderrlog::LogLevelNum::Info,
        2 => stderrlog::LogLevelNum::Debug,
        _ => stderrlog::LogLevelNum::Trace,
    };

    stderrlog::new().module(module_path!()).quiet(quiet).verbosity(level).init()
}

fn parse_args() -> Result<CliConfig, String> {
    let mut config = CliConfig {
        pattern: None,
        flags: None,
        template: None,
        input: None,
        filter: None,
        select: None,
        sample: false,
        highlight: true,
        color: io::stdout().is_terminal(),
        verbosity: 0,
        quiet: false,
    };
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("regplay {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => config.color = true,
            "--no-color" => config.color = false,
            "--sample" => config.sample = true,
            "--no-highlight" => config.highlight = false,
            "-q" | "--quiet" => config.quiet = true,
            "-v" | "--verbose" => config.verbosity = config.verbosity.saturating_add(1),
            "-vv" => config.verbosity = config.verbosity.saturating_add(2),
            "-vvv" => config.verbosity = config.verbosity.saturating_add(3),
            "-f" | "--flags" => {
                let value = args.next().ok_or_else(|| "error: --flags expects a value".to_string())?;
                config.flags = Some(parse_flags(&value)?);
            }
            "-t" | "--template" => {
                config.template = Some(args.next().ok_or_else(|| "error: --template expects a value".to_string())?);
            }
            "-i" | "--input" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if config.input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                config.input = Some(value);
            }
            "--filter" => {
                config.filter = Some(args.next().ok_or_else(|| "error: --filter expects a value".to_string())?);
            }
            "--select" => {
                let value = args.next().ok_or_else(|| "error: --select expects a value".to_string())?;
                config.select = Some(parse_select(&value)?);
            }
            "--" => {
                if let Some(pattern) = args.next() {
                    set_pattern(&mut config, pattern)?;
                }
                if let Some(extra) = args.next() {
                    return Err(format!("error: unexpected argument '{extra}'"));
                }
                break;
            }
            _ if arg.starts_with("--flags=") => {
                config.flags = Some(parse_flags(arg.trim_start_matches("--flags="))?);
            }
            _ if arg.starts_with("--template=") => {
                config.template = Some(arg.trim_start_matches("--template=").to_string());
            }
            _ if arg.starts_with("--input=") => {
                if config.input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                config.input = Some(arg.trim_start_matches("--input=").to_string());
            }
            _ if arg.starts_with("--filter=") => {
                config.filter = Some(arg.trim_start_matches("--filter=").to_string());
            }
            _ if arg.starts_with("--select=") => {
                config.select = Some(parse_select(arg.trim_start_matches("--select="))?);
            }
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => set_pattern(&mut config, arg)?,
        }
    }

    if config.pattern.is_none() && !config.sample {
        return Err(format!("error: no pattern provided\n\n{}", help_text()));
    }

    if config.input.is_none() && !config.sample {
        config.input = Some(read_stdin_input()?);
    }

    Ok(config)
}

fn set_pattern(config: &mut CliConfig, pattern: String) -> Result<(), String> {
    if config.pattern.is_some() {
        return Err("error: pattern provided multiple times".to_string());
    }
    config.pattern = Some(pattern);
    Ok(())
}

fn parse_flags(value: &str) -> Result<Flags, String> {
    Flags::parse(value).map_err(|err| format!("error: {err}"))
}

fn parse_select(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("error: invalid --select '{value}' (expected a match number starting at 1)")),
    }
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "regplay {version}

Regular-expression playground CLI.

Usage:
  regplay [OPTIONS] [--] <pattern>
  regplay --sample [OPTIONS]

Options:
  -f, --flags <flags>        Flags from {{g,i,m,s,u,y}}. Default: g
  -t, --template <template>  Output template ($0, $1.., $<name>, $$, \\n \\r \\t).
                             Default: $0\\n
  -i, --input <text>         Subject text. If omitted, reads stdin.
  --filter <query>           Only list matches containing <query>.
  --select <n>               Make match <n> (1-based) the active match.
  --sample                   Load the built-in sample pattern, template and text.
  --no-highlight             Print the subject text without match markers.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -v, --verbose              More log output on stderr (repeatable).
  -q, --quiet                Silence log output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Success.
  1  The pattern did not compile.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
