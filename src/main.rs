use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
    sync::Once,
};

use clap::{Parser, builder::RangedU64ValueParser};
use reckon::{
    interpreter::parser::validate::{Limits, MAX_DEPTH, MAX_NODES},
    session::Session,
};

/// reckon is a safe calculator: arithmetic, math functions and variables,
/// and nothing else.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Lines to execute in order; the value of the last one is printed.
    /// Without any, an interactive prompt is started.
    expressions: Vec<String>,

    /// Session file to load before and save after executing.
    #[arg(short, long)]
    session: Option<PathBuf>,

    /// Maximum nesting depth of an expression (1 to 1000).
    #[arg(long,
          default_value_t = MAX_DEPTH,
          value_parser = RangedU64ValueParser::<usize>::new().range(1..=DEPTH_CEILING))]
    max_depth: usize,

    /// Maximum number of elements in an expression (1 to 1000000).
    #[arg(long,
          default_value_t = MAX_NODES,
          value_parser = RangedU64ValueParser::<usize>::new().range(1..=NODES_CEILING))]
    max_nodes: usize,
}

/// Deepest tree the recursive evaluator may be asked to walk.
const DEPTH_CEILING: u64 = 1_000;

/// Largest node budget the command line accepts.
const NODES_CEILING: u64 = 1_000_000;

const HELP: &str = "\
Enter an expression, or `name = expression` to assign a variable.
Operators: + - * / // % ** and parentheses; (a, b) tuples, [a, b] lists.
Functions: sin cos tan asin acos atan exp log ln log10 sqrt factorial
           degrees radians comb perm gcd lcm hypot avg sum min max pct
Constants: pi e tau inf nan
Commands:
  :help          show this help
  :vars          list variables
  :hist          show history
  :clear         remove all variables and history
  :save <file>   save the session as JSON
  :load <file>   load a session saved with :save
  :quit          leave (also :q, :exit)";

static TRACING_INIT: Once = Once::new();

/// Installs a tracing subscriber when `RUST_LOG` is set.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
                    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

                    if std::env::var("RUST_LOG").is_ok() {
                        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr))
                                                      .with(EnvFilter::from_default_env())
                                                      .init();
                    }
                });
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let mut session = Session::with_limits(Limits { max_depth: args.max_depth,
                                                    max_nodes: args.max_nodes, });

    if let Some(path) = &args.session
       && path.exists()
       && let Err(e) = session.load(path)
    {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let status = if args.expressions.is_empty() {
        repl(&mut session);
        ExitCode::SUCCESS
    } else {
        run_expressions(&mut session, &args.expressions)
    };

    if let Some(path) = &args.session
       && let Err(e) = session.save(path)
    {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    status
}

/// Executes every line and prints the value of the last one.
fn run_expressions(session: &mut Session, expressions: &[String]) -> ExitCode {
    let mut last = None;
    for line in expressions {
        match session.execute(line) {
            Ok(entry) => last = Some(entry.value),
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            },
        }
    }

    if let Some(value) = last {
        println!("{value}");
    }
    ExitCode::SUCCESS
}

/// What the prompt does after a line has been handled.
enum Flow {
    Continue,
    Quit,
}

/// Reads lines from standard input until `:quit` or end of input.
fn repl(session: &mut Session) {
    println!("reckon {}. Type :help for help.", env!("CARGO_PKG_VERSION"));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!(">> ");
        io::stdout().flush().ok();

        let Some(Ok(line)) = lines.next() else {
            println!();
            println!("Bye!");
            return;
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let flow = if let Some(command) = line.strip_prefix(':') {
            run_command(session, command)
        } else {
            run_line(session, line);
            Flow::Continue
        };
        if let Flow::Quit = flow {
            return;
        }
    }
}

fn run_line(session: &mut Session, line: &str) {
    match session.execute(line) {
        Ok(entry) if entry.is_assignment => {
            let name = entry.expression.split_once(" = ").map_or("", |(name, _)| name);
            println!("{name} = {}", entry.value);
        },
        Ok(entry) => println!("{}", entry.value),
        Err(e) => println!("{e}"),
    }
}

fn run_command(session: &mut Session, command: &str) -> Flow {
    let (name, argument) = command.split_once(char::is_whitespace)
                                  .map_or((command, ""), |(name, argument)| (name, argument.trim()));

    match name {
        "help" => println!("{HELP}"),
        "vars" => {
            if session.variables().is_empty() {
                println!("(no variables)");
            }
            for (name, value) in session.variables() {
                println!("{name} = {value}");
            }
        },
        "hist" => {
            if session.history().is_empty() {
                println!("(no history)");
            }
            for (index, entry) in session.history().iter().enumerate() {
                println!("{}: {} = {}", index + 1, entry.expression, entry.value);
            }
        },
        "clear" => {
            session.clear();
            println!("Cleared variables and history.");
        },
        "save" | "load" if argument.is_empty() => println!("Usage: :{name} <file>"),
        "save" => match session.save(argument) {
            Ok(()) => println!("Saved to {argument}"),
            Err(e) => println!("{e}"),
        },
        "load" => match session.load(argument) {
            Ok(()) => println!("Loaded from {argument}"),
            Err(e) => println!("{e}"),
        },
        "quit" | "q" | "exit" => {
            println!("Bye!");
            return Flow::Quit;
        },
        _ => println!("Unknown command. Type :help"),
    }
    Flow::Continue
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::Args;

    #[test]
    fn arguments_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn limits_are_bounded() {
        let args = Args::try_parse_from(["reckon", "--max-depth", "500", "1 + 1"]).unwrap();
        assert_eq!(args.max_depth, 500);

        assert!(Args::try_parse_from(["reckon", "--max-depth", "100000"]).is_err());
        assert!(Args::try_parse_from(["reckon", "--max-depth", "0"]).is_err());
        assert!(Args::try_parse_from(["reckon", "--max-nodes", "5000000"]).is_err());
    }
}
