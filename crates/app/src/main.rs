use std::fmt;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use algebruh_core::model::{Credentials, Resolution};
use services::{AnswerResolver, FetchError, Session};
use storage::AnswerStore;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    MissingCredentials,
    MissingDbDir,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::MissingCredentials => {
                write!(f, "--user/--password (or ALGEBRUH_USER/ALGEBRUH_PASSWORD) required")
            }
            ArgsError::MissingDbDir => {
                write!(f, "--db-dir (or ALGEBRUH_DB_DIR) required")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct Args {
    db_dir: String,
    username: String,
    password: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--db-dir <path>] [--user <name>] [--password <pw>]");
    eprintln!();
    eprintln!("Privilege markers on the username: %name = admin, !name = decoy-admin.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  ALGEBRUH_DB_DIR, ALGEBRUH_USER, ALGEBRUH_PASSWORD");
    eprintln!();
    eprintln!("Commands once logged in:");
    eprintln!("  fetch <x> <y> <z>   resolve the attachment at the three codes");
    eprintln!("  url <url>           resolve a dropped image URL");
    eprintln!("  quit");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_dir = std::env::var("ALGEBRUH_DB_DIR").ok();
        let mut username = std::env::var("ALGEBRUH_USER").ok();
        let mut password = std::env::var("ALGEBRUH_PASSWORD").ok();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db-dir" => db_dir = Some(require_value(args, "--db-dir")?),
                "--user" => username = Some(require_value(args, "--user")?),
                "--password" => password = Some(require_value(args, "--password")?),
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let db_dir = db_dir.ok_or(ArgsError::MissingDbDir)?;
        let (username, password) = match (username, password) {
            (Some(u), Some(p)) => (u, p),
            _ => return Err(ArgsError::MissingCredentials),
        };

        Ok(Self {
            db_dir,
            username,
            password,
        })
    }
}

fn print_resolution(resolution: &Resolution) {
    match resolution.as_answer() {
        Some(resolved) => {
            println!("Answer: {}", resolved.answer);
            println!("Explanation: {}", resolved.explanation);
        }
        None => {
            println!("Answer: Not found");
            println!("Explanation: Not found");
        }
    }
}

fn resolve_and_print(resolver: &mut AnswerResolver, fetched: Option<Vec<u8>>) {
    let Some(bytes) = fetched else {
        println!("No attachment there.");
        return;
    };
    match resolver.resolve_image(&bytes) {
        Ok(resolution) => print_resolution(&resolution),
        Err(err) => eprintln!("{err}"),
    }
}

fn report_fetch_error(err: &FetchError) {
    match err {
        // The gate failing mid-session means the login needs redoing.
        FetchError::NotLoggedIn => eprintln!("Session is not logged in; restart and log in again."),
        other => eprintln!("{other}"),
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Store load failures are fatal: there is no partial-store mode.
    let store = Arc::new(AnswerStore::load(&args.db_dir)?);

    let (credentials, privilege) = Credentials::parse(&args.username, args.password)?;
    let mut session = Session::connect(credentials, privilege)?;
    session.login().await?;

    let mut resolver = AnswerResolver::new(store, privilege);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let parts: Vec<&str> = line.split_whitespace().collect();

        match parts.as_slice() {
            [] => {}
            ["quit" | "exit"] => break,
            ["fetch", x, y, z] => match session.get_attachment(x, y, z).await {
                Ok(fetched) => resolve_and_print(&mut resolver, fetched),
                Err(err) => report_fetch_error(&err),
            },
            ["url", raw] => match session.fetch_url(raw).await {
                Ok(fetched) => resolve_and_print(&mut resolver, fetched),
                Err(err) => report_fetch_error(&err),
            },
            _ => {
                eprintln!("unknown command: {line}");
                print_usage();
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
