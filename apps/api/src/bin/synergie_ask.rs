//! synergie-ask: terminal front-end for the ask endpoint.
//! Validates the question locally, submits it, and prints the answer
//! (Markdown by default, rendered HTML with `--html`).

use std::process;

use synergie_api::client::{AskClient, ClientError, ResultView, PROFILES, VALIDATION_MESSAGE};

const DEFAULT_SERVER: &str = "http://127.0.0.1:8080";

struct Args {
    server: String,
    profile: String,
    html: bool,
    query: String,
}

fn usage() -> String {
    format!(
        "usage: synergie-ask [--server URL] [--profile LABEL] [--html] QUESTION...\n\
         profiles: {}",
        PROFILES.join(", ")
    )
}

fn parse_args() -> Result<Args, String> {
    let mut server = std::env::var("SYNERGIE_SERVER").unwrap_or_else(|_| DEFAULT_SERVER.to_string());
    let mut profile = String::new();
    let mut html = false;
    let mut words = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--server" => server = args.next().ok_or("--server needs a value")?,
            "--profile" => profile = args.next().ok_or("--profile needs a value")?,
            "--html" => html = true,
            "-h" | "--help" => return Err(usage()),
            _ => words.push(arg),
        }
    }

    Ok(Args {
        server,
        profile,
        html,
        query: words.join(" "),
    })
}

fn main() {
    let args = parse_args().unwrap_or_else(|msg| {
        eprintln!("{msg}");
        process::exit(2);
    });

    let client = AskClient::new(&args.server).unwrap_or_else(|e| {
        eprintln!("Error: failed to build HTTP client: {e}");
        process::exit(1);
    });

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap_or_else(|e| {
            eprintln!("Error: failed to create runtime: {e}");
            process::exit(1);
        });

    eprintln!("{}", ResultView::loading().heading());

    match rt.block_on(client.ask(&args.query, &args.profile)) {
        Ok(answer) => {
            let view = ResultView::answer(args.query.trim(), &answer);
            eprintln!("{}", view.heading());
            if args.html {
                println!("{}", view.html());
            } else {
                println!("{answer}");
            }
        }
        Err(ClientError::Validation(_)) => {
            eprintln!("{VALIDATION_MESSAGE}");
            eprintln!("{}", usage());
            process::exit(2);
        }
        Err(e) => {
            let view = ResultView::failed(&e.to_string());
            eprintln!("{}", view.heading());
            eprintln!("{}", view.html());
            process::exit(1);
        }
    }
}
