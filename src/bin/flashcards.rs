//! Terminal flash cards against a running word endpoint.
//!
//! Commands: `n` next word, `s` show answer, `r` restart, `q` quit.

use tokio::io::{AsyncBufReadExt, BufReader};

use vocab_flashcards::config::Config;
use vocab_flashcards::logging::{init_tracing, LogSettings};
use vocab_flashcards::services::word_source::HttpWordSource;
use vocab_flashcards::session::{SessionError, SessionState, WordPairSession};
use vocab_flashcards::view::ViewModel;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let config = Config::from_env();
    let _log_guard = init_tracing(&LogSettings::from_env(&config.log_level, "flashcards.log"));

    let source = HttpWordSource::from_config(&config);
    tracing::info!(url = source.url(), "using word source");
    let session = WordPairSession::with_repeat_retries(source, config.repeat_retries);

    let mut updates = session.subscribe();
    let printer = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().clone();
            print_state(&state);
        }
    });

    println!("{} (n = next word, s = show answer, r = restart, q = quit)", config.app_title);
    report(session.initialize().await);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                tracing::error!(error = %err, "failed to read stdin");
                break;
            }
        };

        match line.trim() {
            "n" | "next" => report(session.request_next_word().await),
            "s" | "show" => report(session.reveal_answer()),
            "r" | "restart" => report(session.initialize().await),
            "q" | "quit" => break,
            "" => {}
            other => println!("unknown command: {other}"),
        }
    }

    drop(session);
    let _ = printer.await;
}

fn report<T>(result: Result<T, SessionError>) {
    if let Err(err) = result {
        println!("! {err}");
    }
}

fn print_state(state: &SessionState) {
    let view = ViewModel::from_state(state);

    if view.loading {
        println!("...");
        return;
    }
    if let Some(error) = view.error {
        println!("! {error}");
        return;
    }
    if let Some(english) = view.english {
        match view.german.filter(|_| view.german_visible) {
            Some(german) => println!("{english} = {german}"),
            None => println!("{english} = ?"),
        }
    }
}
