mod command;
mod paths;
mod render;
mod storage;

use std::fs::{self, File};
use std::io;
use std::time::Duration;

use pagedom::MemoryStorage;
use pagekit::{Page, PageConfig};
use simplelog::{Config, LevelFilter, WriteLogger};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{Instant, MissedTickBehavior};

use crate::command::Command;
use crate::storage::SqliteStorage;

/// How often the page clock catches up with wall-clock time.
const TICK: Duration = Duration::from_millis(50);

fn init_logging() {
    let file = paths::log_file()
        .and_then(|path| {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir).ok()?;
            }
            File::create(path).ok()
        })
        .or_else(|| File::create("page-demo.log").ok());

    let Some(file) = file else {
        eprintln!("Warning: could not create a log file, logging disabled");
        return;
    };
    if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), file) {
        eprintln!("Warning: failed to initialize logger: {}", e);
    }
}

/// Load the page on persistent storage, or in memory if that fails.
fn open_page(config: PageConfig) -> Page {
    let Some(path) = paths::storage_db() else {
        log::warn!("No data directory, theme will not persist");
        return Page::new(MemoryStorage::new(), config);
    };

    match SqliteStorage::open(&path) {
        Ok(storage) => {
            log::info!("Using local storage at {}", path.display());
            Page::new(storage, config)
        }
        Err(e) => {
            log::warn!("Could not open {}: {}, theme will not persist", path.display(), e);
            Page::new(MemoryStorage::new(), config)
        }
    }
}

async fn run(mut page: Page) -> io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let mut ticker = tokio::time::interval(TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last = Instant::now();

    println!("{}", render::summary(&page));

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let now = Instant::now();
                page.advance(now - last);
                last = now;
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let command = match command::parse(&line) {
                    Ok(Some(command)) => command,
                    Ok(None) => continue,
                    Err(e) => {
                        eprintln!("error: {}", e);
                        continue;
                    }
                };

                match command {
                    Command::Quit => break,
                    Command::Show => println!("{}", render::summary(&page)),
                    Command::Wait(duration) => {
                        tokio::time::sleep(duration).await;
                        let now = Instant::now();
                        page.advance(now - last);
                        last = now;
                    }
                    other => {
                        if let Err(e) = command::apply(&mut page, &other) {
                            log::warn!("Command failed: {}", e);
                            eprintln!("error: {}", e);
                        }
                    }
                }
            }
        }
    }

    log::info!("Shutting down at {} ms", page.now().as_millis());
    Ok(())
}

#[tokio::main]
async fn main() {
    paths::rotate_logs();
    init_logging();

    let page = open_page(PageConfig::default());

    if let Err(e) = run(page).await {
        eprintln!("Error: {}", e);
    }
}
