//! `bursary find` — Interactive or single-query scholarship search.

use std::io::Write;
use std::sync::Arc;

use bursary_chat::{FinderPipeline, FinderReply};
use bursary_core::turn::Turn;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::{load_config_with_key, next_input_line, usage_caption};

pub async fn run(
    message: Option<String>,
    show_usage: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_key()?;

    let provider = Arc::new(bursary_providers::from_config(&config));
    let pipeline = FinderPipeline::from_config(provider, &config);

    if let Some(msg) = message {
        // Single query mode
        let reply = pipeline.respond(&msg, &[]).await?;
        println!("{}", reply.text);
        print_captions(&reply, show_usage);
        return Ok(());
    }

    // Interactive mode
    println!();
    println!("  Bursary Finder — live scholarship search");
    println!();
    println!("  Model:    {}", config.finder.model);
    println!("  Listings with already-passed deadlines are removed automatically.");
    println!();
    println!("  Describe what you need, e.g. 'women STEM scholarships for high school seniors'.");
    println!("  '/clear' starts a fresh conversation, 'exit' quits.");
    println!();

    let mut history: Vec<Turn> = Vec::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print!("  You > ");
    std::io::stdout().flush()?;

    while let Some(line) = next_input_line(&mut lines).await {
        if line == "/clear" {
            history.clear();
            println!("  (history cleared)");
            print!("  You > ");
            std::io::stdout().flush()?;
            continue;
        }

        eprint!("  Searching...");

        match pipeline.respond(&line, &history).await {
            Ok(reply) => {
                eprint!("\r             \r");
                println!();
                for out_line in reply.text.lines() {
                    println!("  Finder > {out_line}");
                }
                print_captions(&reply, show_usage);
                println!();
                history = reply.history;
            }
            Err(e) => {
                eprint!("\r             \r");
                eprintln!("  [Error] {e}");
                println!();
            }
        }

        print!("  You > ");
        std::io::stdout().flush()?;
    }

    println!();
    println!("  Goodbye!");
    println!();

    Ok(())
}

fn print_captions(reply: &FinderReply, show_usage: bool) {
    if reply.dropped_count() > 0 {
        println!("  Removed {} expired listing(s).", reply.dropped_count());
    }
    if show_usage {
        if let Some(usage) = &reply.usage {
            println!("  ({})", usage_caption(usage));
        }
    }
}
