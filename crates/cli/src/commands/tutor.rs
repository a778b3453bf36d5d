//! `bursary tutor` — Interactive or single-message tutoring chat.

use std::io::Write;
use std::sync::Arc;

use bursary_chat::TutorPipeline;
use bursary_core::turn::Turn;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::{load_config_with_key, next_input_line, usage_caption};

pub async fn run(
    message: Option<String>,
    no_history: bool,
    temperature: Option<f32>,
    show_usage: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_key()?;

    let provider = Arc::new(bursary_providers::from_config(&config));
    let mut pipeline = TutorPipeline::from_config(provider, &config);
    if let Some(t) = temperature {
        pipeline = pipeline.with_temperature(t);
    }
    let keep_history = !no_history;

    if let Some(msg) = message {
        // Single message mode
        let reply = pipeline.respond(&msg, &[], keep_history).await?;
        println!("{}", reply.text);
        if show_usage {
            if let Some(usage) = &reply.usage {
                eprintln!("{}", usage_caption(usage));
            }
        }
        return Ok(());
    }

    // Interactive mode
    println!();
    println!("  Bursary Tutor — AP/STEM help, study plans, college planning");
    println!();
    println!("  Model:    {}", config.tutor.model);
    println!("  History:  last {} turns replayed", config.history.max_turns);
    println!();
    println!("  Type your question and press Enter.");
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

        eprint!("  ...");

        match pipeline.respond(&line, &history, keep_history).await {
            Ok(reply) => {
                eprint!("\r     \r");
                println!();
                for out_line in reply.text.lines() {
                    println!("  Tutor > {out_line}");
                }
                if show_usage {
                    if let Some(usage) = &reply.usage {
                        println!("  ({})", usage_caption(usage));
                    }
                }
                println!();
                history = reply.history;
            }
            Err(e) => {
                eprint!("\r     \r");
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
