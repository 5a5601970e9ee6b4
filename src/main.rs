use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use lingua_widgets::core::client::RapidApiTranslator;
use lingua_widgets::core::generator::{self, GeneratorOptions};
use lingua_widgets::core::session::SessionController;
use lingua_widgets::core::{catalog, history};
use lingua_widgets::effects::clipboard::SystemClipboard;
use lingua_widgets::effects::speech::SystemSpeech;
use lingua_widgets::shared::error::AppResult;
use lingua_widgets::shared::settings::AppSettings;

#[tokio::main]
async fn main() -> AppResult<()> {
    let settings = AppSettings::load().await.unwrap_or_else(|e| {
        eprintln!("Failed to load settings: {}", e);
        AppSettings::default()
    });

    let api_key = settings.resolve_api_key().unwrap_or_else(|| {
        eprintln!("No API key configured (RAPIDAPI_KEY); translations will fail");
        String::new()
    });

    let controller = SessionController::new(
        settings.preferences.default_target_lang.clone(),
        Arc::new(RapidApiTranslator::new(api_key)?),
        Arc::new(SystemClipboard),
        Arc::new(SystemSpeech),
    );

    println!("lingua-widgets: type text to set the input, /help for commands");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                eprintln!("Failed to read input: {}", e);
                break;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line.split_whitespace().collect::<Vec<_>>().as_slice() {
            ["/quit"] | ["/q"] => break,
            ["/help"] => print_help(),
            ["/languages"] => {
                for entry in catalog::LANGUAGES {
                    println!("  {}  {}", entry.code, entry.name);
                }
            }
            ["/lang", code] => {
                controller.select_language(code);
                println!("Target language: {}", catalog::display_name(code));
            }
            ["/translate"] | ["/t"] => {
                controller.translate().await;
                let state = controller.state();
                println!("{}", state.output_text);
            }
            ["/copy"] => {
                controller.copy_output();
                if controller.copy_success() {
                    println!("Copied.");
                }
            }
            ["/speak"] => controller.speak_output(),
            ["/clear"] => controller.clear(),
            ["/history"] => {
                let entries = controller.history_entries();
                if entries.is_empty() {
                    println!("No translations yet (up to {} kept).", history::MAX_HISTORY_SIZE);
                }
                for entry in entries {
                    println!("  [{}] {} -> {}", entry.language_name, entry.input, entry.output);
                }
            }
            ["/gen", rest @ ..] => {
                let mut options = GeneratorOptions::default();
                for arg in rest {
                    match *arg {
                        "--no-numbers" => options.include_numbers = false,
                        "--no-symbols" => options.include_symbols = false,
                        other => {
                            if let Ok(length) = other.parse() {
                                options.length = length;
                            } else {
                                eprintln!("Ignoring unknown /gen argument: {}", other);
                            }
                        }
                    }
                }
                println!("{}", generator::generate(&options));
            }
            _ if line.starts_with('/') => eprintln!("Unknown command: {} (/help)", line),
            _ => {
                controller.set_input(line);
                let state = controller.state();
                println!(
                    "Input set ({}/1000 chars, target {})",
                    state.input_text.chars().count(),
                    catalog::display_name(&state.target_lang)
                );
            }
        }
    }

    Ok(())
}

fn print_help() {
    println!("  <text>        set the input text");
    println!("  /lang <code>  select the target language (/languages to list)");
    println!("  /translate    translate the current input");
    println!("  /copy         copy the output to the clipboard");
    println!("  /speak        speak the output aloud");
    println!("  /clear        clear input and output");
    println!("  /history      show recent translations");
    println!("  /gen [len] [--no-numbers] [--no-symbols]  random string");
    println!("  /quit         exit");
}
