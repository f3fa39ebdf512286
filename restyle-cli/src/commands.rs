use std::io::{Read, Write};

use anyhow::{Context, Result};
use clap::Subcommand;
use tokio_stream::StreamExt;

use restyle_core::completion;
use restyle_core::prompt;
use restyle_core::store::{self, StyleStore};
use restyle_core::style::ops;
use restyle_core::style::validate::{validate_example, validate_style_name};
use restyle_core::{ConversionRequest, Settings, Style, StyleCollection};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List stored styles and their example counts
    List,

    /// Create a new style with no examples
    Add { name: String },

    /// Rename an existing style
    Rename { name: String, new_name: String },

    /// Delete a style and all of its examples
    Delete { name: String },

    /// Append an example pair to a style
    AddExample {
        style: String,

        /// Text in the original style
        #[arg(long)]
        input: String,

        /// The same text rendered in the target style
        #[arg(long)]
        output: String,
    },

    /// List a style's examples with the indices remove-example takes
    Examples { style: String },

    /// Remove the example at a 0-based index
    RemoveExample { style: String, index: usize },

    /// Print the compiled system prompt for a style
    ShowPrompt { name: String },

    /// Convert text into a style, streaming the result to stdout
    Convert {
        name: String,

        /// Text to convert; reads stdin when omitted
        text: Option<String>,
    },
}

pub async fn run(command: Command, settings: &Settings) -> Result<()> {
    let store = store::from_config(&settings.store)?;

    match command {
        Command::List => {
            let styles = store::load_or_empty(store.as_ref()).await;
            if styles.is_empty() {
                println!("No styles stored yet.");
                return Ok(());
            }
            for style in &styles {
                println!("{} ({} examples)", style.name, style.valid_examples().count());
            }
            Ok(())
        }

        Command::Add { name } => {
            let styles = load_for_mutation(store.as_ref()).await?;
            validate_style_name(&name, &styles)?;

            let updated = ops::insert_style(&styles, ops::create_style(&name));
            store.save_styles(&updated).await?;
            println!("Added style \"{name}\".");
            Ok(())
        }

        Command::Rename { name, new_name } => {
            let styles = load_for_mutation(store.as_ref()).await?;
            validate_style_name(&new_name, &styles)?;

            let renamed = ops::rename_style(ops::resolve_style_required(&styles, &name)?, &new_name);
            let updated = ops::replace_style(&styles, &name, renamed)?;
            store.save_styles(&updated).await?;
            println!("Renamed \"{name}\" to \"{new_name}\".");
            Ok(())
        }

        Command::Delete { name } => {
            let styles = load_for_mutation(store.as_ref()).await?;

            let updated = ops::delete_style(&styles, &name)?;
            store.save_styles(&updated).await?;
            println!("Deleted style \"{name}\".");
            Ok(())
        }

        Command::AddExample {
            style,
            input,
            output,
        } => {
            let styles = load_for_mutation(store.as_ref()).await?;
            validate_example(&input, &output)?;

            let target = ops::resolve_style_required(&styles, &style)?;
            let appended = ops::add_example(target, input, output);
            let updated = ops::replace_style(&styles, &style, appended)?;
            store.save_styles(&updated).await?;
            println!("Added an example to \"{style}\".");
            Ok(())
        }

        Command::Examples { style } => {
            let styles = store::load_or_empty(store.as_ref()).await;
            let target = ops::resolve_style_required(&styles, &style)?;

            print!("{}", format_example_listing(target));
            Ok(())
        }

        Command::RemoveExample { style, index } => {
            let styles = load_for_mutation(store.as_ref()).await?;

            let target = ops::resolve_style_required(&styles, &style)?;
            let removed = ops::remove_example(target, index)?;
            let updated = ops::replace_style(&styles, &style, removed)?;
            store.save_styles(&updated).await?;
            println!("Removed example {index} from \"{style}\".");
            Ok(())
        }

        Command::ShowPrompt { name } => {
            let styles = store::load_or_empty(store.as_ref()).await;
            let style = ops::resolve_style_required(&styles, &name)?;

            // Compiles the raw style on purpose: a stale blank example in
            // storage should surface here, not hide behind filtering.
            println!("{}", prompt::compile_prompt(style)?);
            Ok(())
        }

        Command::Convert { name, text } => {
            let styles = store::load_or_empty(store.as_ref()).await;
            let style = ops::resolve_style_required(&styles, &name)?;

            let text = match text {
                Some(text) => text,
                None => read_stdin()?,
            };
            if text.is_empty() {
                anyhow::bail!("no text to convert");
            }

            let request = ConversionRequest::for_style(style, text)?;
            let provider = completion::from_config(&settings.completion)?;

            let mut stream = provider.convert_stream(request).await?;
            let mut stdout = std::io::stdout();
            while let Some(chunk) = stream.next().await {
                stdout.write_all(chunk?.as_bytes())?;
                stdout.flush()?;
            }
            println!();
            Ok(())
        }
    }
}

/// Mutations must not run against a collection that failed to load: saving
/// afterwards would overwrite the store with whatever partial state we have.
async fn load_for_mutation(store: &dyn StyleStore) -> Result<StyleCollection> {
    store
        .load_styles()
        .await
        .context("refusing to modify styles because loading the current collection failed")
}

/// Indices are raw positions in the stored sequence, the same positions
/// `remove-example` takes, so incomplete entries are listed rather than
/// hidden behind validity filtering.
fn format_example_listing(style: &Style) -> String {
    if style.examples.is_empty() {
        return format!("\"{}\" has no examples.\n", style.name);
    }

    let mut out = String::new();
    for (index, example) in style.examples.iter().enumerate() {
        if example.is_valid() {
            out.push_str(&format!(
                "[{index}] Input: {}\n    Output: {}\n",
                example.input, example.output
            ));
        } else {
            out.push_str(&format!("[{index}] (incomplete example)\n"));
        }
    }
    out
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("failed to read text from stdin")?;
    Ok(text.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::format_example_listing;
    use restyle_core::{Example, Style};

    #[test]
    fn example_listing_shows_raw_indices_including_incomplete_entries() {
        let style = Style {
            name: "Formal".to_string(),
            examples: vec![
                Example::new("hi", "Greetings."),
                Example::new("", ""),
                Example::new("bye", "Farewell."),
            ],
        };

        let listing = format_example_listing(&style);

        assert!(listing.contains("[0] Input: hi"));
        assert!(listing.contains("[1] (incomplete example)"));
        assert!(listing.contains("[2] Input: bye"));
    }

    #[test]
    fn example_listing_for_style_without_examples() {
        let style = Style {
            name: "Pirate".to_string(),
            examples: Vec::new(),
        };

        assert_eq!(format_example_listing(&style), "\"Pirate\" has no examples.\n");
    }
}
