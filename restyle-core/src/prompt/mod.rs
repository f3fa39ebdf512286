//! Deterministic compilation of a style into the system prompt consumed by
//! the completion service.

use crate::style::error::StyleError;
use crate::style::model::Style;

const EXAMPLES_HEADER: &str = "Refer to the following examples:";

/// Fixed trailing instruction appended when the prompt is handed to the
/// completion service. This belongs to the conversion integration, not to
/// `compile_prompt` itself.
const OUTPUT_ONLY_INSTRUCTION: &str =
    "Convert the provided text into the specified style. Output only the converted text.";

/// Builds the system prompt for a style. Byte-identical output for identical
/// input: no randomness, no time dependence.
///
/// Iteration covers every example in sequence order, including invalid ones.
/// Hitting an example with an empty input or output aborts compilation with
/// `StyleError::EmptyExampleField`: at this point the caller has claimed the
/// examples are usable, so an empty field means stored data violates the
/// invariant and must surface rather than silently produce a broken prompt.
/// Callers that want compilation to survive stale blank entries compile
/// `style.filtered()` instead.
pub fn compile_prompt(style: &Style) -> Result<String, StyleError> {
    let mut prompt = format!(
        "You are an expert who converts the style of text into the style used by {}.",
        style.name
    );

    if style.examples.is_empty() {
        return Ok(prompt);
    }

    prompt.push_str("\n\n");
    prompt.push_str(EXAMPLES_HEADER);
    prompt.push('\n');

    for (index, example) in style.examples.iter().enumerate() {
        if !example.is_valid() {
            return Err(StyleError::EmptyExampleField {
                style: style.name.clone(),
                index,
            });
        }
        prompt.push_str(&format!(
            "\nInput: {}\nOutput: {}\n",
            example.input, example.output
        ));
    }

    Ok(prompt)
}

/// The full system prompt sent with a conversion request: the compiled
/// prompt plus the instruction to emit only the converted text.
pub fn conversion_system_prompt(style: &Style) -> Result<String, StyleError> {
    Ok(format!(
        "{}\n\n{}",
        compile_prompt(style)?,
        OUTPUT_ONLY_INSTRUCTION
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::model::{Example, Style};

    fn formal_style() -> Style {
        Style {
            name: "Formal".to_string(),
            examples: vec![Example::new("hi", "Greetings.")],
        }
    }

    #[test]
    fn prompt_without_examples_is_single_line() {
        let style = Style {
            name: "Pirate".to_string(),
            examples: Vec::new(),
        };

        let prompt = compile_prompt(&style).unwrap();

        assert_eq!(
            prompt,
            "You are an expert who converts the style of text into the style used by Pirate."
        );
    }

    #[test]
    fn prompt_renders_name_and_example_pair() {
        let prompt = compile_prompt(&formal_style()).unwrap();

        assert!(prompt.contains("Formal"));
        assert!(prompt.contains("Input: hi"));
        assert!(prompt.contains("Output: Greetings."));
        assert!(prompt.contains(EXAMPLES_HEADER));
    }

    #[test]
    fn compilation_is_deterministic() {
        let style = formal_style();

        assert_eq!(
            compile_prompt(&style).unwrap(),
            compile_prompt(&style).unwrap()
        );
    }

    #[test]
    fn empty_example_anywhere_aborts_compilation() {
        let mut style = formal_style();
        style.examples.push(Example::new("later", ""));

        let err = compile_prompt(&style).unwrap_err();

        assert_eq!(
            err,
            StyleError::EmptyExampleField {
                style: "Formal".to_string(),
                index: 1,
            }
        );
    }

    #[test]
    fn filtered_style_compiles_despite_blank_entries() {
        let mut style = formal_style();
        style.examples.push(Example::new("", ""));

        assert!(compile_prompt(&style).is_err());

        let prompt = compile_prompt(&style.filtered()).unwrap();
        assert!(prompt.contains("Input: hi"));
    }

    #[test]
    fn conversion_prompt_carries_output_only_instruction() {
        let prompt = conversion_system_prompt(&formal_style()).unwrap();

        assert!(prompt.starts_with("You are an expert"));
        assert!(prompt.ends_with(OUTPUT_ONLY_INSTRUCTION));
    }
}
