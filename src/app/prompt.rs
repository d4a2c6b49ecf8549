use crate::core::normalizer::normalize;
use crate::domain::model::VisibilityOption;
use crate::utils::error::{ModError, Result};
use std::io::{BufRead, Write};

/// Line-oriented prompts for the module name and visibility.
///
/// Empty input or end of input cancels. Invalid answers are explained and
/// asked again.
pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn ask_name(&mut self, is_submodule: bool) -> Result<String> {
        let (prompt, placeholder) = if is_submodule {
            ("Enter submodule name", "my_module(.rs)")
        } else {
            ("Enter module name", "my_module")
        };

        loop {
            write!(self.output, "{} [{}]: ", prompt, placeholder)?;
            self.output.flush()?;

            let answer = self.read_answer()?;
            match normalize(&answer) {
                Ok(_) => return Ok(answer),
                Err(ModError::InvalidName { reason, .. }) => {
                    writeln!(self.output, "  ✗ {}", reason)?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    pub fn ask_visibility<'a>(
        &mut self,
        options: &'a [VisibilityOption],
    ) -> Result<&'a VisibilityOption> {
        writeln!(self.output, "Select visibility for this module:")?;
        for (index, option) in options.iter().enumerate() {
            writeln!(
                self.output,
                "  {}) {:<12} {}",
                index + 1,
                option.label,
                option.description
            )?;
        }

        loop {
            write!(self.output, "Visibility [1-{}]: ", options.len())?;
            self.output.flush()?;

            let answer = self.read_answer()?;
            if let Some(option) = pick_option(options, &answer) {
                return Ok(option);
            }
            writeln!(self.output, "  ✗ '{}' is not one of the options", answer)?;
        }
    }

    fn read_answer(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ModError::Cancelled);
        }

        let answer = line.trim();
        if answer.is_empty() {
            return Err(ModError::Cancelled);
        }
        Ok(answer.to_string())
    }
}

/// Matches a 1-based number or a label.
fn pick_option<'a>(options: &'a [VisibilityOption], answer: &str) -> Option<&'a VisibilityOption> {
    if let Ok(number) = answer.parse::<usize>() {
        return number.checked_sub(1).and_then(|index| options.get(index));
    }
    options.iter().find(|option| option.label == answer)
}
