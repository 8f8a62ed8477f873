//! The command interpreter: walks a flag sequence, dispatches each flag, and
//! flushes what the flags produced to the chosen destination.
//!
//! One pass over one token sequence is an *invocation*. Each invocation owns
//! its current file, its accumulator and its destination; nothing carries
//! over between invocations. `-i` replays every line of a file as a nested
//! invocation, and a failing line is logged without stopping the batch.

use std::io::Write;

use log::{debug, error, trace, warn};

use crate::error::CommandError;
use crate::filters::{anagrams_in, members_of, palindromes_in, sort_ascending, sort_descending};
use crate::output::{Accumulator, Destination};
use crate::registry::{FlagRegistry, Opcode};
use crate::source::TextSource;
use crate::stats::{count_chars, count_digits, count_lines, count_numeric_tokens};
use crate::tokens::TokenStream;

/// How deep `-i` files may nest before further `-i` flags are rejected.
pub const MAX_BATCH_DEPTH: usize = 2;

pub const HELP_TEXT: &str = "-----help-------
This program needs to be specified with first flag -f and file name or just with the flag -i and name of the input file
flag [||--help] shows this help menu
flag [-f||--file] \"file_name\" specify the file that will be used for the rest of the program
flag [-i||--input] \"file_name\" !!!should be the only specified flag in program!!! specify the file name that have a file with flags for the program
flag [-n||--newlines] will output number of lines that are in the file
flag [-d||--digits] will output number of digits in a file
flag [-dd||--numbers] will output number of numbers in a file
flag [-c||--chars] will output number of chars in a file
flag [-a||--angrams] \"words words\" should be the last specified flag and after the flag all the words in the file will be checked against anagrams and the ones that match will be outputted
flag [-p||--palindroms] \"words words\" should be the last specified flag and after the flag all the words that are palindroms and are in the file will be outputted
flag [-s||--sorted] outputs all the words that are in the file in alphabetical order
flag [-rs||--reverse-sorted] outputs all the words that are in the file in reversed alphabetical order
flag [-o||--output] \"output_file_name\" outputs of the command are saved in specified file
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub max_batch_depth: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            max_batch_depth: MAX_BATCH_DEPTH,
        }
    }
}

/// Per-invocation state.
struct Invocation {
    tokens: TokenStream,
    source: Option<TextSource>,
    output: Accumulator,
    destination: Destination,
    depth: usize,
}

fn loaded<'s>(
    source: &'s Option<TextSource>,
    flag: &str,
) -> Result<&'s TextSource, CommandError> {
    source.as_ref().ok_or_else(|| CommandError::NoFileLoaded {
        flag: flag.to_owned(),
    })
}

/// Runs flag sequences against a registry. Help text and console output go
/// to `console`.
pub struct Interpreter<'r, W: Write> {
    registry: &'r FlagRegistry,
    console: W,
    settings: Settings,
}

impl<'r, W: Write> Interpreter<'r, W> {
    pub fn new(registry: &'r FlagRegistry, console: W) -> Self {
        Interpreter {
            registry,
            console,
            settings: Settings::default(),
        }
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn into_console(self) -> W {
        self.console
    }

    /// Runs one top-level invocation.
    ///
    /// Errors are already logged and followed by the help text when this
    /// returns; the accumulated output has been flushed either way.
    pub fn execute(&mut self, tokens: Vec<String>) -> Result<(), CommandError> {
        self.invoke(TokenStream::new(tokens), 0)
    }

    fn invoke(&mut self, tokens: TokenStream, depth: usize) -> Result<(), CommandError> {
        // A sequence that does not open with a flag gets the help text up
        // front; its tokens are still interpreted below.
        if !tokens.first().is_some_and(|first| first.starts_with('-')) {
            self.print_help();
        }

        let mut invocation = Invocation {
            tokens,
            source: None,
            output: Accumulator::new(),
            destination: Destination::Console,
            depth,
        };

        let result = self.dispatch_all(&mut invocation);
        if let Err(err) = &result {
            error!("{err}");
            self.print_help();
        }

        let Invocation {
            output,
            destination,
            ..
        } = invocation;
        if let Err(err) = destination.write(&mut self.console, output.as_str()) {
            warn!("failed to write output: {err}");
        }
        result
    }

    fn dispatch_all(&mut self, inv: &mut Invocation) -> Result<(), CommandError> {
        while let Some(token) = inv.tokens.advance() {
            let opcode = self
                .registry
                .resolve(&token)
                .ok_or_else(|| CommandError::UnknownFlag(token.clone()))?;
            trace!("dispatching `{token}` as opcode {}", opcode.code());
            self.dispatch(inv, &token, opcode)?;
        }
        Ok(())
    }

    fn dispatch(
        &mut self,
        inv: &mut Invocation,
        flag: &str,
        opcode: Opcode,
    ) -> Result<(), CommandError> {
        match opcode {
            Opcode::Help => self.print_help(),
            Opcode::SetFile => {
                let path = inv.tokens.argument(flag)?;
                let source = TextSource::load(&path).map_err(CommandError::File)?;
                inv.source = Some(source);
            }
            Opcode::InputBatch => {
                let path = inv.tokens.argument(flag)?;
                if inv.tokens.len() != 2 {
                    return Err(CommandError::InputFlagNotAlone);
                }
                self.replay(&path, inv.depth)?;
            }
            Opcode::CountLines => {
                let count = count_lines(loaded(&inv.source, flag)?);
                inv.output.push_line(format!("Lines in file: {count}"));
            }
            Opcode::CountDigits => {
                let count = count_digits(loaded(&inv.source, flag)?);
                inv.output.push_line(format!("Digits in file: {count}"));
            }
            Opcode::CountNumbers => {
                let count = count_numeric_tokens(loaded(&inv.source, flag)?);
                inv.output.push_line(format!("Numbers in file: {count}"));
            }
            Opcode::CountChars => {
                let count = count_chars(loaded(&inv.source, flag)?);
                inv.output.push_line(format!("Chars in file: {count}"));
            }
            Opcode::Anagrams => {
                let source = loaded(&inv.source, flag)?;
                let keys = inv.tokens.remaining();
                let words = source.words();
                inv.output.push_line("Anagrams Found:");
                inv.output.push_lines(anagrams_in(&words, &keys));
            }
            Opcode::Palindromes => {
                let source = loaded(&inv.source, flag)?;
                let candidates = palindromes_in(inv.tokens.remaining());
                let words = source.words();
                inv.output.push_line("Palindroms found:");
                inv.output.push_lines(members_of(&words, &candidates));
            }
            Opcode::SortAsc => {
                let words = loaded(&inv.source, flag)?.words();
                inv.output.push_lines(sort_ascending(words));
            }
            Opcode::SortDesc => {
                let words = loaded(&inv.source, flag)?.words();
                inv.output.push_lines(sort_descending(words));
            }
            Opcode::SetOutput => {
                let path = inv.tokens.argument(flag)?;
                inv.destination =
                    Destination::open(&path).map_err(|source| CommandError::Output {
                        path: path.into(),
                        source,
                    })?;
            }
        }
        Ok(())
    }

    /// Runs every line of `path` as its own invocation, one level deeper.
    fn replay(&mut self, path: &str, depth: usize) -> Result<(), CommandError> {
        if depth >= self.settings.max_batch_depth {
            return Err(CommandError::RecursionLimitExceeded {
                depth,
                limit: self.settings.max_batch_depth,
            });
        }
        let batch = TextSource::load(path).map_err(CommandError::InputFileMissing)?;
        debug!("replaying {} lines from {path}", batch.line_count());

        for (index, line) in batch.lines().iter().enumerate() {
            if let Err(err) = self.invoke(TokenStream::from_line(line), depth + 1) {
                error!(
                    "Error while using command from input file {path} (line {}): {err}",
                    index + 1
                );
            }
        }
        Ok(())
    }

    fn print_help(&mut self) {
        if let Err(err) = writeln!(self.console, "{HELP_TEXT}") {
            warn!("failed to print help: {err}");
        }
    }
}
