//! Interactive and batch front ends around the converter.

use crate::config::Config;
use crate::converter::{BritishSpokenTimeConverter, ConversionError, SpokenTimeConverter};
use crate::parser::parse_time;
use crate::time::Time;
use anyhow::{Context, Result};
use rustyline::config::Config as EditorConfig;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, BufRead, IsTerminal, Write};

pub const BANNER: &str = "British Spoken Time Converter";
pub const INSTRUCTIONS: &str = "Enter time in HH:MM or H:MM format (or 'quit' to exit):";
pub const FORMAT_HINT: &str = "Please enter time in HH:MM or H:MM format (e.g., 7:30)";
pub const RESULT_LABEL: &str = "Spoken time:";
pub const GOODBYE: &str = "Goodbye!";
pub const NO_INPUT: &str = "No input available, exiting...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Quit,
}

/// Standardized input preprocessing
pub fn preprocess_input(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Handles one line of user input at a time and writes the user-facing
/// response to `out`. Logging goes through `log`, never to `out`.
pub struct Session<C, W> {
    converter: C,
    out: W,
}

impl<C: SpokenTimeConverter, W: Write> Session<C, W> {
    pub fn new(converter: C, out: W) -> Self {
        Self { converter, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn print_banner(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", BANNER)?;
        writeln!(self.out, "{}", INSTRUCTIONS)
    }

    pub fn print_no_input(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", NO_INPUT)
    }

    pub fn print_goodbye(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", GOODBYE)
    }

    pub fn handle_line(&mut self, line: &str) -> io::Result<LineOutcome> {
        let command = preprocess_input(line);
        match command.as_str() {
            "quit" | "exit" => {
                log::info!("Exit command received");
                self.print_goodbye()?;
                Ok(LineOutcome::Quit)
            }
            "help" => {
                self.print_help()?;
                Ok(LineOutcome::Continue)
            }
            "version" => {
                writeln!(self.out, "{}", crate::version::version_line())?;
                Ok(LineOutcome::Continue)
            }
            _ => {
                self.convert_input(line)?;
                Ok(LineOutcome::Continue)
            }
        }
    }

    /// Converts one time string and reports the outcome. Returns whether the
    /// conversion succeeded.
    pub fn convert_input(&mut self, input: &str) -> io::Result<bool> {
        let time = match parse_time(input) {
            Ok(time) => time,
            Err(e) => {
                log::warn!("Rejected input '{}': {}", input.trim(), e);
                writeln!(self.out, "Error: {}", e)?;
                writeln!(self.out, "{}", FORMAT_HINT)?;
                return Ok(false);
            }
        };
        self.convert_time(&time)
    }

    pub fn convert_time(&mut self, time: &Time) -> io::Result<bool> {
        match self.converter.convert(time) {
            Ok(spoken) => {
                writeln!(self.out, "{} {}", RESULT_LABEL, spoken)?;
                Ok(true)
            }
            Err(e) => {
                self.report_conversion_error(&e)?;
                Ok(false)
            }
        }
    }

    fn report_conversion_error(&mut self, e: &ConversionError) -> io::Result<()> {
        if e.is_internal() {
            log::error!("Internal conversion failure: {}", e);
            writeln!(self.out, "Internal error: {}", e)
        } else {
            writeln!(self.out, "Error: {}", e)?;
            writeln!(self.out, "{}", FORMAT_HINT)
        }
    }

    fn print_help(&mut self) -> io::Result<()> {
        writeln!(self.out, "Type a time such as 7:30 or 19:05 to hear it spoken.")?;
        writeln!(self.out, "Commands:")?;
        writeln!(self.out, "  help     Show this help")?;
        writeln!(self.out, "  version  Show the version")?;
        writeln!(self.out, "  quit     Exit (also 'exit')")
    }

    /// Drives the session from a plain reader, as when stdin is piped.
    /// Lines that are not valid UTF-8 are decoded lossily and rejected like
    /// any other bad time. Only end of input stops the loop without a quit.
    pub fn run_script<R: BufRead>(&mut self, mut reader: R, prompt: &str) -> io::Result<()> {
        self.print_banner()?;
        let mut buf = Vec::new();
        loop {
            write!(self.out, "{}", prompt)?;
            self.out.flush()?;
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => return self.print_no_input(),
                Ok(_) => {}
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    log::warn!("Failed to read input: {}", e);
                    return self.print_no_input();
                }
            }
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);
            if self.handle_line(line)? == LineOutcome::Quit {
                return Ok(());
            }
        }
    }
}

pub struct Application {
    config: Config,
    converter: BritishSpokenTimeConverter,
}

impl Application {
    pub fn new(config: Config) -> Self {
        Self { config, converter: BritishSpokenTimeConverter::new() }
    }

    fn session<W: Write>(&self, out: W) -> Session<BritishSpokenTimeConverter, W> {
        Session::new(self.converter, out)
    }

    /// Interactive mode. Uses a line editor on a terminal and falls back to
    /// plain line reading when stdin is redirected.
    pub fn run(&self) -> Result<()> {
        log::info!("Starting interactive mode");
        let stdin = io::stdin();
        if !stdin.is_terminal() {
            log::debug!("stdin is not a terminal, reading lines directly");
            let mut session = self.session(io::stdout().lock());
            return session
                .run_script(stdin.lock(), &self.config.terminal.prompt)
                .context("Failed to write output");
        }

        let editor_config = EditorConfig::builder()
            .max_history_size(self.config.terminal.history_size)?
            .auto_add_history(false)
            .build();
        let mut rl = DefaultEditor::with_config(editor_config)?;
        let mut session = self.session(io::stdout());
        session.print_banner()?;

        loop {
            match rl.readline(&self.config.terminal.prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = rl.add_history_entry(line.as_str());
                    }
                    if session.handle_line(&line)? == LineOutcome::Quit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    session.print_goodbye()?;
                    break;
                }
                Err(ReadlineError::Eof) => {
                    session.print_no_input()?;
                    break;
                }
                Err(err) => {
                    log::error!("Readline failure: {:?}", err);
                    session.print_no_input()?;
                    break;
                }
            }
        }

        Ok(())
    }

    /// Batch mode. Converts every argument in order and returns how many failed.
    pub fn run_batch(&self, times: &[String]) -> Result<usize> {
        log::info!("Converting {} time(s) in batch mode", times.len());
        let mut session = self.session(io::stdout().lock());
        let mut failures = 0;
        for input in times {
            if !session.convert_input(input).context("Failed to write output")? {
                failures += 1;
            }
        }
        Ok(failures)
    }

    /// Speaks the current local time.
    pub fn run_now(&self) -> Result<bool> {
        let now = Time::from_chrono(&chrono::Local::now());
        log::debug!("Current local time is {}", now);
        let mut session = self.session(io::stdout().lock());
        session.convert_time(&now).context("Failed to write output")
    }
}
