//! Line-oriented front end
//!
//! [`LinePrompt`] drives a [`Session`] over any `BufRead`/`Write` pair: it prints a
//! numbered menu, reads one selection, asks for each field the selection needs,
//! dispatches the request and prints whatever the session reported. It is used
//! when stdin is not a terminal, with `--plain`, and by the tests.
//!
//! Reaching end of input at any prompt ends the session as if Exit had been chosen.

use std::io::{self, BufRead, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

use crate::errors::AppError;
use crate::menu::{Answer, Flow, MenuChoice, Request};
use crate::session::Session;
use crate::transcript::{Tone, TranscriptLine};
use tracing::debug;

const SELECT_MESSAGE: &str = "Select an option:";

pub struct LinePrompt<R, W> {
    input: R,
    output: W,
    color: bool,
    /// Transcript lines already written to `output`
    printed: usize,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        LinePrompt {
            input,
            output,
            color: false,
            printed: 0,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Hand back the output sink, e.g. to inspect a captured buffer
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu loop until Exit is chosen or input runs out.
    pub fn run(&mut self, session: &mut Session) -> Result<(), AppError> {
        session.open();
        self.flush_transcript(session)?;

        loop {
            let Some(choice) = self.read_choice(session)? else {
                break;
            };
            let Some(answers) = self.read_answers(choice, session)? else {
                break;
            };

            let request = Request::from_answers(choice, &answers)?;
            let flow = session.dispatch(request);
            self.flush_transcript(session)?;
            if flow == Flow::Exit {
                return Ok(());
            }
        }

        // Input ran out before Exit was chosen
        session.dispatch(Request::Exit);
        self.flush_transcript(session)?;
        Ok(())
    }

    fn read_choice(&mut self, session: &mut Session) -> Result<Option<MenuChoice>, AppError> {
        loop {
            writeln!(self.output, "? {}", SELECT_MESSAGE)?;
            for (i, choice) in MenuChoice::ALL.iter().enumerate() {
                writeln!(self.output, "  {}) {}", i + 1, choice.label())?;
            }
            write!(self.output, "{} ", SELECT_MESSAGE)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match MenuChoice::parse_selection(&line) {
                Ok(choice) => return Ok(Some(choice)),
                Err(err) => {
                    session.reject(err.to_string());
                    self.flush_transcript(session)?;
                }
            }
        }
    }

    fn read_answers(
        &mut self,
        choice: MenuChoice,
        session: &mut Session,
    ) -> Result<Option<Vec<Answer>>, AppError> {
        let mut answers = Vec::with_capacity(choice.fields().len());
        for field in choice.fields() {
            let answer = loop {
                write!(self.output, "? {} ", field.message)?;
                self.output.flush()?;

                let Some(line) = self.read_line()? else {
                    return Ok(None);
                };
                match field.parse(&line) {
                    Ok(answer) => {
                        debug!(field = ?field.key, "field answered");
                        break answer;
                    }
                    Err(err) => {
                        session.reject(err.to_string());
                        self.flush_transcript(session)?;
                    }
                }
            };
            answers.push(answer);
        }
        Ok(Some(answers))
    }

    /// One line without its terminator, `None` at end of input.
    /// Bytes that are not UTF-8 become U+FFFD instead of ending the session.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&raw).into_owned();
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn flush_transcript(&mut self, session: &Session) -> io::Result<()> {
        let fresh = session.transcript().since(self.printed);
        write_lines(&mut self.output, fresh, self.color)?;
        self.printed += fresh.len();
        self.output.flush()
    }
}

/// Write transcript lines, colored by tone when `color` is set.
pub fn write_lines<W: Write>(out: &mut W, lines: &[TranscriptLine], color: bool) -> io::Result<()> {
    for line in lines {
        match tone_color(line.tone).filter(|_| color) {
            Some(fg) => {
                queue!(
                    out,
                    SetForegroundColor(fg),
                    Print(&line.text),
                    ResetColor,
                    Print("\n")
                )?;
            }
            None => writeln!(out, "{}", line.text)?,
        }
    }
    Ok(())
}

fn tone_color(tone: Tone) -> Option<Color> {
    match tone {
        Tone::Banner => Some(Color::Blue),
        Tone::Rule => Some(Color::Cyan),
        Tone::Success => Some(Color::Green),
        Tone::Notice => Some(Color::Yellow),
        Tone::Error => Some(Color::Red),
        Tone::Plain => None,
    }
}
