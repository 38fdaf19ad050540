//! TerminalRenderer: draws view lines to a real terminal.
//!
//! Full redraw every frame; the board is small enough that diffing is not needed.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::game_view::ViewLine;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(8 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn draw(&mut self, lines: &[ViewLine]) -> Result<()> {
        self.buf.clear();
        encode_full_into(lines, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out` without touching stdout.
pub fn encode_full_into(lines: &[ViewLine], out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    for (i, line) in lines.iter().enumerate() {
        for span in line {
            match span.color {
                Some(tag) => {
                    out.queue(SetForegroundColor(tag_color(tag)))?;
                    out.queue(Print(&span.text))?;
                    out.queue(ResetColor)?;
                }
                None => {
                    out.queue(Print(&span.text))?;
                }
            }
        }
        if i + 1 < lines.len() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(ResetColor)?;
    Ok(())
}

/// Terminal color for a shape's display tag
pub fn tag_color(tag: &str) -> Color {
    match tag {
        "sky" => Color::Cyan,
        "amber" => Color::Yellow,
        "indigo" => Color::Magenta,
        "emerald" => Color::Green,
        "red" => Color::Red,
        "blue" => Color::Blue,
        "orange" => Color::Rgb {
            r: 255,
            g: 140,
            b: 0,
        },
        _ => Color::Reset,
    }
}
