use std::io::{self, Stdout, Write, stdout};
use std::time::Duration;

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::event::{Event, KeyEvent, KeyEventKind, poll, read};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::render::{Canvas, Change, Frame, RenderSink};
use crate::Point;

/// Rows above the board, used by the debug lines and the score.
pub const TOP_OFFSET: u16 = 5;
const SCORE_GAP: u16 = 2;
const DEBUG_WIDTH: usize = 24;

/// Where the board sits on the terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    left: u16,
    top: u16,
    width: u16,
    height: u16,
}

impl Layout {
    /// Centers the board horizontally, `TOP_OFFSET` rows from the top.
    pub fn fit(grid: &Grid, term_size: (u16, u16)) -> Result<Self> {
        let (term_width, term_height) = term_size;
        let (need_width, need_height) = (grid.width(), grid.height() + TOP_OFFSET);

        if term_width < need_width || term_height < need_height {
            return Err(Error::TerminalTooSmall {
                have_width: term_width,
                have_height: term_height,
                need_width,
                need_height,
            });
        }

        Ok(Layout {
            left: (term_width - grid.width()) / 2,
            top: TOP_OFFSET,
            width: grid.width(),
            height: grid.height(),
        })
    }

    /// Terminal position of a playable cell, inside the border.
    pub fn screen_pos(&self, p: Point) -> Option<(u16, u16)> {
        let x = u16::try_from(p.x).ok()?;
        let y = u16::try_from(p.y).ok()?;
        if x + 2 >= self.width || y + 2 >= self.height {
            return None;
        }

        Some((self.left + 1 + x, self.top + 1 + y))
    }

    pub fn score_row(&self) -> u16 {
        self.top - SCORE_GAP
    }
}

pub struct TermManager {
    stdout: Stdout,
    layout: Layout,
    canvas: Canvas,
}

impl TermManager {
    pub fn new(grid: &Grid) -> Result<Self> {
        let layout = Layout::fit(grid, terminal::size()?)?;
        Ok(TermManager { stdout: stdout(), layout, canvas: Canvas::new() })
    }

    pub fn setup(&mut self) -> io::Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)?;
        self.clear()?;
        self.draw_borders()
    }

    pub fn restore(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, style::ResetColor, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
    }

    /// Waits up to `timeout` for the first key press, then drains whatever
    /// else is already queued.
    pub fn read_key_events(&self, timeout: Duration) -> io::Result<Vec<KeyEvent>> {
        let mut events = vec![];
        let mut wait = timeout;

        while poll(wait)? {
            if let Event::Key(ev) = read()? {
                if ev.kind == KeyEventKind::Press {
                    events.push(ev);
                }
            }
            wait = Duration::ZERO;
        }

        Ok(events)
    }

    pub fn draw_borders(&mut self) -> io::Result<()> {
        let Layout { left, top, width, height } = self.layout;
        let (end_x, end_y) = (left + width - 1, top + height - 1);

        for x in left..=end_x {
            let ch = if x == left || x == end_x {'+'} else {'-'};
            self.print_at((x, top), ch, Color::DarkRed)?;
            self.print_at((x, end_y), ch, Color::DarkRed)?;
        }

        for y in top + 1..end_y {
            self.print_at((left, y), '|', Color::DarkRed)?;
            self.print_at((end_x, y), '|', Color::DarkRed)?;
        }

        self.flush()
    }

    pub fn clear(&mut self) -> io::Result<()> {
        self.canvas.clear();
        execute!(self.stdout, terminal::Clear(ClearType::All))
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn print_at(&mut self, pos: (u16, u16), ch: char, color: Color) -> io::Result<()> {
        queue!(
            self.stdout,
            cursor::MoveTo(pos.0, pos.1),
            style::SetForegroundColor(color),
            style::Print(ch),
            style::ResetColor
        )
    }

    fn print_line(&mut self, pos: (u16, u16), text: &str) -> io::Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(text))
    }
}

impl RenderSink for TermManager {
    fn render(&mut self, frame: &Frame) -> io::Result<()> {
        for change in self.canvas.update(&frame.cells) {
            let (point, ch, color) = match change {
                Change::Erase(p) => (p, ' ', Color::Reset),
                Change::Draw(cell) => (cell.point, cell.glyph, cell.color),
            };
            if let Some(pos) = self.layout.screen_pos(point) {
                self.print_at(pos, ch, color)?;
            }
        }

        let score = format!("{:^width$}", frame.score, width = self.layout.width as usize);
        self.print_line((self.layout.left, self.layout.score_row()), &score)?;

        if let Some(lines) = &frame.debug {
            for (row, line) in lines.iter().enumerate() {
                let padded = format!("{:<width$}", line, width = DEBUG_WIDTH);
                self.print_line((0, row as u16), &padded)?;
            }
        }

        self.flush()
    }
}
