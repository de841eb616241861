//! Crossterm terminal driver.
//!
//! [`CrosstermDriver`] implements [`Driver`] on top of the crossterm crate:
//! raw mode, the alternate screen, optional mouse capture and true-colour
//! output of [`Frame`] diffs.

use std::error::Error;
use std::io::{self, Write};
use std::sync::mpsc::Sender;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute, queue,
    style::{self, Attribute, Color as CtColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use twenty48_core::Point;

use crate::app::Driver;
use crate::canvas::Frame;
use crate::messages::{Key, ModMask, MouseAction, Msg};
use crate::style::{AttrMask, Color};

const POLL_TIMEOUT: Duration = Duration::from_millis(50);

fn to_ct_color(c: Color) -> CtColor {
    if c == Color::DEFAULT {
        CtColor::Reset
    } else {
        CtColor::Rgb {
            r: c.r(),
            g: c.g(),
            b: c.b(),
        }
    }
}

/// Only Ctrl is forwarded; no binding reads the other modifiers.
fn to_mod_mask(mods: KeyModifiers) -> ModMask {
    if mods.contains(KeyModifiers::CONTROL) {
        ModMask::CTRL
    } else {
        ModMask::NONE
    }
}

fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Up => Some(Key::ArrowUp),
        KeyCode::Down => Some(Key::ArrowDown),
        KeyCode::Left => Some(Key::ArrowLeft),
        KeyCode::Right => Some(Key::ArrowRight),
        _ => None,
    }
}

fn mouse_msg(me: MouseEvent) -> Option<Msg> {
    let pos = Point::new(me.column as i32, me.row as i32);
    let action = match me.kind {
        MouseEventKind::Down(MouseButton::Left) => MouseAction::Main,
        MouseEventKind::Down(MouseButton::Right) => MouseAction::Secondary,
        MouseEventKind::Up(_) => MouseAction::Release,
        MouseEventKind::Moved | MouseEventKind::Drag(_) => MouseAction::Move,
        _ => return None,
    };
    Some(Msg::mouse(action, pos))
}

/// Translate a crossterm event. Key releases and repeats from terminals
/// that report them are dropped.
fn to_msg(ev: Event) -> Option<Msg> {
    match ev {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => to_key(code).map(|key| Msg::KeyDown {
            key,
            modifiers: to_mod_mask(modifiers),
        }),
        Event::Mouse(me) => mouse_msg(me),
        Event::Resize(w, h) => Some(Msg::Screen {
            width: w as i32,
            height: h as i32,
        }),
        _ => None,
    }
}

/// A terminal back-end using crossterm.
pub struct CrosstermDriver {
    mouse_enabled: bool,
}

impl CrosstermDriver {
    pub fn new() -> Self {
        Self {
            mouse_enabled: true,
        }
    }

    /// Configure whether mouse events are captured.
    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }
}

impl Default for CrosstermDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver for CrosstermDriver {
    fn init(&mut self) -> Result<(), Box<dyn Error>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        if self.mouse_enabled {
            execute!(stdout, event::EnableMouseCapture)?;
        }
        log::debug!("terminal initialised (mouse: {})", self.mouse_enabled);
        Ok(())
    }

    fn size(&self) -> Option<Point> {
        terminal::size()
            .ok()
            .map(|(w, h)| Point::new(w as i32, h as i32))
    }

    fn poll_msgs(&mut self, tx: &Sender<Msg>) -> Result<(), Box<dyn Error>> {
        if !event::poll(POLL_TIMEOUT)? {
            return Ok(());
        }
        while event::poll(Duration::ZERO)? {
            if let Some(msg) = to_msg(event::read()?) {
                tx.send(msg).ok();
            }
        }
        Ok(())
    }

    fn flush(&mut self, frame: Frame) -> Result<(), Box<dyn Error>> {
        let mut stdout = io::stdout().lock();
        for fc in &frame.cells {
            let (p, cell) = (fc.pos, fc.cell);
            queue!(
                stdout,
                cursor::MoveTo(p.x as u16, p.y as u16),
                SetForegroundColor(to_ct_color(cell.style.fg)),
                SetBackgroundColor(to_ct_color(cell.style.bg))
            )?;
            let attrs = cell.style.attrs;
            for (mask, attr) in [
                (AttrMask::BOLD, Attribute::Bold),
                (AttrMask::ITALIC, Attribute::Italic),
                (AttrMask::UNDERLINE, Attribute::Underlined),
                (AttrMask::REVERSE, Attribute::Reverse),
                (AttrMask::DIM, Attribute::Dim),
            ] {
                if attrs.contains(mask) {
                    queue!(stdout, style::SetAttribute(attr))?;
                }
            }
            queue!(stdout, style::Print(cell.ch))?;
            if !attrs.is_empty() {
                queue!(stdout, style::SetAttribute(Attribute::Reset))?;
            }
        }
        stdout.flush()?;
        Ok(())
    }

    fn close(&mut self) {
        let mut stdout = io::stdout();
        if self.mouse_enabled {
            let _ = execute!(stdout, event::DisableMouseCapture);
        }
        let _ = execute!(
            stdout,
            style::ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
