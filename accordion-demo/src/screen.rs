use std::io::{self, Write};
use std::time::Duration;

use accordion::Page;
use crossterm::{
    cursor,
    event::{self, Event, KeyEvent, KeyEventKind},
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, ClearType},
};
use pagedom::{Document, NodeId, LINE_HEIGHT};

/// Raw-mode alternate screen, restored on drop.
pub struct Screen {
    stdout: io::Stdout,
}

impl Screen {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        crossterm::execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self { stdout })
    }

    /// Wait up to `timeout` for key presses.
    pub fn poll_keys(&self, timeout: Duration) -> io::Result<Vec<KeyEvent>> {
        let mut keys = Vec::new();
        if !event::poll(timeout)? {
            return Ok(keys);
        }
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    keys.push(key);
                }
            }
        }
        Ok(keys)
    }

    pub fn render(&mut self, page: &Page, panels: &[NodeId]) -> io::Result<()> {
        let doc = page.document();
        queue!(
            self.stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0),
            SetAttribute(Attribute::Bold),
            Print("Accordion demo"),
            SetAttribute(Attribute::Reset),
        )?;

        let mut row = 2;
        for &panel in panels {
            let position = page.accordions().iter().position(|a| a.panel() == panel);
            let managed = position.and_then(|i| page.accordion(i));
            let key = match position {
                Some(i) => format!("[{}]", i + 1),
                None => "[n]".to_string(),
            };
            let marker = if doc.is_open(panel) { "v" } else { ">" };
            let state = match managed {
                Some(acc) if acc.is_opening() => "opening".to_string(),
                Some(acc) if acc.is_closing() => "closing".to_string(),
                Some(acc) => match doc.attribute(acc.header(), "aria-expanded") {
                    Some(expanded) => format!("aria-expanded={expanded}"),
                    None => "detached".to_string(),
                },
                None => "native".to_string(),
            };

            let lines = panel_lines(doc, panel);
            for (n, line) in lines.iter().enumerate() {
                queue!(self.stdout, cursor::MoveTo(2, row))?;
                if n == 0 {
                    queue!(
                        self.stdout,
                        SetAttribute(Attribute::Bold),
                        Print(format!("{key} {marker} {line}")),
                        SetAttribute(Attribute::Reset),
                        SetAttribute(Attribute::Dim),
                        Print(format!("  {state}")),
                        SetAttribute(Attribute::Reset),
                    )?;
                } else {
                    queue!(self.stdout, Print(format!("      {line}")))?;
                }
                row += 1;
            }
            row += 1;
        }

        let reduced = if doc.reduced_motion() { "on" } else { "off" };
        queue!(
            self.stdout,
            cursor::MoveTo(0, row + 1),
            SetAttribute(Attribute::Dim),
            Print(format!(
                "1-9 toggle  n native panel  d detach/attach  r reduced motion ({reduced})  q quit"
            )),
            SetAttribute(Attribute::Reset),
        )?;
        self.stdout.flush()
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = crossterm::execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Text lines of `panel`, clipped to its current height.
fn panel_lines(doc: &Document, panel: NodeId) -> Vec<String> {
    let rows = (doc.offset_height(panel) / LINE_HEIGHT).round().max(1.0) as usize;
    doc.descendants(panel)
        .into_iter()
        .filter_map(|id| doc.text(id).map(str::to_string))
        .take(rows)
        .collect()
}
