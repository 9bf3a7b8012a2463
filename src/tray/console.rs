use std::io::{BufRead, Write};
use yansi::Paint;

use super::{MenuItemId, Tray, TrayError};

/// A tray rendered as a numbered menu on a terminal.
///
/// Typing an entry's number clicks it; `q`, `quit` or end of input quits.
pub struct ConsoleTray<R, W> {
    input: R,
    output: W,
    title: String,
    tooltip: String,
    items: Vec<(MenuItemId, String)>,
}

impl ConsoleTray<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleTray<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            title: String::new(),
            tooltip: String::new(),
            items: Vec::new(),
        }
    }

    fn draw(&mut self) -> std::io::Result<()> {
        writeln!(self.output, "{} {}", Paint::new(&self.title).bold(), Paint::new(&self.tooltip).dim())?;
        if self.items.is_empty() {
            writeln!(self.output, "  {}", Paint::new("(no entries)").dim())?;
        }
        for (i, (_, label)) in self.items.iter().enumerate() {
            writeln!(self.output, "  {} {}", Paint::new(format!("[{}]", i + 1)).cyan(), label)?;
        }
        writeln!(self.output, "  {} quit", Paint::new("[q]").cyan())?;
        self.output.flush()
    }
}

impl<R: BufRead, W: Write> Tray for ConsoleTray<R, W> {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_tooltip(&mut self, tooltip: &str) {
        self.tooltip = tooltip.to_string();
    }

    fn add_menu_item(&mut self, label: &str) -> Result<MenuItemId, TrayError> {
        let id = MenuItemId(format!("console-{}", self.items.len() + 1));
        self.items.push((id.clone(), label.to_string()));
        Ok(id)
    }

    fn run<C, E>(mut self, mut on_click: C, on_exit: E) -> Result<(), TrayError>
    where
        C: FnMut(&MenuItemId) + 'static,
        E: FnOnce() + 'static,
    {
        self.draw()?;
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            let choice = line.trim();
            if choice.eq_ignore_ascii_case("q") || choice.eq_ignore_ascii_case("quit") {
                break;
            }
            let picked = choice
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| self.items.get(i));
            match picked {
                Some((id, _)) => on_click(id),
                None if choice.is_empty() => {}
                None => writeln!(self.output, "{}", Paint::new(format!("Unknown entry: {}", choice)).red())?,
            }
        }
        on_exit();
        Ok(())
    }
}
