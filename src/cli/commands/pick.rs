//! Line-driven interactive picker
//!
//! Each input line is one command:
//!
//! ```text
//! /text   set the search text (a lone `/` clears it)
//! +       load the next page
//! #N      select the N-th displayed glyph (1-based)
//! q       quit
//! ```

use std::io::{BufRead, Write};

use super::CommandHandler;
use crate::config::PickerConfig;
use crate::Result;

/// Handler for the `pick` command
pub struct PickCommand {
    pub config: PickerConfig,
    pub selection: Option<String>,
    pub json: bool,
}

/// A parsed line of picker input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickInput {
    Search(String),
    LoadMore,
    Select(usize),
    Quit,
    Unknown(String),
}

impl PickInput {
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        if let Some(text) = line.strip_prefix('/') {
            return PickInput::Search(text.to_string());
        }
        match line.trim() {
            "+" => PickInput::LoadMore,
            "q" => PickInput::Quit,
            other => match other.strip_prefix('#').map(str::parse::<usize>) {
                Some(Ok(n)) if n > 0 => PickInput::Select(n - 1),
                _ => PickInput::Unknown(other.to_string()),
            },
        }
    }
}

impl CommandHandler for PickCommand {
    fn execute(&self) -> Result<()> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        let selection = self.run_session(stdin.lock(), stdout.lock())?;

        let mut out = std::io::stdout().lock();
        if self.json {
            serde_json::to_writer(&mut out, &serde_json::json!({ "selection": selection }))?;
            writeln!(out)?;
        } else if let Some(name) = selection {
            writeln!(out, "{}", name)?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "pick"
    }
}

impl PickCommand {
    pub fn new(config: PickerConfig, selection: Option<String>, json: bool) -> Self {
        Self {
            config,
            selection,
            json,
        }
    }

    /// Run a picker session over `input`, echoing the displayed glyphs to `output`
    ///
    /// Returns the selection in effect when the session ends.
    #[cfg(feature = "tui")]
    pub fn run_session<R: BufRead, W: Write>(
        &self,
        input: R,
        mut output: W,
    ) -> Result<Option<String>> {
        use crate::picker::SymbolsPicker;
        use std::cell::Cell;
        use std::rc::Rc;

        let dismissed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&dismissed);

        let mut picker = SymbolsPicker::new(self.config.build_view_model())
            .with_auto_dismiss(self.config.auto_dismiss)
            .on_dismiss(move || flag.set(true));
        if let Some(initial) = &self.selection {
            picker = picker.with_selection(initial.clone());
        }

        writeln!(output, "{}", picker.view_model().title())?;
        render(&picker, &mut output)?;

        for line in input.lines() {
            match PickInput::parse(&line?) {
                PickInput::Search(text) => {
                    if picker.set_search_text(&text) {
                        render(&picker, &mut output)?;
                    }
                }
                PickInput::LoadMore => {
                    if picker.show_load_more() {
                        picker.load_more();
                        render(&picker, &mut output)?;
                    } else {
                        writeln!(output, "nothing more to load")?;
                    }
                }
                PickInput::Select(index) => match picker.select_index(index) {
                    Some(name) => writeln!(output, "selected {}", name)?,
                    None => writeln!(output, "no glyph at #{}", index + 1)?,
                },
                PickInput::Quit => break,
                PickInput::Unknown(text) => writeln!(output, "unknown command: {}", text)?,
            }

            if dismissed.get() {
                break;
            }
        }

        Ok(picker.selection().map(str::to_string))
    }

    #[cfg(not(feature = "tui"))]
    pub fn run_session<R: BufRead, W: Write>(
        &self,
        _input: R,
        _output: W,
    ) -> Result<Option<String>> {
        Err(crate::GlyphPickError::Cli(
            "the pick command requires the `tui` feature".to_string(),
        ))
    }
}

#[cfg(feature = "tui")]
fn render<W: Write>(picker: &crate::picker::SymbolsPicker, out: &mut W) -> Result<()> {
    let label = if picker.search_text().is_empty() {
        picker.view_model().search_label().to_string()
    } else {
        format!("/{}", picker.search_text())
    };
    writeln!(out, "[{}] {} shown", label, picker.symbols().len())?;

    for (i, name) in picker.symbols().iter().enumerate() {
        let marker = if picker.is_selected(name) { "*" } else { " " };
        writeln!(out, "{}{:>4} {}", marker, i + 1, name)?;
    }
    if picker.show_load_more() {
        writeln!(out, "[+] load more")?;
    }
    Ok(())
}
