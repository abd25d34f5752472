use std::io::Write;

use common::render::{OptionEntry, RenderModel, Renderer, SUBMIT_LABEL};

/// The widgets the workflow drives. Implementations decide how each one is
/// drawn; the workflow only ever talks to this trait.
pub trait View {
    /// Replace the entries of both currency selects
    fn populate(&mut self, options: &[OptionEntry]);
    /// Show the current source and target selections
    fn select(&mut self, base: Option<&str>, target: Option<&str>);
    /// Glyph shown next to the amount field
    fn set_symbol(&mut self, symbol: &str);
    fn set_submit(&mut self, enabled: bool, label: &str);
    fn set_busy(&mut self, busy: bool);
    /// Replace the result region
    fn show(&mut self, model: &RenderModel);
    /// Transient message outside the result region
    fn notice(&mut self, message: &str);
}

/// Line-oriented view writing to a terminal
pub struct TerminalView<W: Write> {
    out: W,
    renderer: Box<dyn Renderer>,
    submit_label: String,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, renderer: Box<dyn Renderer>) -> Self {
        Self {
            out,
            renderer,
            submit_label: SUBMIT_LABEL.to_string(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
        let _ = self.out.flush();
    }
}

impl<W: Write> View for TerminalView<W> {
    fn populate(&mut self, options: &[OptionEntry]) {
        for option in options.iter().filter(|o| !o.value.is_empty()) {
            self.line(&format!("  {}", option.label));
        }
        if options.iter().all(|o| o.value.is_empty()) {
            if let Some(placeholder) = options.first() {
                self.line(&placeholder.label);
            }
        }
    }

    fn select(&mut self, base: Option<&str>, target: Option<&str>) {
        self.line(&format!(
            "From: {}  To: {}",
            base.unwrap_or("-"),
            target.unwrap_or("-")
        ));
    }

    fn set_symbol(&mut self, symbol: &str) {
        self.line(&format!("Amount in {}", symbol));
    }

    fn set_submit(&mut self, _enabled: bool, label: &str) {
        self.submit_label = label.to_string();
    }

    fn set_busy(&mut self, busy: bool) {
        if busy {
            let label = format!("⏳ {}", self.submit_label);
            self.line(&label);
        }
    }

    fn show(&mut self, model: &RenderModel) {
        let rendered = self.renderer.render(model);
        if !rendered.is_empty() {
            self.line(&rendered);
        }
    }

    fn notice(&mut self, message: &str) {
        self.line(message);
    }
}
