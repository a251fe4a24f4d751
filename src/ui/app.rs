use crate::lookup::{LookupController, LookupSnapshot, Resolution};

const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Terminal front end over a [`LookupController`].
///
/// Holds only presentation state (quit flag, spinner frame). The query and
/// the fetch result live in the controller.
pub struct App {
    should_quit: bool,
    controller: LookupController,
    spinner_tick: u8,
}

impl App {
    pub fn new(controller: LookupController) -> Self {
        Self {
            should_quit: false,
            controller,
            spinner_tick: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Fetch the initial query.
    pub fn mount(&mut self) {
        self.controller.mount();
    }

    pub fn snapshot(&self) -> LookupSnapshot {
        self.controller.snapshot()
    }

    pub fn query(&self) -> &str {
        &self.controller.state().query
    }

    pub fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[usize::from(self.spinner_tick) % SPINNER_FRAMES.len()]
    }

    pub fn on_tick(&mut self) {
        if self.controller.state().is_loading {
            self.spinner_tick = self.spinner_tick.wrapping_add(1);
        }
    }

    pub fn on_char(&mut self, ch: char) {
        let mut query = self.query().to_string();
        query.push(ch);
        self.controller.set_query(query);
    }

    /// Delete the last character. An empty query is left alone: no edit, no fetch.
    pub fn on_backspace(&mut self) {
        let mut query = self.query().to_string();
        if query.pop().is_some() {
            self.controller.set_query(query);
        }
    }

    pub fn on_clear(&mut self) {
        if !self.query().is_empty() {
            self.controller.set_query(String::new());
        }
    }

    /// Pasted text is appended as one edit. Line breaks are dropped.
    pub fn on_paste(&mut self, text: &str) {
        let pasted: String = text.chars().filter(|c| !c.is_control()).collect();
        if pasted.is_empty() {
            return;
        }
        let query = format!("{}{}", self.query(), pasted);
        self.controller.set_query(query);
    }

    pub fn on_resolution(&mut self, resolution: Resolution) {
        self.controller.apply(resolution);
    }
}
