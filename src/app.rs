//! Application state and core logic for the tipcalc screen.
//!
//! This module contains the `App` struct, which owns everything the
//! calculator screen shows, and `AppEvent`, the closed set of inputs it
//! reacts to. Events are handled one at a time, synchronously.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::cli::StartValues;
use crate::error::InputError;
use crate::messages;
use crate::models::{Field, RawInput, TipResult, MAX_PERCENT};
use crate::utils::step_clamped;

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(2);

/// Input delivered to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    SetPercent(u8),       // Slider moved to an absolute position
    AdjustPercent(i16),   // Slider nudged by a step
    FocusNext,            // Tab
    FocusPrev,            // Shift+Tab
    Focus(Field),         // Jump to a field
    Input(char),          // Character typed into the focused field
    Backspace,            // Delete last character of the focused field
    ClearField,           // Empty the focused field
    Calculate,            // Run validation and calculation
    ShowAbout,            // Show the about text in the result panel
    Tick(Instant),        // Periodic clock for toast expiry
    Quit,
}

/// What the result panel is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultPanel {
    Prompt,   // Initial instructions
    Result,   // A successful calculation
    Rejected, // Retry message after bad input
    About,
}

/// Short-lived advisory message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: &'static str,
    pub shown_at: Instant,
}

impl Toast {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= TOAST_DURATION
    }
}

/// Application state
pub struct App {
    pub percent: u8,
    pub split_text: String,
    pub bill_text: String,
    pub focus: Field,
    // Text in the result panel and what kind of text it is
    pub result_text: String,
    pub result_panel: ResultPanel,
    // Most recent successful calculation
    pub last_result: Option<TipResult>,
    pub toast: Option<Toast>,
    pub should_quit: bool,
}

impl App {
    pub fn new(start: StartValues) -> Self {
        Self {
            percent: start.percent.min(MAX_PERCENT),
            split_text: start.split,
            bill_text: start.bill,
            focus: Field::Bill,
            result_text: messages::INITIAL_PROMPT.to_string(),
            result_panel: ResultPanel::Prompt,
            last_result: None,
            toast: None,
            should_quit: false,
        }
    }

    /// Apply one event to the state
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SetPercent(percent) => self.set_percent(percent),
            AppEvent::AdjustPercent(delta) => {
                self.set_percent(step_clamped(self.percent, delta, MAX_PERCENT))
            }
            AppEvent::FocusNext => self.focus = self.focus.next(),
            AppEvent::FocusPrev => self.focus = self.focus.prev(),
            AppEvent::Focus(field) => self.focus = field,
            AppEvent::Input(c) => {
                if let Some(text) = self.focused_text_mut() {
                    text.push(c);
                }
            }
            AppEvent::Backspace => {
                if let Some(text) = self.focused_text_mut() {
                    text.pop();
                }
            }
            AppEvent::ClearField => {
                if let Some(text) = self.focused_text_mut() {
                    text.clear();
                }
            }
            AppEvent::Calculate => self.calculate(),
            AppEvent::ShowAbout => {
                self.result_text = messages::about();
                self.result_panel = ResultPanel::About;
            }
            AppEvent::Tick(now) => self.expire_toast(now),
            AppEvent::Quit => self.should_quit = true,
        }
    }

    /// Move the slider, clamped to the slider range
    pub fn set_percent(&mut self, percent: u8) {
        let percent = percent.min(MAX_PERCENT);
        if percent != self.percent {
            self.percent = percent;
            debug!(percent, "updated tip percent");
        }
    }

    /// Validate the current fields and compute the tip. Does not touch
    /// the screen state.
    pub fn evaluate(&self) -> Result<TipResult, InputError> {
        let input = RawInput::new(&self.bill_text, &self.split_text).validate()?;
        Ok(TipResult::compute(&input, self.percent))
    }

    /// Run a calculation and update the result panel.
    ///
    /// On an out-of-range value the offending field gets focus and a
    /// field-specific toast is raised.
    pub fn calculate(&mut self) {
        self.calculate_at(Instant::now());
    }

    fn calculate_at(&mut self, now: Instant) {
        match self.evaluate() {
            Ok(result) => {
                debug!(tip = result.tip_amount, total = result.total_amount, "tip computed");
                self.result_text = messages::result_message(&result);
                self.result_panel = ResultPanel::Result;
                self.last_result = Some(result);
                self.toast = None;
            }
            Err(err) => {
                self.result_text = messages::TRY_AGAIN.to_string();
                self.result_panel = ResultPanel::Rejected;
                if let InputError::InvalidValue { field } = err {
                    self.toast = Some(Toast {
                        message: messages::invalid_value(field),
                        shown_at: now,
                    });
                    self.focus = field.into();
                }
            }
        }
    }

    /// Drop the toast once it has been up long enough
    pub fn expire_toast(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|toast| toast.is_expired(now)) {
            self.toast = None;
        }
    }

    /// Text buffer behind the focused field, if it is a text field
    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Field::Bill => Some(&mut self.bill_text),
            Field::Split => Some(&mut self.split_text),
            Field::Percent => None,
        }
    }
}
