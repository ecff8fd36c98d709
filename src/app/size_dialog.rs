//! "Set size..." dialog model.
//!
//! Holds the text typed into the width and height fields. The size captured
//! when the dialog opened is the fallback for any field that does not parse
//! to a positive integer, so a typo never produces an error or a broken
//! window. Values beyond `MAX_DIMENSION` are clamped to it.

use crate::constants::{MAX_DIMENSION, MIN_DIMENSION};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeField {
    #[default]
    Width,
    Height,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeDialog {
    original_width: i32,
    original_height: i32,
    pub width_text: String,
    pub height_text: String,
    /// Field receiving typed characters
    pub focused: SizeField,
    /// Mirror the ruler's stay-on-top so the dialog is not hidden behind it
    pub stay_on_top: bool,
}

impl SizeDialog {
    pub fn new(width: i32, height: i32, stay_on_top: bool) -> Self {
        Self {
            original_width: width,
            original_height: height,
            width_text: width.to_string(),
            height_text: height.to_string(),
            focused: SizeField::Width,
            stay_on_top,
        }
    }

    pub fn original_size(&self) -> (i32, i32) {
        (self.original_width, self.original_height)
    }

    /// The size to apply on OK; unparseable fields fall back per axis.
    pub fn new_size(&self) -> (i32, i32) {
        (
            parse_or(&self.width_text, self.original_width),
            parse_or(&self.height_text, self.original_height),
        )
    }

    pub fn field_text(&self, field: SizeField) -> &str {
        match field {
            SizeField::Width => &self.width_text,
            SizeField::Height => &self.height_text,
        }
    }

    fn focused_text_mut(&mut self) -> &mut String {
        match self.focused {
            SizeField::Width => &mut self.width_text,
            SizeField::Height => &mut self.height_text,
        }
    }

    /// Append a typed character to the focused field
    pub fn insert_char(&mut self, c: char) {
        if !c.is_control() {
            self.focused_text_mut().push(c);
        }
    }

    /// Remove the last character of the focused field
    pub fn delete_char(&mut self) {
        self.focused_text_mut().pop();
    }

    pub fn focus_next(&mut self) {
        self.focused = match self.focused {
            SizeField::Width => SizeField::Height,
            SizeField::Height => SizeField::Width,
        };
    }
}

fn parse_or(text: &str, fallback: i32) -> i32 {
    match text.trim().parse::<i32>() {
        Ok(value) if value >= MIN_DIMENSION => value.min(MAX_DIMENSION),
        _ => fallback,
    }
}
