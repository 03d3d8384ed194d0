#![forbid(unsafe_code)]

//! Plain-text rendering of a dialog layout.
//!
//! Produces a bordered box: headings, the icon glyph and message, a blank
//! spacer row, then the button row placed according to its alignment.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ Delete file                  │
//! │ ! This cannot be undone.     │
//! │                              │
//! │        [ ✔ Yes ] [ ⏏ No ]    │
//! └──────────────────────────────┘
//! ```
//!
//! Failure modes: content wider than the box is truncated, never wrapped;
//! widths below four cells render nothing.

use std::cell::RefCell;
use std::rc::Rc;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::button::Button;
use crate::layout::{DialogLayout, Message};
use crate::surface::DialogSurface;

/// Gap between buttons, in cells.
const BUTTON_GAP: usize = 1;

/// Render `layout` into lines exactly `width` cells wide.
#[must_use]
pub fn render_text(layout: &DialogLayout, width: usize) -> Vec<String> {
    if width < 4 {
        return Vec::new();
    }
    let inner = width - 4;
    let mut lines = vec![format!("┌{}┐", "─".repeat(width - 2))];

    for heading in &layout.headings {
        lines.push(boxed(heading, inner));
    }

    let glyph = layout.icon.as_ref().map(|placed| placed.icon.icon.glyph());
    let body: Vec<String> = match &layout.message {
        Some(Message::Text(text)) => text.lines().map(str::to_string).collect(),
        Some(Message::Component(_)) => vec!["[component]".to_string()],
        None => Vec::new(),
    };
    match glyph {
        Some(glyph) if body.is_empty() => lines.push(boxed(&glyph.to_string(), inner)),
        Some(glyph) => {
            for (i, line) in body.iter().enumerate() {
                let lead = if i == 0 { glyph } else { ' ' };
                lines.push(boxed(&format!("{lead} {line}"), inner));
            }
        }
        None => lines.extend(body.iter().map(|line| boxed(line, inner))),
    }

    lines.push(boxed("", inner));

    let row = layout
        .buttons
        .iter()
        .map(button_text)
        .collect::<Vec<_>>()
        .join(&" ".repeat(BUTTON_GAP));
    let row = truncate(&row, inner);
    let offset = layout.button_alignment.offset(inner, row.width());
    lines.push(boxed(&format!("{}{row}", " ".repeat(offset)), inner));

    lines.push(format!("└{}┘", "─".repeat(width - 2)));
    lines
}

/// Button label padded to its explicit width, when the width is in cells.
fn button_text(button: &Button) -> String {
    let label = button.label();
    let used = label.width();
    match button.width.as_deref().and_then(cell_width) {
        Some(cells) if cells > used => {
            let left = (cells - used) / 2;
            let right = cells - used - left;
            format!("{}{label}{}", " ".repeat(left), " ".repeat(right))
        }
        _ => label,
    }
}

/// `"12ch"` or `"12"` as a cell count; other units are ignored.
fn cell_width(width: &str) -> Option<usize> {
    let width = width.trim();
    width.strip_suffix("ch").unwrap_or(width).trim().parse().ok()
}

fn boxed(content: &str, inner: usize) -> String {
    let content = truncate(content, inner);
    let pad = inner.saturating_sub(content.width());
    format!("│ {content}{} │", " ".repeat(pad))
}

fn truncate(text: &str, max: usize) -> String {
    let mut used = 0;
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

/// Surface that renders into text lines.
///
/// Clones share the rendered frame.
#[derive(Debug, Clone)]
pub struct TextSurface {
    width: usize,
    frame: Rc<RefCell<Vec<String>>>,
}

impl TextSurface {
    /// Surface rendering `width` cells wide.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width,
            frame: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Lines currently on screen; empty while hidden.
    #[must_use]
    pub fn frame(&self) -> Vec<String> {
        self.frame.borrow().clone()
    }
}

impl DialogSurface for TextSurface {
    fn show(&mut self, layout: &DialogLayout) {
        *self.frame.borrow_mut() = render_text(layout, self.width);
    }

    fn hide(&mut self) {
        self.frame.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::PlacedIcon;
    use confirmkit_style::{Alignment, DialogIcon, IconHandle};

    fn layout() -> DialogLayout {
        DialogLayout {
            headings: vec!["Title".into()],
            message: Some(Message::from("Sure?")),
            buttons: vec![Button::new("Yes"), Button::new("No")],
            ..DialogLayout::default()
        }
    }

    #[test]
    fn renders_box_with_end_aligned_buttons() {
        let lines = render_text(&layout(), 24);
        assert_eq!(
            lines,
            [
                "┌──────────────────────┐",
                "│ Title                │",
                "│ Sure?                │",
                "│                      │",
                "│       [ Yes ] [ No ] │",
                "└──────────────────────┘",
            ]
        );
    }

    #[test]
    fn every_line_has_requested_width() {
        let mut layout = layout();
        layout.message = Some(Message::from("a message far too long for this box"));
        for line in render_text(&layout, 20) {
            assert_eq!(line.width(), 20, "{line:?}");
        }
    }

    #[test]
    fn center_alignment() {
        let mut layout = layout();
        layout.button_alignment = Alignment::Center;
        layout.buttons = vec![Button::new("OK")];
        let lines = render_text(&layout, 14);
        assert_eq!(lines[4], "│   [ OK ]   │");
    }

    #[test]
    fn icon_glyph_leads_message() {
        let mut layout = layout();
        layout.icon = Some(PlacedIcon {
            icon: DialogIcon::new(IconHandle::Warning),
            width: "48px".into(),
            height: "48px".into(),
        });
        layout.message = Some(Message::from("one\ntwo"));
        let lines = render_text(&layout, 16);
        assert_eq!(lines[2], "│ ! one        │");
        assert_eq!(lines[3], "│   two        │");
    }

    #[test]
    fn cell_widths_pad_buttons() {
        let mut button = Button::new("OK");
        button.width = Some("10ch".into());
        assert_eq!(button_text(&button), "  [ OK ]  ");
        button.width = Some("120px".into());
        assert_eq!(button_text(&button), "[ OK ]");
    }

    #[test]
    fn tiny_width_renders_nothing() {
        assert!(render_text(&layout(), 3).is_empty());
    }

    #[test]
    fn surface_clears_on_hide() {
        let probe = TextSurface::new(24);
        let mut surface = probe.clone();
        surface.show(&layout());
        assert_eq!(probe.frame().len(), 6);
        surface.hide();
        assert!(probe.frame().is_empty());
    }
}
