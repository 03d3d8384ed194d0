#![forbid(unsafe_code)]

//! The dialog's content model, as handed to a surface.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use confirmkit_style::{Alignment, DialogIcon};

use crate::button::{Button, ButtonId};

/// Caller-supplied rich message content.
///
/// The core never inspects a component; surfaces downcast it through
/// [`Message::downcast_component`].
pub trait MessageComponent: fmt::Debug {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any + fmt::Debug> MessageComponent for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// The message slot.
#[derive(Debug, Clone)]
pub enum Message {
    /// Plain text block; no markup is interpreted.
    Text(String),
    /// Rich content provided by the caller.
    Component(Rc<dyn MessageComponent>),
}

impl Message {
    /// Wrap a component.
    pub fn component(component: impl MessageComponent + 'static) -> Self {
        Self::Component(Rc::new(component))
    }

    /// The component, if it is a `T`.
    #[must_use]
    pub fn downcast_component<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Component(component) => (**component).as_any().downcast_ref::<T>(),
            Self::Text(_) => None,
        }
    }

    /// The text, for plain-text messages.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Component(_) => None,
        }
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// The lead icon with its rendered size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedIcon {
    pub icon: DialogIcon,
    pub width: String,
    pub height: String,
}

/// Everything a surface needs to present a dialog.
#[derive(Debug, Clone, Default)]
pub struct DialogLayout {
    /// Headings, top to bottom.
    pub headings: Vec<String>,
    pub icon: Option<PlacedIcon>,
    pub message: Option<Message>,
    pub button_alignment: Alignment,
    /// The button row, left to right. A button's [`ButtonId`] is its index.
    pub buttons: Vec<Button>,
}

impl DialogLayout {
    /// The button with the given id.
    #[must_use]
    pub fn button(&self, id: ButtonId) -> Option<&Button> {
        self.buttons.get(id.index())
    }

    /// The focused button, if any.
    #[must_use]
    pub fn focused_button(&self) -> Option<ButtonId> {
        self.buttons
            .iter()
            .position(|b| b.focused)
            .map(ButtonId::new)
    }
}
