#![forbid(unsafe_code)]

//! The fluent confirm-dialog builder.
//!
//! A [`ConfirmDialog`] is assembled through chained calls, presented with
//! [`ConfirmDialog::open`], and driven by the host through
//! [`ConfirmDialog::click`]. Structural changes (buttons, icon, captions,
//! message, uniform button width) are rejected once the dialog has been
//! opened.
//!
//! # Example
//!
//! ```
//! use confirmkit_dialog::{ButtonOption, ButtonType, ConfirmDialog, DialogConfig, RecordingSurface};
//!
//! let surface = RecordingSurface::new();
//! let mut dialog = ConfirmDialog::create_question(&DialogConfig::default(), surface.clone())
//!     .with_caption("Save changes?")?
//!     .with_message("Your document has unsaved changes.")?
//!     .with_save_button(None, &[ButtonOption::focus()])?
//!     .with_cancel_button(None, &[])?;
//!
//! dialog.open();
//! assert_eq!(surface.show_count(), 1);
//!
//! let save = dialog.button(ButtonType::Save).expect("registered");
//! dialog.click(save)?;
//! assert_eq!(surface.hide_count(), 1);
//! # Ok::<(), confirmkit_dialog::DialogError>(())
//! ```

use std::any::Any;
use std::fmt;

use confirmkit_style::{Alignment, DialogIcon};

use crate::button::{Button, ButtonId, ButtonType};
use crate::config::DialogConfig;
use crate::defaults;
use crate::error::{DialogError, Operation};
use crate::icons::Severity;
use crate::layout::{DialogLayout, Message, PlacedIcon};
use crate::option::ButtonOption;
use crate::registry::ButtonRegistry;
use crate::surface::DialogSurface;

/// Callback run when a button is clicked.
pub type ClickHandler = Box<dyn FnMut()>;

/// A modal confirmation dialog under construction or on screen.
pub struct ConfirmDialog {
    config: DialogConfig,
    layout: DialogLayout,
    /// Click handlers in row order, parallel to `layout.buttons`.
    handlers: Vec<Option<ClickHandler>>,
    registry: ButtonRegistry,
    button_width: Option<String>,
    has_any_button: bool,
    immutable: bool,
    visible: bool,
    data: Option<Box<dyn Any>>,
    surface: Box<dyn DialogSurface>,
}

impl ConfirmDialog {
    // --- Factories ---------------------------------------------------------

    /// Empty dialog presented on `surface`.
    #[must_use]
    pub fn create(config: &DialogConfig, surface: impl DialogSurface + 'static) -> Self {
        Self {
            config: config.clone(),
            layout: DialogLayout {
                button_alignment: config.button_alignment(),
                ..DialogLayout::default()
            },
            handlers: Vec::new(),
            registry: ButtonRegistry::new(),
            button_width: None,
            has_any_button: false,
            immutable: false,
            visible: false,
            data: None,
            surface: Box::new(surface),
        }
    }

    /// Empty dialog using the process-wide [`defaults`].
    #[must_use]
    pub fn create_with_defaults(surface: impl DialogSurface + 'static) -> Self {
        Self::create(&defaults::global(), surface)
    }

    /// Dialog with the info icon.
    #[must_use]
    pub fn create_info(config: &DialogConfig, surface: impl DialogSurface + 'static) -> Self {
        Self::create(config, surface).with_severity(Severity::Info)
    }

    /// Dialog with the question icon.
    #[must_use]
    pub fn create_question(config: &DialogConfig, surface: impl DialogSurface + 'static) -> Self {
        Self::create(config, surface).with_severity(Severity::Question)
    }

    /// Dialog with the warning icon.
    #[must_use]
    pub fn create_warning(config: &DialogConfig, surface: impl DialogSurface + 'static) -> Self {
        Self::create(config, surface).with_severity(Severity::Warning)
    }

    /// Dialog with the error icon.
    #[must_use]
    pub fn create_error(config: &DialogConfig, surface: impl DialogSurface + 'static) -> Self {
        Self::create(config, surface).with_severity(Severity::Error)
    }

    fn with_severity(mut self, severity: Severity) -> Self {
        let icon = self.config.dialog_icon(severity);
        let size = self.config.dialog_icon_size().to_string();
        self.place_icon(Some(icon), size.clone(), size);
        self
    }

    // --- Content -----------------------------------------------------------

    /// Replace the lead icon at the configured default size. `None` clears it.
    pub fn with_icon(self, icon: Option<DialogIcon>) -> Result<Self, DialogError> {
        let size = self.config.dialog_icon_size().to_string();
        self.with_icon_sized(icon, &size, &size)
    }

    /// Replace the lead icon at an explicit size. `None` clears it.
    pub fn with_icon_sized(
        mut self,
        icon: Option<DialogIcon>,
        width: &str,
        height: &str,
    ) -> Result<Self, DialogError> {
        self.guard(Operation::Icon)?;
        self.place_icon(icon, width.to_string(), height.to_string());
        Ok(self)
    }

    fn place_icon(&mut self, icon: Option<DialogIcon>, width: String, height: String) {
        self.layout.icon = icon.map(|icon| PlacedIcon {
            icon,
            width,
            height,
        });
    }

    /// Insert a heading above all existing ones.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Result<Self, DialogError> {
        self.guard(Operation::Caption)?;
        self.layout.headings.insert(0, caption.into());
        Ok(self)
    }

    /// Replace the message. Text is shown verbatim, without markup.
    pub fn with_message(mut self, message: impl Into<Message>) -> Result<Self, DialogError> {
        self.guard(Operation::Message)?;
        self.layout.message = Some(message.into());
        Ok(self)
    }

    /// Set the button row alignment. `None` keeps the current one.
    #[must_use]
    pub fn with_button_alignment(mut self, alignment: Option<Alignment>) -> Self {
        if let Some(alignment) = alignment {
            self.layout.button_alignment = alignment;
        }
        self
    }

    // --- Buttons -----------------------------------------------------------

    /// Append `button` and apply `options` to it in order.
    ///
    /// Without a [`ButtonOption::CloseOnClick`] among `options`, the button
    /// closes the dialog on click. The button is not registered, so
    /// [`ConfirmDialog::button`] never returns it; use the typed methods for
    /// lookups.
    pub fn with_button(
        mut self,
        button: Button,
        options: &[ButtonOption],
    ) -> Result<Self, DialogError> {
        self.guard(Operation::AddButton)?;
        self.push_button(button, None, options);
        Ok(self)
    }

    /// Append a button of `kind` (`None` for a custom button) with its
    /// translated caption, theme and icon.
    pub fn with_typed_button(
        mut self,
        kind: Option<ButtonType>,
        on_click: Option<ClickHandler>,
        options: &[ButtonOption],
    ) -> Result<Self, DialogError> {
        self.guard(Operation::AddButton)?;
        self.push_typed(kind, on_click, options);
        Ok(self)
    }

    /// Append a typed OK button. See [`ConfirmDialog::with_typed_button`].
    pub fn with_ok_button(
        self,
        on_click: Option<ClickHandler>,
        options: &[ButtonOption],
    ) -> Result<Self, DialogError> {
        self.with_typed_button(Some(ButtonType::Ok), on_click, options)
    }

    /// Append a typed Abort button. See [`ConfirmDialog::with_typed_button`].
    pub fn with_abort_button(
        self,
        on_click: Option<ClickHandler>,
        options: &[ButtonOption],
    ) -> Result<Self, DialogError> {
        self.with_typed_button(Some(ButtonType::Abort), on_click, options)
    }

    /// Append a typed Cancel button. See [`ConfirmDialog::with_typed_button`].
    pub fn with_cancel_button(
        self,
        on_click: Option<ClickHandler>,
        options: &[ButtonOption],
    ) -> Result<Self, DialogError> {
        self.with_typed_button(Some(ButtonType::Cancel), on_click, options)
    }

    /// Append a typed Yes button. See [`ConfirmDialog::with_typed_button`].
    pub fn with_yes_button(
        self,
        on_click: Option<ClickHandler>,
        options: &[ButtonOption],
    ) -> Result<Self, DialogError> {
        self.with_typed_button(Some(ButtonType::Yes), on_click, options)
    }

    /// Append a typed No button. See [`ConfirmDialog::with_typed_button`].
    pub fn with_no_button(
        self,
        on_click: Option<ClickHandler>,
        options: &[ButtonOption],
    ) -> Result<Self, DialogError> {
        self.with_typed_button(Some(ButtonType::No), on_click, options)
    }

    /// Append a typed Close button. See [`ConfirmDialog::with_typed_button`].
    pub fn with_close_button(
        self,
        on_click: Option<ClickHandler>,
        options: &[ButtonOption],
    ) -> Result<Self, DialogError> {
        self.with_typed_button(Some(ButtonType::Close), on_click, options)
    }

    /// Append a typed Save button. See [`ConfirmDialog::with_typed_button`].
    pub fn with_save_button(
        self,
        on_click: Option<ClickHandler>,
        options: &[ButtonOption],
    ) -> Result<Self, DialogError> {
        self.with_typed_button(Some(ButtonType::Save), on_click, options)
    }

    /// Append a typed Retry button. See [`ConfirmDialog::with_typed_button`].
    pub fn with_retry_button(
        self,
        on_click: Option<ClickHandler>,
        options: &[ButtonOption],
    ) -> Result<Self, DialogError> {
        self.with_typed_button(Some(ButtonType::Retry), on_click, options)
    }

    /// Append a typed Ignore button. See [`ConfirmDialog::with_typed_button`].
    pub fn with_ignore_button(
        self,
        on_click: Option<ClickHandler>,
        options: &[ButtonOption],
    ) -> Result<Self, DialogError> {
        self.with_typed_button(Some(ButtonType::Ignore), on_click, options)
    }

    /// Help buttons stay open on click unless `options` say otherwise.
    pub fn with_help_button(
        self,
        on_click: Option<ClickHandler>,
        options: &[ButtonOption],
    ) -> Result<Self, DialogError> {
        self.with_typed_button(Some(ButtonType::Help), on_click, options)
    }

    /// Untyped button with an empty caption; set one with
    /// [`ButtonOption::caption`].
    pub fn with_custom_button(
        self,
        on_click: Option<ClickHandler>,
        options: &[ButtonOption],
    ) -> Result<Self, DialogError> {
        self.with_typed_button(None, on_click, options)
    }

    /// Width applied to every button when the dialog opens.
    pub fn with_width_for_all_buttons(
        mut self,
        width: impl Into<String>,
    ) -> Result<Self, DialogError> {
        self.guard(Operation::ButtonWidth)?;
        self.button_width = Some(width.into());
        Ok(self)
    }

    /// Replace the click handler of an existing button.
    pub fn set_click_handler(
        &mut self,
        id: ButtonId,
        on_click: ClickHandler,
    ) -> Result<(), DialogError> {
        let slot = self
            .handlers
            .get_mut(id.index())
            .ok_or(DialogError::UnknownButton(id))?;
        *slot = Some(on_click);
        Ok(())
    }

    fn push_typed(
        &mut self,
        kind: Option<ButtonType>,
        on_click: Option<ClickHandler>,
        options: &[ButtonOption],
    ) -> ButtonId {
        let mut button = Button::new(self.config.caption(kind));
        button.kind = kind;
        let Some(kind) = kind else {
            return self.push_button(button, on_click, options);
        };
        let presentation = self.config.presentation(kind);
        button.theme = presentation.theme;
        button.icon = presentation.icon;

        let id = if kind.closes_by_default() || options.iter().any(ButtonOption::is_close_on_click)
        {
            self.push_button(button, on_click, options)
        } else {
            let mut options = options.to_vec();
            options.insert(0, ButtonOption::close_on_click(false));
            self.push_button(button, on_click, &options)
        };
        self.registry.register(kind, id);
        id
    }

    fn push_button(
        &mut self,
        mut button: Button,
        on_click: Option<ClickHandler>,
        options: &[ButtonOption],
    ) -> ButtonId {
        let id = ButtonId::new(self.layout.buttons.len());
        if !options.iter().any(ButtonOption::is_close_on_click) {
            button.close_on_click = true;
        }
        self.layout.buttons.push(button);
        self.handlers.push(on_click);
        self.has_any_button = true;
        for option in options {
            option.apply(&mut self.layout, id);
        }
        id
    }

    fn guard(&self, operation: Operation) -> Result<(), DialogError> {
        if self.immutable {
            return Err(DialogError::immutable(operation));
        }
        Ok(())
    }

    // --- Payload -----------------------------------------------------------

    /// Attach an opaque payload.
    #[must_use]
    pub fn with_data(mut self, data: impl Any) -> Self {
        self.set_data(data);
        self
    }

    /// Attach an opaque payload in place, replacing any previous one.
    pub fn set_data(&mut self, data: impl Any) {
        self.data = Some(Box::new(data));
    }

    /// The payload, if one of type `T` is attached.
    #[must_use]
    pub fn data<T: Any>(&self) -> Option<&T> {
        self.data.as_ref()?.downcast_ref::<T>()
    }

    // --- Lifecycle ---------------------------------------------------------

    /// Present the dialog.
    ///
    /// Adds a Close button to a dialog that never received one (when the
    /// config asks for it), applies the uniform button width, then consults
    /// the transition gate. After this call no structural change is allowed.
    pub fn open(&mut self) {
        let synthesized_close = !self.has_any_button && self.config.add_close_by_default();
        if synthesized_close {
            self.push_typed(Some(ButtonType::Close), None, &[]);
        }

        for button in &mut self.layout.buttons {
            if let Some(width) = &self.button_width {
                button.width = Some(width.clone());
            }
            button.vertically_centered = true;
        }

        let gate = self.config.transition_gate().cloned();
        let proceed = gate.is_none_or(|gate| gate.before_show(self));
        if proceed {
            self.show_surface();
        }
        self.immutable = true;

        tracing::debug!(
            buttons = self.layout.buttons.len(),
            synthesized_close,
            vetoed = !proceed,
            "dialog opened"
        );
    }

    /// Dismiss the dialog through the transition gate.
    pub fn close(&mut self) {
        let gate = self.config.transition_gate().cloned();
        let proceed = gate.is_none_or(|gate| gate.before_close(self));
        if proceed {
            self.hide_surface();
        }
        tracing::debug!(vetoed = !proceed, "dialog closed");
    }

    /// Show the surface directly, bypassing the transition gate.
    pub fn show_surface(&mut self) {
        self.surface.show(&self.layout);
        self.visible = true;
    }

    /// Hide the surface directly, bypassing the transition gate.
    pub fn hide_surface(&mut self) {
        self.surface.hide();
        self.visible = false;
    }

    /// Deliver a click on button `id`.
    ///
    /// Disabled buttons ignore clicks. Otherwise the handler runs first, then
    /// the dialog closes if the button is close-on-click.
    pub fn click(&mut self, id: ButtonId) -> Result<(), DialogError> {
        let button = self
            .layout
            .button(id)
            .ok_or(DialogError::UnknownButton(id))?;
        if !button.enabled {
            tracing::trace!(button = %id, "click on disabled button ignored");
            return Ok(());
        }
        let close = button.close_on_click;
        tracing::trace!(button = %id, kind = ?button.kind, close, "button clicked");

        if let Some(handler) = self.handlers.get_mut(id.index()).and_then(Option::as_mut) {
            handler();
        }
        if close {
            self.close();
        }
        Ok(())
    }

    // --- Accessors ---------------------------------------------------------

    /// Id of the last button registered for `kind`.
    #[must_use]
    pub fn button(&self, kind: ButtonType) -> Option<ButtonId> {
        self.registry.get(kind)
    }

    /// The button descriptor for `id`.
    #[must_use]
    pub fn button_by_id(&self, id: ButtonId) -> Option<&Button> {
        self.layout.button(id)
    }

    /// Content handed to the surface on open.
    #[must_use]
    pub fn layout(&self) -> &DialogLayout {
        &self.layout
    }

    /// Typed-button lookup table.
    #[must_use]
    pub fn registry(&self) -> &ButtonRegistry {
        &self.registry
    }

    /// Config this dialog was created with.
    #[must_use]
    pub fn config(&self) -> &DialogConfig {
        &self.config
    }

    /// Uniform width applied on open, if set.
    #[must_use]
    pub fn button_width(&self) -> Option<&str> {
        self.button_width.as_deref()
    }

    /// Whether `open()` has been called.
    #[must_use]
    pub fn is_immutable(&self) -> bool {
        self.immutable
    }

    /// Whether the surface is currently shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.visible
    }
}

impl fmt::Debug for ConfirmDialog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfirmDialog")
            .field("layout", &self.layout)
            .field("registry", &self.registry)
            .field("button_width", &self.button_width)
            .field("immutable", &self.immutable)
            .field("visible", &self.visible)
            .field("data", &self.data.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{RecordingSurface, SurfaceEvent};
    use crate::transition::FnGate;
    use confirmkit_style::{ButtonTheme, IconHandle};
    use std::cell::Cell;
    use std::rc::Rc;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing_test::traced_test;

    fn dialog() -> (ConfirmDialog, RecordingSurface) {
        let surface = RecordingSurface::new();
        (
            ConfirmDialog::create(&DialogConfig::default(), surface.clone()),
            surface,
        )
    }

    #[test]
    fn typed_button_defaults() {
        let (dialog, _) = dialog();
        let dialog = dialog.with_no_button(None, &[]).unwrap();
        let id = dialog.button(ButtonType::No).unwrap();
        let button = dialog.button_by_id(id).unwrap();
        assert_eq!(button.caption, "No");
        assert_eq!(button.icon, Some(IconHandle::Exit));
        assert_eq!(button.theme, ButtonTheme::PRIMARY | ButtonTheme::ERROR);
        assert_eq!(button.kind, Some(ButtonType::No));
        assert!(button.close_on_click);
    }

    #[test]
    fn every_type_is_registered() {
        let (mut dialog, _) = dialog();
        for kind in ButtonType::ALL {
            dialog = dialog.with_typed_button(Some(kind), None, &[]).unwrap();
            let id = dialog.button(kind).unwrap();
            assert_eq!(id.index(), dialog.layout().buttons.len() - 1);
        }
        assert_eq!(dialog.registry().len(), ButtonType::ALL.len());
    }

    #[test]
    fn last_registration_wins() {
        let (dialog, _) = dialog();
        let dialog = dialog
            .with_ok_button(None, &[])
            .unwrap()
            .with_ok_button(None, &[])
            .unwrap();
        assert_eq!(dialog.button(ButtonType::Ok), Some(ButtonId::new(1)));
    }

    #[test]
    fn custom_buttons_are_not_registered() {
        let (dialog, _) = dialog();
        let dialog = dialog
            .with_custom_button(None, &[ButtonOption::caption("Later")])
            .unwrap();
        assert!(dialog.registry().is_empty());
        let button = &dialog.layout().buttons[0];
        assert_eq!(button.caption, "Later");
        assert_eq!(button.kind, None);
        assert_eq!(button.icon, None);
        assert!(button.close_on_click);
    }

    #[test]
    fn captions_insert_at_front() {
        let (dialog, _) = dialog();
        let dialog = dialog
            .with_caption("second")
            .unwrap()
            .with_caption("first")
            .unwrap();
        assert_eq!(dialog.layout().headings, ["first", "second"]);
    }

    #[test]
    fn icon_replace_and_clear() {
        let (dialog, _) = dialog();
        let dialog = dialog
            .with_icon(Some(DialogIcon::new(IconHandle::Info)))
            .unwrap();
        let placed = dialog.layout().icon.as_ref().unwrap();
        assert_eq!(placed.width, "48px");
        assert_eq!(placed.height, "48px");

        let dialog = dialog
            .with_icon_sized(Some(DialogIcon::new(IconHandle::Warning)), "16px", "20px")
            .unwrap();
        let placed = dialog.layout().icon.as_ref().unwrap();
        assert_eq!(placed.icon.icon, IconHandle::Warning);
        assert_eq!((placed.width.as_str(), placed.height.as_str()), ("16px", "20px"));

        let dialog = dialog.with_icon(None).unwrap();
        assert!(dialog.layout().icon.is_none());
    }

    #[test]
    fn severity_factories_place_icons() {
        let config = DialogConfig::default().with_dialog_icon_size("32px");
        let dialog = ConfirmDialog::create_warning(&config, RecordingSurface::new());
        let placed = dialog.layout().icon.as_ref().unwrap();
        assert_eq!(placed.icon.icon, IconHandle::ExclamationCircle);
        assert_eq!(placed.width, "32px");

        let dialog = ConfirmDialog::create_error(&config, RecordingSurface::new());
        assert_eq!(
            dialog.layout().icon.as_ref().unwrap().icon.icon,
            IconHandle::CloseCircle
        );
        let plain = ConfirmDialog::create(&config, RecordingSurface::new());
        assert!(plain.layout().icon.is_none());
    }

    #[test]
    fn alignment_none_is_ignored() {
        let (dialog, _) = dialog();
        let dialog = dialog
            .with_button_alignment(Some(Alignment::Center))
            .with_button_alignment(None);
        assert_eq!(dialog.layout().button_alignment, Alignment::Center);
    }

    #[test]
    fn help_stays_open_unless_overridden() {
        let (dialog, _) = dialog();
        let dialog = dialog
            .with_help_button(None, &[])
            .unwrap()
            .with_ok_button(None, &[ButtonOption::close_on_click(false)])
            .unwrap();
        let help = dialog.button(ButtonType::Help).unwrap();
        let ok = dialog.button(ButtonType::Ok).unwrap();
        assert!(!dialog.button_by_id(help).unwrap().close_on_click);
        assert!(!dialog.button_by_id(ok).unwrap().close_on_click);

        let (dialog, _) = super::tests::dialog();
        let dialog = dialog
            .with_help_button(None, &[ButtonOption::close_on_click(true)])
            .unwrap();
        assert!(dialog.layout().buttons[0].close_on_click);
    }

    #[test]
    fn plain_buttons_close_and_stay_unregistered() {
        let mut manual = Button::new("Manual");
        manual.kind = Some(ButtonType::Help);
        let (dialog, surface) = dialog();
        let mut dialog = dialog.with_button(manual, &[]).unwrap();

        assert!(dialog.layout().buttons[0].close_on_click);
        assert_eq!(dialog.button(ButtonType::Help), None);
        assert!(dialog.registry().is_empty());

        dialog.open();
        dialog.click(ButtonId::new(0)).unwrap();
        assert_eq!(surface.hide_count(), 1);
    }

    #[test]
    fn plain_buttons_honor_close_option() {
        let (dialog, _) = dialog();
        let dialog = dialog
            .with_button(
                Button::new("Keep"),
                &[ButtonOption::close_on_click(false)],
            )
            .unwrap();
        assert!(!dialog.layout().buttons[0].close_on_click);
    }

    #[test]
    fn open_synthesizes_close() {
        let (mut dialog, surface) = dialog();
        dialog.open();
        let shown = surface.last_shown().unwrap();
        assert_eq!(shown.buttons.len(), 1);
        assert_eq!(shown.buttons[0].kind, Some(ButtonType::Close));
        assert_eq!(shown.buttons[0].caption, "Close");
        assert!(shown.buttons[0].vertically_centered);
        assert_eq!(dialog.button(ButtonType::Close), Some(ButtonId::new(0)));
    }

    #[test]
    fn open_without_auto_close() {
        let config = DialogConfig::default().with_add_close_by_default(false);
        let surface = RecordingSurface::new();
        let mut dialog = ConfirmDialog::create(&config, surface.clone());
        dialog.open();
        assert!(surface.last_shown().unwrap().buttons.is_empty());
    }

    #[test]
    fn open_applies_uniform_width() {
        let (dialog, surface) = dialog();
        let mut dialog = dialog
            .with_yes_button(None, &[ButtonOption::width("5px")])
            .unwrap()
            .with_no_button(None, &[])
            .unwrap()
            .with_width_for_all_buttons("120px")
            .unwrap();
        assert_eq!(dialog.layout().buttons[0].width.as_deref(), Some("5px"));
        dialog.open();
        for button in surface.last_shown().unwrap().buttons {
            assert_eq!(button.width.as_deref(), Some("120px"));
        }
    }

    #[test]
    fn structural_changes_fail_after_open() {
        let (dialog, _) = dialog();
        let mut dialog = dialog.with_ok_button(None, &[]).unwrap();
        dialog.open();
        assert!(dialog.is_immutable());

        let err = dialog.with_ok_button(None, &[]).unwrap_err();
        assert_eq!(err, DialogError::immutable(Operation::AddButton));

        let (dialog, _) = super::tests::dialog();
        let mut dialog = dialog;
        dialog.open();
        let err = dialog.with_width_for_all_buttons("1px").unwrap_err();
        assert_eq!(err, DialogError::immutable(Operation::ButtonWidth));
    }

    #[test]
    fn open_and_close_repeat() {
        let (mut dialog, surface) = dialog();
        dialog.open();
        dialog.close();
        dialog.open();
        dialog.close();
        assert_eq!(surface.show_count(), 2);
        assert_eq!(surface.hide_count(), 2);
        assert!(!dialog.is_open());
        assert_eq!(dialog.layout().buttons.len(), 1);
    }

    #[test]
    fn click_runs_handler_then_closes() {
        let clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&clicks);
        let (dialog, surface) = dialog();
        let mut dialog = dialog
            .with_ok_button(Some(Box::new(move || counter.set(counter.get() + 1))), &[])
            .unwrap();
        dialog.open();
        dialog.click(dialog.button(ButtonType::Ok).unwrap()).unwrap();
        assert_eq!(clicks.get(), 1);
        assert_eq!(surface.events(), [SurfaceEvent::Shown, SurfaceEvent::Hidden]);
    }

    #[test]
    fn disabled_buttons_ignore_clicks() {
        let clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&clicks);
        let (dialog, surface) = dialog();
        let mut dialog = dialog
            .with_ok_button(
                Some(Box::new(move || counter.set(counter.get() + 1))),
                &[ButtonOption::disable()],
            )
            .unwrap();
        dialog.open();
        dialog.click(ButtonId::new(0)).unwrap();
        assert_eq!(clicks.get(), 0);
        assert_eq!(surface.hide_count(), 0);
    }

    #[test]
    fn unknown_click_is_an_error() {
        let (mut dialog, _) = dialog();
        dialog.open();
        assert_eq!(
            dialog.click(ButtonId::new(7)),
            Err(DialogError::UnknownButton(ButtonId::new(7)))
        );
    }

    #[test]
    fn replacing_a_click_handler() {
        let clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&clicks);
        let (dialog, _) = dialog();
        let mut dialog = dialog.with_help_button(None, &[]).unwrap();
        let help = dialog.button(ButtonType::Help).unwrap();
        dialog
            .set_click_handler(help, Box::new(move || counter.set(counter.get() + 1)))
            .unwrap();
        dialog.click(help).unwrap();
        dialog.click(help).unwrap();
        assert_eq!(clicks.get(), 2);
        assert!(
            dialog
                .set_click_handler(ButtonId::new(9), Box::new(|| {}))
                .is_err()
        );
    }

    #[test]
    fn gate_veto_skips_show_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let gate = FnGate::new().on_show(move |_| seen.fetch_add(1, Ordering::SeqCst) > 0);
        let config = DialogConfig::default().with_transition_gate(Some(Arc::new(gate)));
        let surface = RecordingSurface::new();
        let mut dialog = ConfirmDialog::create(&config, surface.clone());

        dialog.open();
        assert_eq!(surface.show_count(), 0);
        assert!(dialog.is_immutable());

        dialog.open();
        assert_eq!(surface.show_count(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn gate_can_perform_the_effect() {
        let gate = FnGate::new().on_close(|dialog| {
            dialog.hide_surface();
            false
        });
        let config = DialogConfig::default().with_transition_gate(Some(Arc::new(gate)));
        let surface = RecordingSurface::new();
        let mut dialog = ConfirmDialog::create(&config, surface.clone());
        dialog.open();
        dialog.close();
        assert_eq!(surface.hide_count(), 1);
        assert!(!dialog.is_open());
    }

    #[test]
    fn data_payload() {
        let (dialog, _) = dialog();
        let mut dialog = dialog.with_data(42_u32);
        assert_eq!(dialog.data::<u32>(), Some(&42));
        assert_eq!(dialog.data::<String>(), None);
        dialog.set_data(String::from("row-7"));
        assert_eq!(dialog.data::<String>().map(String::as_str), Some("row-7"));
    }

    #[test]
    fn hidden_button_icons() {
        let config = DialogConfig::default().with_button_icons_visible(false);
        let dialog = ConfirmDialog::create(&config, RecordingSurface::new())
            .with_save_button(None, &[])
            .unwrap();
        assert_eq!(dialog.layout().buttons[0].icon, None);
    }

    #[test]
    fn translated_captions_follow_session() {
        let config = DialogConfig::default().with_session_locale(Some("pt_BR"));
        let dialog = ConfirmDialog::create(&config, RecordingSurface::new())
            .with_yes_button(None, &[])
            .unwrap();
        assert_eq!(dialog.layout().buttons[0].caption, "Sim");
    }

    #[traced_test]
    #[test]
    fn open_and_close_are_logged() {
        let (mut dialog, _) = dialog();
        dialog.open();
        dialog.close();
        assert!(logs_contain("dialog opened"));
        assert!(logs_contain("synthesized_close=true"));
        assert!(logs_contain("dialog closed"));
    }
}
