#![forbid(unsafe_code)]

//! Button type to presentation mapping.

use confirmkit_style::{ButtonTheme, IconHandle};

use crate::button::ButtonType;
use crate::icons::ButtonIconFactory;

/// Default presentation of a typed button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonPresentation {
    pub theme: ButtonTheme,
    pub icon: Option<IconHandle>,
}

/// Maps a [`ButtonType`] to its default theme and icon.
///
/// The icon factory is passed in, so a custom resolver and a custom icon
/// factory can be configured independently.
pub trait ButtonTypeResolver: Send + Sync {
    fn resolve(&self, kind: ButtonType, icons: &dyn ButtonIconFactory) -> ButtonPresentation;
}

/// Theme for each button type.
#[must_use]
pub fn default_theme(kind: ButtonType) -> ButtonTheme {
    match kind {
        ButtonType::Ok | ButtonType::Yes | ButtonType::Save => ButtonTheme::PRIMARY,
        ButtonType::No => ButtonTheme::PRIMARY | ButtonTheme::ERROR,
        ButtonType::Close | ButtonType::Cancel => ButtonTheme::SECONDARY | ButtonTheme::ERROR,
        ButtonType::Abort | ButtonType::Retry | ButtonType::Ignore | ButtonType::Help => {
            ButtonTheme::SECONDARY
        }
    }
}

/// Resolver using [`default_theme`] and the icon factory's icon.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemedButtonResolver;

impl ButtonTypeResolver for ThemedButtonResolver {
    fn resolve(&self, kind: ButtonType, icons: &dyn ButtonIconFactory) -> ButtonPresentation {
        ButtonPresentation {
            theme: default_theme(kind),
            icon: icons.icon(kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::StandardButtonIcons;

    #[test]
    fn theme_table() {
        let attr = |kind| default_theme(kind).attribute();
        assert_eq!(attr(ButtonType::Ok), "primary");
        assert_eq!(attr(ButtonType::Yes), "primary");
        assert_eq!(attr(ButtonType::Save), "primary");
        assert_eq!(attr(ButtonType::No), "primary error");
        assert_eq!(attr(ButtonType::Close), "secondary error");
        assert_eq!(attr(ButtonType::Cancel), "secondary error");
        assert_eq!(attr(ButtonType::Abort), "secondary");
        assert_eq!(attr(ButtonType::Retry), "secondary");
        assert_eq!(attr(ButtonType::Ignore), "secondary");
        assert_eq!(attr(ButtonType::Help), "secondary");
    }

    #[test]
    fn resolver_combines_theme_and_icon() {
        assert_eq!(
            ThemedButtonResolver.resolve(ButtonType::Retry, &StandardButtonIcons::new()),
            ButtonPresentation {
                theme: ButtonTheme::SECONDARY,
                icon: Some(IconHandle::Refresh),
            }
        );
    }

    struct NoIcons;

    impl ButtonIconFactory for NoIcons {
        fn icon(&self, _kind: ButtonType) -> Option<IconHandle> {
            None
        }
    }

    #[test]
    fn icon_factory_is_swappable() {
        let presentation = ThemedButtonResolver.resolve(ButtonType::Ok, &NoIcons);
        assert_eq!(presentation.icon, None);
        assert_eq!(presentation.theme, ButtonTheme::PRIMARY);
    }
}
