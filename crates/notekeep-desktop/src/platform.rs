//! Desktop implementation of the host services.

use notekeep_core::{Error, Platform, Result};

/// Clipboard through `arboard`; the share origin comes from configuration
/// since a desktop window has no page origin of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopPlatform {
    origin: String,
}

impl DesktopPlatform {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into().trim_end_matches('/').to_string(),
        }
    }
}

impl Platform for DesktopPlatform {
    fn current_origin(&self) -> String {
        self.origin.clone()
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| Error::Clipboard(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn origin_drops_trailing_slash() {
        let platform = DesktopPlatform::new("http://localhost:3000/");
        assert_eq!(platform.current_origin(), "http://localhost:3000");
    }
}
