//! Host environment access used by the share flow.

use crate::error::Result;

/// The two host services the client needs besides the network
pub trait Platform {
    /// Origin that share links are built against, without a trailing slash
    fn current_origin(&self) -> String;

    /// Put `text` on the system clipboard
    fn copy_to_clipboard(&self, text: &str) -> Result<()>;
}
