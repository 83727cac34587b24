use std::future::Future;

use thiserror::Error;

use crate::locale::Strings;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard is not available in this context")]
    Unavailable,
    #[error("clipboard write was rejected: {0}")]
    Rejected(String),
}

/// Host clipboard capability.
pub trait Clipboard {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Presents a [`Notice`] to the user.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Writes `text` to the clipboard, then tells the user whether it worked.
pub async fn copy_and_notify<C, N>(
    clipboard: &C,
    notifier: &N,
    text: &str,
    strings: &Strings,
) -> Result<(), ClipboardError>
where
    C: Clipboard,
    N: Notifier,
{
    match clipboard.write_text(text).await {
        Ok(()) => {
            notifier.notify(Notice::success(strings.discord_copied.as_str()));
            Ok(())
        }
        Err(e) => {
            log::warn!("couldn't copy to clipboard: {e}");
            notifier.notify(Notice::error(strings.clipboard_failed.as_str()));
            Err(e)
        }
    }
}

#[cfg(feature = "hydrate")]
pub struct BrowserClipboard;

#[cfg(feature = "hydrate")]
impl Clipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        use wasm_bindgen_futures::JsFuture;

        let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
        let promise = window.navigator().clipboard().write_text(text);
        JsFuture::from(promise)
            .await
            .map_err(|e| ClipboardError::Rejected(format!("{e:?}")))?;
        Ok(())
    }
}
