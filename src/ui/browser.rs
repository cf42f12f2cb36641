//! ui::browser
//!
//! The "open URL" primitive.
//!
//! # Design
//!
//! Opening is fire-and-forget: the workflow calls [`UrlOpener::open`] once
//! per successful resolution and does not observe what the browser does.
//! An error here only means the launcher itself could not be started.
//!
//! - [`SystemBrowser`] launches the platform default (or a configured app)
//!   via the `open` crate.
//! - [`PrintOpener`] writes the URL to stdout instead, for `--print` and
//!   non-graphical sessions.
//! - [`RecordingOpener`] remembers URLs, for tests.

use std::cell::RefCell;
use std::io;

use thiserror::Error;

/// Errors from launching a browser.
#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("could not open browser for {url}: {source}")]
    Launch {
        url: String,
        #[source]
        source: io::Error,
    },
}

/// Something that can be asked to show a URL.
pub trait UrlOpener {
    /// Show `url`. Called at most once per action.
    fn open(&self, url: &str) -> Result<(), BrowserError>;
}

/// Opens URLs in the system browser.
#[derive(Debug, Clone, Default)]
pub struct SystemBrowser {
    app: Option<String>,
}

impl SystemBrowser {
    /// Use the platform's default handler for URLs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific application (for example `firefox`).
    pub fn with_app(app: impl Into<String>) -> Self {
        Self {
            app: Some(app.into()),
        }
    }
}

impl UrlOpener for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), BrowserError> {
        tracing::debug!(url, app = ?self.app, "launching browser");
        let result = match &self.app {
            Some(app) => open::with(url, app.clone()),
            None => open::that(url),
        };
        result.map_err(|source| BrowserError::Launch {
            url: url.to_string(),
            source,
        })
    }
}

/// Prints the URL on stdout instead of opening it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintOpener;

impl UrlOpener for PrintOpener {
    fn open(&self, url: &str) -> Result<(), BrowserError> {
        println!("{}", url);
        Ok(())
    }
}

/// Records every URL it is asked to open.
#[derive(Debug, Default)]
pub struct RecordingOpener {
    opened: RefCell<Vec<String>>,
}

impl RecordingOpener {
    /// Create an opener with nothing recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs opened so far, in order.
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl UrlOpener for RecordingOpener {
    fn open(&self, url: &str) -> Result<(), BrowserError> {
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}
