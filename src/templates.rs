//! Landing-page rendering.
//!
//! The page is assembled from three files under the template directory:
//!
//! ```text
//! base.layout.tmpl     <html>..{{ main }}..{{ footer }}..</html>
//! home.page.tmpl       fills {{ main }}
//! footer.partial.tmpl  fills {{ footer }}
//! ```
//!
//! Files are read on every render, so edits show up without a restart.

use std::path::PathBuf;

const LAYOUT: &str = "base.layout.tmpl";
const HOME: &str = "home.page.tmpl";
const FOOTER: &str = "footer.partial.tmpl";

const MAIN_SLOT: &str = "{{ main }}";
const FOOTER_SLOT: &str = "{{ footer }}";

/// Failure to load or assemble a page.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("failed to read template {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("layout has no `{slot}` slot")]
    MissingSlot { slot: &'static str },
}

/// Renders HTML pages from a template directory.
#[derive(Debug, Clone)]
pub struct Templates {
    dir: PathBuf,
}

impl Templates {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Renders the landing page. It carries no dynamic data.
    pub async fn render_home(&self) -> Result<String, TemplateError> {
        let layout = self.load(LAYOUT).await?;
        let main = self.load(HOME).await?;
        let footer = self.load(FOOTER).await?;
        compose(&layout, &main, &footer)
    }

    async fn load(&self, name: &str) -> Result<String, TemplateError> {
        let path = self.dir.join(name);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| TemplateError::Read { path, source })
    }
}

fn compose(layout: &str, main: &str, footer: &str) -> Result<String, TemplateError> {
    for slot in [MAIN_SLOT, FOOTER_SLOT] {
        if !layout.contains(slot) {
            return Err(TemplateError::MissingSlot { slot });
        }
    }

    // One pass over the layout only, so slot markers inside the fillers stay
    // literal.
    let mut html = String::with_capacity(layout.len() + main.len() + footer.len());
    let mut rest = layout;
    while let Some((at, slot, fill)) = next_slot(rest, main, footer) {
        html.push_str(&rest[..at]);
        html.push_str(fill);
        rest = &rest[at + slot.len()..];
    }
    html.push_str(rest);
    Ok(html)
}

/// Earliest slot in `text` with its offset and filler.
fn next_slot<'a>(
    text: &str,
    main: &'a str,
    footer: &'a str,
) -> Option<(usize, &'static str, &'a str)> {
    [(MAIN_SLOT, main), (FOOTER_SLOT, footer)]
        .into_iter()
        .filter_map(|(slot, fill)| text.find(slot).map(|at| (at, slot, fill)))
        .min_by_key(|(at, _, _)| *at)
}
