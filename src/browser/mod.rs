use anyhow::{Context, Result};

/// Open the question bank's "learn more" page in the user's default browser
///
/// # Errors
/// Returns error if browser cannot be opened (e.g., no browser available)
pub fn open_learn_more(url: &str) -> Result<()> {
    tracing::debug!(url, "opening learn-more page");
    webbrowser::open(url).with_context(|| format!("Failed to open browser for {}", url))?;
    Ok(())
}
