use anyhow::{Context, Result};

/// Turn a stored LinkedIn value into a browsable URL.
///
/// Lead records usually carry scheme-less values like "linkedin.com/in/dkim";
/// those get an `https://` prefix. Returns None for a blank value.
pub fn profile_url(linkedin: &str) -> Option<String> {
    let trimmed = linkedin.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        Some(trimmed.to_string())
    } else {
        Some(format!("https://{}", trimmed))
    }
}

/// Open a URL in the user's default browser
///
/// # Arguments
/// * `url` - The URL to open (e.g., a LinkedIn profile)
///
/// # Errors
/// Returns error if browser cannot be opened (e.g., no browser available)
pub fn open_url(url: &str) -> Result<()> {
    webbrowser::open(url)
        .with_context(|| format!("Failed to open browser for URL: {}", url))?;
    Ok(())
}

/// Open a lead's LinkedIn profile, returning the URL that was opened.
pub fn open_profile(linkedin: &str) -> Result<String> {
    let url = profile_url(linkedin).context("Lead has no LinkedIn profile")?;
    open_url(&url)?;
    Ok(url)
}
