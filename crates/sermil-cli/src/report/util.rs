use anyhow::Result;
use std::path::Path;

pub fn validate_html_output(path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    match ext.as_deref() {
        Some("html") | Some("htm") => {}
        _ => anyhow::bail!("Report must have a .html extension: {}", path.display()),
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.is_dir() {
            anyhow::bail!("Output directory does not exist: {}", parent.display());
        }
    }

    Ok(())
}
