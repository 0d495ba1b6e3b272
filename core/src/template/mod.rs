use crate::pages;

/// Shared placeholder body. `{title}` is the only substitution point;
/// the navigation block is the same in every generated page and links
/// label-to-target with the extension dropped, as GitHub wikis expect.
const PLACEHOLDER: &str = r#"# {title}

[This is a placeholder. Original content to be migrated.]

## Navigation
- [Home](Home)
- [Project Structure](Project-Structure)
- [Development Setup](Development-Setup)
- [Tools Overview](Tools-Overview)
"#;

/// Render the placeholder content for one page.
pub fn render(page: &str) -> String {
    PLACEHOLDER.replace("{title}", &pages::title(page))
}
