/// The wiki pages to scaffold, in generation order. Filenames are
/// Windows-safe: hyphens stand in for spaces.
pub const PAGES: [&str; 16] = [
    "Home.md",
    "Project-Structure.md",
    "Development-Setup.md",
    "Setup-VS-Code-Miniconda.md",
    "Setup-Ollama-Model.md",
    "Tools-Overview.md",
    "Guide-VS-Code.md",
    "Guide-Conda.md",
    "Guide-Ollama.md",
    "Guide-CrewAI.md",
    "Guide-Selenium.md",
    "Guide-BeautifulSoup.md",
    "Guide-AnythingLLM.md",
    "Guide-LangChain.md",
    "Guide-Docker.md",
    "Guide-WSL.md",
];

/// Derive the page heading from its filename: drop the extension and
/// turn hyphens back into spaces.
pub fn title(page: &str) -> String {
    let stem = match page.rsplit_once('.') {
        Some((stem, _)) => stem,
        None => page,
    };
    stem.replace('-', " ")
}
