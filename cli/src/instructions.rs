use console::style;

const COMMIT_MESSAGE: &str = "Initial wiki structure with valid filenames";
const WIKI_REMOTE: &str = "https://github.com/markvshaney/LLM_Project.wiki.git";

/// Print the manual git follow-up steps. Informational only; the push
/// into the GitHub wiki remote has to happen by hand.
pub fn print_next_steps() {
    println!();
    println!("{}", style("Next steps:").bold());
    println!("1. Initialize git repository:");
    println!("   git init");
    println!("2. Add all files:");
    println!("   git add .");
    println!("3. Make initial commit:");
    println!("   git commit -m \"{COMMIT_MESSAGE}\"");
    println!("4. Add GitHub wiki remote:");
    println!("   git remote add origin {WIKI_REMOTE}");
    println!("5. Push to GitHub (you may need to force push):");
    println!("   git push -f origin master");
}
