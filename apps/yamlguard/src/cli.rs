//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "yamlguard",
    version,
    about = "Validate YAML files, with special support for GitHub Actions workflows",
    long_about = "yamlguard — a pre-commit friendly YAML validator.\n\nEvery file is syntax-checked. Files under .github/workflows (or all files with --github-actions) also get workflow structure checks.\n\nExit codes: 0 all valid, 1 invalid files, 2 usage error.",
    after_help = "Examples:\n  yamlguard workflow.yml\n  yamlguard --github-actions .github/workflows/*.yml\n  yamlguard --verbose --no-color file1.yaml file2.yml"
)]
/// Top-level CLI options and positional files.
pub struct Cli {
    #[arg(help = "YAML files to validate")]
    pub files: Vec<String>,
    #[arg(short, long, action = clap::ArgAction::SetTrue, help = "Suppress informational output")]
    pub quiet: bool,
    #[arg(short, long, action = clap::ArgAction::SetTrue, help = "Show detailed validation information")]
    pub verbose: bool,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Enable GitHub Actions workflow validation")]
    pub github_actions: bool,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Disable colored output")]
    pub no_color: bool,
}
