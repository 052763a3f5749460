use clap::Parser;
use std::path::PathBuf;

/// コマンドライン引数
///
/// 組み合わせの検証は `validate_args` で行うため、clap 側では必須指定や排他指定をしない。
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "template_scaffold")]
#[command(about = "Create a new project from a template and install its dependencies")]
#[command(version)]
pub struct CliArgs {
    /// Directory to create the project in
    #[arg(value_name = "TARGET_DIRECTORY")]
    pub positional: Vec<String>,

    /// Template to use: a registry package name, or a local path starting with "."
    #[arg(long, value_name = "NAME_OR_PATH")]
    pub template: Option<String>,

    /// Directory to create the project in (takes precedence over the positional argument)
    #[arg(long, value_name = "DIR")]
    pub target: Option<PathBuf>,

    /// Install dependencies with yarn
    #[arg(long = "useYarn", alias = "use-yarn")]
    pub use_yarn: bool,

    /// Install dependencies with pnpm
    #[arg(long = "usePnpm", alias = "use-pnpm")]
    pub use_pnpm: bool,

    /// Allow the target directory to already exist
    #[arg(long)]
    pub force: bool,

    /// Show verbose package manager output
    #[arg(long)]
    pub verbose: bool,

    /// Do not initialize a git repository in the new project
    #[arg(long = "no-git")]
    pub no_git: bool,
}
