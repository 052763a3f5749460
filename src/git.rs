// 作成したプロジェクトの git リポジトリ初期化

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit from template_scaffold";

/// 初期化の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitInitOutcome {
    Initialized,
    /// git が PATH にない
    GitNotFound,
    /// 既に別のリポジトリの作業ツリー内にある
    AlreadyInRepository,
}

async fn git(dir: &Path, args: &[&str]) -> Result<std::process::Output> {
    debug!(?args, dir = %dir.display(), "git");
    Command::new("git")
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .output()
        .await
        .with_context(|| format!("Failed to run git {}", args.join(" ")))
}

/// `dir` が git の作業ツリー内にあるかどうか
pub async fn is_inside_work_tree(dir: &Path) -> bool {
    match git(dir, &["rev-parse", "--is-inside-work-tree"]).await {
        Ok(output) => output.status.success(),
        Err(_) => false,
    }
}

/// `git init` から初回コミットまでを行う
pub async fn init_repository(dir: &Path) -> Result<GitInitOutcome> {
    if which::which("git").is_err() {
        return Ok(GitInitOutcome::GitNotFound);
    }
    if is_inside_work_tree(dir).await {
        return Ok(GitInitOutcome::AlreadyInRepository);
    }

    let steps: [&[&str]; 3] = [
        &["init"],
        &["add", "-A"],
        &["commit", "-m", INITIAL_COMMIT_MESSAGE, "--no-verify"],
    ];
    for args in steps {
        let output = git(dir, args).await?;
        if !output.status.success() {
            anyhow::bail!(
                "git {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
    }

    Ok(GitInitOutcome::Initialized)
}
