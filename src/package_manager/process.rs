// 外部コマンドの実行ヘルパー
// ストリーミング実行（stdio 継承）とキャプチャ実行の2種類を提供

use std::fmt;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

use crate::core::{ScaffoldError, ScaffoldResult};

/// 実行するコマンドと引数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    fn command(&self, cwd: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args).current_dir(cwd);
        command
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// `<program> --version` が成功するかどうかで存在を確認する
pub async fn probe_version(program: &str) -> bool {
    let status = Command::new(program)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await;

    match status {
        Ok(status) => status.success(),
        Err(e) => {
            debug!(program, error = %e, "version probe failed");
            false
        }
    }
}

/// 出力を端末にそのまま流して実行する
pub async fn run_streaming(spec: &CommandSpec, cwd: &Path) -> ScaffoldResult<()> {
    debug!(command = %spec, cwd = %cwd.display(), "running");

    let status = spec
        .command(cwd)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .map_err(|e| ScaffoldError::spawn(spec.to_string(), e))?;

    if status.success() {
        Ok(())
    } else {
        Err(ScaffoldError::SubprocessFailed {
            command: spec.to_string(),
            status: status.code(),
            output: String::new(),
        })
    }
}

/// stdout と stderr をまとめてキャプチャして実行する
///
/// 失敗時はキャプチャした出力をエラーに含める。
pub async fn run_captured(spec: &CommandSpec, cwd: &Path) -> ScaffoldResult<String> {
    debug!(command = %spec, cwd = %cwd.display(), "running (captured)");

    let output = spec
        .command(cwd)
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|e| ScaffoldError::spawn(spec.to_string(), e))?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    if output.status.success() {
        Ok(combined)
    } else {
        Err(ScaffoldError::SubprocessFailed {
            command: spec.to_string(),
            status: output.status.code(),
            output: combined,
        })
    }
}
