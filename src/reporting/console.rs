use async_trait::async_trait;
use console::style;

use super::ScaffoldReporter;
use crate::core::InstallRequest;

/// コンソール出力による進捗報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }

    /// 完了後に表示するクイックスタート
    pub fn quickstart_lines(request: &InstallRequest) -> Vec<String> {
        let manager = request.package_manager();
        vec![
            format!("cd {}", request.target_path().display()),
            format!("{manager} start"),
            format!("{} build", manager.run_prefix()),
        ]
    }
}

#[async_trait]
impl ScaffoldReporter for ConsoleReporter {
    async fn report_started(&self, request: &InstallRequest) {
        println!(
            "{} {} を {} に作成します",
            style("•").cyan().bold(),
            style(request.template()).bold(),
            style(request.target_path().display()).bold()
        );
    }

    async fn report_step(&self, message: &str) {
        println!("{} {}", style("-").dim(), message);
    }

    async fn report_warning(&self, message: &str) {
        eprintln!("{} {}", style("⚠").yellow().bold(), message);
    }

    async fn report_completed(&self, request: &InstallRequest) {
        println!();
        println!(
            "{} プロジェクトを作成しました: {}",
            style("✓").green().bold(),
            request.target_path().display()
        );
        println!();
        println!("  {}", style("Quickstart:").bold().underlined());
        for line in Self::quickstart_lines(request) {
            println!("    {}", style(line).cyan());
        }
        println!();
    }
}
