// 引数の検証
// CliArgs を InstallRequest に変換する。ファイルシステムは変更しない。

use std::path::{Component, Path, PathBuf};
use tracing::debug;

use super::args::CliArgs;
use crate::core::{InstallRequest, PackageManager, ScaffoldError, ScaffoldResult};
use crate::package_manager::PackageManagerClient;

/// 指定フラグからパッケージマネージャーを選ぶ
pub fn select_package_manager(args: &CliArgs) -> ScaffoldResult<PackageManager> {
    match (args.use_yarn, args.use_pnpm) {
        (true, true) => Err(ScaffoldError::ConflictingPackageManager),
        (true, false) => Ok(PackageManager::Yarn),
        (false, true) => Ok(PackageManager::Pnpm),
        (false, false) => Ok(PackageManager::Npm),
    }
}

/// 引数を検証して InstallRequest を作る
///
/// `client_for` は既定以外のパッケージマネージャーの存在確認に使う。
pub async fn validate_args<F>(
    args: &CliArgs,
    cwd: &Path,
    client_for: F,
) -> ScaffoldResult<InstallRequest>
where
    F: Fn(PackageManager) -> Box<dyn PackageManagerClient>,
{
    let manager = select_package_manager(args)?;

    if manager != PackageManager::default() && !client_for(manager).check_available().await {
        return Err(ScaffoldError::PackageManagerNotFound { manager });
    }

    let target = args
        .target
        .clone()
        .or_else(|| args.positional.first().map(PathBuf::from))
        .ok_or(ScaffoldError::MissingTarget)?;

    let template = args
        .template
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .ok_or(ScaffoldError::MissingTemplate)?;

    if args.positional.len() > 1 {
        return Err(ScaffoldError::UnexpectedArguments {
            extra: args.positional[1..].to_vec(),
        });
    }

    let target_path = normalize(&cwd.join(target));
    if target_path.exists() && !args.force {
        return Err(ScaffoldError::TargetExists { path: target_path });
    }

    debug!(%manager, target = %target_path.display(), template, "arguments validated");

    Ok(InstallRequest::new(template, manager, target_path)
        .with_force(args.force)
        .with_verbose(args.verbose)
        .with_git_init(!args.no_git))
}

/// パス中の `.` を取り除く（`..` は解決しない）
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}
