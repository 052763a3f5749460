// テンプレートのコピーとクリーンアップ

use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::core::{ScaffoldError, ScaffoldResult};

/// コピー後に作成先から取り除くエントリ
pub const SCAFFOLD_ONLY_ENTRIES: [&str; 7] = [
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "node_modules",
    ".gitignore",
    ".npmignore",
    "LICENSE",
];

/// `src` 以下の全ファイルを `dst` に再帰的にコピーする（既存は上書き）
///
/// コピーしたファイル数を返す。`dst` が `src` の内側にある場合はエラー。
pub async fn copy_dir_all(src: &Path, dst: &Path) -> ScaffoldResult<usize> {
    let src_root = tokio::fs::canonicalize(src)
        .await
        .map_err(|e| ScaffoldError::io(src, e))?;
    tokio::fs::create_dir_all(dst)
        .await
        .map_err(|e| ScaffoldError::io(dst, e))?;
    let dst_root = tokio::fs::canonicalize(dst)
        .await
        .map_err(|e| ScaffoldError::io(dst, e))?;

    // 自身の内側へのコピーは走査中に作成先が増え続ける
    if dst_root.starts_with(&src_root) {
        return Err(ScaffoldError::CopyIntoSelf {
            template: src_root,
            target: dst_root,
        });
    }

    let mut copied = 0;

    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry.map_err(|e| {
            let path = e.path().map_or_else(|| src.to_path_buf(), Path::to_path_buf);
            ScaffoldError::io(path, io::Error::from(e))
        })?;

        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| ScaffoldError::io(entry.path(), io::Error::other(e)))?;
        let destination = dst.join(relative);

        if entry.file_type().is_dir() {
            tokio::fs::create_dir_all(&destination)
                .await
                .map_err(|e| ScaffoldError::io(&destination, e))?;
        } else {
            tokio::fs::copy(entry.path(), &destination)
                .await
                .map_err(|e| ScaffoldError::io(entry.path(), e))?;
            copied += 1;
        }
    }

    debug!(from = %src.display(), to = %dst.display(), copied, "template copied");
    Ok(copied)
}

/// スキャフォールド専用のファイルを削除する
///
/// 存在しないエントリは無視する。削除したパスを返す。
pub async fn remove_scaffold_entries(dir: &Path) -> ScaffoldResult<Vec<PathBuf>> {
    let mut removed = Vec::new();

    for name in SCAFFOLD_ONLY_ENTRIES {
        let path = dir.join(name);
        let metadata = match tokio::fs::symlink_metadata(&path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => return Err(ScaffoldError::io(&path, e)),
        };

        let result = if metadata.is_dir() {
            tokio::fs::remove_dir_all(&path).await
        } else {
            tokio::fs::remove_file(&path).await
        };
        result.map_err(|e| ScaffoldError::io(&path, e))?;

        debug!(path = %path.display(), "removed");
        removed.push(path);
    }

    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_copy_dir_all_recursive_and_overwrites() {
        let src = tempdir().unwrap();
        let dst = tempdir().unwrap();

        std::fs::create_dir_all(src.path().join("src/components")).unwrap();
        std::fs::write(src.path().join("package.json"), "{\"name\": \"tpl\"}").unwrap();
        std::fs::write(src.path().join("src/index.js"), "console.log(1)").unwrap();
        std::fs::write(src.path().join("src/components/App.jsx"), "<App />").unwrap();
        std::fs::write(dst.path().join("package.json"), "{\"name\": \"placeholder\"}").unwrap();

        let copied = copy_dir_all(src.path(), dst.path()).await.unwrap();

        assert_eq!(copied, 3);
        assert_eq!(
            std::fs::read_to_string(dst.path().join("package.json")).unwrap(),
            "{\"name\": \"tpl\"}"
        );
        assert!(dst.path().join("src/components/App.jsx").is_file());
    }

    #[tokio::test]
    async fn test_copy_missing_source_fails() {
        let dst = tempdir().unwrap();
        let missing = dst.path().join("does-not-exist");

        let result = copy_dir_all(&missing, dst.path()).await;

        assert!(matches!(result, Err(ScaffoldError::Io { .. })));
    }

    #[tokio::test]
    async fn test_copy_into_nested_target_is_rejected() {
        let template = tempdir().unwrap();
        std::fs::write(template.path().join("package.json"), "{}").unwrap();
        let target = template.path().join("./app");

        let result = copy_dir_all(&template.path().join("."), &target).await;

        assert!(matches!(result, Err(ScaffoldError::CopyIntoSelf { .. })));
        assert!(!target.join("app").exists());
        assert!(!target.join("package.json").exists());
    }

    #[tokio::test]
    async fn test_copy_onto_itself_is_rejected() {
        let template = tempdir().unwrap();

        let result = copy_dir_all(template.path(), template.path()).await;

        assert!(matches!(result, Err(ScaffoldError::CopyIntoSelf { .. })));
    }

    #[tokio::test]
    async fn test_remove_scaffold_entries() {
        let dir = tempdir().unwrap();
        for file in ["package-lock.json", ".gitignore", ".npmignore", "LICENSE", "README.md"] {
            std::fs::write(dir.path().join(file), "x").unwrap();
        }
        std::fs::create_dir_all(dir.path().join("node_modules/tpl")).unwrap();
        std::fs::write(dir.path().join("node_modules/tpl/index.js"), "x").unwrap();

        let removed = remove_scaffold_entries(dir.path()).await.unwrap();

        assert_eq!(removed.len(), 5);
        assert!(!dir.path().join("node_modules").exists());
        assert!(!dir.path().join("LICENSE").exists());
        assert!(!dir.path().join(".gitignore").exists());
        assert!(dir.path().join("README.md").exists());
    }

    #[tokio::test]
    async fn test_remove_scaffold_entries_when_absent() {
        let dir = tempdir().unwrap();

        let removed = remove_scaffold_entries(dir.path()).await.unwrap();

        assert!(removed.is_empty());
    }
}
