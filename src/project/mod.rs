// プロジェクト作成レイヤー - 作成先ディレクトリへのテンプレート展開

pub mod copy;
pub mod initializer;

pub use copy::{copy_dir_all, remove_scaffold_entries, SCAFFOLD_ONLY_ENTRIES};
pub use initializer::ProjectInitializer;
