// CLI層 - コマンドライン引数の定義と検証
// ユーザーインターフェースとアプリケーションロジックの橋渡し

pub mod args;
pub mod validate;

// 公開API
pub use args::CliArgs;
pub use validate::{select_package_manager, validate_args};
