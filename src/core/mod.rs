// コアレイヤー - 設定、型、エラー定義
// 他のレイヤーから参照される基本的な型を提供

pub mod config;
pub mod error;
pub mod types;

// 公開API
pub use config::ScaffoldConfig;
pub use error::{ErrorKind, ScaffoldError, ScaffoldResult};
pub use types::{InstallOptions, InstallRequest, PackageManager};
