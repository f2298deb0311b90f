use std::str::FromStr;

use tracing::Level;
use tracing_subscriber::util::SubscriberInitExt;

/// 初始化日志输出, 级别无法识别时使用 INFO
pub fn init_tracing(level: &str) {
    let level = Level::from_str(level).unwrap_or(Level::INFO);

    let result = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .finish()
        .try_init();

    if let Err(e) = result {
        tracing::debug!("tracing already initialised: {}", e);
    }
}
