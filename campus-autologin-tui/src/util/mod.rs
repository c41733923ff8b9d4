//!
//! src/util/mod.rs
//! Util 层：终端与日志
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod terminal;       // 终端初始化与恢复
//!         mod logging;        // 文件日志
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、终端（terminal.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     init_terminal()：
//!         1. 进入 raw 模式（按键不回显，不等待回车）
//!         2. 切换到备用屏幕（退出后恢复原来的终端内容）
//!         3. 安装 panic hook：程序崩溃时先恢复终端，再打印 panic 信息
//!
//!     restore_terminal()：
//!         与 init_terminal 相反的操作，并显示光标。
//!
//!         关键：main.rs 中 restore_terminal 在 app::run 之后立即执行，
//!               即使 run 返回错误，也会先恢复终端，再返回错误结果。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、日志（logging.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     标准输出被界面占用，日志只能写入文件：
//!         tracing-subscriber（fmt + EnvFilter）
//!             └── tracing-appender 按天滚动的日志文件
//!
//!     核心库通过 log 门面输出，tracing-log 负责把 log 记录桥接进来。
//!     日志级别优先取 RUST_LOG，其次取配置文件中的 [log] level。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
