//! Tareas Interface - 交互层
//!
//! 职责：
//! - 文本菜单控制器（状态机）
//! - 控制台配置
//!
//! 架构：
//! - console: 菜单循环
//! - config: 数据文件与提示符

pub mod config;
pub mod console;
pub mod error;


pub use config::ConsoleConfig;
pub use console::{Console, ConsoleState};
pub use error::ConsoleError;

use std::io;

/// Run the console on stdin / stdout until the user exits
pub fn run_console(config: ConsoleConfig) -> Result<(), ConsoleError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Console::new(config, stdin.lock(), stdout.lock()).run()
}
