// Tareas Core - 核心数据模型
//!
//! 包含：
//! - Task: 任务模型（id / 名称 / 描述 / 分类 / 优先级）
//! - Category / Priority: 固定枚举
//! - Input: 控制台输入校验

mod task;
mod input;

pub use task::*;
pub use input::*;
