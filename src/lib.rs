//! textpad - 可编辑文本模型库
//!
//! 模块结构：
//! - models: 数据模型（Position, TextBuffer, Selection, EditHistory）
//! - kernel: 编辑器内核（光标/选区控制、视口滚动、渲染快照）与服务（配置、持久化）
//! - logging: tracing 初始化

pub mod kernel;
pub mod logging;
pub mod models;
