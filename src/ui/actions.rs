//! Action 枚举定义 (Intent)
//!
//! 用户交互与异步结果转化为明确的语义化 Action；
//! dispatch 需要的 I/O 以 Effect 的形式交给运行时执行

use crate::error::RequestError;
use crate::models::DocResponse;

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Submit,

    // 编辑输入
    Input(char),
    Newline,
    Indent,
    DeleteChar,
    ClearInput,
    Paste(String),

    // 输出区
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ToggleStructure,

    // 后台请求结束
    RequestCompleted {
        seq: u64,
        outcome: Result<DocResponse, RequestError>,
    },
}

/// 需要运行时执行的副作用
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Quit,
    SendRequest { seq: u64, code: String },
}
