//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及请求状态机

use chrono::{DateTime, Local};

use crate::models::{CodeStructure, OutputKind};

/// 应用状态
pub struct App {
    pub input: String,  // 用户输入的代码
    pub output: String, // 最近一次完成的请求结果
    pub output_kind: Option<OutputKind>,
    pub structure: Option<CodeStructure>,
    pub completed_at: Option<DateTime<Local>>,
    pub request: RequestState,
    pub last_seq: u64,
    pub output_scroll: u16,
    pub output_rows: usize, // 输出折行后的总行数，由视图层写入
    pub output_height: u16, // 输出区可见行数
    pub show_structure: bool,
    pub message: Option<String>,
    pub endpoint: String,
}

/// 请求状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    AwaitingResponse { seq: u64 },
}

impl App {
    /// 创建新的应用实例
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            input: String::new(),
            output: String::new(),
            output_kind: None,
            structure: None,
            completed_at: None,
            request: RequestState::Idle,
            last_seq: 0,
            output_scroll: 0,
            output_rows: 0,
            output_height: 0,
            show_structure: false,
            message: None,
            endpoint: endpoint.into(),
        }
    }

    pub fn is_awaiting(&self) -> bool {
        matches!(self.request, RequestState::AwaitingResponse { .. })
    }

    /// 输出区可滚动的最大行偏移（按折行后的屏幕行计算）
    pub fn max_output_scroll(&self) -> u16 {
        let hidden = self.output_rows.saturating_sub(self.output_height as usize);
        u16::try_from(hidden).unwrap_or(u16::MAX)
    }

    /// 记录输出区最近一次渲染的布局，尺寸变化后重新钳制滚动位置
    pub fn set_output_layout(&mut self, rows: usize, height: u16) {
        self.output_rows = rows;
        self.output_height = height;
        self.output_scroll = self.output_scroll.min(self.max_output_scroll());
    }
}
