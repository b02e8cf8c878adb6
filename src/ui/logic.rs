//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑与提交请求的状态机

use chrono::Local;
use tracing::{debug, info, warn};

use super::actions::{Action, Effect};
use super::state::{App, RequestState};
use crate::error::RequestError;
use crate::models::{DocResponse, FAILURE_TEXT, OutputKind};

const PAGE_LINES: u16 = 10;
const INDENT: &str = "    ";

impl App {
    /// 核心逻辑分发
    pub fn dispatch(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::Quit => return Some(Effect::Quit),
            Action::Submit => return self.submit(),

            Action::Input(c) => self.edit_input(|text| text.push(c)),
            Action::Newline => self.edit_input(|text| text.push('\n')),
            Action::Indent => self.edit_input(|text| text.push_str(INDENT)),
            Action::DeleteChar => self.edit_input(|text| {
                text.pop();
            }),
            Action::ClearInput => self.update_input(String::new()),
            Action::Paste(pasted) => {
                // 终端粘贴的换行可能是 \r
                let pasted = pasted.replace("\r\n", "\n").replace('\r', "\n");
                self.edit_input(|text| text.push_str(&pasted));
            }

            Action::ScrollUp => self.scroll_output_up(1),
            Action::ScrollDown => self.scroll_output_down(1),
            Action::PageUp => self.scroll_output_up(PAGE_LINES),
            Action::PageDown => self.scroll_output_down(PAGE_LINES),
            Action::ToggleStructure => self.show_structure = !self.show_structure,

            Action::RequestCompleted { seq, outcome } => self.complete_request(seq, outcome),
        }
        None
    }

    // ============ 输入相关 ============

    /// 无条件替换输入内容
    pub fn update_input(&mut self, text: String) {
        self.input = text;
    }

    fn edit_input(&mut self, edit: impl FnOnce(&mut String)) {
        let mut text = self.input.clone();
        edit(&mut text);
        self.update_input(text);
    }

    // ============ 请求相关 ============

    /// 提交当前输入；已有请求在途时忽略
    pub fn submit(&mut self) -> Option<Effect> {
        if let RequestState::AwaitingResponse { seq } = self.request {
            debug!(seq, "submit ignored, request still in flight");
            self.message = Some("Still waiting for the previous request".to_string());
            return None;
        }

        self.last_seq += 1;
        let seq = self.last_seq;
        self.request = RequestState::AwaitingResponse { seq };
        self.message = None;

        info!(seq, input_len = self.input.len(), "submitting code for documentation");
        Some(Effect::SendRequest {
            seq,
            code: self.input.clone(),
        })
    }

    /// 请求结束，仅接受当前等待中的序号
    pub fn complete_request(&mut self, seq: u64, outcome: Result<DocResponse, RequestError>) {
        match self.request {
            RequestState::AwaitingResponse { seq: awaited } if awaited == seq => {}
            _ => {
                warn!(seq, "discarding stale response");
                return;
            }
        }

        let (kind, text, structure) = match outcome {
            Ok(response) => {
                let (kind, text) = response.resolve();
                (kind, text, response.code_structure)
            }
            Err(err) => {
                warn!(seq, error = %err, "documentation request failed");
                (OutputKind::Failure, FAILURE_TEXT.to_string(), None)
            }
        };

        info!(seq, kind = kind.label(), "request completed");
        self.output = text;
        self.output_kind = Some(kind);
        self.structure = structure;
        self.completed_at = Some(Local::now());
        self.output_scroll = 0;
        self.request = RequestState::Idle;
    }

    // ============ 输出区 ============

    pub fn scroll_output_up(&mut self, lines: u16) {
        self.output_scroll = self.output_scroll.saturating_sub(lines);
    }

    pub fn scroll_output_down(&mut self, lines: u16) {
        self.output_scroll = self
            .output_scroll
            .saturating_add(lines)
            .min(self.max_output_scroll());
    }
}
