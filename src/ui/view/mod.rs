//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::state::App;
use crate::models::{CodeStructure, OutputKind};
use components::{render_dialog_framework, render_input_widget, wrapped_rows};
use layouts::centered_rect;

const INPUT_PLACEHOLDER: &str = "Type your Python code here...";
const NOTICE: &str = "As we are using agents in the backend, it takes time to generate correct output. Please wait patiently before retrying.";

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(8),    // 输入
            Constraint::Length(3), // 提示
            Constraint::Min(8),    // 输出
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    // 请求进行中输入框仍可编辑
    let input_title = if app.is_awaiting() {
        "Code (still editable)"
    } else {
        "Code"
    };

    render_title(frame, app, chunks[0]);
    render_input_widget(
        frame,
        chunks[1],
        input_title,
        &app.input,
        INPUT_PLACEHOLDER,
        true,
        Color::Yellow,
    );
    render_notice(frame, chunks[2]);
    render_output(frame, app, chunks[3]);
    render_help(frame, app, chunks[4]);

    if app.show_structure {
        render_structure_dialog(frame, app);
    }
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "AI Code Documentation Generator",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  POST {}", app.endpoint),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_notice(frame: &mut Frame, area: Rect) {
    let notice = Paragraph::new(NOTICE)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::LEFT | Borders::RIGHT));
    frame.render_widget(notice, area);
}

fn render_output(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut title = String::from("Output");
    if let Some(kind) = app.output_kind {
        title.push_str(&format!(" · {}", kind.label()));
    }
    if let Some(at) = app.completed_at {
        title.push_str(&format!(" · {}", at.format("%H:%M:%S")));
    }
    if app.is_awaiting() {
        title.push_str(" · Generating...");
    }

    let style = match app.output_kind {
        Some(OutputKind::Failure) => Style::default().fg(Color::Red),
        Some(OutputKind::Suggestions) => Style::default().fg(Color::Yellow),
        Some(OutputKind::Placeholder) => Style::default().fg(Color::DarkGray),
        _ => Style::default(),
    };

    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(area);

    // 预格式化文本：保留空白
    let output = Paragraph::new(app.output.clone())
        .style(style)
        .wrap(Wrap { trim: false });
    let rows = wrapped_rows(&output, &app.output, inner.width);
    app.set_output_layout(rows, inner.height);

    let output = output.scroll((app.output_scroll, 0)).block(block);
    frame.render_widget(output, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.is_awaiting() {
        "Generating... please wait  [PgUp/PgDn] Scroll  [F2] Structure  [Esc] Quit"
    } else {
        "[Ctrl+S/F5] Generate Documentation  [Ctrl+U] Clear  [PgUp/PgDn] Scroll  [F2] Structure  [Esc] Quit"
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

fn render_structure_dialog(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 60, frame.area());
    let inner = render_dialog_framework(frame, area, "Code Structure  [F2] Close");

    let lines = match &app.structure {
        Some(structure) if !structure.is_empty() => structure_lines(structure),
        _ => vec![Line::from("No structure available yet.")],
    };

    let body = Paragraph::new(lines)
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false });
    frame.render_widget(body, inner);
}

fn structure_lines(structure: &CodeStructure) -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();

    if let Some(error) = &structure.error {
        lines.push(Line::from(Span::styled(
            format!("Analysis failed: {}", error),
            Style::default().fg(Color::Red),
        )));
    }

    if !structure.functions.is_empty() {
        lines.push(Line::from(Span::styled("Functions", heading)));
        for function in &structure.functions {
            lines.push(Line::from(format!("  {}", function.signature())));
        }
    }

    if !structure.classes.is_empty() {
        lines.push(Line::from(Span::styled("Classes", heading)));
        for class in &structure.classes {
            if class.methods.is_empty() {
                lines.push(Line::from(format!("  {}", class.name)));
            } else {
                lines.push(Line::from(format!(
                    "  {}: {}",
                    class.name,
                    class.methods.join(", ")
                )));
            }
        }
    }

    if !structure.imports.is_empty() {
        lines.push(Line::from(Span::styled("Imports", heading)));
        for import in &structure.imports {
            lines.push(Line::from(format!("  {}", import)));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClassInfo, DocResponse, FunctionInfo};
    use crate::ui::actions::Action;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &mut App) -> String {
        screen_sized(app, 120, 40)
    }

    fn screen_sized(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn completed(app: &mut App, response: DocResponse) {
        app.dispatch(Action::Submit);
        let seq = app.last_seq;
        app.dispatch(Action::RequestCompleted {
            seq,
            outcome: Ok(response),
        });
    }

    #[test]
    fn test_initial_screen() {
        let mut app = App::new("http://localhost:5000/generate-doc");
        let text = screen(&mut app);

        assert!(text.contains("AI Code Documentation Generator"));
        assert!(text.contains("POST http://localhost:5000/generate-doc"));
        assert!(text.contains("Type your Python code here..."));
        assert!(text.contains("it takes time to generate correct output"));
        assert!(text.contains("Generate Documentation"));
    }

    #[test]
    fn test_input_and_output_rendered() {
        let mut app = App::new("http://localhost:5000/generate-doc");
        app.update_input("def add(a, b):".to_string());
        completed(
            &mut app,
            DocResponse {
                doc: "Adds two numbers.".into(),
                ..DocResponse::default()
            },
        );

        let text = screen(&mut app);
        assert!(text.contains("def add(a, b):"));
        assert!(text.contains("Adds two numbers."));
        assert!(text.contains("Output · Documentation"));
        assert!(!text.contains("Type your Python code here..."));
    }

    #[test]
    fn test_awaiting_indicator() {
        let mut app = App::new("http://localhost:5000/generate-doc");
        app.dispatch(Action::Submit);

        let text = screen(&mut app);
        assert!(text.contains("Generating..."));
        assert!(!text.contains("[Ctrl+S/F5]"));
        assert!(text.contains("Code (still editable)"));
    }

    #[test]
    fn test_long_output_scrolls_to_end() {
        let mut app = App::new("http://localhost:5000/generate-doc");
        completed(
            &mut app,
            DocResponse {
                doc: format!("{}END_MARKER", "word ".repeat(300)).into(),
                ..DocResponse::default()
            },
        );

        let text = screen_sized(&mut app, 60, 30);
        assert!(!text.contains("END_MARKER"));
        assert!(app.max_output_scroll() > 0);

        for _ in 0..20 {
            app.dispatch(Action::PageDown);
        }
        assert_eq!(app.output_scroll, app.max_output_scroll());

        let text = screen_sized(&mut app, 60, 30);
        assert!(text.contains("END_MARKER"));
    }

    #[test]
    fn test_long_input_keeps_tail_visible() {
        let mut app = App::new("http://localhost:5000/generate-doc");
        app.update_input(format!("{}TAIL", "a = 1 ".repeat(200)));

        let text = screen_sized(&mut app, 60, 30);
        assert!(text.contains("TAIL"));
    }

    #[test]
    fn test_input_trailing_newline_row_visible() {
        let mut app = App::new("http://localhost:5000/generate-doc");
        let mut input = (0..20).map(|i| format!("line_{i}\n")).collect::<String>();
        input.push_str("LAST\n");
        app.update_input(input);

        let text = screen_sized(&mut app, 60, 30);
        assert!(text.contains("LAST"));
        assert!(!text.contains("line_0 "));
    }

    #[test]
    fn test_structure_dialog() {
        let mut app = App::new("http://localhost:5000/generate-doc");
        completed(
            &mut app,
            DocResponse {
                doc: "d".into(),
                code_structure: Some(CodeStructure {
                    functions: vec![FunctionInfo {
                        name: "add".to_string(),
                        args: vec!["a".to_string(), "b".to_string()],
                        returns: Some("int".to_string()),
                    }],
                    classes: vec![ClassInfo {
                        name: "Calc".to_string(),
                        methods: vec!["run".to_string()],
                    }],
                    imports: vec!["os".to_string()],
                    error: None,
                }),
                ..DocResponse::default()
            },
        );
        app.dispatch(Action::ToggleStructure);

        let text = screen(&mut app);
        assert!(text.contains("Code Structure"));
        assert!(text.contains("add(a, b) -> int"));
        assert!(text.contains("Calc: run"));
    }

    #[test]
    fn test_structure_dialog_empty() {
        let mut app = App::new("http://localhost:5000/generate-doc");
        app.dispatch(Action::ToggleStructure);

        let text = screen(&mut app);
        assert!(text.contains("No structure available yet."));
    }
}
