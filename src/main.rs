mod client;
mod config;
mod error;
mod logging;
mod models;
mod ui;

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tracing::info;

use crate::client::DocClient;
use crate::config::{config_path, load_config};
use crate::error::AppError;
use crate::logging::init_logging;
use crate::ui::{Action, App, Effect, handle_event, render};

const TICK: Duration = Duration::from_millis(100);

/// 获取数据目录路径 (~/.local/share/docgen/)
fn get_data_dir() -> Result<PathBuf, AppError> {
    let data_dir = dirs::data_dir()
        .ok_or(AppError::MissingDir("数据"))?
        .join("docgen");

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let _log_guard = init_logging(&get_data_dir()?)?;

    // 加载配置
    let config_path = config_path()?;
    let config = load_config(&config_path)?;
    info!(endpoint = %config.endpoint, config = %config_path.display(), "docgen starting");

    let client = DocClient::from_config(&config)?;
    let mut app = App::new(client.endpoint());

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app, &client);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    info!("docgen exiting");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: &DocClient,
) -> Result<(), AppError> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Action>();

    loop {
        // 后台请求的结果
        while let Ok(action) = rx.try_recv() {
            if let Some(effect) = app.dispatch(action) {
                if run_effect(effect, client, &tx) {
                    return Ok(());
                }
            }
        }

        terminal.draw(|f| render(f, app))?;

        if tokio::task::block_in_place(|| event::poll(TICK))? {
            let event = event::read()?;
            if let Some(effect) = handle_event(app, event) {
                if run_effect(effect, client, &tx) {
                    return Ok(());
                }
            }
        }
    }
}

/// 执行副作用，返回是否退出
fn run_effect(effect: Effect, client: &DocClient, tx: &mpsc::UnboundedSender<Action>) -> bool {
    match effect {
        Effect::Quit => true,
        Effect::SendRequest { seq, code } => {
            client.dispatch(seq, code, tx.clone());
            false
        }
    }
}
