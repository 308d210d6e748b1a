mod config;
mod logging;
mod models;
mod ui;

use std::io;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use crate::ui::{App, render};

fn main() -> io::Result<()> {
    // 日志可选，失败不影响运行
    if let Err(e) = logging::init() {
        eprintln!("日志初始化失败: {e}");
    }

    // 加载启动默认值
    let config = config::load_or_default();

    // 创建应用状态
    let mut app = App::new(&config);
    app.subscribe(|state| {
        tracing::debug!(
            from = state.source_unit.name(),
            to = state.target_unit.name(),
            value = state.input_value,
            result = %state.display_value(),
            "状态已变更"
        );
    });
    tracing::info!(?config, "启动温度换算器");

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("退出");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && ui::handle_key_event(app, key)? {
                break;
            }
        }
    }
    Ok(())
}
