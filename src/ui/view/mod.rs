//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::state::{App, Focus};
use components::{render_field_widget, render_unit_picker};
use layouts::centered_rect;

pub const TITLE: &str = "Temperature Converter";

const PANEL_WIDTH: u16 = 64;
const PANEL_HEIGHT: u16 = 8;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(PANEL_HEIGHT), // 换算面板
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_converter(frame, app, centered_rect(PANEL_WIDTH, PANEL_HEIGHT, chunks[1]));
    render_help(frame, app, chunks[2]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(TITLE)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_converter(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let rows = |column: Rect| {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Length(3)])
            .split(column)
    };
    let left = rows(columns[0]);
    let right = rows(columns[1]);

    let state = &app.state;

    render_unit_picker(
        frame,
        left[0],
        "From",
        state.source_unit,
        app.focus == Focus::SourcePicker,
    );
    render_field_widget(
        frame,
        left[1],
        &format!("{} Temperature", state.source_unit.symbol()),
        &app.input_buffer,
        app.focus == Focus::Input,
        Color::Yellow,
    );

    render_unit_picker(
        frame,
        right[0],
        "Convert to",
        state.target_unit,
        app.focus == Focus::TargetPicker,
    );
    render_field_widget(
        frame,
        right[1],
        "Result",
        &state.display_value(),
        false,
        Color::Green,
    );

    // 输入框光标
    if app.focus == Focus::Input {
        let field = left[1];
        let offset = app.input_buffer.chars().count() as u16;
        let x = (field.x + 1 + offset).min(field.right().saturating_sub(2));
        frame.set_cursor_position(Position::new(x, field.y + 1));
    }
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.focus {
        Focus::SourcePicker | Focus::TargetPicker => {
            "[j/k] Select unit  [s] Swap  [Tab] Next field  [q] Quit"
        }
        Focus::Input => "Type a number  [Enter] Confirm  [Esc] Revert  [Tab] Next field  [Ctrl-C] Quit",
    };

    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}
