//! 通用 UI 组件
//!
//! 单位选择器、输入框等通用组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::models::TemperatureUnit;

fn border_style(is_focused: bool, active_color: Color) -> Style {
    if is_focused {
        Style::default()
            .fg(active_color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// [组件] 单位选择器，列出全部单位并高亮当前选中项
pub fn render_unit_picker(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    selected: TemperatureUnit,
    is_focused: bool,
) {
    let items: Vec<ListItem> = TemperatureUnit::ALL
        .iter()
        .map(|unit| ListItem::new(unit.name()))
        .collect();

    let highlight = if is_focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style(is_focused, Color::Yellow)),
        )
        .highlight_style(highlight)
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(selected.index()));

    frame.render_stateful_widget(list, area, &mut state);
}

/// [组件] 带有标题和样式的单行字段
pub fn render_field_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    is_focused: bool,
    active_color: Color,
) {
    let style = if is_focused {
        Style::default().fg(active_color)
    } else {
        Style::default()
    };

    let field = Paragraph::new(value).style(style).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style(is_focused, active_color)),
    );
    frame.render_widget(field, area);
}
