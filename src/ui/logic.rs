//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑以及换算视图的各项操作

use super::actions::Action;
use super::state::{App, Focus, format_input, parse_input};
use crate::models::TemperatureUnit;

impl App {
    /// 核心逻辑分发，返回是否退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::FocusNext => self.focus_next(),
            Action::FocusPrev => self.focus_prev(),

            Action::SelectNextUnit => self.select_unit(TemperatureUnit::next),
            Action::SelectPrevUnit => self.select_unit(TemperatureUnit::prev),
            Action::SwapUnits => self.swap_units(),

            Action::Cancel => self.cancel(),
            Action::Submit => self.commit_input(),

            Action::Input(c) => {
                if self.focus == Focus::Input {
                    self.input_buffer.push(c);
                    self.refresh_input();
                }
            }

            Action::DeleteChar => {
                if self.focus == Focus::Input {
                    self.input_buffer.pop();
                    self.refresh_input();
                }
            }
        }
        false
    }

    // ============ 状态操作 ============

    /// 设置源单位
    pub fn set_source_unit(&mut self, unit: TemperatureUnit) {
        if self.state.source_unit != unit {
            self.state.source_unit = unit;
            tracing::debug!(unit = unit.name(), "源单位已更新");
            self.notify();
        }
    }

    /// 设置目标单位
    pub fn set_target_unit(&mut self, unit: TemperatureUnit) {
        if self.state.target_unit != unit {
            self.state.target_unit = unit;
            tracing::debug!(unit = unit.name(), "目标单位已更新");
            self.notify();
        }
    }

    /// 从文本设置输入值；无法解析时保留原值
    pub fn set_input_value(&mut self, text: &str) {
        match parse_input(text) {
            Some(value) => {
                if self.state.input_value.to_bits() != value.to_bits() {
                    self.state.input_value = value;
                    tracing::debug!(value, "输入值已更新");
                    self.notify();
                }
            }
            None => tracing::trace!(text, "忽略无法解析的输入"),
        }
    }

    /// 交换源单位和目标单位
    pub fn swap_units(&mut self) {
        if self.state.source_unit == self.state.target_unit {
            return;
        }
        std::mem::swap(&mut self.state.source_unit, &mut self.state.target_unit);
        tracing::debug!(
            from = self.state.source_unit.name(),
            to = self.state.target_unit.name(),
            "单位已交换"
        );
        self.notify();
    }

    // ============ 焦点相关 ============

    /// 焦点移到下一个控件
    pub fn focus_next(&mut self) {
        self.leave_input();
        self.focus = self.focus.next();
    }

    /// 焦点移到上一个控件
    pub fn focus_prev(&mut self) {
        self.leave_input();
        self.focus = self.focus.prev();
    }

    fn leave_input(&mut self) {
        if self.focus == Focus::Input {
            self.commit_input();
        }
    }

    /// 在获得焦点的选择器上切换单位
    fn select_unit(&mut self, step: fn(TemperatureUnit) -> TemperatureUnit) {
        match self.focus {
            Focus::SourcePicker => self.set_source_unit(step(self.state.source_unit)),
            Focus::TargetPicker => self.set_target_unit(step(self.state.target_unit)),
            Focus::Input => {}
        }
    }

    // ============ 输入框相关 ============

    fn refresh_input(&mut self) {
        let text = self.input_buffer.clone();
        self.set_input_value(&text);
    }

    /// 提交输入；文本无效时恢复为最后一个有效值
    pub fn commit_input(&mut self) {
        if parse_input(&self.input_buffer).is_none() {
            self.input_buffer = format_input(self.state.input_value);
        }
    }

    /// 放弃编辑，恢复为最后一个有效值
    pub fn cancel(&mut self) {
        self.input_buffer = format_input(self.state.input_value);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::ui::state::ConversionState;

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.dispatch(Action::Input(c));
        }
    }

    fn clear_input(app: &mut App) {
        while !app.input_buffer.is_empty() {
            app.dispatch(Action::DeleteChar);
        }
    }

    #[test]
    fn test_live_update_while_typing() {
        let mut app = App::default();
        clear_input(&mut app);
        type_text(&mut app, "100");
        assert_eq!(app.state.input_value, 100.0);
        assert_eq!(app.state.display_value(), "212.00 °F");
    }

    #[test]
    fn test_invalid_input_keeps_previous_value() {
        let mut app = App::default();
        app.set_input_value("20.0");
        let before = app.state.display_value();

        app.set_input_value("abc");
        assert_eq!(app.state.input_value, 20.0);
        assert_eq!(app.state.display_value(), before);
    }

    #[test]
    fn test_commit_reverts_invalid_text() {
        let mut app = App::default();
        clear_input(&mut app);
        type_text(&mut app, "20");
        type_text(&mut app, "x");
        assert_eq!(app.input_buffer, "20x");
        assert_eq!(app.state.input_value, 20.0);

        app.dispatch(Action::Submit);
        assert_eq!(app.input_buffer, "20.0");
        assert_eq!(app.state.input_value, 20.0);
    }

    #[test]
    fn test_commit_keeps_valid_text() {
        let mut app = App::default();
        clear_input(&mut app);
        type_text(&mut app, "37");
        app.dispatch(Action::Submit);
        assert_eq!(app.input_buffer, "37");
    }

    #[test]
    fn test_leaving_input_commits() {
        let mut app = App::default();
        type_text(&mut app, "abc");
        app.dispatch(Action::FocusNext);
        assert_eq!(app.focus, Focus::TargetPicker);
        assert_eq!(app.input_buffer, "15.0");
    }

    #[test]
    fn test_cancel_restores_buffer() {
        let mut app = App::default();
        type_text(&mut app, "5");
        assert_eq!(app.state.input_value, 15.05);
        app.dispatch(Action::Cancel);
        assert_eq!(app.input_buffer, "15.05");
    }

    #[test]
    fn test_pickers_select_units() {
        let mut app = App::default();
        app.dispatch(Action::FocusPrev);
        assert_eq!(app.focus, Focus::SourcePicker);
        app.dispatch(Action::SelectPrevUnit);
        assert_eq!(app.state.source_unit, TemperatureUnit::Kelvin);

        app.dispatch(Action::FocusPrev);
        assert_eq!(app.focus, Focus::TargetPicker);
        app.dispatch(Action::SelectNextUnit);
        assert_eq!(app.state.target_unit, TemperatureUnit::Kelvin);
        assert_eq!(app.state.display_value(), "15.00 K");
    }

    #[test]
    fn test_unit_keys_ignored_on_input() {
        let mut app = App::default();
        app.dispatch(Action::SelectNextUnit);
        assert_eq!(app.state, ConversionState::default());
    }

    #[test]
    fn test_swap_units() {
        let mut app = App::default();
        app.swap_units();
        assert_eq!(app.state.source_unit, TemperatureUnit::Fahrenheit);
        assert_eq!(app.state.target_unit, TemperatureUnit::Celsius);
        assert_eq!(app.state.display_value(), "-9.44 °C");
    }

    #[test]
    fn test_subscribers_notified_on_change() {
        let seen: Rc<RefCell<Vec<ConversionState>>> = Rc::new(RefCell::new(Vec::new()));
        let mut app = App::default();
        let sink = Rc::clone(&seen);
        app.subscribe(move |state| sink.borrow_mut().push(*state));

        app.set_source_unit(TemperatureUnit::Kelvin);
        app.set_target_unit(TemperatureUnit::Celsius);
        app.set_input_value("300");
        app.set_input_value("not a number");
        app.set_target_unit(TemperatureUnit::Celsius);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[2].input_value, 300.0);
        assert_eq!(seen[2].display_value(), "26.85 °C");
    }

    #[test]
    fn test_quit() {
        let mut app = App::default();
        assert!(app.dispatch(Action::Quit));
        assert!(!app.dispatch(Action::FocusNext));
    }
}
