//! App 状态定义 (Model)
//!
//! 包含换算状态、输入框缓冲区以及状态订阅

use std::fmt;

use crate::config::Config;
use crate::models::{TemperatureUnit, convert, format_temperature};

/// 换算状态
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionState {
    pub source_unit: TemperatureUnit,
    pub target_unit: TemperatureUnit,
    pub input_value: f64,
}

impl Default for ConversionState {
    fn default() -> Self {
        let config = Config::default();
        Self {
            source_unit: config.from,
            target_unit: config.to,
            input_value: config.value,
        }
    }
}

impl ConversionState {
    /// 换算结果，每次读取时重新计算
    pub fn converted_value(&self) -> f64 {
        convert(self.input_value, self.source_unit, self.target_unit)
    }

    /// 输出标签文本
    pub fn display_value(&self) -> String {
        format_temperature(self.converted_value(), self.target_unit)
    }
}

/// 获得焦点的控件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    SourcePicker,
    Input,
    TargetPicker,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::SourcePicker => Focus::Input,
            Focus::Input => Focus::TargetPicker,
            Focus::TargetPicker => Focus::SourcePicker,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::SourcePicker => Focus::TargetPicker,
            Focus::Input => Focus::SourcePicker,
            Focus::TargetPicker => Focus::Input,
        }
    }
}

/// 状态变更回调
pub type Subscriber = Box<dyn FnMut(&ConversionState)>;

/// 应用状态
pub struct App {
    pub state: ConversionState,
    pub focus: Focus,
    pub input_buffer: String,
    subscribers: Vec<Subscriber>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("state", &self.state)
            .field("focus", &self.focus)
            .field("input_buffer", &self.input_buffer)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl App {
    /// 根据配置创建应用实例
    pub fn new(config: &Config) -> Self {
        Self {
            state: ConversionState {
                source_unit: config.from,
                target_unit: config.to,
                input_value: config.value,
            },
            focus: Focus::Input,
            input_buffer: format_input(config.value),
            subscribers: Vec::new(),
        }
    }

    /// 注册状态变更回调
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&ConversionState) + 'static,
    {
        self.subscribers.push(Box::new(callback));
    }

    /// 通知所有订阅者
    pub(super) fn notify(&mut self) {
        let state = self.state;
        for subscriber in &mut self.subscribers {
            subscriber(&state);
        }
    }
}

/// 数值转为输入框文本，整数保留 `.0`（如 `15.0`）
pub fn format_input(value: f64) -> String {
    format!("{value:?}")
}

/// 解析输入框文本；非数字或非有限值返回 `None`
pub fn parse_input(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
