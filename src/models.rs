use serde::{Deserialize, Serialize};

/// 水的冰点对应的开尔文温度
pub const ICE_POINT_KELVIN: f64 = 273.15;

/// 温度单位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
    Kelvin,
}

/// 单位到参考刻度（开尔文）的换算系数
///
/// `kelvin = (value - origin) * numerator / denominator + kelvin_at_origin`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KelvinBasis {
    pub origin: f64,
    pub numerator: f64,
    pub denominator: f64,
    pub kelvin_at_origin: f64,
}

const CELSIUS_BASIS: KelvinBasis = KelvinBasis {
    origin: 0.0,
    numerator: 1.0,
    denominator: 1.0,
    kelvin_at_origin: ICE_POINT_KELVIN,
};

const FAHRENHEIT_BASIS: KelvinBasis = KelvinBasis {
    origin: 32.0,
    numerator: 5.0,
    denominator: 9.0,
    kelvin_at_origin: ICE_POINT_KELVIN,
};

const KELVIN_BASIS: KelvinBasis = KelvinBasis {
    origin: 0.0,
    numerator: 1.0,
    denominator: 1.0,
    kelvin_at_origin: 0.0,
};

impl TemperatureUnit {
    /// 选择器中的显示顺序
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
            TemperatureUnit::Kelvin => "Kelvin",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => "K",
        }
    }

    pub fn basis(self) -> KelvinBasis {
        match self {
            TemperatureUnit::Celsius => CELSIUS_BASIS,
            TemperatureUnit::Fahrenheit => FAHRENHEIT_BASIS,
            TemperatureUnit::Kelvin => KELVIN_BASIS,
        }
    }

    /// 在 `ALL` 中的位置
    pub fn index(self) -> usize {
        match self {
            TemperatureUnit::Celsius => 0,
            TemperatureUnit::Fahrenheit => 1,
            TemperatureUnit::Kelvin => 2,
        }
    }

    /// 下一个单位（循环）
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// 上一个单位（循环）
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// 换算到开尔文
    pub fn to_kelvin(self, value: f64) -> f64 {
        let b = self.basis();
        (value - b.origin) * b.numerator / b.denominator + b.kelvin_at_origin
    }

    /// 从开尔文换算回本单位
    pub fn from_kelvin(self, kelvin: f64) -> f64 {
        let b = self.basis();
        (kelvin - b.kelvin_at_origin) * b.denominator / b.numerator + b.origin
    }
}

/// 温度换算，经由开尔文中转
pub fn convert(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    if from == to {
        return value;
    }
    to.from_kelvin(from.to_kelvin(value))
}

/// 保留两位小数并附加单位符号，例如 `59.00 °F`
pub fn format_temperature(value: f64, unit: TemperatureUnit) -> String {
    format!("{:.2} {}", value, unit.symbol())
}
