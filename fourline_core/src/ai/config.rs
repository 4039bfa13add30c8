use std::path::{Path, PathBuf};

/// 探索深さの既定値（ply）。
pub const DEFAULT_DEPTH: u8 = 4;

/// 焼きなましの初期温度の既定値。
pub const DEFAULT_TEMPERATURE: f64 = 1.0;

/// 焼きなましの冷却率（1反復ごとに乗じる）。
pub const COOLING_FACTOR: f64 = 0.9;

/// この温度を下回ったら焼きなましを打ち切る。
pub const TEMPERATURE_FLOOR: f64 = 0.1;

/// 山登り法の最大走査回数。
pub const HILL_CLIMB_PASSES: u8 = 10;

/// 焼きなましの最大反復回数。
pub const ANNEALING_ITERATIONS: u8 = 20;

/// 設定の読み込みに失敗した理由。
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// ファイルを読めない。
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        /// 読もうとしたパス。
        path: PathBuf,
        /// 元の I/O エラー。
        source: std::io::Error,
    },
    /// TOML として解釈できない。
    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
    /// 値が範囲外。
    #[error("config validation error: {0}")]
    Validation(String),
}

/// 手選択の戦略。
///
/// 設定ファイルでは名前（文字列）で指定する。未知の名前はエラーにせず
/// `Exhaustive` として扱う。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(from = "String", into = "String")]
#[non_exhaustive]
pub enum StrategyKind {
    /// アルファベータ付きミニマックス。
    #[default]
    Exhaustive,
    /// 山登り法。
    HillClimbing,
    /// 焼きなまし法。
    Annealing,
}

impl StrategyKind {
    /// 設定ファイル上の正式名を返す。
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exhaustive => "minimax",
            Self::HillClimbing => "hill_climbing",
            Self::Annealing => "simulated_annealing",
        }
    }
}

impl From<&str> for StrategyKind {
    #[inline]
    fn from(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "minimax" | "alphabeta" | "exhaustive" => Self::Exhaustive,
            "hill_climbing" | "hillclimbing" => Self::HillClimbing,
            "simulated_annealing" | "annealing" => Self::Annealing,
            other => {
                tracing::warn!(strategy = other, "unknown strategy, using minimax");
                Self::Exhaustive
            }
        }
    }
}

impl From<String> for StrategyKind {
    #[inline]
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<StrategyKind> for String {
    #[inline]
    fn from(kind: StrategyKind) -> Self {
        kind.name().to_owned()
    }
}

/// 探索設定。
#[derive(Copy, Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct SearchConfig {
    /// 探索深さ（ply）。
    depth: u8,
    /// 使用する戦略。
    strategy: StrategyKind,
    /// 焼きなましの初期温度。
    temperature: f64,
}

impl Default for SearchConfig {
    #[inline]
    fn default() -> Self {
        Self::new(StrategyKind::Exhaustive)
    }
}

impl SearchConfig {
    /// 探索深さを返す（0 は 1 に正規化する）。
    #[inline]
    #[must_use]
    pub const fn depth(self) -> u8 {
        if self.depth == u8::MIN {
            u8::MIN.wrapping_add(1)
        } else {
            self.depth
        }
    }

    /// TOML 文字列から設定を読み込み、検証する。
    ///
    /// # Errors
    ///
    /// TOML として不正な場合は `ConfigError::Parse`、値が範囲外の場合は
    /// `ConfigError::Validation` を返す。
    #[inline]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = match toml::from_str(content) {
            Ok(value) => value,
            Err(err) => return Err(ConfigError::Parse(err)),
        };
        match config.validate() {
            Ok(()) => Ok(config),
            Err(err) => Err(err),
        }
    }

    /// TOML ファイルから設定を読み込む。
    ///
    /// # Errors
    ///
    /// ファイルを読めない場合は `ConfigError::FileRead` を返す。それ以外は
    /// [`SearchConfig::from_toml_str`] と同じ。
    #[inline]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(value) => value,
            Err(source) => {
                return Err(ConfigError::FileRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Self::from_toml_str(&content)
    }

    /// 既定の深さ・温度で `strategy` を使う設定を返す。
    #[inline]
    #[must_use]
    pub const fn new(strategy: StrategyKind) -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            strategy,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// 使用する戦略を返す。
    #[inline]
    #[must_use]
    pub const fn strategy(self) -> StrategyKind {
        self.strategy
    }

    /// 焼きなましの初期温度を返す。
    #[inline]
    #[must_use]
    pub const fn temperature(self) -> f64 {
        self.temperature
    }

    /// 値の範囲を検証する。
    ///
    /// # Errors
    ///
    /// 深さが 0、または温度が正の有限値でない場合に `ConfigError::Validation` を返す。
    #[inline]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == u8::MIN {
            return Err(ConfigError::Validation("depth must be > 0".into()));
        }
        if !self.temperature.is_finite() || self.temperature <= 0.0 {
            return Err(ConfigError::Validation(
                "temperature must be a positive finite number".into(),
            ));
        }
        Ok(())
    }

    /// 探索深さを変更した設定を返す。
    #[inline]
    #[must_use]
    pub const fn with_depth(self, depth: u8) -> Self {
        Self { depth, ..self }
    }

    /// 初期温度を変更した設定を返す。
    #[inline]
    #[must_use]
    pub const fn with_temperature(self, temperature: f64) -> Self {
        Self {
            temperature,
            ..self
        }
    }
}
