//! Control sizes and CSS length helpers

use std::fmt;
use std::str::FromStr;

/// Font size and height of a sized control
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeSet {
    pub font_size: &'static str,
    pub height: &'static str,
}

#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

impl Size {
    pub fn set(self) -> SizeSet {
        match self {
            Size::Sm => SizeSet {
                font_size: "0.875rem",
                height: "2rem",
            },
            Size::Md => SizeSet {
                font_size: "1rem",
                height: "2.5rem",
            },
            Size::Lg => SizeSet {
                font_size: "1.125rem",
                height: "3rem",
            },
        }
    }

    pub fn font_size(self) -> &'static str {
        self.set().font_size
    }

    pub fn height(self) -> &'static str {
        self.set().height
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Size::Sm => "sm",
            Size::Md => "md",
            Size::Lg => "lg",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sm" => Ok(Size::Sm),
            "md" => Ok(Size::Md),
            "lg" => Ok(Size::Lg),
            other => Err(format!("unknown size `{other}`")),
        }
    }
}

/// A length given either as a pixel count or as raw CSS text
#[derive(Clone, Debug, PartialEq)]
pub enum CssLength {
    Px(f64),
    Raw(String),
}

impl From<f64> for CssLength {
    fn from(value: f64) -> Self {
        CssLength::Px(value)
    }
}

impl From<f32> for CssLength {
    fn from(value: f32) -> Self {
        CssLength::Px(f64::from(value))
    }
}

impl From<i32> for CssLength {
    fn from(value: i32) -> Self {
        CssLength::Px(f64::from(value))
    }
}

impl From<u32> for CssLength {
    fn from(value: u32) -> Self {
        CssLength::Px(f64::from(value))
    }
}

impl From<&str> for CssLength {
    fn from(value: &str) -> Self {
        CssLength::Raw(value.to_string())
    }
}

impl From<String> for CssLength {
    fn from(value: String) -> Self {
        CssLength::Raw(value)
    }
}

/// Numbers become `Npx`, text passes through unchanged
pub fn safe_px(value: impl Into<CssLength>) -> String {
    match value.into() {
        CssLength::Px(px) => format!("{px}px"),
        CssLength::Raw(raw) => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_sets() {
        assert_eq!(Size::Sm.font_size(), "0.875rem");
        assert_eq!(Size::default().height(), "2.5rem");
        assert_eq!(Size::Lg.set().height, "3rem");
        assert_eq!("lg".parse::<Size>(), Ok(Size::Lg));
        assert!("xl".parse::<Size>().is_err());
    }

    #[test]
    fn test_safe_px() {
        assert_eq!(safe_px(12), "12px");
        assert_eq!(safe_px(1.5), "1.5px");
        assert_eq!(safe_px("2rem"), "2rem");
        assert_eq!(safe_px(String::from("50%")), "50%");
    }
}
