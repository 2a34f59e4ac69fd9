use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The two mutually exclusive page layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Home,
    Experience,
}

impl View {
    pub const ALL: [View; 2] = [View::Home, View::Experience];

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Experience => "experience",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Experience => "Experience",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unknown view '{0}' (expected 'home' or 'experience')")]
pub struct UnknownView(pub String);

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_home() {
        assert_eq!(View::default(), View::Home);
    }

    #[test]
    fn test_parse_known_views() {
        assert_eq!("home".parse::<View>().unwrap(), View::Home);
        assert_eq!("experience".parse::<View>().unwrap(), View::Experience);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "projects".parse::<View>().unwrap_err();
        assert_eq!(err, UnknownView("projects".to_string()));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Home".parse::<View>().is_err());
    }

    #[test]
    fn test_serde_uses_snake_case() {
        assert_eq!(serde_json::to_value(View::Experience).unwrap(), "experience");
        let v: View = serde_json::from_str("\"home\"").unwrap();
        assert_eq!(v, View::Home);
    }
}
