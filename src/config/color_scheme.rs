use crate::ui::theme::Theme;

/// Environment variable terminals use to advertise their default colors.
const COLORFGBG: &str = "COLORFGBG";

/// The terminal's preferred color scheme, used when no theme was persisted.
pub fn preferred_theme() -> Theme {
    preferred_theme_from(std::env::var(COLORFGBG).ok().as_deref())
}

/// Interpret a `COLORFGBG` value (`"fg;bg"` or `"fg;default;bg"`).
///
/// A light ANSI background (7, or 9..=15) means light; anything else,
/// including a missing or unparsable value, means dark.
pub fn preferred_theme_from(colorfgbg: Option<&str>) -> Theme {
    let background = colorfgbg
        .and_then(|value| value.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok());

    match background {
        Some(7) | Some(9..=15) => Theme::Light,
        _ => Theme::Dark,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_backgrounds() {
        assert_eq!(preferred_theme_from(Some("0;15")), Theme::Light);
        assert_eq!(preferred_theme_from(Some("0;7")), Theme::Light);
        assert_eq!(preferred_theme_from(Some("0;default;15")), Theme::Light);
    }

    #[test]
    fn dark_backgrounds() {
        assert_eq!(preferred_theme_from(Some("15;0")), Theme::Dark);
        assert_eq!(preferred_theme_from(Some("7;8")), Theme::Dark);
    }

    #[test]
    fn unknown_falls_back_to_dark() {
        assert_eq!(preferred_theme_from(None), Theme::Dark);
        assert_eq!(preferred_theme_from(Some("")), Theme::Dark);
        assert_eq!(preferred_theme_from(Some("15;default")), Theme::Dark);
    }
}
