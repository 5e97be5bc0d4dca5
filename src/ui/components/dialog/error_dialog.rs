//! Error dialog component

use super::base::{render_dialog, DialogConfig};
use crate::i18n::Translator;
use crate::preferences::Palette;
use ratatui::{
    style::{Modifier, Style},
    text::Span,
    Frame,
};

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(
    frame: &mut Frame,
    error_message: &str,
    palette: &Palette,
    translator: &Translator,
) {
    let key_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::styled("Enter", key_style),
        Span::raw(" / "),
        Span::styled("Esc", key_style),
        Span::styled(" ✕", Style::default().fg(palette.muted)),
    ];
    let title = translator.t("titles.error", "Error");

    render_dialog(
        frame,
        DialogConfig {
            title: &title,
            accent: palette.error,
            background: palette.background,
            message: error_message,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
