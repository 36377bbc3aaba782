//! Toast line shown under a page

use ratatui::{
    style::{Color, Style},
    text::Line,
};

use appconsole_core::panels::{Toast, ToastKind};

pub fn line(toast: Option<&Toast>) -> Option<Line<'static>> {
    let toast = toast?;
    let (icon, color) = match toast.kind {
        ToastKind::Success => ("✓", Color::Green),
        ToastKind::Error => ("✗", Color::Red),
        ToastKind::Info => ("ℹ", Color::Cyan),
    };
    Some(Line::styled(
        format!(" {icon} {}", toast.message),
        Style::default().fg(color),
    ))
}
