//! Header text derivation

use chrono::Timelike;
use serde::Serialize;

use crate::types::HeaderStyle;

/// Data the header can show. Previews fill it with sample values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderContext {
    pub greeting: String,
    pub user_name: String,
    pub screen_title: String,
    pub app_title: String,
    /// Formatted balance, e.g. `Rp 1.250.000`.
    pub balance: String,
    /// Formatted points, e.g. `2.500 poin`.
    pub points: String,
}

impl HeaderContext {
    /// Sample context used by the editor previews.
    pub fn sample(screen_title: &str, app_title: &str, hour: u32) -> Self {
        Self {
            greeting: greeting_for_hour(hour).to_string(),
            user_name: "Budi Santoso".to_string(),
            screen_title: screen_title.to_string(),
            app_title: app_title.to_string(),
            balance: "Rp 1.250.000".to_string(),
            points: "2.500 poin".to_string(),
        }
    }

    /// Sample context for the current local hour.
    pub fn sample_now(screen_title: &str, app_title: &str) -> Self {
        Self::sample(screen_title, app_title, chrono::Local::now().hour())
    }
}

/// What the header renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderContent {
    /// Small line above the main text; may be empty.
    pub top_text: String,
    pub main_text: String,
    pub show_balance: bool,
}

/// Indonesian greeting for an hour of the day (0–23).
pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour % 24 {
        4..=10 => "Selamat Pagi",
        11..=14 => "Selamat Siang",
        15..=17 => "Selamat Sore",
        _ => "Selamat Malam",
    }
}

/// Header text for a style. Total over every [`HeaderStyle`].
pub fn header_content(style: HeaderStyle, ctx: &HeaderContext) -> HeaderContent {
    use HeaderStyle as S;

    let (top, main, show_balance): (&str, &str, bool) = match style {
        S::GreetingName => (&ctx.greeting, &ctx.user_name, false),
        S::GreetingNameBalance => (&ctx.greeting, &ctx.user_name, true),
        S::NameOnly => ("", &ctx.user_name, false),
        S::NameBalance => ("", &ctx.user_name, true),
        S::TitleOnly => ("", &ctx.screen_title, false),
        S::TitleBalance => ("", &ctx.screen_title, true),
        S::AppTitle => ("", &ctx.app_title, false),
        S::AppTitleBalance => ("", &ctx.app_title, true),
        S::GreetingOnly => ("", &ctx.greeting, false),
        S::GreetingBalance => ("", &ctx.greeting, true),
        S::GreetingTitle => (&ctx.greeting, &ctx.screen_title, false),
        S::GreetingTitleBalance => (&ctx.greeting, &ctx.screen_title, true),
        S::NameTitle => (&ctx.user_name, &ctx.screen_title, false),
        S::NameTitleBalance => (&ctx.user_name, &ctx.screen_title, true),
        S::AppTitleName => (&ctx.app_title, &ctx.user_name, false),
        S::AppTitleGreeting => (&ctx.app_title, &ctx.greeting, false),
        S::BalanceOnly => ("", &ctx.balance, true),
    };

    HeaderContent {
        top_text: top.to_string(),
        main_text: main.to_string(),
        show_balance,
    }
}
