//! Panel bindings of the record types

use std::collections::HashSet;

use appconsole_api::Resource;

use crate::panels::{Capabilities, DocumentResource, PanelResource};
use crate::route_args::{descriptor_for, validate};
use crate::types::{
    ActivityLog, AppConfig, CutoffConfig, Feedback, MarkdownDoc, Promo, Reward, SessionRecord,
    MAX_ACTION_BUTTONS,
};

fn required(value: &str, field: &str, errors: &mut Vec<String>) {
    if value.trim().is_empty() {
        errors.push(format!("{field} is required"));
    }
}

impl PanelResource for Reward {
    const RESOURCE: Resource = Resource::Rewards;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn detail(&self) -> String {
        match self.stock {
            Some(stock) => format!("{} poin, stok {stock}", self.points),
            None => format!("{} poin", self.points),
        }
    }

    fn is_active(&self) -> Option<bool> {
        Some(self.active)
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        required(&self.name, "Name", &mut errors);
        if self.points == 0 {
            errors.push("Points must be greater than zero".to_string());
        }
        errors
    }
}

impl PanelResource for Promo {
    const RESOURCE: Resource = Resource::Promos;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        self.title.clone()
    }

    fn detail(&self) -> String {
        match (&self.start_date, &self.end_date) {
            (Some(start), Some(end)) => format!("{start} - {end}"),
            (Some(start), None) => format!("from {start}"),
            (None, Some(end)) => format!("until {end}"),
            (None, None) => String::new(),
        }
    }

    fn is_active(&self) -> Option<bool> {
        Some(self.active)
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        required(&self.title, "Title", &mut errors);
        if let (Some(start), Some(end)) = (&self.start_date, &self.end_date) {
            if end < start {
                errors.push("End date is before start date".to_string());
            }
        }
        if self.route.is_some() || self.url.is_some() {
            errors.extend(validate(&descriptor_for(self)).errors);
        }
        errors
    }
}

impl PanelResource for Feedback {
    const RESOURCE: Resource = Resource::Feedback;
    const CAPABILITIES: Capabilities = Capabilities {
        create: false,
        edit: false,
        toggle: true,
        delete: true,
    };

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        if self.name.is_empty() {
            self.phone.clone()
        } else {
            self.name.clone()
        }
    }

    fn detail(&self) -> String {
        let stars = self.rating.map(|r| "★".repeat(usize::from(r.min(5))));
        match stars {
            Some(stars) => format!("{stars} {}", self.message),
            None => self.message.clone(),
        }
    }

    /// "Resolved" is the toggleable flag of feedback.
    fn is_active(&self) -> Option<bool> {
        Some(self.resolved)
    }

    fn set_active(&mut self, active: bool) {
        self.resolved = active;
    }
}

impl PanelResource for MarkdownDoc {
    const RESOURCE: Resource = Resource::Markdown;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        self.title.clone()
    }

    fn detail(&self) -> String {
        format!("/{} ({} chars)", self.slug, self.content.chars().count())
    }

    fn is_active(&self) -> Option<bool> {
        Some(self.published)
    }

    fn set_active(&mut self, active: bool) {
        self.published = active;
    }

    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        required(&self.title, "Title", &mut errors);
        required(&self.slug, "Slug", &mut errors);
        if self
            .slug
            .chars()
            .any(|c| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        {
            errors.push("Slug may only contain letters, digits, '-' and '_'".to_string());
        }
        errors
    }
}

impl PanelResource for SessionRecord {
    const RESOURCE: Resource = Resource::Sessions;
    const CAPABILITIES: Capabilities = Capabilities {
        create: false,
        edit: false,
        toggle: true,
        delete: true,
    };

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        if self.name.is_empty() {
            self.phone.clone()
        } else {
            format!("{} ({})", self.name, self.phone)
        }
    }

    fn detail(&self) -> String {
        let device = self.device.as_deref().unwrap_or("unknown device");
        match &self.last_active {
            Some(at) => format!("{device}, last active {}", at.format("%Y-%m-%d %H:%M")),
            None => device.to_string(),
        }
    }

    fn is_active(&self) -> Option<bool> {
        Some(self.active)
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

impl PanelResource for ActivityLog {
    const RESOURCE: Resource = Resource::ActivityLogs;
    const CAPABILITIES: Capabilities = Capabilities::READ_ONLY;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        format!("{} {}", self.admin, self.action)
    }

    fn detail(&self) -> String {
        let at = self
            .created_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        match &self.target {
            Some(target) => format!("{at} {target}").trim().to_string(),
            None => at,
        }
    }
}

impl DocumentResource for CutoffConfig {
    const RESOURCE: Resource = Resource::Cutoff;

    fn validate(&self) -> Vec<String> {
        self.validation_errors()
    }
}

impl DocumentResource for AppConfig {
    const RESOURCE: Resource = Resource::AppConfig;

    fn validate(&self) -> Vec<String> {
        validate_app_config(self)
    }
}

/// Problems that block publishing an app configuration.
pub fn validate_app_config(config: &AppConfig) -> Vec<String> {
    let mut errors = Vec::new();
    let mut names = HashSet::new();
    for screen in &config.screens {
        if screen.screen.trim().is_empty() {
            errors.push("A screen has an empty key".to_string());
        } else if !names.insert(screen.screen.as_str()) {
            errors.push(format!("Duplicate screen '{}'", screen.screen));
        }
        if screen.action_buttons.len() > MAX_ACTION_BUTTONS {
            errors.push(format!(
                "Screen '{}' has more than {MAX_ACTION_BUTTONS} action buttons",
                screen.screen
            ));
        }
        let mut instance_ids = HashSet::new();
        for widget in &screen.content {
            if widget.instance_id.is_empty() || !instance_ids.insert(widget.instance_id.as_str()) {
                errors.push(format!(
                    "Screen '{}' has a widget with a missing or duplicate instanceId",
                    screen.screen
                ));
                break;
            }
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ContentSection, ScreenConfig};

    #[test]
    fn reward_validation() {
        let reward = Reward::default();
        assert_eq!(reward.validate().len(), 2);
        let reward = Reward {
            name: "Voucher".into(),
            points: 100,
            ..Reward::default()
        };
        assert!(reward.validate().is_empty());
    }

    #[test]
    fn promo_target_must_be_exclusive() {
        let promo = Promo {
            title: "Diskon".into(),
            route: Some("/promo".into()),
            url: Some("https://x.id".into()),
            ..Promo::default()
        };
        assert_eq!(promo.validate().len(), 1);
    }

    #[test]
    fn markdown_slug_charset() {
        let doc = MarkdownDoc {
            title: "Privacy".into(),
            slug: "privacy policy".into(),
            ..MarkdownDoc::default()
        };
        assert_eq!(doc.validate().len(), 1);
    }

    #[test]
    fn app_config_validation() {
        let mut home = ScreenConfig::new("home");
        home.content = vec![
            ContentSection {
                id: "title".into(),
                instance_id: "a".into(),
                ..ContentSection::default()
            },
            ContentSection {
                id: "title".into(),
                instance_id: "a".into(),
                ..ContentSection::default()
            },
        ];
        let config = AppConfig {
            screens: vec![home, ScreenConfig::new("home")],
            ..AppConfig::default()
        };
        let errors = validate_app_config(&config);
        assert_eq!(errors.len(), 2, "{errors:?}");
    }

    #[test]
    fn capabilities() {
        assert_eq!(ActivityLog::CAPABILITIES, Capabilities::READ_ONLY);
        assert!(!Feedback::CAPABILITIES.create);
        assert!(Reward::CAPABILITIES.create);
    }
}
