//! Editable text forms
//!
//! Records are edited as a flat list of text fields. [`FormRecord`] turns
//! a record into its fields and parses the edited values back; backend
//! validation (`PanelResource::validate`) still runs when the record is
//! saved.

use chrono::NaiveDate;

use appconsole_core::types::{
    is_valid_cutoff_time, ActionButton, ActivityLog, ContentSection, CutoffTime, Feedback,
    MarkdownDoc, MenuItem, Promo, Reward, SessionRecord,
};

use crate::i18n::t;

/// One labelled input of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: &'static str,
    pub value: String,
}

impl FormField {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// A record that can be edited through a form.
pub trait FormRecord: Sized {
    fn form_fields(&self) -> Vec<FormField>;

    /// Write the edited values back. `values` follows the order of
    /// [`Self::form_fields`]; the error names the offending field.
    fn apply_form(&mut self, values: &[String]) -> Result<(), String>;
}

fn value(values: &[String], index: usize) -> &str {
    values.get(index).map_or("", |v| v.trim())
}

fn optional(raw: &str) -> Option<String> {
    (!raw.is_empty()).then(|| raw.to_string())
}

fn number(label: &str, raw: &str) -> Result<u32, String> {
    raw.parse()
        .map_err(|_| format!("{label}: '{raw}' is not a number"))
}

fn optional_number(label: &str, raw: &str) -> Result<Option<u32>, String> {
    if raw.is_empty() {
        return Ok(None);
    }
    number(label, raw).map(Some)
}

fn optional_date(label: &str, raw: &str) -> Result<Option<String>, String> {
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|d| Some(d.format("%Y-%m-%d").to_string()))
        .map_err(|_| format!("{label}: '{raw}' is not a date"))
}

fn unnumbered(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl FormRecord for Reward {
    fn form_fields(&self) -> Vec<FormField> {
        let f = &t().form;
        vec![
            FormField::new(f.name, &self.name),
            FormField::new(f.description, &self.description),
            FormField::new(f.points, self.points.to_string()),
            FormField::new(f.stock, unnumbered(self.stock)),
            FormField::new(f.image_url, &self.image_url),
        ]
    }

    fn apply_form(&mut self, values: &[String]) -> Result<(), String> {
        let f = &t().form;
        let points = number(f.points, value(values, 2))?;
        let stock = optional_number(f.stock, value(values, 3))?;
        self.name = value(values, 0).to_string();
        self.description = value(values, 1).to_string();
        self.points = points;
        self.stock = stock;
        self.image_url = value(values, 4).to_string();
        Ok(())
    }
}

impl FormRecord for Promo {
    fn form_fields(&self) -> Vec<FormField> {
        let f = &t().form;
        vec![
            FormField::new(f.title, &self.title),
            FormField::new(f.description, &self.description),
            FormField::new(f.image_url, &self.image_url),
            FormField::new(f.start_date, self.start_date.clone().unwrap_or_default()),
            FormField::new(f.end_date, self.end_date.clone().unwrap_or_default()),
            FormField::new(f.route, self.route.clone().unwrap_or_default()),
            FormField::new(f.url, self.url.clone().unwrap_or_default()),
        ]
    }

    fn apply_form(&mut self, values: &[String]) -> Result<(), String> {
        let f = &t().form;
        let start_date = optional_date(f.start_date, value(values, 3))?;
        let end_date = optional_date(f.end_date, value(values, 4))?;
        self.title = value(values, 0).to_string();
        self.description = value(values, 1).to_string();
        self.image_url = value(values, 2).to_string();
        self.start_date = start_date;
        self.end_date = end_date;
        self.route = optional(value(values, 5));
        self.url = optional(value(values, 6));
        Ok(())
    }
}

impl FormRecord for MarkdownDoc {
    fn form_fields(&self) -> Vec<FormField> {
        let f = &t().form;
        vec![
            FormField::new(f.title, &self.title),
            FormField::new(f.slug, &self.slug),
            FormField::new(f.content, self.content.replace('\n', "\\n")),
        ]
    }

    fn apply_form(&mut self, values: &[String]) -> Result<(), String> {
        self.title = value(values, 0).to_string();
        self.slug = value(values, 1).to_string();
        self.content = value(values, 2).replace("\\n", "\n");
        Ok(())
    }
}

impl FormRecord for CutoffTime {
    fn form_fields(&self) -> Vec<FormField> {
        let f = &t().form;
        vec![
            FormField::new(f.label, &self.label),
            FormField::new(f.time, &self.time),
        ]
    }

    fn apply_form(&mut self, values: &[String]) -> Result<(), String> {
        let time = value(values, 1);
        if !is_valid_cutoff_time(time) {
            return Err(format!("{}: '{time}' is not HH:MM", t().form.time));
        }
        self.label = value(values, 0).to_string();
        self.time = time.to_string();
        Ok(())
    }
}

impl FormRecord for ContentSection {
    fn form_fields(&self) -> Vec<FormField> {
        let f = &t().form;
        vec![
            FormField::new(f.title, self.title.clone().unwrap_or_default()),
            FormField::new(f.subtitle, self.subtitle.clone().unwrap_or_default()),
            FormField::new(f.text_size, unnumbered(self.text_size)),
            FormField::new(f.height, unnumbered(self.height)),
            FormField::new(f.columns, unnumbered(self.columns)),
            FormField::new(f.limit, unnumbered(self.limit)),
            FormField::new(
                f.variant,
                self.variant.map(|v| v.to_string()).unwrap_or_default(),
            ),
        ]
    }

    fn apply_form(&mut self, values: &[String]) -> Result<(), String> {
        let f = &t().form;
        let text_size = optional_number(f.text_size, value(values, 2))?;
        let height = optional_number(f.height, value(values, 3))?;
        let columns = optional_number(f.columns, value(values, 4))?;
        let limit = optional_number(f.limit, value(values, 5))?;
        let variant = optional_number(f.variant, value(values, 6))?.map(i64::from);
        self.title = optional(value(values, 0));
        self.subtitle = optional(value(values, 1));
        self.text_size = text_size;
        self.height = height;
        self.columns = columns;
        self.limit = limit;
        self.variant = variant;
        Ok(())
    }
}

impl FormRecord for ActionButton {
    fn form_fields(&self) -> Vec<FormField> {
        let f = &t().form;
        vec![
            FormField::new(f.icon, &self.icon),
            FormField::new(f.route, &self.route),
            FormField::new(f.button_type, &self.kind),
            FormField::new(f.tooltip, &self.tooltip),
        ]
    }

    fn apply_form(&mut self, values: &[String]) -> Result<(), String> {
        self.icon = value(values, 0).to_string();
        self.route = value(values, 1).to_string();
        self.kind = value(values, 2).to_string();
        self.tooltip = value(values, 3).to_string();
        Ok(())
    }
}

impl FormRecord for MenuItem {
    fn form_fields(&self) -> Vec<FormField> {
        let f = &t().form;
        vec![
            FormField::new(f.title, &self.title),
            FormField::new(f.icon_url, &self.icon_url),
            FormField::new(f.text_size, unnumbered(self.text_size)),
            FormField::new(f.route, self.route.clone().unwrap_or_default()),
            FormField::new(f.url, self.url.clone().unwrap_or_default()),
        ]
    }

    fn apply_form(&mut self, values: &[String]) -> Result<(), String> {
        let text_size = optional_number(t().form.text_size, value(values, 2))?;
        self.title = value(values, 0).to_string();
        self.icon_url = value(values, 1).to_string();
        self.text_size = text_size;
        self.route = optional(value(values, 3));
        self.url = optional(value(values, 4));
        Ok(())
    }
}

macro_rules! not_editable {
    ($($record:ty),+) => {
        $(
            impl FormRecord for $record {
                fn form_fields(&self) -> Vec<FormField> {
                    Vec::new()
                }

                fn apply_form(&mut self, _values: &[String]) -> Result<(), String> {
                    Ok(())
                }
            }
        )+
    };
}

// Written by members or the backend; the console only flags or removes them.
not_editable!(Feedback, SessionRecord, ActivityLog);

#[cfg(test)]
mod tests {
    use super::*;

    fn values(fields: &[FormField]) -> Vec<String> {
        fields.iter().map(|f| f.value.clone()).collect()
    }

    #[test]
    fn reward_form_parses_numbers() {
        let mut reward = Reward::default();
        let mut edited = values(&reward.form_fields());
        edited[0] = " Voucher ".into();
        edited[2] = "150".into();
        edited[3] = String::new();
        reward.apply_form(&edited).unwrap();
        assert_eq!(reward.name, "Voucher");
        assert_eq!(reward.points, 150);
        assert_eq!(reward.stock, None);

        edited[2] = "many".into();
        let err = reward.apply_form(&edited).unwrap_err();
        assert!(err.contains("many"));
        assert_eq!(reward.points, 150, "a rejected form leaves the record untouched");
    }

    #[test]
    fn promo_dates_must_be_calendar_dates() {
        let mut promo = Promo::default();
        let mut edited = values(&promo.form_fields());
        edited[0] = "Diskon".into();
        edited[3] = "2024-02-30".into();
        assert!(promo.apply_form(&edited).is_err());

        edited[3] = "2024-02-01".into();
        edited[5] = "/rewards".into();
        promo.apply_form(&edited).unwrap();
        assert_eq!(promo.start_date.as_deref(), Some("2024-02-01"));
        assert_eq!(promo.end_date, None);
        assert_eq!(promo.route.as_deref(), Some("/rewards"));
        assert_eq!(promo.url, None);
    }

    #[test]
    fn markdown_content_keeps_line_breaks() {
        let mut doc = MarkdownDoc {
            content: "# Title\nBody".into(),
            ..MarkdownDoc::default()
        };
        let fields = doc.form_fields();
        assert_eq!(fields[2].value, "# Title\\nBody");
        doc.apply_form(&values(&fields)).unwrap();
        assert_eq!(doc.content, "# Title\nBody");
    }

    #[test]
    fn cutoff_time_is_checked() {
        let mut cutoff = CutoffTime::default();
        assert!(cutoff
            .apply_form(&["Pagi".into(), "25:00".into()])
            .is_err());
        cutoff.apply_form(&["Pagi".into(), "09:30".into()]).unwrap();
        assert_eq!(cutoff.time, "09:30");
    }

    #[test]
    fn widget_form_clears_empty_fields() {
        let mut widget = ContentSection {
            title: Some("Old".into()),
            columns: Some(4),
            ..ContentSection::default()
        };
        let mut edited = values(&widget.form_fields());
        edited[0] = String::new();
        edited[4] = "3".into();
        edited[6] = "2".into();
        widget.apply_form(&edited).unwrap();
        assert_eq!(widget.title, None);
        assert_eq!(widget.columns, Some(3));
        assert_eq!(widget.variant, Some(2));
    }
}
