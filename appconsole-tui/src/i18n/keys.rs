//! Translation keys
//!
//! Grouped by where the text appears:
//!
//! 1. Page texts live under the page (`login.*`, `canvas.*`, ...)
//! 2. Everything shown inside a modal lives under `modal.*`
//! 3. Form field labels live under `form.*`
//! 4. Words used in many places live under `common.*`
//! 5. Key hints live under `hints.*`

pub struct Translations {
    pub common: CommonTexts,
    pub hints: HintTexts,
    pub nav: NavTexts,
    pub login: LoginTexts,
    pub canvas: CanvasTexts,
    pub panels: PanelTexts,
    pub cutoff: CutoffTexts,
    pub settings: SettingsTexts,
    pub public: PublicTexts,
    pub form: FormLabels,
    pub modal: ModalTexts,
    pub help: HelpTexts,
}

pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
    pub no_data: &'static str,
    pub on: &'static str,
    pub off: &'static str,
    pub none: &'static str,
    pub read_only: &'static str,
    pub unsaved: &'static str,
    pub refreshing: &'static str,
    pub already_refreshing: &'static str,
    pub session_expired: &'static str,
    pub logged_out: &'static str,
    pub logging_out: &'static str,
    pub admin: &'static str,
    pub member: &'static str,
}

pub struct HintTexts {
    pub navigate: &'static str,
    pub select: &'static str,
    pub open: &'static str,
    pub back: &'static str,
    pub switch_panel: &'static str,
    pub add: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub toggle: &'static str,
    pub save: &'static str,
    pub publish: &'static str,
    pub duplicate: &'static str,
    pub reorder: &'static str,
    pub preview: &'static str,
    pub screens: &'static str,
    pub new_screen: &'static str,
    pub upload: &'static str,
    pub change: &'static str,
    pub submit: &'static str,
    pub resend: &'static str,
    pub switch_realm: &'static str,
    pub refresh: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

pub struct NavTexts {
    pub menu: &'static str,
    pub canvas: &'static str,
    pub rewards: &'static str,
    pub promos: &'static str,
    pub feedback: &'static str,
    pub markdown: &'static str,
    pub sessions: &'static str,
    pub cutoff: &'static str,
    pub activity: &'static str,
    pub settings: &'static str,
    pub logout: &'static str,
}

pub struct LoginTexts {
    pub admin_title: &'static str,
    pub member_title: &'static str,
    pub phone_label: &'static str,
    pub phone_placeholder: &'static str,
    pub code_label: &'static str,
    pub code_sent_to: &'static str,
    pub resend_in: &'static str,
    pub resend_ready: &'static str,
    pub sending: &'static str,
    pub verifying: &'static str,
    pub welcome: &'static str,
}

pub struct CanvasTexts {
    pub no_screens: &'static str,
    pub empty_screen: &'static str,
    pub widgets: &'static str,
    pub screen_settings: &'static str,
    pub phone_preview: &'static str,
    pub publishing: &'static str,
    pub uploading: &'static str,
    pub max_buttons_alert: &'static str,
    pub upload_failed: &'static str,
    pub section_basic: &'static str,
    pub section_display: &'static str,
    pub section_action_buttons: &'static str,
    pub section_header_background: &'static str,
    pub title: &'static str,
    pub header_style: &'static str,
    pub display_type: &'static str,
    pub balance_variant: &'static str,
    pub menu_icon: &'static str,
    pub add_menu_icon: &'static str,
    pub header_fade: &'static str,
    pub drag_handle: &'static str,
    pub carousel_height: &'static str,
    pub action_button: &'static str,
    pub add_action_button: &'static str,
    pub background: &'static str,
    pub set_background_url: &'static str,
    pub upload_background: &'static str,
    pub unknown_widget: &'static str,
    pub more: &'static str,
}

pub struct PanelTexts {
    pub empty: &'static str,
    pub busy: &'static str,
    pub creating: &'static str,
    pub active: &'static str,
    pub inactive: &'static str,
    pub resolved: &'static str,
    pub open: &'static str,
    pub published: &'static str,
    pub draft: &'static str,
    pub not_allowed: &'static str,
}

pub struct CutoffTexts {
    pub enabled: &'static str,
    pub timezone: &'static str,
    pub times: &'static str,
    pub empty: &'static str,
    pub saving: &'static str,
}

pub struct SettingsTexts {
    pub theme: &'static str,
    pub dark: &'static str,
    pub light: &'static str,
    pub language: &'static str,
    pub sidebar: &'static str,
    pub shown: &'static str,
    pub hidden: &'static str,
    pub api_base: &'static str,
    pub data_dir: &'static str,
    pub signed_in_as: &'static str,
}

pub struct PublicTexts {
    pub content_title: &'static str,
    pub privacy_title: &'static str,
    pub not_cached: &'static str,
    pub login_hint: &'static str,
}

pub struct FormLabels {
    pub name: &'static str,
    pub description: &'static str,
    pub points: &'static str,
    pub stock: &'static str,
    pub image_url: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub start_date: &'static str,
    pub end_date: &'static str,
    pub route: &'static str,
    pub url: &'static str,
    pub slug: &'static str,
    pub content: &'static str,
    pub text_size: &'static str,
    pub height: &'static str,
    pub columns: &'static str,
    pub limit: &'static str,
    pub variant: &'static str,
    pub icon: &'static str,
    pub icon_url: &'static str,
    pub button_type: &'static str,
    pub tooltip: &'static str,
    pub label: &'static str,
    pub time: &'static str,
    pub screen_key: &'static str,
    pub file_path: &'static str,
}

pub struct ModalTexts {
    pub confirm_delete_title: &'static str,
    pub confirm_delete_prompt: &'static str,
    pub delete_button: &'static str,
    pub cancel_button: &'static str,
    pub add_widget_title: &'static str,
    pub new_screen_title: &'static str,
    pub edit_title: &'static str,
    pub new_title: &'static str,
    pub upload_title: &'static str,
    pub background_url_title: &'static str,
    pub error_title: &'static str,
    pub alert_title: &'static str,
    pub form_hint: &'static str,
}

pub struct HelpTexts {
    pub title: &'static str,
    /// `(keys, action)` rows.
    pub rows: &'static [(&'static str, &'static str)],
}
