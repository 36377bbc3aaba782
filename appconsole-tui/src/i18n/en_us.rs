//! English (en-US)

use super::keys::{
    CanvasTexts, CommonTexts, CutoffTexts, FormLabels, HelpTexts, HintTexts, LoginTexts,
    ModalTexts, NavTexts, PanelTexts, PublicTexts, SettingsTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "App Console",
        loading: "Loading...",
        no_data: "No data",
        on: "On",
        off: "Off",
        none: "None",
        read_only: "read-only",
        unsaved: "unsaved changes",
        refreshing: "Refreshing...",
        already_refreshing: "A refresh is already running",
        session_expired: "Session expired, please log in again",
        logged_out: "Logged out",
        logging_out: "Logging out...",
        admin: "Admin",
        member: "Member",
    },

    hints: HintTexts {
        navigate: "Navigate",
        select: "Select",
        open: "Open",
        back: "Back",
        switch_panel: "Switch panel",
        add: "Add",
        edit: "Edit",
        delete: "Delete",
        toggle: "Toggle",
        save: "Save",
        publish: "Publish",
        duplicate: "Duplicate",
        reorder: "Reorder",
        preview: "Preview/Settings",
        screens: "Screens",
        new_screen: "New screen",
        upload: "Upload",
        change: "Change",
        submit: "Submit",
        resend: "Resend OTP",
        switch_realm: "Admin/Member",
        refresh: "Refresh",
        help: "Help",
        quit: "Quit",
    },

    nav: NavTexts {
        menu: "Menu",
        canvas: "Canvas",
        rewards: "Rewards",
        promos: "Promos",
        feedback: "Feedback",
        markdown: "Content",
        sessions: "Sessions",
        cutoff: "Cutoff Times",
        activity: "Activity Log",
        settings: "Settings",
        logout: "Log out",
    },

    login: LoginTexts {
        admin_title: "Admin Login",
        member_title: "Member Login",
        phone_label: "Phone number",
        phone_placeholder: "0812...",
        code_label: "OTP code",
        code_sent_to: "Code sent to",
        resend_in: "Resend available in",
        resend_ready: "Alt+r to resend the code",
        sending: "Sending OTP...",
        verifying: "Verifying...",
        welcome: "Welcome",
    },

    canvas: CanvasTexts {
        no_screens: "The app configuration has no screens. Alt+n creates one.",
        empty_screen: "No widgets yet. Alt+a adds one.",
        widgets: "Widgets",
        screen_settings: "Screen settings",
        phone_preview: "Preview",
        publishing: "Publishing...",
        uploading: "Uploading...",
        max_buttons_alert: "A screen can have at most 2 action buttons.",
        upload_failed: "The upload did not return a usable URL.",
        section_basic: "Basic",
        section_display: "Display",
        section_action_buttons: "Action buttons",
        section_header_background: "Header background",
        title: "Title",
        header_style: "Header style",
        display_type: "Display type",
        balance_variant: "Balance card variant",
        menu_icon: "Menu icon",
        add_menu_icon: "+ Add menu icon",
        header_fade: "Header fade",
        drag_handle: "Drag handle",
        carousel_height: "Carousel height",
        action_button: "Button",
        add_action_button: "+ Add action button",
        background: "Background",
        set_background_url: "Set background URL",
        upload_background: "Upload background image",
        unknown_widget: "Unknown widget",
        more: "More",
    },

    panels: PanelTexts {
        empty: "Nothing here yet",
        busy: "saving",
        creating: "Creating...",
        active: "active",
        inactive: "inactive",
        resolved: "resolved",
        open: "open",
        published: "published",
        draft: "draft",
        not_allowed: "Not available on this panel",
    },

    cutoff: CutoffTexts {
        enabled: "Enabled",
        timezone: "Timezone",
        times: "Cutoff times",
        empty: "No cutoff times. Alt+a adds one.",
        saving: "Saving...",
    },

    settings: SettingsTexts {
        theme: "Theme",
        dark: "Dark",
        light: "Light",
        language: "Language",
        sidebar: "Sidebar",
        shown: "Shown",
        hidden: "Hidden",
        api_base: "Backend",
        data_dir: "Data directory",
        signed_in_as: "Signed in as",
    },

    public: PublicTexts {
        content_title: "Content",
        privacy_title: "Privacy Policy",
        not_cached: "This page has not been downloaded yet. Log in once as admin to fetch it.",
        login_hint: "Esc: go to login",
    },

    form: FormLabels {
        name: "Name",
        description: "Description",
        points: "Points",
        stock: "Stock",
        image_url: "Image URL",
        title: "Title",
        subtitle: "Subtitle",
        start_date: "Start date (YYYY-MM-DD)",
        end_date: "End date (YYYY-MM-DD)",
        route: "Route",
        url: "URL",
        slug: "Slug",
        content: "Content (\\n for new lines)",
        text_size: "Text size",
        height: "Height",
        columns: "Columns",
        limit: "Rows",
        variant: "Variant (1-8)",
        icon: "Icon",
        icon_url: "Icon URL",
        button_type: "Type",
        tooltip: "Tooltip",
        label: "Label",
        time: "Time (HH:MM)",
        screen_key: "Screen key",
        file_path: "File path",
    },

    modal: ModalTexts {
        confirm_delete_title: "Confirm Delete",
        confirm_delete_prompt: "Delete",
        delete_button: "Delete",
        cancel_button: "Cancel",
        add_widget_title: "Add Widget",
        new_screen_title: "New Screen",
        edit_title: "Edit",
        new_title: "New",
        upload_title: "Upload Header Background",
        background_url_title: "Header Background URL",
        error_title: "Error",
        alert_title: "Notice",
        form_hint: "Tab/↑↓ field · Enter save · Esc cancel",
    },

    help: HelpTexts {
        title: "Keyboard Shortcuts",
        rows: &[
            ("Tab", "Switch between menu and content"),
            ("↑↓ / j k", "Move the selection"),
            ("Enter", "Open / change"),
            ("Alt+a / Alt+e / Alt+d", "Add / edit / delete"),
            ("Alt+t", "Toggle active flag"),
            ("Alt+s", "Save or publish"),
            ("Shift+↑↓", "Move widget"),
            ("Alt+c", "Duplicate widget"),
            ("Alt+p", "Preview or screen settings"),
            ("[ ]", "Previous / next screen"),
            ("Alt+r", "Refresh"),
            ("Alt+l", "Log out"),
            ("Esc", "Back / close"),
            ("Alt+q / Ctrl+c", "Quit"),
        ],
    },
};
