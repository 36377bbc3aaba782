//! Bahasa Indonesia (id-ID)

use super::keys::{
    CanvasTexts, CommonTexts, CutoffTexts, FormLabels, HelpTexts, HintTexts, LoginTexts,
    ModalTexts, NavTexts, PanelTexts, PublicTexts, SettingsTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Konsol Aplikasi",
        loading: "Memuat...",
        no_data: "Tidak ada data",
        on: "Aktif",
        off: "Nonaktif",
        none: "Tidak ada",
        read_only: "hanya baca",
        unsaved: "perubahan belum disimpan",
        refreshing: "Memuat ulang...",
        already_refreshing: "Sedang memuat ulang",
        session_expired: "Sesi berakhir, silakan masuk kembali",
        logged_out: "Berhasil keluar",
        logging_out: "Keluar...",
        admin: "Admin",
        member: "Member",
    },

    hints: HintTexts {
        navigate: "Navigasi",
        select: "Pilih",
        open: "Buka",
        back: "Kembali",
        switch_panel: "Pindah panel",
        add: "Tambah",
        edit: "Ubah",
        delete: "Hapus",
        toggle: "Aktif/nonaktif",
        save: "Simpan",
        publish: "Terbitkan",
        duplicate: "Duplikat",
        reorder: "Urutkan",
        preview: "Pratinjau/Pengaturan",
        screens: "Layar",
        new_screen: "Layar baru",
        upload: "Unggah",
        change: "Ganti",
        submit: "Kirim",
        resend: "Kirim ulang OTP",
        switch_realm: "Admin/Member",
        refresh: "Muat ulang",
        help: "Bantuan",
        quit: "Keluar",
    },

    nav: NavTexts {
        menu: "Menu",
        canvas: "Kanvas",
        rewards: "Hadiah",
        promos: "Promo",
        feedback: "Masukan",
        markdown: "Konten",
        sessions: "Sesi",
        cutoff: "Jam Tutup",
        activity: "Log Aktivitas",
        settings: "Pengaturan",
        logout: "Keluar",
    },

    login: LoginTexts {
        admin_title: "Masuk Admin",
        member_title: "Masuk Member",
        phone_label: "Nomor HP",
        phone_placeholder: "0812...",
        code_label: "Kode OTP",
        code_sent_to: "Kode dikirim ke",
        resend_in: "Kirim ulang dalam",
        resend_ready: "Alt+r untuk kirim ulang kode",
        sending: "Mengirim OTP...",
        verifying: "Memverifikasi...",
        welcome: "Selamat datang",
    },

    canvas: CanvasTexts {
        no_screens: "Konfigurasi aplikasi belum punya layar. Alt+n untuk membuat.",
        empty_screen: "Belum ada widget. Alt+a untuk menambah.",
        widgets: "Widget",
        screen_settings: "Pengaturan layar",
        phone_preview: "Pratinjau",
        publishing: "Menerbitkan...",
        uploading: "Mengunggah...",
        max_buttons_alert: "Satu layar maksimal punya 2 tombol aksi.",
        upload_failed: "Unggahan tidak mengembalikan URL yang bisa dipakai.",
        section_basic: "Dasar",
        section_display: "Tampilan",
        section_action_buttons: "Tombol aksi",
        section_header_background: "Latar header",
        title: "Judul",
        header_style: "Gaya header",
        display_type: "Jenis tampilan",
        balance_variant: "Varian kartu saldo",
        menu_icon: "Ikon menu",
        add_menu_icon: "+ Tambah ikon menu",
        header_fade: "Efek pudar header",
        drag_handle: "Pegangan geser",
        carousel_height: "Tinggi carousel",
        action_button: "Tombol",
        add_action_button: "+ Tambah tombol aksi",
        background: "Latar",
        set_background_url: "Atur URL latar",
        upload_background: "Unggah gambar latar",
        unknown_widget: "Widget tidak dikenal",
        more: "Lainnya",
    },

    panels: PanelTexts {
        empty: "Belum ada data",
        busy: "menyimpan",
        creating: "Membuat...",
        active: "aktif",
        inactive: "nonaktif",
        resolved: "selesai",
        open: "terbuka",
        published: "terbit",
        draft: "draf",
        not_allowed: "Tidak tersedia di panel ini",
    },

    cutoff: CutoffTexts {
        enabled: "Aktif",
        timezone: "Zona waktu",
        times: "Jam tutup",
        empty: "Belum ada jam tutup. Alt+a untuk menambah.",
        saving: "Menyimpan...",
    },

    settings: SettingsTexts {
        theme: "Tema",
        dark: "Gelap",
        light: "Terang",
        language: "Bahasa",
        sidebar: "Menu samping",
        shown: "Tampil",
        hidden: "Sembunyi",
        api_base: "Server",
        data_dir: "Folder data",
        signed_in_as: "Masuk sebagai",
    },

    public: PublicTexts {
        content_title: "Konten",
        privacy_title: "Kebijakan Privasi",
        not_cached: "Halaman ini belum diunduh. Masuk sekali sebagai admin untuk mengambilnya.",
        login_hint: "Esc: ke halaman masuk",
    },

    form: FormLabels {
        name: "Nama",
        description: "Deskripsi",
        points: "Poin",
        stock: "Stok",
        image_url: "URL gambar",
        title: "Judul",
        subtitle: "Subjudul",
        start_date: "Tanggal mulai (YYYY-MM-DD)",
        end_date: "Tanggal selesai (YYYY-MM-DD)",
        route: "Rute",
        url: "URL",
        slug: "Slug",
        content: "Isi (\\n untuk baris baru)",
        text_size: "Ukuran teks",
        height: "Tinggi",
        columns: "Kolom",
        limit: "Baris",
        variant: "Varian (1-8)",
        icon: "Ikon",
        icon_url: "URL ikon",
        button_type: "Jenis",
        tooltip: "Tooltip",
        label: "Label",
        time: "Jam (HH:MM)",
        screen_key: "Kunci layar",
        file_path: "Lokasi file",
    },

    modal: ModalTexts {
        confirm_delete_title: "Konfirmasi Hapus",
        confirm_delete_prompt: "Hapus",
        delete_button: "Hapus",
        cancel_button: "Batal",
        add_widget_title: "Tambah Widget",
        new_screen_title: "Layar Baru",
        edit_title: "Ubah",
        new_title: "Baru",
        upload_title: "Unggah Latar Header",
        background_url_title: "URL Latar Header",
        error_title: "Kesalahan",
        alert_title: "Pemberitahuan",
        form_hint: "Tab/↑↓ kolom · Enter simpan · Esc batal",
    },

    help: HelpTexts {
        title: "Pintasan Keyboard",
        rows: &[
            ("Tab", "Pindah antara menu dan konten"),
            ("↑↓ / j k", "Pindah pilihan"),
            ("Enter", "Buka / ganti"),
            ("Alt+a / Alt+e / Alt+d", "Tambah / ubah / hapus"),
            ("Alt+t", "Aktif/nonaktifkan"),
            ("Alt+s", "Simpan atau terbitkan"),
            ("Shift+↑↓", "Pindahkan widget"),
            ("Alt+c", "Duplikat widget"),
            ("Alt+p", "Pratinjau atau pengaturan layar"),
            ("[ ]", "Layar sebelumnya / berikutnya"),
            ("Alt+r", "Muat ulang"),
            ("Alt+l", "Keluar akun"),
            ("Esc", "Kembali / tutup"),
            ("Alt+q / Ctrl+c", "Keluar aplikasi"),
        ],
    },
};
