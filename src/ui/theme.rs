use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSupport {
    Auto,
    Truecolor,
    Color256,
    Mono,
}

impl ColorSupport {
    pub fn from_config_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "truecolor" | "24bit" => ColorSupport::Truecolor,
            "256" | "256color" => ColorSupport::Color256,
            "mono" | "monochrome" => ColorSupport::Mono,
            _ => ColorSupport::Auto,
        }
    }
}

pub fn detect_color_support() -> ColorSupport {
    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        return ColorSupport::Truecolor;
    }
    ColorSupport::Color256
}

pub fn resolve_color_support(config: &str) -> ColorSupport {
    let parsed = ColorSupport::from_config_str(config);
    if parsed == ColorSupport::Auto {
        detect_color_support()
    } else {
        parsed
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    pub tab_active_bg: Color,
    pub tab_active_fg: Color,
    pub tab_inactive_fg: Color,
    pub border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub cpu_line: Color,
    pub memory_line: Color,
    pub table_header_fg: Color,
    pub row_highlight_bg: Color,
    pub row_highlight_fg: Color,
    pub statusbar_bg: Color,
    pub pill_key_bg: Color,
    pub pill_key_fg: Color,
    pub pill_desc_fg: Color,
    pub surface_bg: Color,
    pub accent: Color,
}

impl Theme {
    pub fn from_config(theme_name: &str, support: ColorSupport) -> Self {
        let theme = match theme_name.to_lowercase().as_str() {
            "light" => Self::light(),
            "mono" => Self::mono(),
            _ => Self::dark(),
        };
        if support == ColorSupport::Mono {
            return Self::mono();
        }
        theme.adapted_to(support)
    }

    pub fn next(&self, support: ColorSupport) -> Self {
        if support == ColorSupport::Mono {
            return Self::mono();
        }
        let next_name = match self.name {
            "dark" => "light",
            "light" => "mono",
            _ => "dark",
        };
        Theme::from_config(next_name, support)
    }

    fn adapted_to(mut self, support: ColorSupport) -> Self {
        let map = |c: Color| adapt_color(c, support);
        self.tab_active_bg = map(self.tab_active_bg);
        self.tab_active_fg = map(self.tab_active_fg);
        self.tab_inactive_fg = map(self.tab_inactive_fg);
        self.border = map(self.border);
        self.text_primary = map(self.text_primary);
        self.text_secondary = map(self.text_secondary);
        self.cpu_line = map(self.cpu_line);
        self.memory_line = map(self.memory_line);
        self.table_header_fg = map(self.table_header_fg);
        self.row_highlight_bg = map(self.row_highlight_bg);
        self.row_highlight_fg = map(self.row_highlight_fg);
        self.statusbar_bg = map(self.statusbar_bg);
        self.pill_key_bg = map(self.pill_key_bg);
        self.pill_key_fg = map(self.pill_key_fg);
        self.pill_desc_fg = map(self.pill_desc_fg);
        self.surface_bg = map(self.surface_bg);
        self.accent = map(self.accent);
        self
    }

    pub fn dark() -> Self {
        Theme {
            name: "dark",
            tab_active_bg: Color::Rgb(59, 130, 246),
            tab_active_fg: Color::Black,
            tab_inactive_fg: Color::Gray,
            border: Color::DarkGray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            cpu_line: Color::Rgb(96, 165, 250),
            memory_line: Color::Rgb(52, 211, 153),
            table_header_fg: Color::Yellow,
            row_highlight_bg: Color::Rgb(30, 41, 59),
            row_highlight_fg: Color::White,
            statusbar_bg: Color::DarkGray,
            pill_key_bg: Color::Yellow,
            pill_key_fg: Color::Black,
            pill_desc_fg: Color::White,
            surface_bg: Color::DarkGray,
            accent: Color::Rgb(96, 165, 250),
        }
    }

    pub fn light() -> Self {
        Theme {
            name: "light",
            tab_active_bg: Color::Rgb(37, 99, 235),
            tab_active_fg: Color::White,
            tab_inactive_fg: Color::DarkGray,
            border: Color::Gray,
            text_primary: Color::Black,
            text_secondary: Color::DarkGray,
            cpu_line: Color::Rgb(29, 78, 216),
            memory_line: Color::Rgb(4, 120, 87),
            table_header_fg: Color::Rgb(146, 64, 14),
            row_highlight_bg: Color::Rgb(219, 234, 254),
            row_highlight_fg: Color::Black,
            statusbar_bg: Color::Gray,
            pill_key_bg: Color::Rgb(37, 99, 235),
            pill_key_fg: Color::White,
            pill_desc_fg: Color::Black,
            surface_bg: Color::Gray,
            accent: Color::Rgb(37, 99, 235),
        }
    }

    pub fn mono() -> Self {
        Theme {
            name: "mono",
            tab_active_bg: Color::White,
            tab_active_fg: Color::Black,
            tab_inactive_fg: Color::Gray,
            border: Color::White,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            cpu_line: Color::White,
            memory_line: Color::White,
            table_header_fg: Color::White,
            row_highlight_bg: Color::White,
            row_highlight_fg: Color::Black,
            statusbar_bg: Color::Black,
            pill_key_bg: Color::White,
            pill_key_fg: Color::Black,
            pill_desc_fg: Color::White,
            surface_bg: Color::Black,
            accent: Color::White,
        }
    }
}

fn adapt_color(color: Color, support: ColorSupport) -> Color {
    match support {
        ColorSupport::Truecolor | ColorSupport::Auto => color,
        ColorSupport::Color256 => match color {
            Color::Rgb(r, g, b) => Color::Indexed(rgb_to_ansi256(r, g, b)),
            _ => color,
        },
        ColorSupport::Mono => match color {
            Color::Rgb(r, g, b) => {
                let luminance = 0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64;
                if luminance > 128.0 {
                    Color::White
                } else {
                    Color::Black
                }
            }
            Color::White | Color::Black | Color::Gray | Color::DarkGray => color,
            _ => Color::White,
        },
    }
}

fn rgb_to_ansi256(r: u8, g: u8, b: u8) -> u8 {
    let r = (r as f32 / 255.0 * 5.0).round() as u8;
    let g = (g as f32 / 255.0 * 5.0).round() as u8;
    let b = (b as f32 / 255.0 * 5.0).round() as u8;
    16 + 36 * r + 6 * g + b
}
