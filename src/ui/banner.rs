// Tue Jan 13 2026 - Alex

use colored::*;

const ASCII_ART: &str = r#"
  ____             _        _     _   _             _
 | __ ) _   _  ___| | _____| |_  | | | |_   _ _ __ | |_ ___ _ __
 |  _ \| | | |/ __| |/ / _ \ __| | |_| | | | | '_ \| __/ _ \ '__|
 | |_) | |_| | (__|   <  __/ |_  |  _  | |_| | | | | ||  __/ |
 |____/ \__,_|\___|_|\_\___|\__| |_| |_|\__,_|_| |_|\__\___|_|
"#;

pub struct Banner {
    subtitle: Option<String>,
    version: Option<String>,
    use_color: bool,
}

impl Banner {
    pub fn new() -> Self {
        Self {
            subtitle: None,
            version: None,
            use_color: true,
        }
    }

    pub fn with_subtitle(mut self, subtitle: &str) -> Self {
        self.subtitle = Some(subtitle.to_string());
        self
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn render(&self) -> String {
        let mut lines = Vec::new();

        for line in ASCII_ART.lines() {
            if self.use_color {
                lines.push(line.cyan().bold().to_string());
            } else {
                lines.push(line.to_string());
            }
        }

        lines.push(String::new());

        let mut info = self.subtitle.clone().unwrap_or_default();
        if let Some(version) = &self.version {
            info = format!("{} v{}", info, version).trim().to_string();
        }

        if !info.is_empty() {
            let centered = format!("{:^66}", info);
            if self.use_color {
                lines.push(centered.yellow().to_string());
            } else {
                lines.push(centered);
            }
        }

        lines.join("\n")
    }

    /// Banner goes to stderr so stdout carries only result lines.
    pub fn print(&self) {
        eprintln!("{}", self.render());
    }
}

impl Default for Banner {
    fn default() -> Self {
        Self::new()
    }
}
