use regplay::{Playground, Segment, match_label, match_span_label};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";
    pub const REVERSE: &str = "\x1b[7m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        /// Matches are marked with color when enabled, with brackets otherwise.
        pub fn mark(&self, s: &str, active: bool) -> String {
            match (self.enabled, active) {
                (true, true) => format!("{}{}{}{}", REVERSE, YELLOW, s, RESET),
                (true, false) => format!("{}{}{}", YELLOW, s, RESET),
                (false, true) => format!("[[{}]]", s),
                (false, false) => format!("[{}]", s),
            }
        }
    }
}

pub fn print_session(playground: &Playground, color: bool) {
    let palette = ansi::Palette::new(color);
    println!(
        "\n{} {}",
        palette.bold(palette.paint(format!("/{}/{}", playground.pattern(), playground.flags()), ansi::CYAN)),
        palette.dim(format!("template: {}", playground.template()))
    );

    if let Some(message) = playground.error() {
        println!("\n{} {}", palette.paint("✗ invalid pattern:", ansi::RED), message);
        println!();
        return;
    }

    println!("\n{}", palette.paint("━━━ Text ━━━", ansi::GRAY));
    print_highlight(playground, &palette);

    println!(
        "\n{} {}",
        palette.paint("━━━ Matches ━━━", ansi::GRAY),
        palette.dim(format!("{} │ {}", playground.match_count_label(), playground.list_meta()))
    );
    print_matches(playground, &palette);

    println!("\n{} {}", palette.paint("━━━ Output ━━━", ansi::GRAY), palette.dim(playground.output_meta()));
    print!("{}", playground.output());
    println!();
}

fn print_highlight(playground: &Playground, palette: &ansi::Palette) {
    let mut line = String::new();
    for segment in playground.highlight_segments() {
        match segment {
            Segment::Plain(text) => line.push_str(text),
            Segment::Match { text, active, .. } => line.push_str(&palette.mark(text, active)),
        }
    }
    println!("{}", line);
}

fn print_matches(playground: &Playground, palette: &ansi::Palette) {
    if let Some(message) = playground.empty_list_message() {
        println!("  {}", palette.dim(message));
        return;
    }

    for (idx, record) in playground.filtered_matches() {
        let marker = if playground.active() == Some(idx) { "▶" } else { " " };
        println!(
            "{} {} {} {}",
            palette.paint(marker, ansi::GREEN),
            palette.paint(format!("[{}]", idx + 1), ansi::GRAY),
            palette.bold(palette.paint(match_label(record), ansi::GREEN)),
            palette.paint(match_span_label(record), ansi::YELLOW),
        );

        for (group, value) in record.captures.iter().enumerate().skip(1) {
            println!(
                "      {} {}",
                palette.dim(format!("${group}:")),
                fmt_capture(value.as_deref(), ansi::BLUE, palette)
            );
        }
        if let Some(groups) = &record.groups {
            for (name, value) in groups {
                println!(
                    "      {} {}",
                    palette.dim(format!("$<{name}>:")),
                    fmt_capture(value.as_deref(), ansi::CYAN, palette)
                );
            }
        }
    }
}

fn fmt_capture(value: Option<&str>, color: &str, palette: &ansi::Palette) -> String {
    match value {
        Some(v) => palette.paint(format!("\"{v}\""), color),
        None => palette.dim("<unset>"),
    }
}
