use std::io::{self, Write};

pub const SCREEN_WIDTH: usize = 48;
const APP_NAME: &str = "Monash Rental Space";
const CELL_WIDTH: usize = 15;
const OPTION_WIDTH: usize = 22;

/// Hard-wraps `text` at [`SCREEN_WIDTH`] columns, hyphenating words cut mid-way.
pub fn wrap_text(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut width = 0;

    for (index, &c) in chars.iter().enumerate() {
        if c == '\n' {
            lines.push(std::mem::take(&mut line));
            width = 0;
            continue;
        }

        line.push(c);
        width += 1;
        if width == SCREEN_WIDTH {
            let next = chars.get(index + 1);
            if c != ' ' && next.is_some_and(|&n| n != ' ') {
                line.push('-');
            }
            lines.push(std::mem::take(&mut line));
            width = 0;
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

pub fn write_text<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    for line in wrap_text(text) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn centred(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let total = width.saturating_sub(len);
    let left = total / 2;
    let right = total - left;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

/// Banner, title and optional subtitle shared by every screen.
pub fn write_header<W: Write>(out: &mut W, title: &str, subtitle: Option<&str>) -> io::Result<()> {
    let rule = "-".repeat(SCREEN_WIDTH);
    writeln!(out)?;
    writeln!(out, "{rule}")?;
    writeln!(out, "|{}|", centred(APP_NAME, SCREEN_WIDTH - 2))?;
    writeln!(out, "{rule}")?;
    writeln!(out)?;
    writeln!(out, "{}", centred(&format!("*** {title} ***"), SCREEN_WIDTH))?;
    if let Some(subtitle) = subtitle {
        writeln!(out, "{}", centred(subtitle, SCREEN_WIDTH))?;
    }
    writeln!(out)
}

/// Centres `text` in a property-list cell. Odd padding leans left.
pub fn cell(text: &str) -> String {
    let len = text.chars().count();
    if len >= CELL_WIDTH {
        return text.to_string();
    }
    let total = CELL_WIDTH - len;
    let right = total / 2;
    format!("{}{text}{}", " ".repeat(total - right), " ".repeat(right))
}

pub fn write_menu_options<W: Write>(out: &mut W, options: &[&str]) -> io::Result<()> {
    for (index, option) in options.iter().enumerate() {
        write_text(out, &format!("[{}]   {option}", index + 1))?;
    }
    writeln!(out)
}

/// Writes `[a] Option    Description` rows, keyed by letter or by number.
pub fn write_sub_menu_options<W: Write>(
    out: &mut W,
    options: &[(&str, &str)],
    lettered: bool,
) -> io::Result<()> {
    for (index, (option, description)) in options.iter().enumerate() {
        let key = if lettered {
            char::from(b'a' + index as u8).to_string()
        } else {
            (index + 1).to_string()
        };
        let info = format!("[{key}] {option}");
        let padding = OPTION_WIDTH.saturating_sub(info.chars().count()).max(1);
        write_text(out, &format!("{info}{}{description}", " ".repeat(padding)))?;
    }
    writeln!(out)
}

/// Formats with thousands separators, e.g. `1,234.50`.
pub fn format_amount(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (whole, fraction) = match fixed.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::new();
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };
    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}
