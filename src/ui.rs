use colored::Colorize;

/// Print an info message
pub fn info(msg: &str) {
    println!("{} {}", "ℹ".blue(), msg);
}

/// Print a success message
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a warning message
pub fn warn(msg: &str) {
    println!("{} {}", "⚠".yellow(), msg);
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a dim/muted message
pub fn dim(msg: &str) {
    println!("  {}", msg.dimmed());
}

/// Print a plain line
pub fn line(msg: &str) {
    println!("{msg}");
}

/// Print a phase title framed by asterisks
pub fn title(text: &str) {
    println!();
    for row in title_lines(text) {
        println!("{}", row.green());
    }
}

/// Lines of a framed title: border, upper-cased text, border.
///
/// The border is four characters wider than the trimmed text.
pub fn title_lines(text: &str) -> [String; 3] {
    let text = text.trim();
    let border = "*".repeat(text.chars().count() + 4);
    let middle = format!("* {} *", text.to_uppercase());
    [border.clone(), middle, border]
}

/// Print the welcome banner
pub fn banner() {
    println!("{}", "Welcome to Shlink!!".green().bold());
    println!("This process will guide you through the installation.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_lines() {
        assert_eq!(
            title_lines("DATABASE"),
            [
                "************".to_string(),
                "* DATABASE *".to_string(),
                "************".to_string(),
            ]
        );
    }

    #[test]
    fn test_title_lines_trims_and_uppercases() {
        let [top, middle, bottom] = title_lines("  url shortener ");
        assert_eq!(middle, "* URL SHORTENER *");
        assert_eq!(top.len(), "url shortener".len() + 4);
        assert_eq!(top, bottom);
    }
}
