//! Terminal output formatting.

use colored::{ColoredString, Colorize};
use pricelens_core::catalog::FixtureGroup;
use pricelens_core::format::{format_amount, format_rating, format_rupees};
use pricelens_core::{AnalysisResult, ProductRecord, Sentiment};
use unicode_width::UnicodeWidthStr;

/// Format a rupee amount for headings.
pub fn rupees(value: f64) -> String {
    format_rupees(value)
}

/// Print a full analysis report.
pub fn print_analysis(result: &AnalysisResult, engine: &str) {
    println!();
    println!("{}", "Top Products".cyan().bold());

    if result.top_products.is_empty() {
        println!("  {}", "No products found in this price range.".dimmed());
    }

    let width = term_width().saturating_sub(4).max(20);
    for (i, product) in result.top_products.iter().enumerate() {
        println!(
            "  {}. {}",
            i + 1,
            truncate_visual(&product.name, width.saturating_sub(4)).bold()
        );
        println!(
            "     {} {}   {} {}",
            "Price:".dimmed(),
            format_rupees(product.price).green(),
            "Rating:".dimmed(),
            rating_colored(product.rating)
        );
        for feature in &product.features {
            println!("     - {}", truncate_visual(feature, width.saturating_sub(7)));
        }
    }

    println!();
    println!("{}", "Price Range".cyan().bold());
    println!(
        "  {} {}   {} {}   {} ₹{}",
        "Lowest:".dimmed(),
        format_rupees(result.price_range.min),
        "Highest:".dimmed(),
        format_rupees(result.price_range.max),
        "Average:".dimmed(),
        format_amount(result.price_range.average, 2)
    );

    println!();
    println!(
        "{} {}",
        "Customer Sentiment:".cyan().bold(),
        sentiment_colored(result.sentiment.overall)
    );
    print_points("Positive", &result.sentiment.positive_points);
    print_points("Negative", &result.sentiment.negative_points);

    println!();
    println!("{}", format!("Configured engine: {}", engine).dimmed());
}

fn print_points(label: &str, points: &[String]) {
    if points.is_empty() {
        println!("  {} {}", format!("{}:", label).bold(), "none".dimmed());
        return;
    }
    println!("  {}", format!("{}:", label).bold());
    for point in points {
        println!("    - {}", point);
    }
}

/// Print listings as a table.
pub fn print_products_table(products: &[ProductRecord]) {
    if products.is_empty() {
        println!("{}", "No products found in this price range.".dimmed());
        return;
    }

    let name_width = term_width().saturating_sub(26).clamp(20, 60);

    println!(
        "{} {:>12} {:>7}",
        pad_right("Name", name_width),
        "Price",
        "Rating"
    );
    println!("{}", "─".repeat(name_width + 21));

    for product in products {
        println!(
            "{} {:>12} {:>7}",
            pad_right(&truncate_visual(&product.name, name_width), name_width),
            format_rupees(product.price),
            format_rating(product.rating)
        );
    }

    println!();
    println!("{} listing(s)", products.len());
}

/// Print the sample catalog groups.
pub fn print_groups(groups: &[FixtureGroup]) {
    println!("{:<18} {:<24} {:>8}  {}", "ID", "Label", "Listings", "Keywords");
    println!("{}", "─".repeat(72));

    for group in groups {
        println!(
            "{:<18} {:<24} {:>8}  {}",
            group.id.cyan(),
            group.label,
            group.products.len(),
            group.keywords.join(", ").dimmed()
        );
    }

    println!();
    println!(
        "{}",
        "Other categories get generated placeholder listings.".dimmed()
    );
}

fn sentiment_colored(sentiment: Sentiment) -> ColoredString {
    match sentiment {
        Sentiment::VeryPositive => sentiment.as_str().green().bold(),
        Sentiment::Positive => sentiment.as_str().green(),
        Sentiment::Mixed => sentiment.as_str().yellow(),
        Sentiment::Negative => sentiment.as_str().red(),
        Sentiment::VeryNegative => sentiment.as_str().red().bold(),
    }
}

fn rating_colored(rating: f64) -> ColoredString {
    let text = format!("{}/5", format_rating(rating));
    if rating >= 4.5 {
        text.green()
    } else if rating >= 4.0 {
        text.normal()
    } else {
        text.yellow()
    }
}

/// Get terminal width, defaulting to 80.
fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Pad a plain string to a given visual width (right-padded).
fn pad_right(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visual))
    }
}

/// Truncate a string respecting visual width.
fn truncate_visual(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut result = String::new();
    let mut current_width = 0;
    for ch in s.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > max_width - 2 {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }
    result.push_str("..");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_visual_keeps_short_names() {
        assert_eq!(truncate_visual("boAt Airdopes 141", 40), "boAt Airdopes 141");
    }

    #[test]
    fn test_truncate_visual_cuts_long_names() {
        let cut = truncate_visual("Samsung Galaxy S24 Ultra 5G (Titanium Gray)", 12);
        assert_eq!(cut, "Samsung Ga..");
        assert_eq!(UnicodeWidthStr::width(cut.as_str()), 12);
    }

    #[test]
    fn test_pad_right() {
        assert_eq!(pad_right("TV", 5), "TV   ");
        assert_eq!(pad_right("Television", 5), "Television");
    }
}
