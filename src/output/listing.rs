use crate::api::models::Email;
use crate::mail::date::display_date;
use crate::mail::preview::format_preview;
use crate::pipeline::filter::Page;

pub fn render_page(page: &Page<'_>, loading: bool) -> Vec<String> {
    let mut lines = Vec::new();

    if loading {
        lines.push("loading...".to_string());
        return lines;
    }

    if page.emails.is_empty() {
        lines.push(format!("0 messages ({} retrieved)", page.total));
        return lines;
    }

    for (index, email) in page.emails.iter().enumerate() {
        render_email(&mut lines, index, email);
        lines.push(String::new());
    }

    lines.push(format!(
        "showing {} of {} ({} matched)",
        page.emails.len(),
        page.total,
        page.matched
    ));
    if page.has_more {
        lines.push("more available".to_string());
    }

    lines
}

fn render_email(lines: &mut Vec<String>, index: usize, email: &Email) {
    let from = non_empty(&email.from).unwrap_or("(unknown sender)");
    let subject = non_empty(&email.subject).unwrap_or("(no subject)");
    let date = display_date(&email.date).unwrap_or_else(|| match non_empty(&email.date) {
        Some(raw) => format!("{raw} (unparsed)"),
        None => "(no date)".to_string(),
    });
    let category = email.category.as_deref().unwrap_or("(unclassified)");
    let priority = email
        .priority_score
        .map(|score| score.to_string())
        .unwrap_or_else(|| "-".to_string());

    lines.push(format!("{}. {}", index + 1, email.id));
    lines.push(format!("   from: {from}"));
    if let Some(to) = non_empty(&email.to) {
        lines.push(format!("   to: {to}"));
    }
    if let Some(cc) = non_empty(&email.cc) {
        lines.push(format!("   cc: {cc}"));
    }
    lines.push(format!("   subject: {subject}"));
    lines.push(format!("   date: {date}"));
    lines.push(format!("   category: {category}"));
    lines.push(format!("   priority: {priority}"));
    lines.push(String::new());
    lines.push(format!("   {}", format_preview(&email.snippet)));
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
