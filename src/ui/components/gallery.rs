//! Gallery page pieces.

use super::{centered, truncate, wrap};
use crate::gallery::viewmodel::{CardItem, EmptyState, HeaderInfo, LightboxView};

/// Title on the left, active category and sort on the right.
pub fn header(out: &mut String, header: &HeaderInfo, cols: usize) {
    let right = format!("{} · {}", header.category, header.sort_label);
    let gap = cols
        .saturating_sub(header.title.chars().count() + right.chars().count())
        .max(1);
    out.push_str(&format!("{}{}{right}\n", header.title, " ".repeat(gap)));
}

/// One line per card: focus marker, id, title, the description cut to the
/// remaining width, then the tags.
pub fn cards(out: &mut String, cards: &[CardItem], cols: usize) {
    for card in cards {
        let marker = if card.is_focused { '>' } else { ' ' };
        let lead = format!("{marker} {} ", card.title);
        let id = format!("#{:<3}", card.id.0);
        let tags = if card.tags.is_empty() {
            String::new()
        } else {
            format!("  {}", card.tags.join(" "))
        };
        let used = lead.chars().count() + id.chars().count() + 1 + tags.chars().count();
        let room = cols.saturating_sub(used);
        out.push_str(&format!("{id} {lead}{}{tags}\n", truncate(&card.description, room)));
    }
}

pub fn lightbox(out: &mut String, view: &LightboxView, cols: usize) {
    out.push_str(&format!("{}  [{}]\n", view.title, view.position));
    for line in wrap(&view.description, cols) {
        out.push_str(&line);
        out.push('\n');
    }
    if !view.details.is_empty() {
        out.push_str(&view.details);
        out.push('\n');
    }
    if !view.tags.is_empty() {
        out.push_str(&view.tags.join(" "));
        out.push('\n');
    }
}

pub fn empty_state(out: &mut String, empty: &EmptyState, cols: usize) {
    out.push_str(&centered(&empty.message, cols));
    out.push('\n');
    out.push_str(&centered(&format!("[{}]", empty.action_label), cols));
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemId;

    fn card(tags: &[&str]) -> CardItem {
        CardItem {
            id: ItemId(3),
            title: "Testudo".to_string(),
            description: "Shield wall drill in full kit on the parade ground".to_string(),
            tags: tags.iter().map(|t| format!("#{t}")).collect(),
            is_focused: true,
        }
    }

    #[test]
    fn cards_show_tags_after_description() {
        let mut out = String::new();
        cards(&mut out, &[card(&["drill", "armor"])], 60);
        let line = out.lines().next().unwrap();
        assert!(line.starts_with("#3   > Testudo "));
        assert!(line.ends_with("  #drill #armor"));
        assert!(line.contains('…'));
        assert!(line.chars().count() <= 60);
    }

    #[test]
    fn untagged_cards_keep_full_width_for_description() {
        let mut out = String::new();
        cards(&mut out, &[card(&[])], 80);
        assert!(out.trim_end().ends_with("parade ground"));
    }
}
