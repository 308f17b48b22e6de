use ratatui::{prelude::*, widgets::*};

use crate::models::Post;

/// Border style for a panel given focus and edit state
pub fn border_style(is_focused: bool, is_editing: bool) -> Style {
    if is_focused && is_editing {
        Style::default().fg(Color::Yellow)
    } else if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

/// Renders a text input field
pub fn render_input<'a>(
    content: &'a str,
    title: &'a str,
    is_focused: bool,
    is_editing: bool,
) -> Paragraph<'a> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(is_focused, is_editing))
        .title(format!(" {} ", title));

    let text = if content.is_empty() && !is_editing {
        Text::from(Span::styled(title, Style::default().fg(Color::DarkGray)))
    } else {
        Text::from(content)
    };

    Paragraph::new(text).block(block).wrap(Wrap { trim: false })
}

/// One list entry: "#id title" on the first line, the full body dimmed below
pub fn post_item(post: &Post) -> ListItem<'static> {
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("#{} ", post.id), Style::default().fg(Color::Yellow)),
        Span::styled(post.title.clone(), Style::default().bold()),
    ])];
    lines.extend(post.body.lines().map(|line| {
        Line::from(Span::styled(
            format!("   {}", line),
            Style::default().fg(Color::Gray),
        ))
    }));
    ListItem::new(lines)
}

/// Cursor cell for a wrapped multi-line input, relative to the block's inner area
pub fn cursor_offset(content: &str, cursor: usize, inner_width: u16) -> (u16, u16) {
    if inner_width == 0 {
        return (0, 0);
    }
    let cursor = cursor.min(content.len());
    let mut row = 0u16;
    let mut segments = content[..cursor].split('\n').peekable();
    while let Some(segment) = segments.next() {
        let chars = segment.chars().count() as u16;
        if segments.peek().is_none() {
            return (chars % inner_width, row + chars / inner_width);
        }
        // A finished line takes at least one row
        row += chars.div_ceil(inner_width).max(1);
    }
    (0, row)
}

/// Error line style
pub fn error_style() -> Style {
    Style::default().fg(Color::White).bg(Color::Red)
}

/// Centered popup area
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_offset_wraps() {
        assert_eq!(cursor_offset("hello", 5, 10), (5, 0));
        assert_eq!(cursor_offset("hello world", 11, 4), (3, 2));
        assert_eq!(cursor_offset("пост", 4, 10), (2, 0));
    }

    #[test]
    fn test_cursor_offset_counts_newlines() {
        assert_eq!(cursor_offset("ab\ncd", 5, 10), (2, 1));
        assert_eq!(cursor_offset("ab\n", 3, 10), (0, 1));
        assert_eq!(cursor_offset("\n\nx", 3, 10), (1, 2));
        // first line wraps over two rows
        assert_eq!(cursor_offset("abcdef\ng", 8, 4), (1, 2));
    }

    #[test]
    fn test_post_item_shows_whole_body() {
        let post = Post {
            id: 1,
            title: "title".into(),
            body: "line one\nline two\nline three".into(),
        };
        assert_eq!(post_item(&post).height(), 4);
    }

    #[test]
    fn test_centered_rect_inside_parent() {
        let parent = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(60, 20, parent);
        assert!(popup.x >= parent.x && popup.right() <= parent.right());
        assert!(popup.y >= parent.y && popup.bottom() <= parent.bottom());
        assert_eq!(popup.width, 60);
    }
}
