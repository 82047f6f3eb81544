//! TUI rendering for ordlist using ratatui.

mod input;
mod theme;

pub use input::{InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use ordlist_engine::{App, Focus, sanitize_display_line};

/// Height of the inline viewport (title, entry, controls, six rows of items, status).
pub const INLINE_VIEWPORT_HEIGHT: u16 = 14;

const ENTRY_HEIGHT: u16 = 3;
const MIN_LIST_HEIGHT: u16 = 3;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),               // Header
            Constraint::Length(ENTRY_HEIGHT),    // Entry field
            Constraint::Length(1),               // Controls
            Constraint::Min(MIN_LIST_HEIGHT),    // Items
            Constraint::Length(1),               // Status bar
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0], &palette);
    draw_entry(frame, app, chunks[1], &palette, &glyphs);
    draw_controls(frame, app, chunks[2], &palette, &glyphs);
    draw_items(frame, app, chunks[3], &palette, &glyphs);
    draw_status_bar(frame, chunks[4], &palette, &glyphs);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let state = app.state();
    let count = match state.len() {
        1 => "1 item".to_string(),
        n => format!("{n} items"),
    };

    let title = Paragraph::new(Line::from(Span::styled(" Ordered list", styles::title(palette))));
    let summary = Paragraph::new(Line::from(vec![
        Span::styled(count, styles::key_hint(palette)),
        Span::raw(" "),
    ]))
    .alignment(Alignment::Right);

    frame.render_widget(title, area);
    frame.render_widget(summary, area);
}

fn draw_entry(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let focused = app.focus() == Focus::Input;
    let entry = app.state().entry();
    let text = entry.text();

    let prefix = format!("{} ", glyphs.prompt);
    let prefix_width = prefix.width();
    // Borders take one column on each side.
    let content_width = (area.width as usize).saturating_sub(2 + prefix_width);

    // Measure what is drawn, so stripped escapes do not shift the cursor.
    let display = sanitize_display_line(text);
    let cursor_col = sanitize_display_line(&text[..entry.byte_index()]).width();

    // Scroll horizontally so the cursor stays inside the field.
    let (visible, skipped) = if content_width > 0 && cursor_col >= content_width {
        let target = cursor_col - content_width + 1;
        let mut skipped = 0;
        let mut start = display.len();
        for (idx, grapheme) in display.grapheme_indices(true) {
            if skipped >= target {
                start = idx;
                break;
            }
            skipped += grapheme.width();
        }
        (&display[start..], skipped)
    } else {
        (&display[..], 0)
    };

    let line = Line::from(vec![
        Span::styled(prefix, Style::default().fg(palette.primary)),
        Span::styled(visible.to_owned(), styles::item(palette)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(glyphs.border)
        .border_style(styles::border(palette, focused))
        .title(Span::styled(" Add item ", styles::title(palette)));
    frame.render_widget(Paragraph::new(line).block(block), area);

    if focused {
        let x = area
            .x
            .saturating_add(1 + prefix_width as u16)
            .saturating_add(cursor_col.saturating_sub(skipped) as u16);
        let max_x = area.x.saturating_add(area.width.saturating_sub(2));
        frame.set_cursor_position(Position::new(x.min(max_x), area.y + 1));
    }
}

fn draw_controls(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let direction = app.state().sort_direction();
    let focus = app.focus();

    let sort_label = format!(" {} {} ", glyphs.direction(direction), direction.label());
    let clear_label = format!(" {} Clear ", glyphs.clear);

    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            sort_label,
            styles::button(palette, focus == Focus::SortButton),
        ),
        Span::raw("  "),
        Span::styled(
            clear_label,
            styles::button(palette, focus == Focus::ClearButton),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_items(frame: &mut Frame, app: &mut App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let visible = area.height.saturating_sub(2) as usize;
    let offset = app.clamp_scroll(visible);
    let state = app.state();
    let len = state.len();

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(glyphs.border)
        .border_style(styles::border(palette, false))
        .title(Span::styled(" Items ", styles::title(palette)));

    if len > visible && visible > 0 {
        let last = (offset + visible).min(len);
        let more = if last < len { glyphs.scroll_more } else { "" };
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" {}-{last} of {len}{more} ", offset + 1),
                styles::key_hint(palette),
            ))
            .alignment(Alignment::Right),
        );
    }

    let lines: Vec<Line> = if len == 0 {
        vec![Line::from(Span::styled(
            " Nothing here yet",
            styles::key_hint(palette),
        ))]
    } else {
        let number_width = len.to_string().len();
        state
            .item_strs()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(i, item)| {
                Line::from(vec![
                    Span::styled(
                        format!(" {:>number_width$}. ", i + 1),
                        styles::index(palette),
                    ),
                    Span::styled(sanitize_display_line(item).into_owned(), styles::item(palette)),
                ])
            })
            .collect()
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_status_bar(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let hints = [
        ("Enter", "add"),
        ("Tab", "focus"),
        ("Ctrl+S", "sort"),
        ("Ctrl+L", "clear"),
        ("Esc", "quit"),
    ];

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                format!(" {} ", glyphs.separator),
                styles::key_hint(palette),
            ));
        }
        spans.push(Span::styled(*key, styles::key_highlight(palette)));
        spans.push(Span::styled(format!(" {action}"), styles::key_hint(palette)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend, layout::Position, style::Color};

    use ordlist_engine::{App, Focus, UiOptions};

    use super::draw;

    fn render(app: &mut App, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    fn add_all(app: &mut App, items: &[&str]) {
        for item in items {
            app.set_pending_input(*item);
            app.add_item();
        }
    }

    #[test]
    fn renders_items_in_sorted_order() {
        let mut app = App::new(UiOptions::default());
        add_all(&mut app, &["pear", "banana", "peach"]);
        let rows = render(&mut app, 40, 12);

        let banana = rows.iter().position(|r| r.contains("1. banana")).unwrap();
        let peach = rows.iter().position(|r| r.contains("2. peach")).unwrap();
        let pear = rows.iter().position(|r| r.contains("3. pear")).unwrap();
        assert!(banana < peach && peach < pear);
        assert!(rows[0].contains("3 items"));
    }

    #[test]
    fn direction_label_follows_state() {
        let mut app = App::default();
        let before = render(&mut app, 40, 10);
        assert!(before[4].contains("↑ Ascending"));

        app.toggle_sort_direction();
        let after = render(&mut app, 40, 10);
        assert!(after[4].contains("↓ Descending"));
        assert_ne!(before[4], after[4]);
    }

    #[test]
    fn ascii_mode_uses_ascii_glyphs() {
        let mut app = App::new(UiOptions {
            ascii_only: true,
            high_contrast: false,
        });
        let rows = render(&mut app, 40, 10);
        assert!(rows[4].contains("^ Ascending"));
        assert!(rows[2].contains("> "));
        assert!(!rows.iter().any(|r| r.contains('╭')));
    }

    #[test]
    fn high_contrast_palette_reaches_the_buffer() {
        let mut app = App::new(UiOptions {
            ascii_only: false,
            high_contrast: true,
        });
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal.draw(|frame| draw(frame, &mut app)).unwrap();

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(0, 0)].bg, Color::Black);
        // Focused entry border uses the accent color.
        assert_eq!(buffer[(0, 1)].fg, Color::Cyan);
        // Unfocused list border uses the border color.
        assert_eq!(buffer[(0, 5)].fg, Color::Gray);
    }

    #[test]
    fn entry_shows_pending_input() {
        let mut app = App::default();
        app.set_pending_input("applesauce");
        let rows = render(&mut app, 40, 10);
        assert!(rows[2].contains("❯ applesauce"));
    }

    #[test]
    fn long_entry_scrolls_to_keep_cursor_visible() {
        let mut app = App::default();
        app.set_pending_input("abcdefghijklmnopqrstuvwxyz");
        let rows = render(&mut app, 20, 10);
        assert!(rows[2].contains("xyz"));
        assert!(!rows[2].contains("abc"));
    }

    #[test]
    fn cursor_ignores_stripped_escape_sequences() {
        let mut app = App::default();
        app.paste("\x1b[31mred\tone");
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal.draw(|frame| draw(frame, &mut app)).unwrap();

        let buffer = terminal.backend().buffer();
        let row: String = (0..40).map(|x| buffer[(x, 2)].symbol().to_string()).collect();
        assert!(row.contains("❯ red one"));
        // Border, prompt and its space, then the seven visible columns.
        assert_eq!(
            terminal.get_cursor_position().unwrap(),
            Position::new(1 + 2 + 7, 2)
        );
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let mut app = App::default();
        let rows = render(&mut app, 40, 10);
        assert!(rows.iter().any(|r| r.contains("Nothing here yet")));
        assert!(rows[0].contains("0 items"));
    }

    #[test]
    fn control_characters_do_not_reach_the_terminal() {
        let mut app = App::default();
        add_all(&mut app, &["bad\x1b[2Jitem", "two\nlines"]);
        let rows = render(&mut app, 40, 10);
        assert!(rows.iter().any(|r| r.contains("baditem")));
        assert!(rows.iter().any(|r| r.contains("two lines")));
    }

    #[test]
    fn overflowing_list_shows_range() {
        let mut app = App::default();
        add_all(&mut app, &["a", "b", "c", "d", "e", "f", "g", "h"]);
        app.set_focus(Focus::SortButton);
        // 10 rows: header, 3 entry, controls, 4 list (2 visible), status.
        let rows = render(&mut app, 40, 10);
        assert!(rows[8].contains("7-8 of 8"));
        assert!(rows.iter().any(|r| r.contains("8. h")));
        assert!(!rows.iter().any(|r| r.contains("1. a")));
    }
}
