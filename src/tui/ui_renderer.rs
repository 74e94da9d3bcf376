use super::app::{App, Focus};
use crate::navigator;
use crate::tree::NodeId;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

pub(super) fn ui_frame(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(4)])
        .split(frame.area());

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[0]);

    draw_tree_panel(frame, app, panels[0]);
    draw_selection_panel(frame, app, panels[1]);
    draw_help_block(frame, chunks[1]);
}

fn draw_tree_panel(frame: &mut Frame, app: &App, area: Rect) {
    let visible = navigator::visible_nodes(&app.tree);
    let cursor_index = visible
        .iter()
        .position(|&id| id == app.cursor)
        .unwrap_or(0);

    let height = area.height.saturating_sub(2) as usize;
    let (start, end) = navigator::scroll_window(visible.len(), cursor_index, height);

    let items: Vec<ListItem> = visible[start..end]
        .iter()
        .enumerate()
        .map(|(offset, &id)| {
            let row = start + offset;
            // Clipped rows above/below collapse into "…" markers, except
            // where the cursor itself sits.
            if row != cursor_index
                && ((row == start && start > 0) || (row == end - 1 && end < visible.len()))
            {
                return ListItem::new("…");
            }
            render_tree_row(app, id, row == cursor_index)
        })
        .collect();

    let title = format!("Path: {}", format_breadcrumbs(app));
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, area);
}

fn render_tree_row(app: &App, id: NodeId, is_cursor: bool) -> ListItem<'static> {
    let node = app.tree.node(id);
    let indent = "  ".repeat(navigator::node_level(&app.tree, id));
    let marker = if is_cursor { "> " } else { "  " };
    let badge = if node.is_dir {
        if node.expanded { "📂 " } else { "📁 " }
    } else if node.selected {
        "[✓] "
    } else {
        "[ ] "
    };

    let line = format!("{indent}{marker}{badge}{}", node.name);
    let mut item = ListItem::new(line);
    if is_cursor && app.focus == Focus::Tree {
        item = item.style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::DarkGray),
        );
    }
    item
}

fn draw_selection_panel(frame: &mut Frame, app: &App, area: Rect) {
    let title = if app.right_tree_order {
        format!("Selected Files ({}) – tree order", app.selector.len())
    } else {
        format!("Selected Files ({})", app.selector.len())
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    if app.selector.is_empty() {
        let placeholder = Paragraph::new("No files selected").block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let ordered = if app.right_tree_order {
        let visible = navigator::visible_nodes(&app.tree);
        app.selector.in_visible_order(&app.tree, &visible)
    } else {
        app.selector.sorted_by_path()
    };

    let root_path = app.tree.node(app.tree.root()).path.clone();
    let height = area.height.saturating_sub(2) as usize;
    let start = app.right_scroll.min(ordered.len().saturating_sub(1));
    let end = (start + height).min(ordered.len());

    let items: Vec<ListItem> = ordered[start..end]
        .iter()
        .enumerate()
        .map(|(offset, &id)| {
            let row = start + offset;
            let node = app.tree.node(id);
            let shown = node
                .path
                .strip_prefix(&root_path)
                .map(|rel| rel.display().to_string())
                .unwrap_or_else(|_| node.name.clone());

            let line = format!("{}. {}", row + 1, shown);
            let mut item = ListItem::new(line);
            if app.focus == Focus::Selection && row == app.right_scroll {
                item = item.style(
                    Style::default()
                        .add_modifier(Modifier::BOLD)
                        .bg(Color::DarkGray),
                );
            }
            item
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn draw_help_block(frame: &mut Frame, area: Rect) {
    let help_lines = vec![
        Line::from("w/Ctrl+C: Copy & Quit | q/Esc: Quit | Space: Select | Enter: Expand/Select"),
        Line::from("h/l: Switch Panel | j/k: Move | J/K: Jump Dirs | s: Selection Order"),
    ];
    let help = Paragraph::new(help_lines)
        .block(Block::default().borders(Borders::ALL).title("Treeyank"));
    frame.render_widget(help, area);
}

fn format_breadcrumbs(app: &App) -> String {
    let crumbs = navigator::breadcrumbs(&app.tree, app.cursor);
    let mut out = String::from("/");
    for (i, &id) in crumbs.iter().enumerate().skip(1) {
        out.push_str(&app.tree.node(id).name);
        if i < crumbs.len() - 1 {
            out.push('/');
        }
    }
    out
}
