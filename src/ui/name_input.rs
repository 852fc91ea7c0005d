//! The name field and the line that greets whoever was typed in.

use crate::app::state::{AppState, FocusPanel};
use crate::ui::memo::Memo;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

pub const PLACEHOLDER: &str = "Toto";

#[derive(Debug, Clone, PartialEq)]
pub struct NameProps {
    pub name: String,
    pub cursor: usize,
    pub focused: bool,
}

#[derive(Debug)]
pub struct NameView {
    focused: bool,
    input: Line<'static>,
    message: Option<Line<'static>>,
    cursor_offset: u16,
}

fn render_view(props: &NameProps) -> NameView {
    let input = if props.name.is_empty() {
        Line::from(Span::styled(PLACEHOLDER, Theme::placeholder()))
    } else {
        Line::from(Span::styled(props.name.clone(), Theme::input_text()))
    };
    let message = (!props.name.is_empty()).then(|| {
        Line::from(vec![
            Span::styled(props.name.clone(), Theme::name_highlight()),
            Span::raw(", I've a feeling we're not in Kansas anymore"),
        ])
    });
    let before_cursor = props.name.get(..props.cursor).unwrap_or(&props.name);
    NameView {
        focused: props.focused,
        input,
        message,
        cursor_offset: before_cursor.width() as u16,
    }
}

pub fn render(
    frame: &mut Frame,
    input_area: Rect,
    message_area: Rect,
    state: &AppState,
    memo: &mut Memo<NameProps, NameView>,
) {
    let props = NameProps {
        name: state.name.state().clone(),
        cursor: state.name_field.cursor,
        focused: state.focus == FocusPanel::NameInput,
    };
    let view = memo.render(props, render_view);

    let block = Block::default()
        .title(" Dog Name ")
        .title_style(if view.focused {
            Theme::title()
        } else {
            Theme::border()
        })
        .borders(Borders::ALL)
        .border_style(if view.focused {
            Theme::border_focused()
        } else {
            Theme::border()
        })
        .padding(Padding::horizontal(1));

    let inner = block.inner(input_area);
    frame.render_widget(block, input_area);
    frame.render_widget(Paragraph::new(view.input.clone()), inner);

    if view.focused && inner.width > 0 {
        let cursor_x = inner.x + view.cursor_offset;
        frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
    }

    if let Some(message) = &view.message {
        frame.render_widget(Paragraph::new(message.clone()), message_area);
    }
}
