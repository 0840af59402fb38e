use crate::message::Message;
use crate::model::Tab;
use iced::widget::text::Wrapping;
use iced::widget::{button, container, text, Container, Row};
use iced::{Alignment, Background, Color, Length, Shadow, Theme};

const OUTLINE_WIDTH: f32 = 2.0;

pub fn tab_bar(current: Tab) -> Container<'static, Message> {
    let tabs = Tab::ALL
        .into_iter()
        .fold(Row::new().spacing(0), |tabs, tab| {
            tabs.push(tab_option(tab, current))
        });

    container(tabs)
        .width(Length::Fill)
        .style(tab_strip_style)
}

fn tab_option(tab: Tab, current: Tab) -> iced::widget::Button<'static, Message> {
    let is_active = tab == current;
    let content = container(text(tab.label()).size(14).wrapping(Wrapping::None))
        .height(Length::Fixed(48.0))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .padding([6, 24]);

    button(content)
        .padding(0)
        .on_press(Message::SelectTab(tab))
        .style(move |theme, status| tab_button_style(theme, status, is_active))
}

fn tab_strip_style(theme: &Theme) -> iced::widget::container::Style {
    let palette = theme.extended_palette();

    iced::widget::container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: iced::border::Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: iced::border::Radius::new(0.0),
        },
        ..Default::default()
    }
}

fn tab_button_style(
    theme: &Theme,
    status: iced::widget::button::Status,
    is_active: bool,
) -> iced::widget::button::Style {
    let palette = theme.extended_palette();

    let mut text_color = if is_active {
        palette.primary.strong.color
    } else {
        palette.background.base.text.scale_alpha(0.6)
    };

    match status {
        iced::widget::button::Status::Hovered if !is_active => {
            text_color = palette.background.base.text.scale_alpha(0.85);
        }
        iced::widget::button::Status::Pressed => {
            text_color = text_color.scale_alpha(0.9);
        }
        iced::widget::button::Status::Disabled => {
            text_color = text_color.scale_alpha(0.5);
        }
        _ => {}
    }

    // iced has no per-side borders; the active tab gets a full primary
    // outline instead of an underline.
    let border = if is_active {
        iced::border::Border {
            color: palette.primary.strong.color,
            width: OUTLINE_WIDTH,
            radius: iced::border::Radius::new(0.0),
        }
    } else {
        iced::border::Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: iced::border::Radius::new(0.0),
        }
    };

    iced::widget::button::Style {
        background: None,
        text_color,
        border,
        shadow: Shadow::default(),
    }
}
