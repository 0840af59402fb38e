use super::image_viewer::{image_panel, Images};
use crate::components::style::{accent_button_style, card_style, frame_style};
use crate::content::MeasurePanel;
use crate::message::Message;
use iced::widget::{button, column, container, stack, text, Column, Row};
use iced::{Alignment, Element, Length};

pub fn measure_view<'a>(panel: MeasurePanel, images: Images<'a>) -> Element<'a, Message> {
    let readings = panel
        .readings
        .iter()
        .fold(Column::new().spacing(8), |column, reading| {
            column.push(text(*reading).size(14))
        });

    let card = container(column![text(panel.card_title).size(16), readings].spacing(8))
        .padding(16)
        .style(card_style);

    let overlay = container(card)
        .width(Length::Fill)
        .align_x(Alignment::End)
        .padding(16);

    let image = container(image_panel(Some(panel.image), images))
        .width(Length::Fill)
        .height(Length::Fixed(420.0))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .clip(true)
        .style(frame_style);

    let actions = panel
        .actions
        .iter()
        .fold(Row::new().spacing(16), |row, action| {
            row.push(
                button(text(action.label))
                    .padding([8, 16])
                    .style(accent_button_style(action.accent)),
            )
        });

    column![stack![image, overlay], actions]
        .spacing(24)
        .padding(24)
        .into()
}
