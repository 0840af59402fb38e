use crate::components::style::{accent_button_style, drop_zone_style};
use crate::content::{Accent, UploadPanel};
use crate::message::Message;
use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length};

pub fn upload_view(panel: UploadPanel) -> Element<'static, Message> {
    let pick = button(text(panel.button_label))
        .padding([8, 16])
        .on_press(Message::PickImage)
        .style(accent_button_style(Accent::Blue));

    let zone = container(
        column![
            text(panel.drop_hint).size(16),
            pick,
            text(panel.formats_hint).size(12),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .width(Length::Fixed(576.0))
    .height(Length::Fixed(320.0))
    .align_x(Alignment::Center)
    .align_y(Alignment::Center)
    .padding(24)
    .style(drop_zone_style);

    container(zone)
        .padding(32)
        .center_x(Length::Fill)
        .into()
}
