use crate::components::style::card_style;
use crate::content::APP_TITLE;
use crate::message::Message;
use iced::widget::{button, container, horizontal_space, row, text};
use iced::{Alignment, Element, Length};

pub fn header() -> Element<'static, Message> {
    let settings = button(text("Toggle Theme").size(14)).on_press(Message::ToggleTheme);

    container(
        row![text(APP_TITLE).size(22), horizontal_space(), settings]
            .align_y(Alignment::Center),
    )
    .padding([12, 24])
    .width(Length::Fill)
    .style(card_style)
    .into()
}
