use super::image_viewer::{image_panel, Images};
use crate::components::style::{accent_button_style, frame_style};
use crate::content::{ImageSource, ProcessPanel};
use crate::message::Message;
use crate::model::Preview;
use iced::widget::{button, column, container, row, text, Column};
use iced::{Alignment, Element, Length};

const PANE_HEIGHT: f32 = 360.0;

pub fn process_view<'a>(panel: ProcessPanel, images: Images<'a>) -> Element<'a, Message> {
    let caption = images.preview.map(Preview::name).unwrap_or_default();
    let panes = row![
        pane(panel.original_title, panel.original, images).push(text(caption).size(12)),
        pane(panel.processed_title, Some(panel.processed), images),
    ]
    .spacing(24);

    // No cloud removal exists behind this button.
    let apply = button(text(panel.action.label))
        .padding([8, 24])
        .style(accent_button_style(panel.action.accent));

    column![panes, apply].spacing(24).padding(24).into()
}

fn pane<'a>(
    title: &'static str,
    source: Option<ImageSource>,
    images: Images<'a>,
) -> Column<'a, Message> {
    let frame = container(image_panel(source, images))
        .width(Length::Fill)
        .height(Length::Fixed(PANE_HEIGHT))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .clip(true)
        .style(frame_style);

    column![text(title).size(18), frame]
        .spacing(16)
        .width(Length::FillPortion(1))
}
