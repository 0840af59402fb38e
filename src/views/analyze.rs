use crate::components::style::{accent_color, bullet_style, card_style, frame_style, tinted_style};
use crate::content::{AnalyzePanel, Metric, Recommendation};
use crate::message::Message;
use iced::widget::{column, container, row, text, Column, Row, Space};
use iced::{Alignment, Element, Length};

pub fn analyze_view(panel: AnalyzePanel) -> Element<'static, Message> {
    let metrics = panel
        .metrics
        .iter()
        .fold(Row::new().spacing(16), |row, metric| {
            row.push(metric_tile(metric))
        });

    let results = container(column![text(panel.results_title).size(18), metrics].spacing(16))
        .padding(24)
        .width(Length::Fill)
        .style(card_style);

    let history = container(
        column![
            text(panel.history_title).size(16),
            container(Space::new(Length::Fill, Length::Fixed(192.0))).style(frame_style),
        ]
        .spacing(16),
    )
    .padding(24)
    .width(Length::FillPortion(1))
    .style(card_style);

    let list = panel
        .recommendations
        .iter()
        .fold(Column::new().spacing(8), |column, item| {
            column.push(recommendation_row(item))
        });

    let recommendations = container(
        column![text(panel.recommendations_title).size(16), list].spacing(16),
    )
    .padding(24)
    .width(Length::FillPortion(1))
    .style(card_style);

    column![results, row![history, recommendations].spacing(24)]
        .spacing(24)
        .padding(24)
        .into()
}

fn metric_tile(metric: &Metric) -> Element<'static, Message> {
    container(
        column![
            text(metric.title).size(14).color(accent_color(metric.accent)),
            text(metric.value).size(24),
        ]
        .spacing(4),
    )
    .padding(16)
    .width(Length::FillPortion(1))
    .style(tinted_style(metric.accent))
    .into()
}

fn recommendation_row(item: &Recommendation) -> Element<'static, Message> {
    let bullet = container(Space::new(Length::Fixed(8.0), Length::Fixed(8.0)))
        .style(bullet_style(item.accent));

    row![bullet, text(item.text).size(14)]
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
}
