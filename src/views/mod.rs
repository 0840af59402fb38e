pub mod analyze;
pub mod header;
pub mod image_viewer;
pub mod measure;
pub mod process;
pub mod upload;

pub use crate::components::tab_bar::tab_bar;
pub use header::header;
pub use image_viewer::Images;

use crate::content::Content;
use crate::message::Message;
use iced::widget::scrollable;
use iced::Element;

pub fn tab_body<'a>(content: Content, images: Images<'a>) -> Element<'a, Message> {
    let body = match content {
        Content::Upload(panel) => upload::upload_view(panel),
        Content::Process(panel) => process::process_view(panel, images),
        Content::Measure(panel) => measure::measure_view(panel, images),
        Content::Analyze(panel) => analyze::analyze_view(panel),
    };

    scrollable(body).into()
}
