use crate::config::{self, Config, ThemeChoice};
use crate::content::{self, APP_TITLE};
use crate::message::Message;
use crate::model::loader::{load_dropped, load_image, pick_image};
use crate::model::placeholder;
use crate::model::{PickedFile, Placeholder, PreviewSlot, Tab, PLACEHOLDER_URL};
use crate::views::{self, Images};
use iced::widget::{column, container};
use iced::{application, event, window, Element, Event, Length, Size, Subscription, Task, Theme};
use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct Flags {
    pub image: Option<PathBuf>,
    pub offline: bool,
}

pub fn run(flags: Flags) -> iced::Result {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .try_init();

    application(APP_TITLE, App::update, App::view)
        .theme(App::theme)
        .subscription(App::subscription)
        .window_size(Size::new(1200.0, 860.0))
        .run_with(move || App::new(flags))
}

#[derive(Debug, Default)]
pub struct App {
    active_tab: Tab,
    preview: PreviewSlot,
    placeholder: Placeholder,
    config: Config,
    latest_selection: u64,
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            log::warn!("Using default settings: {err}");
            Config::default()
        });

        Self::with_config(flags, config)
    }

    pub fn with_config(flags: Flags, config: Config) -> (Self, Task<Message>) {
        let mut app = App {
            config,
            ..App::default()
        };

        if let Some(path) = &flags.image {
            match load_image(path) {
                Ok(file) => app.handle_file_selection(Some(file)),
                Err(err) => log::warn!("Skipping initial image: {err}"),
            }
        }

        let task = if flags.offline || !app.config.fetch_placeholder {
            log::info!("Placeholder fetch disabled");
            app.placeholder = Placeholder::Unavailable;
            Task::none()
        } else {
            Task::perform(
                placeholder::fetch(PLACEHOLDER_URL),
                Message::PlaceholderFetched,
            )
        };

        (app, task)
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn preview(&self) -> &PreviewSlot {
        &self.preview
    }

    pub fn select_tab(&mut self, tab: Tab) {
        if self.active_tab != tab {
            log::debug!("Switching tab {} -> {}", self.active_tab.id(), tab.id());
            self.active_tab = tab;
        }
    }

    /// Starts a new file selection. Only the result of the most recent one is
    /// applied, so a slow read cannot override a later pick or drop.
    fn begin_selection(&mut self) -> u64 {
        self.latest_selection += 1;
        self.latest_selection
    }

    /// A picked file becomes the preview and sends the user to cloud removal.
    /// `None` (cancelled picker, unreadable drop) changes nothing.
    pub fn handle_file_selection(&mut self, file: Option<PickedFile>) {
        let Some(file) = file else {
            return;
        };
        self.preview.replace(file);
        self.select_tab(Tab::Process);
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectTab(tab) => {
                self.select_tab(tab);
                Task::none()
            }
            Message::PickImage => {
                let selection = self.begin_selection();
                Task::perform(pick_image(), move |file| {
                    Message::ImagePicked(selection, file)
                })
            }
            Message::FileDropped(path) => {
                let selection = self.begin_selection();
                Task::perform(load_dropped(path), move |file| {
                    Message::ImagePicked(selection, file)
                })
            }
            Message::ImagePicked(selection, file) => {
                if selection == self.latest_selection {
                    self.handle_file_selection(file);
                } else {
                    log::debug!("Discarding superseded file selection {selection}");
                }
                Task::none()
            }
            Message::PlaceholderFetched(result) => {
                self.placeholder = Placeholder::from_fetch(result);
                Task::none()
            }
            Message::ToggleTheme => {
                self.config.theme = self.config.theme.toggled();
                if let Err(err) = config::save(&self.config) {
                    log::warn!("Unable to persist settings: {err}");
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let content = content::render(self.active_tab, self.preview.current());
        let images = Images {
            preview: self.preview.current(),
            placeholder: self.placeholder.handle(),
        };

        let body = container(views::tab_body(content, images))
            .width(Length::Fill)
            .height(Length::Fill);

        column![
            views::header(),
            views::tab_bar(self.active_tab),
            body
        ]
        .spacing(0)
        .into()
    }

    pub fn theme(&self) -> Theme {
        match self.config.theme {
            ThemeChoice::Dark => Theme::Dark,
            ThemeChoice::Light => Theme::Light,
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            _ => None,
        })
    }
}
