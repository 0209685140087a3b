use crate::config::{Settings, APP_TITLE};
use crate::message::Message;
use crate::model::{NavLayout, Route, Toasts};
use crate::pages::Page;
use crate::services::Services;
use crate::views::{bottom_bar, side_rail, toast_strip};
use chrono::{Local, NaiveDate};
use iced::widget::{column, container, row, scrollable};
use iced::{application, window, Element, Length, Subscription, Task, Theme};

pub fn run() -> iced::Result {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .try_init();

    let settings = Settings::default();
    let (width, height) = settings.initial_window_size;

    application(APP_TITLE, App::update, App::view)
        .theme(App::theme)
        .subscription(App::subscription)
        .window_size((width, height))
        .run_with(move || App::new(settings))
}

pub struct App {
    settings: Settings,
    services: Services,
    today: NaiveDate,
    current_path: String,
    page: Page,
    rail_collapsed: bool,
    layout: NavLayout,
    toasts: Toasts,
}

impl App {
    pub fn new(settings: Settings) -> (Self, Task<Message>) {
        let services = Services::mock(&settings);
        let today = Local::now().date_naive();
        let layout = NavLayout::from_width(
            settings.initial_window_size.0,
            settings.wide_layout_breakpoint,
        );
        let route = Route::Dashboard;

        let app = Self {
            page: Page::mount(&route, today),
            current_path: route.path().to_string(),
            settings,
            services,
            today,
            rail_collapsed: false,
            layout,
            toasts: Toasts::default(),
        };
        (app, Task::none())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::Navigate(path) => {
                self.navigate(path);
                Task::none()
            }
            Message::ToggleRail => {
                self.rail_collapsed = !self.rail_collapsed;
                Task::none()
            }
            Message::WindowResized(size) => {
                let layout = NavLayout::from_width(size.width, self.settings.wide_layout_breakpoint);
                if layout != self.layout {
                    log::debug!("Switching to {layout:?} layout at width {}", size.width);
                    self.layout = layout;
                }
                Task::none()
            }
            Message::DismissToast(id) => {
                self.toasts.dismiss(id);
                Task::none()
            }
            page_message => self.update_page(page_message),
        };

        Task::batch([task, self.schedule_toast_expiry()])
    }

    /// Routes a page message to the mounted page. Messages for a page that
    /// is no longer mounted are stale and dropped.
    fn update_page(&mut self, message: Message) -> Task<Message> {
        let services = &self.services;
        let toasts = &mut self.toasts;

        match (&mut self.page, message) {
            (Page::Diagnosis(page), Message::Diagnosis(msg)) => {
                page.update(msg, services, toasts).map(Message::Diagnosis)
            }
            (Page::Voice(page), Message::Voice(msg)) => {
                page.update(msg, services, toasts).map(Message::Voice)
            }
            (Page::Patients(page), Message::Patients(msg)) => {
                page.update(msg);
                Task::none()
            }
            (Page::Reports(page), Message::Reports(msg)) => {
                page.update(msg);
                Task::none()
            }
            (Page::Appointments(page), Message::Appointments(msg)) => {
                page.update(msg, toasts);
                Task::none()
            }
            (Page::Analytics(page), Message::Analytics(msg)) => {
                page.update(msg);
                Task::none()
            }
            (_, stale) => {
                log::debug!("Dropping message for unmounted page: {stale:?}");
                Task::none()
            }
        }
    }

    fn navigate(&mut self, path: String) {
        if path == self.current_path {
            return;
        }

        let route = Route::from_path(&path);
        if route.is_not_found() {
            log::warn!("No page registered at {path}");
        } else {
            log::info!("Navigating to {path}");
        }

        self.page = Page::mount(&route, self.today);
        self.current_path = path;
    }

    fn schedule_toast_expiry(&mut self) -> Task<Message> {
        let lifetime = self.settings.toast_lifetime;
        Task::batch(self.toasts.take_fresh().into_iter().map(|id| {
            Task::perform(
                async move { tokio::time::sleep(lifetime).await },
                move |_| Message::DismissToast(id),
            )
        }))
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut main = column![].width(Length::Fill).height(Length::Fill);
        if let Some(strip) = toast_strip(&self.toasts) {
            main = main.push(strip);
        }
        main = main.push(
            scrollable(container(self.page.view()).width(Length::Fill)).height(Length::Fill),
        );

        match self.layout {
            NavLayout::Wide => row![side_rail(&self.current_path, self.rail_collapsed), main]
                .height(Length::Fill)
                .into(),
            NavLayout::Narrow => column![main, bottom_bar(&self.current_path)]
                .height(Length::Fill)
                .into(),
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    pub fn subscription(&self) -> Subscription<Message> {
        window::resize_events().map(|(_id, size)| Message::WindowResized(size))
    }
}
