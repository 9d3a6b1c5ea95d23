//! BizCard Desktop - entry point for the Iced GUI application.

use std::time::Instant;

use bizcard_core::portfolio::{self, Profile, Project};
use bizcard_core::{Config, GestureRouter, InteractionCore, OrientationSample, TapOutcome};
use bizcard_desktop::canvas::{AvatarRing, RefreshSpinner, TiltCardCanvas};
use bizcard_desktop::{
    app_theme, divider_style, images, link_button_style, mode_toggle_style, palette_from_mode,
    portfolio_button_style, portfolio_frame_style, project_card_style, screen_style,
    avatar_button_style, Dispatcher, ImageCache, PaletteColors, PortfolioReveal, PullState,
    RefreshSpinnerState, ThemeMode, TiltAnimation, AVATAR_SIZE, AVATAR_RING_WIDTH, CARD_PADDING,
    PORTFOLIO_MAX_HEIGHT, PROJECT_THUMB_SIZE, TICK_INTERVAL_MS,
};

use chrono::{DateTime, Utc};
use iced::alignment::{Horizontal, Vertical};
use iced::time::{self, Duration};
use iced::widget::canvas::Canvas;
use iced::widget::{
    button, column, container, image, mouse_area, row, scrollable, stack, text, Space,
};
use iced::{Color, ContentFit, Element, Length, Point, Subscription, Task};

/// Application state.
struct App {
    dispatcher: Dispatcher,
    core: InteractionCore,
    gesture: GestureRouter,
    profile: Profile,
    projects: Vec<Project>,
    tilt: TiltAnimation,
    reveal: PortfolioReveal,
    pull: PullState,
    spinner: RefreshSpinnerState,
    images: ImageCache,
    /// Last cursor position over the card, for pull tracking
    cursor: Point,
    /// Wall-clock stamp of the last completed refresh
    last_refreshed: Option<DateTime<Utc>>,
    /// Error message if initialization failed
    init_error: Option<String>,
}

/// Application messages.
#[derive(Debug, Clone)]
enum Message {
    Tick,
    /// A new accelerometer sample arrived
    OrientationChanged(OrientationSample),
    /// The refresh timer elapsed
    RefreshCompleted,
    /// Pointer pressed on the avatar (tap vs double-tap settles later)
    AvatarTapped,
    Toggle3DMode,
    TogglePortfolio,
    /// Pull-to-refresh drag lifecycle on the card area
    PullPressed,
    PullMoved(Point),
    PullReleased,
    /// Open the profile link in the default browser
    LinkClicked,
    /// Result of a remote image fetch, keyed by URL
    ImageFetched(String, Result<image::Handle, String>),
    WindowClosed,
}

impl App {
    /// Initializes the application. Shows an error view if initialization
    /// fails.
    fn init() -> (Self, Task<Message>) {
        match Self::try_init() {
            Ok((app, task)) => (app, task),
            Err(err) => {
                eprintln!("Initialization error: {err}");
                (Self::error_state(err.to_string()), Task::none())
            }
        }
    }

    /// Attempts to initialize the application, returning errors properly.
    fn try_init() -> anyhow::Result<(Self, Task<Message>)> {
        let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

        let config = Config::load_or_default()?;
        let dispatcher = Dispatcher::new(&config);
        let gesture = GestureRouter::new(config.double_tap_window());
        let profile = Profile::default();
        let projects = portfolio::load_projects(&Config::config_dir());

        let mut core = InteractionCore::new();
        if config.starts_dark() {
            core.toggle_theme();
        }

        // Kick off image fetches for the avatar and every project thumbnail.
        let mut urls = vec![profile.avatar_url.clone()];
        urls.extend(projects.iter().map(|p| p.image_url.clone()));
        let fetches = Task::batch(urls.into_iter().map(|url| {
            Task::future(async move {
                let (url, result) = images::fetch(url).await;
                Message::ImageFetched(url, result)
            })
        }));

        Ok((
            Self {
                dispatcher,
                core,
                gesture,
                profile,
                projects,
                tilt: TiltAnimation::default(),
                reveal: PortfolioReveal::default(),
                pull: PullState::default(),
                spinner: RefreshSpinnerState::default(),
                images: ImageCache::default(),
                cursor: Point::ORIGIN,
                last_refreshed: None,
                init_error: None,
            },
            fetches,
        ))
    }

    fn error_state(error: String) -> Self {
        let config = Config::default();
        Self {
            dispatcher: Dispatcher::new(&config),
            core: InteractionCore::new(),
            gesture: GestureRouter::default(),
            profile: Profile::default(),
            projects: portfolio::builtin_projects(),
            tilt: TiltAnimation::default(),
            reveal: PortfolioReveal::default(),
            pull: PullState::default(),
            spinner: RefreshSpinnerState::default(),
            images: ImageCache::default(),
            cursor: Point::ORIGIN,
            last_refreshed: None,
            init_error: Some(error),
        }
    }

    fn theme_mode(&self) -> ThemeMode {
        ThemeMode::from_dark_flag(self.core.state().dark_theme)
    }

    /// Routes a settled avatar gesture into the core.
    fn apply_tap(&mut self, outcome: TapOutcome) {
        match outcome {
            TapOutcome::ThemeToggle => {
                self.core.toggle_theme();
                self.tilt.clear_cache();
            }
            TapOutcome::RefreshRequest => self.begin_refresh(),
        }
    }

    /// Starts a refresh cycle unless one is already in flight.
    fn begin_refresh(&mut self) {
        if !self.core.request_refresh() {
            return;
        }
        if self.dispatcher.start_refresh() {
            self.spinner.reset();
        } else {
            // Controller already torn down; don't leave the flag stuck.
            self.core.finish_refresh();
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                // Settle a pending single tap once its window has elapsed.
                if let Some(outcome) = self.gesture.poll(Instant::now()) {
                    self.apply_tap(outcome);
                }
                self.tilt.set_targets(self.core.sample());
                self.tilt.update();
                self.reveal.update();
                if self.core.state().refreshing {
                    self.spinner.update();
                }
            }
            Message::OrientationChanged(sample) => {
                self.core.on_orientation_sample(sample);
                self.tilt.set_targets(sample);
            }
            Message::RefreshCompleted => {
                self.core.finish_refresh();
                self.last_refreshed = Some(Utc::now());
                self.spinner.reset();
                self.tilt.clear_cache();
            }
            Message::AvatarTapped => {
                if let Some(outcome) = self.gesture.on_tap(Instant::now()) {
                    self.apply_tap(outcome);
                }
            }
            Message::Toggle3DMode => {
                self.core.toggle_3d_mode();
                self.tilt.clear_cache();
            }
            Message::TogglePortfolio => {
                self.core.toggle_portfolio();
                self.reveal.set_open(self.core.state().portfolio_visible);
            }
            Message::PullPressed => {
                if !self.core.state().refreshing {
                    self.pull.begin(self.cursor.y);
                }
            }
            Message::PullMoved(point) => {
                self.cursor = point;
                self.pull.drag(point.y);
            }
            Message::PullReleased => {
                if self.pull.release() {
                    self.begin_refresh();
                }
            }
            Message::LinkClicked => {
                if let Err(e) = open::that(&self.profile.link_url) {
                    eprintln!("Failed to open URL: {e}");
                }
            }
            Message::ImageFetched(url, result) => {
                self.images.store(url, result);
            }
            Message::WindowClosed => {
                self.dispatcher.shutdown();
                return iced::exit();
            }
        }
        Task::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        let orientation = self
            .dispatcher
            .orientation_subscription()
            .map(Message::OrientationChanged);
        let refresh = self
            .dispatcher
            .refresh_subscription()
            .map(|_| Message::RefreshCompleted);
        let ticks = time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(|_| Message::Tick);
        let closes = iced::window::close_events().map(|_| Message::WindowClosed);
        Subscription::batch(vec![orientation, refresh, ticks, closes])
    }

    fn view(&self) -> Element<'_, Message> {
        let pal = palette_from_mode(self.theme_mode());

        if let Some(ref error) = self.init_error {
            return self.error_view(error, pal);
        }

        let state = self.core.state();
        let center: Element<'_, Message> = if state.refreshing {
            self.refresh_view(pal)
        } else {
            self.card_view(pal)
        };

        let mode_toggle = container(
            button(text("3D").size(16))
                .on_press(Message::Toggle3DMode)
                .padding([6, 12])
                .style(mode_toggle_style(pal, state.card_3d_enabled)),
        )
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .padding(12);

        let mut layers: Vec<Element<'_, Message>> = vec![center, mode_toggle.into()];
        if state.card_3d_enabled {
            layers.push(self.sample_readout(pal));
        }
        if self.pull.is_active() {
            layers.push(self.pull_indicator(pal));
        }

        container(stack(layers))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(screen_style(pal))
            .into()
    }

    /// The card itself, wrapped in a mouse area tracking the pull gesture.
    fn card_view(&self, pal: PaletteColors) -> Element<'_, Message> {
        let tilt = self.tilt.tilt(self.core.state().card_3d_enabled);
        let card_canvas = Canvas::new(TiltCardCanvas::new(tilt, &self.tilt.cache, pal))
            .width(Length::Fill)
            .height(Length::Fill);

        let mut body = column![
            Space::new().height(Length::Fixed(25.0)),
            self.avatar(pal),
            Space::new().height(Length::Fixed(15.0)),
            container(Space::new().width(Length::Fixed(240.0)).height(Length::Fixed(1.0)))
                .style(divider_style(pal)),
            self.profile_info(pal),
            self.portfolio_button(pal),
        ]
        .spacing(6)
        .align_x(iced::Alignment::Center);

        if self.reveal.progress() > 0.01 {
            body = body.push(self.portfolio_list(pal));
        }
        if let Some(stamp) = self.last_refreshed {
            body = body.push(
                text(format!("Last refreshed at {}", stamp.format("%H:%M:%S")))
                    .size(11)
                    .style(move |_| iced::widget::text::Style {
                        color: Some(pal.muted),
                    }),
            );
        }

        let card = stack(vec![
            card_canvas.into(),
            container(body)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(24)
                .align_x(Horizontal::Center)
                .into(),
        ]);

        mouse_area(
            container(card)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(CARD_PADDING),
        )
        .on_press(Message::PullPressed)
        .on_move(Message::PullMoved)
        .on_release(Message::PullReleased)
        .into()
    }

    /// Circular avatar with the rainbow ring; tap-sensitive.
    fn avatar(&self, pal: PaletteColors) -> Element<'_, Message> {
        let side = AVATAR_SIZE + AVATAR_RING_WIDTH * 4.0;
        let ring = Canvas::new(AvatarRing::<Message>::new(pal.surface))
            .width(Length::Fixed(side))
            .height(Length::Fixed(side));

        let face: Element<'_, Message> = if let Some(handle) = self.images.get(&self.profile.avatar_url)
        {
            image(handle.clone())
                .width(Length::Fixed(AVATAR_SIZE - 8.0))
                .height(Length::Fixed(AVATAR_SIZE - 8.0))
                .content_fit(ContentFit::Cover)
                .into()
        } else {
            // Placeholder initials until (or in case) the fetch resolves.
            let initials: String = self
                .profile
                .name
                .split_whitespace()
                .filter_map(|word| word.chars().next())
                .collect();
            text(initials)
                .size(34)
                .style(move |_| iced::widget::text::Style {
                    color: Some(pal.accent),
                })
                .into()
        };

        button(stack(vec![
            ring.into(),
            container(face)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .into(),
        ]))
        .width(Length::Fixed(side))
        .height(Length::Fixed(side))
        .padding(0)
        .on_press(Message::AvatarTapped)
        .style(avatar_button_style())
        .into()
    }

    fn profile_info(&self, pal: PaletteColors) -> Element<'_, Message> {
        let dash = move |_: &iced::Theme| iced::widget::text::Style {
            color: Some(pal.success),
        };
        let name_row = row![
            text("--").style(dash),
            text(format!(" {} ", self.profile.name)).size(24),
            text("--").style(dash),
        ]
        .align_y(iced::Alignment::Center);

        let link_row = row![
            text("Click ").size(14),
            button(text("here").size(14))
                .on_press(Message::LinkClicked)
                .padding(0)
                .style(link_button_style(pal)),
        ]
        .align_y(iced::Alignment::Center);

        column![
            name_row,
            text(self.profile.title.clone()).size(15),
            text(self.profile.handle.clone())
                .size(13)
                .style(move |_| iced::widget::text::Style {
                    color: Some(pal.muted),
                }),
            link_row,
        ]
        .spacing(4)
        .align_x(iced::Alignment::Center)
        .into()
    }

    fn portfolio_button(&self, pal: PaletteColors) -> Element<'_, Message> {
        let chevron = if self.core.state().portfolio_visible {
            "▴"
        } else {
            "▾"
        };
        button(
            row![text("Portfolio").size(18), text(chevron).size(14)]
                .spacing(6)
                .align_y(iced::Alignment::Center),
        )
        .on_press(Message::TogglePortfolio)
        .padding([10, 24])
        .style(portfolio_button_style(pal))
        .into()
    }

    fn portfolio_list(&self, pal: PaletteColors) -> Element<'_, Message> {
        let entries = self.projects.iter().map(|project| {
            let thumb: Element<'_, Message> =
                if let Some(handle) = self.images.get(&project.image_url) {
                    image(handle.clone())
                        .width(Length::Fixed(PROJECT_THUMB_SIZE))
                        .height(Length::Fixed(PROJECT_THUMB_SIZE))
                        .content_fit(ContentFit::Cover)
                        .into()
                } else {
                    container(text("·").size(24))
                        .width(Length::Fixed(PROJECT_THUMB_SIZE))
                        .height(Length::Fixed(PROJECT_THUMB_SIZE))
                        .align_x(Horizontal::Center)
                        .align_y(Vertical::Center)
                        .into()
                };

            container(
                row![
                    thumb,
                    column![
                        text(project.name.clone()).size(16),
                        text(format!("{}.", project.description))
                            .size(13)
                            .style(move |_| iced::widget::text::Style {
                                color: Some(pal.muted),
                            }),
                    ]
                    .spacing(2),
                ]
                .spacing(10)
                .align_y(iced::Alignment::Center),
            )
            .width(Length::Fill)
            .padding(8)
            .style(project_card_style(pal))
            .into()
        });

        let height = self.reveal.progress() * PORTFOLIO_MAX_HEIGHT;
        container(scrollable(
            column(entries.collect::<Vec<_>>()).spacing(8).padding(8),
        ))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .padding(3)
        .style(portfolio_frame_style(pal))
        .into()
    }

    /// Replaces the card while a refresh cycle is in flight.
    fn refresh_view(&self, pal: PaletteColors) -> Element<'_, Message> {
        let spinner = Canvas::new(RefreshSpinner::new(
            &self.spinner,
            40.0,
            pal.muted,
            pal.accent,
        ))
        .width(Length::Fixed(120.0))
        .height(Length::Fixed(120.0));

        container(
            column![
                spinner,
                text("Refreshing…").size(16).style(move |_| {
                    iced::widget::text::Style {
                        color: Some(pal.muted),
                    }
                }),
            ]
            .spacing(12)
            .align_x(iced::Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
    }

    /// Raw sample readout, bottom-left, only while 3D mode is on.
    fn sample_readout(&self, pal: PaletteColors) -> Element<'_, Message> {
        let sample = self.core.sample();
        container(
            text(format!(
                "X: {:.2}\nY: {:.2}\nZ: {:.2}",
                sample.x, sample.y, sample.z
            ))
            .size(10)
            .style(move |_| iced::widget::text::Style {
                color: Some(pal.accent),
            }),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Left)
        .align_y(Vertical::Bottom)
        .padding(10)
        .into()
    }

    /// Pull progress hint shown while dragging.
    fn pull_indicator(&self, pal: PaletteColors) -> Element<'_, Message> {
        let hint = if self.pull.progress() >= 1.0 {
            "Release to refresh"
        } else {
            "Pull to refresh"
        };
        container(
            text(hint).size(13).style(move |_| iced::widget::text::Style {
                color: Some(Color {
                    a: 0.4 + 0.6 * self.pull.progress(),
                    ..pal.accent
                }),
            }),
        )
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(16)
        .into()
    }

    fn error_view(&self, error: &str, pal: PaletteColors) -> Element<'_, Message> {
        let error_text = error.to_string();
        container(
            column![
                text("Initialization Error")
                    .size(32)
                    .style(move |_| iced::widget::text::Style {
                        color: Some(pal.danger)
                    }),
                text(error_text)
                    .size(16)
                    .style(move |_| iced::widget::text::Style {
                        color: Some(pal.text)
                    }),
            ]
            .spacing(16)
            .align_x(iced::Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(screen_style(pal))
        .into()
    }
}

fn main() -> iced::Result {
    fn get_theme(app: &App) -> iced::Theme {
        app_theme(app.theme_mode())
    }

    iced::application(App::init, App::update, App::view)
        .title("BizCard")
        .subscription(App::subscription)
        .theme(get_theme)
        .window_size((420.0, 760.0))
        .run()
}
