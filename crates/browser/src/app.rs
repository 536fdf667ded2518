//! Main app state

use crate::{
    cli::Flags,
    key_binds::{self, MenuAction},
    message::{ActionSheetMessage, ContextPage, Message, SettingsMessage},
};
use browser_config::{BrowserConfig, ThumbnailSize};
use browser_core::{
    BrowserEffect, BrowserProps, FullScreenMessage, GridMessage, Mode, PhotoBrowser,
    TOOLBAR_HEIGHT,
};
use browser_nav::LoadedMedia;
use cosmic::{
    Action, Application, ApplicationExt, Core, Element, Task,
    app::context_drawer,
    cosmic_config::{Config, CosmicConfigEntry},
    iced::{
        Length, Size,
        keyboard::{Key, Modifiers},
    },
    iced_widget::{scrollable, toggler},
    task::future,
    widget::{
        Id, Space, button, column, container, icon,
        menu::key_bind::{KeyBind, Modifier},
        mouse_area, radio, responsive, settings, text,
    },
};
use rfd::AsyncFileDialog;
use shared::MediaItem;
use std::{path::PathBuf, sync::Arc, time::Duration};

/// Frame interval while an animation runs.
const ANIMATION_FRAME: Duration = Duration::from_millis(16);

pub struct PhotoBrowserApp {
    core: Core,
    flags: Flags,
    /// Stored configuration, without command line overrides.
    config: BrowserConfig,
    config_handler: Option<Config>,
    browser: Option<PhotoBrowser>,
    context_page: Option<ContextPage>,
    action_sheet: Option<(usize, Arc<MediaItem>)>,
    window_size: Size,
    stage_height: f32,
    load_error: Option<Arc<String>>,
}

impl PhotoBrowserApp {
    pub const APP_ID: &'static str = browser_config::APP_ID;

    fn effective_config(&self) -> BrowserConfig {
        self.flags.apply(self.config.clone())
    }

    fn mode(&self) -> Mode {
        self.browser
            .as_ref()
            .map(PhotoBrowser::mode)
            .unwrap_or_default()
    }

    fn load_media(&self, path: PathBuf) -> Task<Action<Message>> {
        let include_hidden = self.config.show_hidden_files;
        future(async move {
            match browser_nav::load(path, include_hidden).await {
                Ok(loaded) => Message::MediaLoaded(loaded),
                Err(e) => Message::LoadError(Arc::new(e.to_string())),
            }
        })
    }

    fn mount(&mut self, loaded: LoadedMedia) -> Task<Action<Message>> {
        let initial_index = self.flags.index.or(loaded.start_index).unwrap_or(0);
        let props = BrowserProps::new(loaded.media)
            .initial_index(initial_index)
            .config(self.effective_config())
            .on_selection_changed(|item, index, selected| {
                tracing::info!(
                    "photo {index} ({}) {}",
                    item.photo.display(),
                    if selected { "selected" } else { "deselected" }
                );
            });

        match PhotoBrowser::new(props) {
            Ok(browser) => {
                self.browser = Some(browser);
                self.load_error = None;
                self.resize_grid();
                self.sync_stage()
            }
            Err(e) => {
                tracing::error!("failed to open photo browser: {e}");
                self.load_error = Some(Arc::new(e.to_string()));
                Task::none()
            }
        }
    }

    fn resize_grid(&mut self) {
        let width = self.window_size.width;
        if let Some(browser) = self.browser.as_mut() {
            let cell_size = browser.config().thumbnail_size.pixels() as f32;
            if let Err(e) = browser.handle_grid(GridMessage::Resized { width, cell_size }) {
                tracing::warn!("grid resize failed: {e}");
            }
        }
    }

    /// Scroll the stage so the grid sits at the current transition offset.
    fn sync_stage(&self) -> Task<Action<Message>> {
        let Some(browser) = &self.browser else {
            return Task::none();
        };

        scrollable::scroll_to(
            Id::new(browser_widgets::STAGE_SCROLL_ID),
            scrollable::AbsoluteOffset {
                x: 0.0,
                y: -browser.grid_offset(self.stage_height),
            },
        )
    }

    /// Scroll the grid so the focused thumbnail is visible.
    fn scroll_grid_to_focus(&self) -> Task<Action<Message>> {
        let Some(y) = self.browser.as_ref().and_then(|b| b.grid().scroll_target()) else {
            return Task::none();
        };

        scrollable::scroll_to(
            Id::new(browser_widgets::GRID_SCROLL_ID),
            scrollable::AbsoluteOffset { x: 0.0, y },
        )
    }

    fn apply_effect(&mut self, effect: BrowserEffect) {
        match effect {
            BrowserEffect::None => {}
            BrowserEffect::OpenActionSheet { index, item } => {
                self.action_sheet = Some((index, item));
            }
        }
    }

    fn save_config(&self) {
        if let Some(ref handler) = self.config_handler
            && let Err(e) = self.config.write_entry(handler)
        {
            tracing::warn!("failed to save config: {e}");
        }
    }

    fn print_selection(&mut self) {
        if !self.flags.print_selection {
            return;
        }
        self.flags.print_selection = false;

        if let Some(browser) = &self.browser {
            let media = browser.media();
            tracing::debug!("{} of {} photos selected", media.selected_count(), media.len());
            for index in media.selected_indices() {
                println!("{}", media[index].photo.display());
            }
        }
    }
}

impl Application for PhotoBrowserApp {
    type Executor = cosmic::executor::Default;
    type Flags = Flags;
    type Message = Message;

    const APP_ID: &'static str = Self::APP_ID;

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Action<Self::Message>>) {
        let mut tasks = vec![];

        let (config, config_handler) = browser_config::load();
        let window_size = Size::new(1024.0, 768.0);

        let mut app = Self {
            core,
            flags,
            config,
            config_handler,
            browser: None,
            context_page: None,
            action_sheet: None,
            window_size,
            stage_height: window_size.height,
            load_error: None,
        };

        match app.flags.path.clone().or_else(dirs::picture_dir) {
            Some(path) => {
                let name = path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or("Photos");
                let title = format!("{name} - Photo Browser");
                if let Some(id) = app.core.main_window_id() {
                    tasks.push(app.set_window_title(title, id));
                }
                tasks.push(app.load_media(path));
            }
            None => {
                app.load_error = Some(Arc::new("No photo directory given".to_string()));
            }
        }

        (app, Task::batch(tasks))
    }

    fn header_end(&self) -> Vec<Element<'_, Self::Message>> {
        vec![
            button::icon(icon::from_name("emblem-system-symbolic"))
                .on_press(Message::ToggleContextPage(ContextPage::Settings))
                .into(),
        ]
    }

    fn view(&self) -> Element<'_, Self::Message> {
        let Some(browser) = &self.browser else {
            return browser_widgets::status(self.load_error.as_deref().map(String::as_str));
        };

        let cell_size = browser.config().thumbnail_size.pixels();

        let stage = responsive(move |size| {
            browser_widgets::stage(
                browser_widgets::grid(browser.media(), browser.grid(), cell_size)
                    .map(Message::Grid),
                browser_widgets::full_screen(browser.media(), browser.full_screen())
                    .map(Message::FullScreen),
                size.height,
                |viewport| Message::StageScrolled {
                    offset_y: viewport.absolute_offset().y,
                    height: viewport.bounds().height,
                },
            )
        });

        let content = if browser.top_bar().is_hidden() {
            cosmic::iced_widget::stack![stage]
        } else {
            let overlay = column()
                .push(browser_widgets::top_bar(
                    TOOLBAR_HEIGHT,
                    browser.top_bar().opacity(),
                    browser.top_bar_title(),
                ))
                .push(Space::new(Length::Fill, Length::Fill));

            cosmic::iced_widget::stack![stage, overlay]
        };

        if let Some((_, item)) = &self.action_sheet {
            let backdrop = mouse_area(
                container(Space::new(Length::Fill, Length::Fill))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .class(cosmic::theme::Container::Transparent),
            )
            .on_press(Message::ActionSheet(ActionSheetMessage::Close));

            cosmic::iced_widget::stack![content, backdrop, self.action_sheet_view(item)].into()
        } else {
            content.into()
        }
    }

    fn update(&mut self, message: Message) -> Task<Action<Self::Message>> {
        let mut tasks = Vec::new();

        match message {
            Message::Grid(grid_msg) => {
                if let Some(browser) = self.browser.as_mut() {
                    match browser.handle_grid(grid_msg) {
                        Ok(effect) => self.apply_effect(effect),
                        Err(e) => tracing::warn!("grid event rejected: {e}"),
                    }
                }
                if matches!(grid_msg, GridMessage::MoveFocus(_) | GridMessage::Focus(_)) {
                    tasks.push(self.scroll_grid_to_focus());
                }
            }
            Message::FullScreen(full_screen_msg) => {
                if let Some(browser) = self.browser.as_mut() {
                    match browser.handle_full_screen(full_screen_msg) {
                        Ok(effect) => self.apply_effect(effect),
                        Err(e) => tracing::warn!("viewer event rejected: {e}"),
                    }
                }
                if full_screen_msg == FullScreenMessage::GridButton {
                    tasks.push(self.scroll_grid_to_focus());
                }
            }
            Message::ActionSheet(sheet_msg) => {
                let Some((index, item)) = self.action_sheet.take() else {
                    return Task::none();
                };

                match sheet_msg {
                    ActionSheetMessage::SaveCopy => {
                        let from = item.photo.clone();
                        let file_name = item.file_name().unwrap_or_default().to_string();
                        return future(async move {
                            let dialog = AsyncFileDialog::new()
                                .set_title("Save a Copy")
                                .set_file_name(file_name);

                            match dialog.save_file().await {
                                Some(handle) => Message::SaveCopyTo {
                                    from,
                                    to: handle.path().to_path_buf(),
                                },
                                None => Message::Cancelled,
                            }
                        });
                    }
                    ActionSheetMessage::CopyPath => {
                        tracing::debug!("copied path of photo {index}");
                        return cosmic::iced::clipboard::write(item.photo.display().to_string());
                    }
                    ActionSheetMessage::Close => {}
                }
            }
            Message::Settings(settings_msg) => {
                match settings_msg {
                    SettingsMessage::AlwaysShowControls(show) => {
                        self.config.always_show_controls = show
                    }
                    SettingsMessage::DisplayActionButton(show) => {
                        self.config.display_action_button = show
                    }
                    SettingsMessage::DisplayNavArrows(show) => self.config.display_nav_arrows = show,
                    SettingsMessage::EnableGrid(enable) => self.config.enable_grid = enable,
                    SettingsMessage::StartOnGrid(start) => self.config.start_on_grid = start,
                    SettingsMessage::DisplaySelectionButtons(show) => {
                        self.config.display_selection_buttons = show
                    }
                    SettingsMessage::ThumbnailSize(size) => self.config.thumbnail_size = size,
                    SettingsMessage::ShowHiddenFiles(show) => self.config.show_hidden_files = show,
                }

                let config = self.effective_config();
                if let Some(browser) = self.browser.as_mut() {
                    browser.apply_config(config);
                }
                self.resize_grid();
            }
            Message::KeyBind(action) => {
                if self.action_sheet.is_some() {
                    match action {
                        MenuAction::Escape => self.action_sheet = None,
                        MenuAction::Quit => tasks.push(self.update(Message::Quit)),
                        _ => {}
                    }
                } else if action == MenuAction::Escape && self.context_page.is_some() {
                    self.context_page = None;
                } else {
                    tasks.push(self.update(action.message(self.mode())));
                }
            }
            Message::ToggleContextPage(page) => {
                if self.context_page == Some(page) {
                    self.context_page = None;
                } else {
                    self.context_page = Some(page);
                }
            }
            Message::MediaLoaded(loaded) => tasks.push(self.mount(loaded)),
            Message::LoadError(error) => {
                tracing::error!("failed to load photos: {error}");
                self.load_error = Some(error);
            }
            Message::AnimationTick(now) => {
                if let Some(browser) = self.browser.as_mut() {
                    browser.tick(now);
                }
                tasks.push(self.sync_stage());
            }
            Message::StageScrolled { offset_y, height } => {
                let resized = height > 0.0 && (height - self.stage_height).abs() > f32::EPSILON;
                if resized {
                    self.stage_height = height;
                }

                // The stage only follows the transition; undo any user scroll.
                if let Some(browser) = &self.browser
                    && !browser.is_animating()
                {
                    let expected = -browser.grid_offset(self.stage_height);
                    if resized || (offset_y - expected).abs() > 0.5 {
                        tasks.push(self.sync_stage());
                    }
                }
            }
            Message::WindowResized { width, height } => {
                self.window_size = Size::new(width, height);
                self.resize_grid();
                tasks.push(self.sync_stage());
            }
            Message::SaveCopyTo { from, to } => {
                return future(async move {
                    match tokio::fs::copy(&from, &to).await {
                        Ok(_) => Message::SaveResult(Ok(to)),
                        Err(e) => Message::SaveResult(Err(e.to_string())),
                    }
                });
            }
            Message::SaveResult(result) => match result {
                Ok(path) => tracing::info!("saved a copy to {}", path.display()),
                Err(e) => tracing::error!("failed to save a copy: {e}"),
            },
            Message::Cancelled => {}
            Message::Quit => {
                self.save_config();
                self.print_selection();
                std::process::exit(0);
            }
        }

        if tasks.is_empty() {
            Task::none()
        } else {
            Task::batch(tasks)
        }
    }

    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        let page = self.context_page?;
        let content = match page {
            ContextPage::About => self.about_page(),
            ContextPage::Settings => self.settings_page(),
        };

        Some(context_drawer::context_drawer(
            content,
            Message::ToggleContextPage(page),
        ))
    }

    fn subscription(&self) -> cosmic::iced::Subscription<Self::Message> {
        let animation_sub = if self
            .browser
            .as_ref()
            .is_some_and(PhotoBrowser::is_animating)
        {
            cosmic::iced::time::every(ANIMATION_FRAME).map(Message::AnimationTick)
        } else {
            cosmic::iced::Subscription::none()
        };

        cosmic::iced::Subscription::batch([
            cosmic::iced::keyboard::on_key_press(key_press_handler),
            cosmic::iced::window::events().map(|(_, event)| {
                if let cosmic::iced::window::Event::Resized(size) = event {
                    Message::WindowResized {
                        width: size.width,
                        height: size.height,
                    }
                } else {
                    Message::Cancelled
                }
            }),
            animation_sub,
        ])
    }

    fn on_app_exit(&mut self) -> Option<Self::Message> {
        self.save_config();
        self.print_selection();

        None
    }
}

impl PhotoBrowserApp {
    fn about_page(&self) -> Element<'_, Message> {
        column()
            .push(text::title3("Photo Browser"))
            .push(text::body(
                "Browse photos full screen or as a thumbnail grid, and pick the ones you want.",
            ))
            .push(text::caption(concat!("Version ", env!("CARGO_PKG_VERSION"))))
            .spacing(cosmic::theme::active().cosmic().spacing.space_s)
            .into()
    }

    fn action_sheet_view(&self, item: &MediaItem) -> Element<'_, Message> {
        use cosmic::widget::horizontal_space;

        let spacing = cosmic::theme::active().cosmic().spacing;

        let buttons = column()
            .push(
                button::standard("Save a copy…")
                    .on_press(Message::ActionSheet(ActionSheetMessage::SaveCopy)),
            )
            .push(
                button::standard("Copy path")
                    .on_press(Message::ActionSheet(ActionSheetMessage::CopyPath)),
            )
            .spacing(spacing.space_s);

        let content = column()
            .push(text::title4(item.file_name().unwrap_or("Photo").to_string()))
            .push(Space::with_height(Length::Fixed(spacing.space_s as f32)))
            .push(buttons)
            .push(Space::with_height(Length::Fixed(spacing.space_m as f32)))
            .push(
                cosmic::widget::row()
                    .push(horizontal_space())
                    .push(
                        button::text("Cancel")
                            .on_press(Message::ActionSheet(ActionSheetMessage::Close)),
                    ),
            )
            .spacing(spacing.space_xxs)
            .align_x(cosmic::iced::Alignment::Center);

        let dialog_container = container(content)
            .padding(spacing.space_m)
            .class(cosmic::theme::Container::Dialog);

        // Sheet rises from the bottom edge
        container(
            container(dialog_container)
                .width(Length::Shrink)
                .height(Length::Shrink),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing.space_l)
        .align_x(cosmic::iced::alignment::Horizontal::Center)
        .align_y(cosmic::iced::alignment::Vertical::Bottom)
        .into()
    }

    fn settings_page(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::active().cosmic().spacing;

        let sections = vec![
            settings::section()
                .title("Viewer")
                .add(settings::item(
                    "Always show controls",
                    toggler(self.config.always_show_controls).on_toggle(|show| {
                        Message::Settings(SettingsMessage::AlwaysShowControls(show))
                    }),
                ))
                .add(settings::item(
                    "Show navigation arrows",
                    toggler(self.config.display_nav_arrows).on_toggle(|show| {
                        Message::Settings(SettingsMessage::DisplayNavArrows(show))
                    }),
                ))
                .add(settings::item(
                    "Show action button",
                    toggler(self.config.display_action_button).on_toggle(|show| {
                        Message::Settings(SettingsMessage::DisplayActionButton(show))
                    }),
                ))
                .add(settings::item(
                    "Show selection buttons",
                    toggler(self.config.display_selection_buttons).on_toggle(|show| {
                        Message::Settings(SettingsMessage::DisplaySelectionButtons(show))
                    }),
                ))
                .into(),
            settings::section()
                .title("Grid")
                .add(settings::item(
                    "Thumbnail size",
                    ThumbnailSize::ALL
                        .iter()
                        .fold(column(), |col, size| {
                            col.push(radio(
                                text::body(size.to_string()),
                                *size,
                                Some(self.config.thumbnail_size),
                                |size| Message::Settings(SettingsMessage::ThumbnailSize(size)),
                            ))
                        })
                        .spacing(spacing.space_xxs),
                ))
                .into(),
            // Read once when photos are opened
            settings::section()
                .title("On startup")
                .add(settings::item(
                    "Enable grid",
                    toggler(self.config.enable_grid)
                        .on_toggle(|enable| Message::Settings(SettingsMessage::EnableGrid(enable))),
                ))
                .add(settings::item(
                    "Start on grid",
                    toggler(self.config.start_on_grid)
                        .on_toggle(|start| Message::Settings(SettingsMessage::StartOnGrid(start))),
                ))
                .add(settings::item(
                    "Show hidden files",
                    toggler(self.config.show_hidden_files).on_toggle(|show| {
                        Message::Settings(SettingsMessage::ShowHiddenFiles(show))
                    }),
                ))
                .into(),
        ];

        settings::view_column(sections).into()
    }
}

fn key_press_handler(key: Key, modifiers: Modifiers) -> Option<Message> {
    let mut mods = Vec::new();

    if modifiers.control() {
        mods.push(Modifier::Ctrl);
    }

    if modifiers.shift() {
        mods.push(Modifier::Shift);
    }

    if modifiers.alt() {
        mods.push(Modifier::Alt);
    }

    if modifiers.logo() {
        mods.push(Modifier::Super);
    }

    let key_bind = KeyBind {
        modifiers: mods,
        key,
    };

    key_binds::init_key_binds()
        .get(&key_bind)
        .map(|action| Message::KeyBind(*action))
}
