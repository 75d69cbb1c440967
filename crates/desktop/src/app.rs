use chrono::Local;
use iced::widget::{button, column, container, image, pick_list, row, scrollable, text, Space};
use iced::{Element, Length, Subscription, Task, Theme};

use qrwatch_core::capture::infrastructure::nokhwa_source::NokhwaSource;
use qrwatch_core::decoding::infrastructure::rqrr_decoder::RqrrDecoder;
use qrwatch_core::scanning::scan_session::{ScanSession, TickOutcome};
use qrwatch_core::shared::constants::{PREVIEW_MAX_HEIGHT, PREVIEW_MAX_WIDTH, TICK_INTERVAL};
use qrwatch_core::shared::frame::Frame;
use qrwatch_core::shared::preview::fit_within;

use crate::settings::{Appearance, Settings};
use crate::theme;

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Message {
    StartPressed,
    StopPressed,
    QuitPressed,
    Tick,
    AppearanceChanged(Appearance),
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// Camera preview, pre-scaled to the display box.
struct Preview {
    handle: image::Handle,
    width: u32,
    height: u32,
}

pub struct App {
    settings: Settings,
    session: ScanSession,
    preview: Option<Preview>,
    result_text: String,
    clock: String,
    camera_error: Option<String>,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let session = ScanSession::new(
            Box::new(NokhwaSource::new(settings.camera_index)),
            Box::new(RqrrDecoder::new()),
        );
        (
            Self {
                settings,
                session,
                preview: None,
                result_text: String::new(),
                clock: Local::now().format("%H:%M:%S").to_string(),
                camera_error: None,
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::StartPressed => {
                if !self.session.is_running() {
                    self.camera_error = None;
                    self.preview = None;
                    match self.session.start() {
                        Ok(()) => self.result_text.clear(),
                        Err(e) => {
                            log::error!("failed to start reading: {e}");
                            self.camera_error = Some(e.to_string());
                        }
                    }
                }
            }
            Message::StopPressed => {
                if self.session.is_running() {
                    self.session.stop();
                    self.preview = None;
                    self.result_text = "Reading stopped.".to_string();
                }
            }
            Message::QuitPressed => {
                if self.session.is_running() {
                    self.session.stop();
                }
                return iced::exit();
            }
            Message::Tick => {
                self.clock = Local::now().format("%H:%M:%S").to_string();
                match self.session.tick(Local::now()) {
                    TickOutcome::Decoded { frame, payloads } => {
                        self.result_text = format!("QR code content:\n{}", payloads.join("\n"));
                        self.preview = Some(preview_of(&frame));
                    }
                    TickOutcome::NothingFound { frame } => {
                        self.result_text = "No QR code detected.".to_string();
                        self.preview = Some(preview_of(&frame));
                    }
                    TickOutcome::NoFrame => {
                        self.result_text = "No QR code detected.".to_string();
                    }
                    TickOutcome::Throttled | TickOutcome::Idle => {}
                }
            }
            Message::AppearanceChanged(appearance) => {
                self.settings.appearance = appearance;
                self.settings.save();
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let fs = self.settings.font_scale;
        let running = self.session.is_running();

        let mut col = column![]
            .spacing(10)
            .padding(16)
            .height(Length::Fill)
            .align_x(iced::Alignment::Center);

        // The preview is hidden while stopped.
        if running {
            if let Some(preview) = &self.preview {
                col = col.push(
                    image(preview.handle.clone())
                        .width(preview.width as f32)
                        .height(preview.height as f32),
                );
            } else {
                col = col.push(
                    container(text("Waiting for camera\u{2026}").size(scaled(13.0, fs)))
                        .center_x(PREVIEW_MAX_WIDTH as f32)
                        .center_y(180)
                        .style(container::rounded_box),
                );
            }
        }

        if let Some(error) = &self.camera_error {
            col = col.push(
                text(format!("Camera unavailable: {error}"))
                    .size(scaled(14.0, fs))
                    .style(text::danger),
            );
        }

        col = col.push(text(self.result_text.clone()).size(scaled(14.0, fs)));

        let history: String = self
            .session
            .log()
            .lines()
            .fold(String::new(), |mut acc, line| {
                acc.push_str(&line);
                acc.push('\n');
                acc
            });
        col = col.push(
            container(scrollable(text(history).size(scaled(13.0, fs))).height(Length::Fill))
                .padding(8)
                .width(Length::Fill)
                .height(200)
                .style(container::rounded_box),
        );

        let start_btn = {
            let btn = button(text("Start").size(scaled(14.0, fs))).padding([8, 20]);
            if running {
                btn
            } else {
                btn.on_press(Message::StartPressed)
            }
        };
        let stop_btn = {
            let btn = button(text("Stop").size(scaled(14.0, fs)))
                .padding([8, 20])
                .style(button::secondary);
            if running {
                btn.on_press(Message::StopPressed)
            } else {
                btn
            }
        };
        let quit_btn = button(text("Quit").size(scaled(14.0, fs)))
            .padding([8, 20])
            .style(button::danger)
            .on_press(Message::QuitPressed);

        col = col.push(row![start_btn, stop_btn, quit_btn].spacing(10));
        col = col.push(text(self.clock.clone()).size(scaled(22.0, fs)));

        col = col.push(Space::new().height(Length::Fill));
        col = col.push(
            row![
                text("Appearance").size(scaled(12.0, fs)),
                pick_list(
                    Appearance::ALL,
                    Some(self.settings.appearance),
                    Message::AppearanceChanged,
                )
                .text_size(scaled(12.0, fs)),
            ]
            .spacing(8)
            .align_y(iced::Alignment::Center),
        );

        col.into()
    }

    pub fn theme(&self) -> Theme {
        theme::resolve_theme(self.settings.appearance)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.session.is_running() {
            iced::time::every(TICK_INTERVAL).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }
}

fn preview_of(frame: &Frame) -> Preview {
    let (width, height) = fit_within(
        frame.width(),
        frame.height(),
        PREVIEW_MAX_WIDTH,
        PREVIEW_MAX_HEIGHT,
    );
    Preview {
        handle: image::Handle::from_rgba(frame.width(), frame.height(), frame.to_rgba()),
        width,
        height,
    }
}

/// Scale a base font size by the user's font_scale setting.
fn scaled(base: f32, font_scale: f32) -> f32 {
    (base * font_scale).round()
}
