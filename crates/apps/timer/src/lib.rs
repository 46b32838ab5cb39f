//! Focus timer widget: pomodoro and break presets counting down once per second.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::time::Duration;

use desktop_app_contract::{AppMountContext, ThemeService, UiSound};
use leptos::*;
use system_ui::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Countdown lengths offered as tabs.
pub enum TimerPreset {
    /// 25 minute focus block.
    #[default]
    Pomodoro,
    /// 5 minute break.
    ShortBreak,
    /// 15 minute break.
    LongBreak,
}

impl TimerPreset {
    /// Presets in tab order.
    pub const ALL: [Self; 3] = [Self::Pomodoro, Self::ShortBreak, Self::LongBreak];

    /// Countdown length in seconds.
    pub const fn seconds(self) -> u32 {
        match self {
            Self::Pomodoro => 25 * 60,
            Self::ShortBreak => 5 * 60,
            Self::LongBreak => 15 * 60,
        }
    }

    /// Tab label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pomodoro => "Pomodoro",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Countdown lifecycle.
pub enum TimerStatus {
    /// Full preset, never started.
    #[default]
    Idle,
    /// Counting down.
    Running,
    /// Stopped part way.
    Paused,
    /// Reached zero.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Countdown state for one preset.
pub struct Countdown {
    /// Selected preset.
    pub preset: TimerPreset,
    /// Seconds left.
    pub remaining: u32,
    /// Lifecycle state.
    pub status: TimerStatus,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(TimerPreset::default())
    }
}

impl Countdown {
    /// Idle countdown for `preset`.
    pub const fn new(preset: TimerPreset) -> Self {
        Self {
            preset,
            remaining: preset.seconds(),
            status: TimerStatus::Idle,
        }
    }

    /// Switches preset; always resets.
    pub fn select(&mut self, preset: TimerPreset) {
        *self = Self::new(preset);
    }

    /// Starts or resumes; a finished countdown restarts from the full preset.
    pub fn start(&mut self) {
        if self.status == TimerStatus::Finished {
            self.remaining = self.preset.seconds();
        }
        self.status = TimerStatus::Running;
    }

    /// Pauses a running countdown.
    pub fn pause(&mut self) {
        if self.status == TimerStatus::Running {
            self.status = TimerStatus::Paused;
        }
    }

    /// Start when stopped, pause when running.
    pub fn toggle(&mut self) {
        if self.status == TimerStatus::Running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Back to the full preset.
    pub fn reset(&mut self) {
        *self = Self::new(self.preset);
    }

    /// Advances one second. Returns `true` on the tick that reaches zero.
    pub fn tick(&mut self) -> bool {
        if self.status != TimerStatus::Running {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.status = TimerStatus::Finished;
            return true;
        }
        false
    }

    /// Elapsed fraction in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        let total = f64::from(self.preset.seconds());
        1.0 - f64::from(self.remaining) / total
    }

    /// `MM:SS`.
    pub fn label(&self) -> String {
        format!("{:02}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}

/// Mounts the widget into a desktop window.
pub fn mount(context: AppMountContext) -> View {
    view! { <TimerApp theme=context.services.theme /> }.into_view()
}

#[component]
/// Timer window contents.
pub fn TimerApp(
    /// Used for the completion sound.
    theme: ThemeService,
) -> impl IntoView {
    let countdown = create_rw_signal(Countdown::default());

    let tick = move || {
        let mut finished = false;
        countdown.update(|countdown| finished = countdown.tick());
        if finished {
            theme.play(UiSound::TimerDone);
        }
    };
    match set_interval_with_handle(tick, Duration::from_secs(1)) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => logging::warn!("timer interval failed: {err:?}"),
    }

    let running = Signal::derive(move || countdown.with(|c| c.status == TimerStatus::Running));

    view! {
        <Stack layout_class="app-timer" align=LayoutAlign::Center padding=LayoutPadding::Lg>
            <TabList aria_label="Timer presets">
                {TimerPreset::ALL
                    .into_iter()
                    .map(|preset| {
                        view! {
                            <Tab
                                selected=Signal::derive(move || countdown.with(|c| c.preset == preset))
                                on_select=Callback::new(move |_| countdown.update(|c| c.select(preset)))
                            >
                                {preset.label()}
                            </Tab>
                        }
                    })
                    .collect_view()}
            </TabList>
            <Text role=TextRole::Display>{move || countdown.with(Countdown::label)}</Text>
            <ProgressBar value=Signal::derive(move || countdown.with(Countdown::progress)) />
            <Cluster justify=LayoutJustify::Center>
                <Button
                    variant=ButtonVariant::Primary
                    size=ButtonSize::Lg
                    on_click=Callback::new(move |_| countdown.update(Countdown::toggle))
                >
                    {move || if running.get() { "Pause" } else { "Start" }}
                </Button>
                <Button size=ButtonSize::Lg on_click=Callback::new(move |_| countdown.update(Countdown::reset))>
                    "Reset"
                </Button>
            </Cluster>
        </Stack>
    }
}
