use leptos::*;
use strum::IntoEnumIterator;

use crate::{
    application::{ClockSnapshot, TimerClockService},
    clock_state::ClockState,
    config::TimerClockConfig,
    domain::{
        clock::{DIAL_CENTER, DIAL_RADIUS, HUB_RADIUS, Hand, dial_marks, hand_tip},
        logging::LogComponent,
    },
    infrastructure::{SystemClock, Ticker},
    log_info,
};

const STYLES: &str = r#"
.timer-clock-app {
    font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
    background: linear-gradient(135deg, #f1f5f9 0%, #e2e8f0 100%);
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 32px;
    box-sizing: border-box;
}

.container {
    max-width: 672px;
    width: 100%;
}

.card {
    background: white;
    border-radius: 24px;
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
    padding: 32px;
    margin-bottom: 24px;
}

.title {
    display: flex;
    align-items: center;
    justify-content: center;
    margin-bottom: 32px;
    font-size: 30px;
    font-weight: 300;
    color: #1e293b;
}

.title-text {
    margin: 0;
    font-size: inherit;
    font-weight: inherit;
}

.title-icon {
    margin-right: 12px;
    color: #334155;
}

.clock-column {
    display: flex;
    flex-direction: column;
    align-items: center;
}

.clock-frame {
    position: relative;
    width: 320px;
    height: 320px;
    margin-bottom: 32px;
}

.clock-face {
    width: 100%;
    height: 100%;
}

.numeral {
    font-size: 20px;
    font-weight: 300;
    fill: #334155;
}

.digital-readout {
    position: absolute;
    bottom: 0;
    left: 50%;
    transform: translateX(-50%);
    background: white;
    padding: 8px 16px;
    border-radius: 8px;
    border: 1px solid #e2e8f0;
    box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
    font-size: 24px;
    font-weight: 300;
    color: #1e293b;
    font-variant-numeric: tabular-nums;
    white-space: nowrap;
}

.timer-panel {
    width: 100%;
    background: #f8fafc;
    border-radius: 16px;
    border: 1px solid #e2e8f0;
    padding: 24px;
    box-sizing: border-box;
}

.timer-header,
.progress-labels {
    display: flex;
    justify-content: space-between;
    align-items: center;
}

.timer-header {
    margin-bottom: 16px;
}

.status-icon {
    margin-right: 8px;
    color: #94a3b8;
}

.status-icon.active {
    color: #16a34a;
}

.status-label {
    font-size: 14px;
    font-weight: 500;
    color: #475569;
}

.window-caption,
.remaining {
    font-size: 14px;
    color: #64748b;
}

.progress-block {
    margin-bottom: 12px;
}

.progress-labels {
    margin-bottom: 8px;
    font-size: 12px;
    color: #64748b;
}

.progress-track {
    width: 100%;
    height: 8px;
    background: #e2e8f0;
    border-radius: 9999px;
    overflow: hidden;
}

.progress-fill {
    height: 100%;
    background: linear-gradient(to right, #3b82f6, #2563eb);
    transition: width 1s linear;
}

.elapsed {
    text-align: center;
}

.elapsed-value {
    font-size: 48px;
    font-weight: 300;
    color: #1e293b;
    font-variant-numeric: tabular-nums;
    letter-spacing: 0.05em;
}

.remaining {
    margin-top: 8px;
}

.summary {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 16px;
    text-align: center;
    background: rgba(255, 255, 255, 0.5);
    backdrop-filter: blur(4px);
    border: 1px solid white;
    border-radius: 16px;
    padding: 24px;
}

.summary-value {
    font-size: 24px;
    font-weight: 300;
    color: #334155;
}

.summary-label {
    font-size: 12px;
    color: #64748b;
    margin-top: 4px;
}
"#;

/// 🕰️ Root component: the clock card plus the window summary
#[component]
pub fn App(#[prop(optional)] config: TimerClockConfig) -> impl IntoView {
    view! {
        <style>{STYLES}</style>
        <div class="timer-clock-app">
            <div class="container">
                <div class="card">
                    <div class="title">
                        <span class="title-icon">"🕒"</span>
                        <h1 class="title-text">"Daily Timer Clock"</h1>
                    </div>
                    <TimerClock config=config />
                </div>
                <WindowSummary />
            </div>
        </div>
    }
}

/// ⏱️ Owns the ticker and the clock state for as long as it is mounted
#[component]
pub fn TimerClock(#[prop(optional)] config: TimerClockConfig) -> impl IntoView {
    let mut service = TimerClockService::new(SystemClock::new());
    let state = ClockState::new(service.initial(config.first_sample));

    let ticker = Ticker::start(config.tick_interval_ms, move || state.apply(service.tick()));
    on_cleanup(move || {
        ticker.stop();
        log_info!(LogComponent::Presentation("TimerClock"), "Unmounted");
    });

    log_info!(
        LogComponent::Presentation("TimerClock"),
        "Mounted (first sample: {}, tick: {}ms)",
        config.first_sample,
        config.tick_interval_ms
    );

    view! {
        <div class="clock-column">
            <div class="clock-frame">
                <ClockFace state=state />
                <DigitalReadout state=state />
            </div>
            <WindowTimerPanel state=state />
        </div>
    }
}

/// 🎯 Analog dial: static ticks and numerals, three live hands
#[component]
pub fn ClockFace(state: ClockState) -> impl IntoView {
    let ticks = dial_marks()
        .iter()
        .map(|mark| {
            view! {
                <line
                    x1={mark.tick_outer.x}
                    y1={mark.tick_outer.y}
                    x2={mark.tick_inner.x}
                    y2={mark.tick_inner.y}
                    stroke="#475569"
                    stroke-width="2"
                />
            }
        })
        .collect_view();

    let numerals = dial_marks()
        .iter()
        .map(|mark| {
            view! {
                <text
                    x={mark.numeral_at.x}
                    y={mark.numeral_at.y}
                    text-anchor="middle"
                    dominant-baseline="middle"
                    class="numeral"
                >
                    {mark.label.clone()}
                </text>
            }
        })
        .collect_view();

    let hands = Hand::iter()
        .map(|hand| view! { <ClockHand state=state hand=hand /> })
        .collect_view();

    view! {
        <svg class="clock-face" viewBox="0 0 200 200">
            <circle
                cx={DIAL_CENTER.x}
                cy={DIAL_CENTER.y}
                r={DIAL_RADIUS}
                fill="white"
                stroke="#cbd5e1"
                stroke-width="2"
            />
            {ticks}
            {numerals}
            {hands}
            <circle cx={DIAL_CENTER.x} cy={DIAL_CENTER.y} r={HUB_RADIUS} fill="#1e293b" />
        </svg>
    }
}

#[component]
fn ClockHand(state: ClockState, hand: Hand) -> impl IntoView {
    let (stroke, width) = match hand {
        Hand::Hour => ("#1e293b", "6"),
        Hand::Minute => ("#334155", "4"),
        Hand::Second => ("#dc2626", "2"),
    };

    view! {
        <line
            class={format!("hand hand-{}", hand)}
            x1={DIAL_CENTER.x}
            y1={DIAL_CENTER.y}
            x2=move || state.with(|s| hand_tip(hand, &s.angles).x)
            y2=move || state.with(|s| hand_tip(hand, &s.angles).y)
            stroke=stroke
            stroke-width=width
            stroke-linecap="round"
        />
    }
}

#[component]
fn DigitalReadout(state: ClockState) -> impl IntoView {
    view! {
        <div class="digital-readout">
            {move || state.with(|s| s.wall_clock_label.clone())}
        </div>
    }
}

/// 📊 Status line, progress bar and elapsed counter
#[component]
fn WindowTimerPanel(state: ClockState) -> impl IntoView {
    let is_active = move || state.with(ClockSnapshot::is_active);

    view! {
        <div class="timer-panel">
            <div class="timer-header">
                <div>
                    <span class="status-icon" class:active=is_active>
                        {move || if is_active() { "▶" } else { "⏸" }}
                    </span>
                    <span class="status-label">{move || state.with(ClockSnapshot::status_label)}</span>
                </div>
                <span class="window-caption">{move || state.with(ClockSnapshot::window_caption)}</span>
            </div>

            <div class="progress-block">
                <div class="progress-labels">
                    <span>"ELAPSED TIME"</span>
                    <span class="percent">{move || state.with(ClockSnapshot::percent_label)}</span>
                </div>
                <div class="progress-track">
                    <div
                        class="progress-fill"
                        style:width=move || state.with(|s| format!("{}%", s.bar_width))
                    />
                </div>
            </div>

            <div class="elapsed">
                <div class="elapsed-value">{move || state.with(|s| s.elapsed_label.clone())}</div>
                <div class="remaining">{move || state.with(ClockSnapshot::remaining_caption)}</div>
            </div>
        </div>
    }
}

/// Fixed facts about the window; nothing here changes at runtime
#[component]
fn WindowSummary() -> impl IntoView {
    let facts = [("7:00 AM", "Start Time"), ("17 Hours", "Duration"), ("12:00 AM", "End Time")];

    view! {
        <div class="summary">
            {facts
                .into_iter()
                .map(|(value, label)| {
                    view! {
                        <div>
                            <div class="summary-value">{value}</div>
                            <div class="summary-label">{label}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
