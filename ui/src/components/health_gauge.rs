use yew::prelude::*;

/// Colour band of a health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthBand {
    /// above 75
    Good,
    /// above 60
    Warning,
    Critical,
}

impl HealthBand {
    /// Band of the raw score. Rounding only affects the displayed number.
    pub fn of(score: f64) -> Self {
        if score > 75.0 {
            Self::Good
        } else if score > 60.0 {
            Self::Warning
        } else {
            Self::Critical
        }
    }

    pub fn colour(&self) -> &'static str {
        match self {
            Self::Good => "#52c41a",
            Self::Warning => "#faad14",
            Self::Critical => "#f5222d",
        }
    }
}

pub fn round_score(score: f64) -> f64 {
    (score * 10.0).round() / 10.0
}

#[derive(Properties, PartialEq)]
pub struct HealthProps {
    pub score: f64,
}

/// Circular gauge with the score in the middle.
#[function_component]
pub fn HealthGauge(props: &HealthProps) -> Html {
    const RADIUS: f64 = 26.0;
    let score = round_score(props.score).clamp(0.0, 100.0);
    let colour = HealthBand::of(props.score).colour();
    let circumference = 2.0 * std::f64::consts::PI * RADIUS;
    let filled = circumference * score / 100.0;

    html! {
        <svg width="64" height="64" viewBox="0 0 64 64" class="inline-block">
            <circle cx="32" cy="32" r={RADIUS.to_string()}
                fill="none" stroke="#f0f0f0" stroke-width="6" />
            <circle cx="32" cy="32" r={RADIUS.to_string()}
                fill="none" stroke={colour} stroke-width="6"
                stroke-linecap="round"
                stroke-dasharray={format!("{filled} {circumference}")}
                transform="rotate(-90 32 32)" />
            <text x="32" y="36" text-anchor="middle" font-size="12"
                fill="#262626">
                {format!("{score}%")}
            </text>
        </svg>
    }
}

/// Horizontal bar variant used in tables.
#[function_component]
pub fn HealthBar(props: &HealthProps) -> Html {
    let score = round_score(props.score).clamp(0.0, 100.0);
    let colour = HealthBand::of(props.score).colour();

    html! {
        <div class="flex items-center gap-2">
            <div class="w-32 h-2 bg-neutral-100 rounded">
                <div
                    class="h-2 rounded"
                    style={format!("width: {score}%; background-color: {colour}")}
                />
            </div>
            <span class="text-sm text-neutral-700">{format!("{score}%")}</span>
        </div>
    }
}
