use yew::prelude::*;
use yew_hooks::prelude::use_interval;

use super::observer::{use_visibility, VisibilityOptions};
use crate::config;

/// Display shape taken from a stat's original markup text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterFormat {
    Plain,
    /// `500+`
    Plus,
    /// `24/7`, never animated in the denominator.
    PerWeek,
}

impl CounterFormat {
    pub fn from_markup(text: &str) -> Self {
        if text.contains('/') {
            CounterFormat::PerWeek
        } else if text.contains('+') {
            CounterFormat::Plus
        } else {
            CounterFormat::Plain
        }
    }
}

/// Leading integer of `text`, after optional whitespace and sign. `None` if no digits follow.
/// Digit runs too long for `i64` saturate.
fn leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    Some(sign * digits.parse::<i64>().unwrap_or(i64::MAX))
}

/// `data-target` wins unless it is missing, unparsable or zero; then the markup text is used.
pub fn parse_target(data_target: Option<&str>, markup: &str) -> Option<i64> {
    data_target
        .and_then(leading_int)
        .filter(|n| *n != 0)
        .or_else(|| leading_int(markup))
}

/// Linear count from zero to `target`, one step per tick.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: i64,
    format: CounterFormat,
    increment: f64,
    current: f64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: i64, format: CounterFormat) -> Self {
        let steps = f64::from(config::COUNTER_DURATION_MS) / f64::from(config::COUNTER_TICK_MS);
        CounterAnimation {
            target,
            format,
            increment: target as f64 / steps,
            current: 0.0,
            done: false,
        }
    }

    pub fn from_markup(data_target: Option<&str>, markup: &str) -> Option<Self> {
        parse_target(data_target, markup).map(|target| Self::new(target, CounterFormat::from_markup(markup)))
    }

    /// Advances one step and returns the text to display.
    pub fn tick(&mut self) -> String {
        if !self.done {
            self.current += self.increment;
            if self.current >= self.target as f64 {
                self.current = self.target as f64;
                self.done = true;
            }
        }
        self.frame()
    }

    pub fn frame(&self) -> String {
        let value = self.current.floor() as i64;
        match self.format {
            CounterFormat::Plain => value.to_string(),
            CounterFormat::Plus => format!("{}+", value),
            CounterFormat::PerWeek => format!("{}/7", self.target),
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

/// Lets the stats animation start once per mounted section.
#[derive(Debug, Default)]
pub struct CounterTrigger {
    fired: bool,
}

impl CounterTrigger {
    /// True only for the first visibility event.
    pub fn on_visible(&mut self) -> bool {
        if self.fired {
            return false;
        }
        self.fired = true;
        true
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stat {
    /// Text rendered before the animation starts, e.g. `500+` or `24/7`.
    pub markup: &'static str,
    pub data_target: Option<&'static str>,
    pub label: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct StatsSectionProps {
    pub stats: Vec<Stat>,
}

#[function_component(StatsSection)]
pub fn stats_section(props: &StatsSectionProps) -> Html {
    let node = use_node_ref();
    let trigger = use_mut_ref(CounterTrigger::default);
    let active = use_state(|| false);

    {
        let active = active.clone();
        let on_visible = Callback::from(move |_| {
            if trigger.borrow_mut().on_visible() {
                log::debug!("Stats section visible, starting counters");
                active.set(true);
            }
        });
        use_visibility(node.clone(), VisibilityOptions::STATS, on_visible);
    }

    html! {
        <section class="stats" ref={node}>
            <div class="stats-grid">
                { for props.stats.iter().map(|stat| html! {
                    <div class="stat-item">
                        <StatNumber
                            markup={stat.markup}
                            data_target={stat.data_target}
                            active={*active}
                        />
                        <span class="stat-label">{stat.label}</span>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatNumberProps {
    pub markup: &'static str,
    #[prop_or_default]
    pub data_target: Option<&'static str>,
    pub active: bool,
}

#[function_component(StatNumber)]
pub fn stat_number(props: &StatNumberProps) -> Html {
    let text = use_state(|| props.markup.to_string());
    let animation = {
        let markup = props.markup;
        let data_target = props.data_target;
        use_mut_ref(move || {
            let animation = CounterAnimation::from_markup(data_target, markup);
            if animation.is_none() {
                log::warn!("Stat `{}` has no numeric target, leaving it as is", markup);
            }
            animation
        })
    };
    let running = use_state(|| false);

    {
        let running = running.clone();
        let animation = animation.clone();
        use_effect_with_deps(
            move |active| {
                if *active && animation.borrow().is_some() {
                    running.set(true);
                }
                || ()
            },
            props.active,
        );
    }

    {
        let text = text.clone();
        let running_handle = running.clone();
        use_interval(
            move || {
                if let Some(animation) = animation.borrow_mut().as_mut() {
                    text.set(animation.tick());
                    if animation.is_done() {
                        running_handle.set(false);
                    }
                }
            },
            if *running { config::COUNTER_TICK_MS } else { 0 },
        );
    }

    html! {
        <span class="stat-number" data-target={props.data_target}>{(*text).clone()}</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(mut animation: CounterAnimation) -> (Vec<String>, String) {
        let mut frames = Vec::new();
        while !animation.is_done() {
            frames.push(animation.tick());
            assert!(frames.len() < 1000, "animation never finished");
        }
        let last = frames.last().cloned().unwrap_or_else(|| animation.frame());
        (frames, last)
    }

    #[test]
    fn plus_suffix_is_kept_on_every_frame() {
        let animation = CounterAnimation::from_markup(Some("100"), "100+").unwrap();
        let (frames, last) = run(animation);
        assert_eq!(last, "100+");
        assert!(frames.iter().all(|f| f.ends_with('+')));
    }

    #[test]
    fn per_week_always_shows_target() {
        let mut animation = CounterAnimation::from_markup(None, "24/7").unwrap();
        assert_eq!(animation.tick(), "24/7");
        let (frames, last) = run(animation);
        assert_eq!(last, "24/7");
        assert!(frames.iter().all(|f| f == "24/7"));
    }

    #[test]
    fn slash_wins_over_plus() {
        assert_eq!(CounterFormat::from_markup("24/7+"), CounterFormat::PerWeek);
    }

    #[test]
    fn counts_linearly_over_two_seconds() {
        let mut animation = CounterAnimation::new(1000, CounterFormat::Plain);
        assert_eq!(animation.tick(), "8");
        assert_eq!(animation.tick(), "16");
        let (frames, last) = run(animation);
        assert_eq!(last, "1000");
        // 125 ticks of 16ms, give or take float rounding on the final step.
        assert!((122..=124).contains(&frames.len()));

        let values: Vec<i64> = frames.iter().map(|f| f.parse().unwrap()).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let mut animation = CounterAnimation::new(0, CounterFormat::Plain);
        assert_eq!(animation.tick(), "0");
        assert!(animation.is_done());
    }

    #[test]
    fn finished_animation_stays_put() {
        let mut animation = CounterAnimation::new(5, CounterFormat::Plus);
        let (_, last) = run(animation.clone());
        while !animation.is_done() {
            animation.tick();
        }
        assert_eq!(animation.tick(), last);
    }

    #[test]
    fn target_resolution() {
        assert_eq!(parse_target(Some("150"), "0"), Some(150));
        assert_eq!(parse_target(Some("0"), "42+"), Some(42));
        assert_eq!(parse_target(Some("abc"), "42+"), Some(42));
        assert_eq!(parse_target(None, "  12 clients"), Some(12));
        assert_eq!(parse_target(None, "-3"), Some(-3));
        assert_eq!(parse_target(None, "many"), None);
        assert!(CounterAnimation::from_markup(None, "∞").is_none());
    }

    #[test]
    fn oversized_target_saturates() {
        assert_eq!(parse_target(None, "99999999999999999999+"), Some(i64::MAX));
        assert_eq!(parse_target(None, "-99999999999999999999"), Some(-i64::MAX));
        let animation = CounterAnimation::from_markup(None, "99999999999999999999+");
        assert!(animation.is_some());
    }

    #[test]
    fn trigger_fires_once() {
        let mut trigger = CounterTrigger::default();
        assert!(trigger.on_visible());
        assert!(!trigger.on_visible());
        assert!(!trigger.on_visible());
    }
}
