use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::dom::{self, Section};
use crate::i18n::locale::use_locale;
use crate::services::Service;

pub(crate) const SLIDE_COUNT: usize = 4;
#[cfg(test)]
pub(crate) const SLIDE_FIELDS: [&str; 4] = ["title", "highlight", "subtitle", "description"];
pub(crate) const STATS: [&str; 3] = ["years", "global", "support"];

/// Dictionary key for a field of the zero-based slide `index`.
pub(crate) fn slide_key(index: usize, field: &str) -> String {
    format!("hero.slides.slide{}.{}", index + 1, field)
}

pub(crate) fn stat_key(stat: &str, field: &str) -> String {
    format!("hero.stats.{}.{}", stat, field)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    autoplay: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselAction {
    Next,
    Prev,
    /// Manual pick; pauses autoplay until `Resume`.
    GoTo(usize),
    Resume,
}

impl Default for Carousel {
    fn default() -> Self {
        Self {
            current: 0,
            autoplay: true,
        }
    }
}

impl Carousel {
    fn apply(self, action: CarouselAction) -> Self {
        match action {
            CarouselAction::Next => Self {
                current: (self.current + 1) % SLIDE_COUNT,
                ..self
            },
            CarouselAction::Prev => Self {
                current: (self.current + SLIDE_COUNT - 1) % SLIDE_COUNT,
                ..self
            },
            CarouselAction::GoTo(index) if index < SLIDE_COUNT => Self {
                current: index,
                autoplay: false,
            },
            CarouselAction::GoTo(_) => self,
            CarouselAction::Resume => Self {
                autoplay: true,
                ..self
            },
        }
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// Left and right arrow actions; mirrored for right-to-left layouts.
pub fn arrow_actions(is_rtl: bool) -> (CarouselAction, CarouselAction) {
    if is_rtl {
        (CarouselAction::Next, CarouselAction::Prev)
    } else {
        (CarouselAction::Prev, CarouselAction::Next)
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let locale = use_locale();
    let carousel = use_reducer(Carousel::default);
    let resume_timer = use_mut_ref(|| None::<Timeout>);

    {
        let autoplay = carousel.autoplay;
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |autoplay| {
                let interval = autoplay.then(|| {
                    Interval::new(config::HERO_AUTOPLAY_MS, move || {
                        carousel.dispatch(CarouselAction::Next)
                    })
                });
                move || drop(interval)
            },
            autoplay,
        );
    }

    let go_to = {
        let carousel = carousel.clone();
        let resume_timer = resume_timer.clone();
        move |index: usize| {
            let carousel = carousel.clone();
            let resume_timer = resume_timer.clone();
            Callback::from(move |_: MouseEvent| {
                carousel.dispatch(CarouselAction::GoTo(index));
                let carousel = carousel.clone();
                // Replacing the handle cancels a pending resume from an earlier click.
                *resume_timer.borrow_mut() = Some(Timeout::new(config::HERO_RESUME_AUTOPLAY_MS, move || {
                    carousel.dispatch(CarouselAction::Resume)
                }));
            })
        }
    };

    let step = |action: CarouselAction| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(action))
    };
    let (left_action, right_action) = arrow_actions(locale.is_rtl());
    let arrow_label = |action: CarouselAction| {
        locale.text(if action == CarouselAction::Next { "hero.next" } else { "hero.previous" })
    };

    let scroll_to = |section: Section| Callback::from(move |_: MouseEvent| dom::scroll_to_section(section));

    let slide = carousel.current + 1;
    let current_key = |field: &str| slide_key(carousel.current, field);

    let dots = (0..SLIDE_COUNT)
        .map(|index| {
            let is_current = index == carousel.current;
            html! {
                <button
                    class={classes!("hero-dot", is_current.then(|| "active"))}
                    onclick={go_to(index)}
                    aria-label={format!("{} {}", locale.text("hero.goToSlide"), index + 1)}
                >
                    if is_current && carousel.autoplay {
                        <span class="hero-dot-progress"></span>
                    }
                </button>
            }
        })
        .collect::<Html>();

    let quick_services = [Service::AirFreight, Service::SeaFreight, Service::LandFreight]
        .into_iter()
        .map(|service| {
            html! {
                <div class="hero-chip">
                    <i class={service.icon()}></i>
                    <span>{locale.text(&service.key("title"))}</span>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <section id={Section::Home.id()} class={classes!("hero", locale.is_rtl().then(|| "rtl"))}>
            <div
                class="hero-background"
                style={format!("background-image: url('/assets/hero/hero_{}.png');", slide)}
            ></div>
            <div class="hero-overlay"></div>

            <div class="hero-content">
                <span class="hero-badge">{locale.text("hero.badge")}</span>
                <div class="hero-text">
                    <h1>
                        {locale.text(&current_key("title"))}
                        <br/>
                        <span class="hero-highlight">{locale.text(&current_key("highlight"))}</span>
                    </h1>
                    <p class="hero-subtitle">{locale.text(&current_key("subtitle"))}</p>
                    <p class="hero-description">{locale.text(&current_key("description"))}</p>
                </div>

                <div class="hero-actions">
                    <button class="hero-cta" onclick={scroll_to(Section::Quote)}>
                        {locale.text("hero.startShipping")}
                        <i class="icon-arrow-right"></i>
                    </button>
                    <button class="hero-secondary" onclick={scroll_to(Section::Services)}>
                        {locale.text("hero.exploreServices")}
                    </button>
                </div>

                <div class="hero-chips">{ quick_services }</div>

                <div class="hero-stats">
                    { for STATS.iter().map(|stat| html! {
                        <div class="hero-stat">
                            <h4>{locale.text(&stat_key(stat, "value"))}</h4>
                            <p>{locale.text(&stat_key(stat, "label"))}</p>
                        </div>
                    }) }
                    <div class="hero-stat express">
                        <i class="icon-plane"></i>
                        <p>{locale.text("hero.expressDelivery")}</p>
                    </div>
                </div>
            </div>

            <div class="hero-controls">
                <button class="hero-arrow" onclick={step(left_action)} aria-label={arrow_label(left_action)}>
                    <i class="icon-chevron-left"></i>
                </button>
                <div class="hero-dots">{ dots }</div>
                <button class="hero-arrow" onclick={step(right_action)} aria-label={arrow_label(right_action)}>
                    <i class="icon-chevron-right"></i>
                </button>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    width: 100%;
                    overflow: hidden;
                    display: flex;
                    align-items: center;
                    color: #fff;
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                    background-size: cover;
                    background-position: center;
                    animation: heroZoom 8s linear forwards;
                }
                @keyframes heroZoom {
                    from { transform: scale(1.1); opacity: 0; }
                    15% { opacity: 1; }
                    to { transform: scale(1); opacity: 1; }
                }
                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to right, rgba(2, 6, 23, 0.9), rgba(2, 6, 23, 0.6), transparent);
                }
                .hero.rtl .hero-overlay {
                    background: linear-gradient(to left, rgba(2, 6, 23, 0.9), rgba(2, 6, 23, 0.6), transparent);
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 8rem 1.5rem 6rem;
                }
                .hero-badge {
                    display: inline-block;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    background: rgba(34, 197, 94, 0.2);
                    color: #4ade80;
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                }
                .hero h1 { font-size: 3.5rem; font-weight: 800; line-height: 1.1; }
                .hero-highlight { color: #4ade80; }
                .hero-description { color: #cbd5e1; max-width: 36rem; }
                .hero-actions { display: flex; gap: 1rem; margin-top: 2rem; flex-wrap: wrap; }
                .hero-cta, .hero-secondary {
                    padding: 1rem 2rem;
                    border-radius: 9999px;
                    font-weight: 700;
                    cursor: pointer;
                    border: none;
                }
                .hero-cta { background: #16a34a; color: #fff; }
                .hero-secondary { background: rgba(255, 255, 255, 0.1); color: #fff; border: 1px solid rgba(255, 255, 255, 0.2); }
                .hero-chips, .hero-stats { display: flex; gap: 1rem; margin-top: 2rem; flex-wrap: wrap; }
                .hero-stat p { color: #94a3b8; font-size: 0.75rem; text-transform: uppercase; }
                .hero-controls {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    z-index: 20;
                }
                .hero-dot {
                    position: relative;
                    width: 0.75rem;
                    height: 0.75rem;
                    border-radius: 9999px;
                    border: none;
                    background: rgba(255, 255, 255, 0.4);
                    overflow: hidden;
                    cursor: pointer;
                }
                .hero-dot.active { width: 3rem; background: rgba(255, 255, 255, 0.3); }
                .hero-dot-progress {
                    position: absolute;
                    inset: 0;
                    background: #4ade80;
                    transform-origin: left;
                    animation: heroProgress 6s linear forwards;
                }
                @keyframes heroProgress { from { transform: scaleX(0); } to { transform: scaleX(1); } }
                .hero-arrow {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: rgba(255, 255, 255, 0.1);
                    color: #fff;
                    cursor: pointer;
                }
                @media (max-width: 768px) {
                    .hero h1 { font-size: 2.25rem; }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(actions: &[CarouselAction]) -> Carousel {
        actions
            .iter()
            .fold(Carousel::default(), |state, action| state.apply(*action))
    }

    #[test]
    fn next_and_prev_wrap_around() {
        assert_eq!(run(&[CarouselAction::Prev]).current, SLIDE_COUNT - 1);
        let all_the_way = vec![CarouselAction::Next; SLIDE_COUNT];
        assert_eq!(run(&all_the_way).current, 0);
    }

    #[test]
    fn manual_pick_pauses_until_resume() {
        let picked = run(&[CarouselAction::GoTo(2)]);
        assert_eq!(picked.current, 2);
        assert!(!picked.autoplay);
        let resumed = picked.apply(CarouselAction::Resume);
        assert!(resumed.autoplay);
        assert_eq!(resumed.current, 2);
    }

    #[test]
    fn out_of_range_pick_is_ignored() {
        assert_eq!(run(&[CarouselAction::GoTo(SLIDE_COUNT)]), Carousel::default());
    }

    #[test]
    fn arrows_mirror_in_rtl() {
        assert_eq!(arrow_actions(false), (CarouselAction::Prev, CarouselAction::Next));
        assert_eq!(arrow_actions(true), (CarouselAction::Next, CarouselAction::Prev));
    }
}
