use chrono::{Datelike, Local};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::logo::Logo;
use crate::dom::{self, Section};
use crate::i18n::locale::use_locale;

pub(crate) const TIMELINE_ENTRIES: usize = 3;
pub(crate) const VALUES: [&str; 4] = ["icon-shield-check", "icon-truck", "icon-dollar", "icon-headphones"];
pub(crate) const BRANCHES: usize = 3;
const SOCIAL: [(&str, &str); 4] = [
    ("icon-facebook", "https://www.facebook.com/"),
    ("icon-twitter", "https://x.com/"),
    ("icon-linkedin", "https://www.linkedin.com/"),
    ("icon-instagram", "https://www.instagram.com/"),
];

/// Key of `field` in the `index`th entry of a footer list such as `timeline`.
pub(crate) fn entry_key(list: &str, index: usize, field: &str) -> String {
    format!("footer.{}.{}.{}", list, index, field)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let locale = use_locale();
    let year = Local::now().year().to_string();

    let scroll_to_top = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        dom::scroll_to_top();
    });

    html! {
        <footer id={Section::Footer.id()} class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <Logo dark={true} />
                    <p class="footer-story">{locale.text("footer.story")}</p>
                    <h5>{locale.text("footer.timelineTitle")}</h5>
                    <ul class="footer-timeline">
                        { for (0..TIMELINE_ENTRIES).map(|i| html! {
                            <li>
                                <span class="timeline-year">{locale.text(&entry_key("timeline", i, "year"))}</span>
                                <span>{locale.text(&entry_key("timeline", i, "text"))}</span>
                            </li>
                        }) }
                    </ul>
                </div>

                <div class="footer-values">
                    <h5>{locale.text("footer.valuesTitle")}</h5>
                    { for VALUES.iter().enumerate().map(|(i, icon)| html! {
                        <div class="footer-value">
                            <div class="value-icon"><i class={*icon}></i></div>
                            <div>
                                <h6>{locale.text(&entry_key("values", i, "title"))}</h6>
                                <p>{locale.text(&entry_key("values", i, "desc"))}</p>
                            </div>
                        </div>
                    }) }
                </div>

                <div class="footer-branches">
                    <h5>{locale.text("footer.branchesTitle")}</h5>
                    { for (0..BRANCHES).map(|i| html! {
                        <div class="branch">
                            <i class="icon-map-pin"></i>
                            <span class="branch-country">{locale.text(&entry_key("branches", i, "country"))}</span>
                            <span class="branch-city">{locale.text(&entry_key("branches", i, "city"))}</span>
                        </div>
                    }) }
                    <div class="footer-mission">
                        <h5>{locale.text("footer.missionTitle")}</h5>
                        <p>{locale.text("footer.mission")}</p>
                    </div>
                </div>
            </div>

            <div class="footer-bottom">
                <p>{locale.text_with("footer.copyright", &[("year", year.as_str())])}</p>
                <div class="footer-social">
                    { for SOCIAL.iter().map(|(icon, href)| html! {
                        <a href={*href} target="_blank" rel="noopener noreferrer"><i class={*icon}></i></a>
                    }) }
                </div>
                <button class="back-to-top" onclick={scroll_to_top} aria-label={locale.text("footer.backToTop")}>
                    <i class="icon-chevron-up"></i>
                </button>
            </div>

            <style>
                {r#"
                .site-footer {
                    background: #020617;
                    color: #cbd5e1;
                    padding: 5rem 1.5rem 2rem;
                    border-top: 4px solid #22c55e;
                }
                .footer-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 5fr 4fr 3fr;
                    gap: 3rem;
                }
                .site-footer h5 {
                    color: #fff;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    font-size: 0.75rem;
                    margin: 2rem 0 1rem;
                }
                .footer-story { line-height: 1.7; margin-top: 1.5rem; }
                .footer-timeline { list-style: none; padding: 0; display: flex; flex-direction: column; gap: 0.75rem; }
                .timeline-year { color: #4ade80; font-weight: 700; margin-inline-end: 0.75rem; }
                .footer-value { display: flex; gap: 1rem; margin-bottom: 1.25rem; }
                .footer-value h6 { color: #fff; font-weight: 700; }
                .footer-value p { font-size: 0.875rem; color: #94a3b8; }
                .value-icon { color: #4ade80; }
                .branch { display: flex; gap: 0.5rem; align-items: center; margin-bottom: 0.75rem; }
                .branch-country { color: #fff; font-weight: 700; }
                .footer-mission p { font-style: italic; }
                .footer-bottom {
                    max-width: 80rem;
                    margin: 4rem auto 0;
                    padding-top: 2rem;
                    border-top: 1px solid #1e293b;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    flex-wrap: wrap;
                    font-size: 0.875rem;
                }
                .footer-social { display: flex; gap: 0.75rem; }
                .footer-social a { color: #94a3b8; }
                .back-to-top {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 9999px;
                    border: none;
                    background: #16a34a;
                    color: #fff;
                    cursor: pointer;
                }
                @media (max-width: 1024px) {
                    .footer-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </footer>
    }
}
