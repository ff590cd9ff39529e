use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::logo::Logo;
use crate::config;
use crate::dom::{self, Section};
use crate::i18n::locale::use_locale;

pub(crate) const NAV_LINKS: [(&str, Section); 3] = [
    ("nav.home", Section::Home),
    ("nav.services", Section::Services),
    ("nav.about", Section::Footer),
];

#[derive(Properties, PartialEq)]
struct LanguageSwitcherProps {
    scrolled: bool,
}

#[function_component(LanguageSwitcher)]
fn language_switcher(props: &LanguageSwitcherProps) -> Html {
    let locale = use_locale();

    let toggle = {
        let locale = locale.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            locale.toggle();
        })
    };

    html! {
        <button
            class={classes!("lang-switch", props.scrolled.then(|| "scrolled"))}
            onclick={toggle}
            title={locale.text("common.switchLanguage")}
        >
            <i class="icon-globe"></i>
            <span>{locale.text("common.languageButton")}</span>
        </button>
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let locale = use_locale();
    let is_scrolled = use_state_eq(|| false);
    let active = use_state_eq(|| Section::Home);
    let menu_open = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    is_scrolled.set(dom::scroll_y() > config::HEADER_SCROLLED_THRESHOLD);
                    active.set(dom::active_section());
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let go_to = {
        let menu_open = menu_open.clone();
        move |section: Section| {
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu_open.set(false);
                dom::scroll_to_section(section);
            })
        }
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_links = NAV_LINKS
        .iter()
        .map(|(key, section)| {
            let is_active = *active == *section;
            html! {
                <button
                    class={classes!("nav-link", is_active.then(|| "active"))}
                    onclick={go_to(*section)}
                >
                    {locale.text(key)}
                </button>
            }
        })
        .collect::<Html>();

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <div class="header-pill">
                <div class="header-logo" onclick={go_to(Section::Home)}>
                    <Logo dark={!*is_scrolled} />
                </div>

                <nav class="header-nav">
                    { nav_links.clone() }
                    <LanguageSwitcher scrolled={*is_scrolled} />
                    <button class="header-cta" onclick={go_to(Section::Quote)}>
                        {locale.text("common.getQuote")}
                        <i class="icon-arrow-up-right"></i>
                    </button>
                </nav>

                <div class="header-mobile-controls">
                    <LanguageSwitcher scrolled={*is_scrolled} />
                    <button
                        class="burger-menu"
                        onclick={toggle_menu}
                        aria-label={locale.text(if *menu_open { "common.closeMenu" } else { "common.openMenu" })}
                    >
                        <i class={if *menu_open { "icon-x" } else { "icon-menu" }}></i>
                    </button>
                </div>
            </div>

            if *menu_open {
                <div class="mobile-menu">
                    { nav_links }
                    <button class="header-cta" onclick={go_to(Section::Quote)}>
                        {locale.text("common.requestQuote")}
                    </button>
                </div>
            }

            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    padding: 1.5rem 1.5rem 0;
                }
                .header-pill {
                    width: 100%;
                    max-width: 72rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 0.75rem 2rem;
                    border-radius: 9999px;
                    color: #fff;
                    transition: all 0.5s ease-in-out;
                }
                .site-header.scrolled .header-pill {
                    background: rgba(255, 255, 255, 0.95);
                    color: #0f172a;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }
                .header-logo { cursor: pointer; }
                .header-nav { display: flex; align-items: center; gap: 0.5rem; }
                .nav-link {
                    padding: 0.5rem 1.5rem;
                    border-radius: 9999px;
                    font-weight: 700;
                    font-size: 0.875rem;
                    background: transparent;
                    color: inherit;
                    border: none;
                    cursor: pointer;
                }
                .nav-link.active { background: rgba(255, 255, 255, 0.2); }
                .site-header.scrolled .nav-link.active { background: #22c55e; color: #fff; }
                .lang-switch {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 0.75rem;
                    border-radius: 9999px;
                    border: none;
                    font-weight: 700;
                    background: rgba(255, 255, 255, 0.1);
                    color: #fff;
                    cursor: pointer;
                }
                .lang-switch.scrolled { background: #f1f5f9; color: #334155; }
                .header-cta {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.625rem 1.5rem;
                    border-radius: 9999px;
                    border: none;
                    background: #16a34a;
                    color: #fff;
                    font-weight: 700;
                    cursor: pointer;
                }
                .header-mobile-controls { display: none; gap: 0.5rem; }
                .burger-menu { background: none; border: none; color: inherit; cursor: pointer; }
                .mobile-menu {
                    width: 100%;
                    max-width: 72rem;
                    margin-top: 0.5rem;
                    padding: 1rem;
                    border-radius: 1.5rem;
                    background: #fff;
                    color: #0f172a;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                @media (max-width: 768px) {
                    .header-nav { display: none; }
                    .header-mobile-controls { display: flex; }
                }
                "#}
            </style>
        </header>
    }
}
