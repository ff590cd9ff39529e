use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::dom;
use crate::i18n::locale::use_locale;
use crate::services::Service;

#[derive(Properties, PartialEq)]
pub struct ServiceModalProps {
    pub service: Option<Service>,
    pub on_close: Callback<()>,
    pub on_get_quote: Callback<Service>,
}

#[function_component(ServiceModal)]
pub fn service_modal(props: &ServiceModalProps) -> Html {
    let locale = use_locale();
    let is_open = props.service.is_some();

    {
        let on_close = props.on_close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if is_open && e.key() == "Escape" {
                on_close.emit(());
            }
        });
    }

    use_effect_with_deps(
        |is_open| {
            dom::lock_body_scroll(*is_open);
            || dom::lock_body_scroll(false)
        },
        is_open,
    );

    let Some(service) = props.service else {
        return html! {};
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
    let get_quote = {
        let on_get_quote = props.on_get_quote.clone();
        Callback::from(move |_: MouseEvent| on_get_quote.emit(service))
    };

    let features = locale.list(&service.key("features"));
    let process = locale.list(&service.key("process"));
    let benefits = service
        .benefit_icons()
        .into_iter()
        .enumerate()
        .map(|(i, icon)| {
            html! {
                <div class="benefit">
                    <div class="benefit-icon"><i class={icon}></i></div>
                    <h5>{locale.text(&service.key(&format!("benefits.{}.title", i)))}</h5>
                    <p>{locale.text(&service.key(&format!("benefits.{}.desc", i)))}</p>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <div class="modal-panel" role="dialog" aria-modal="true" onclick={keep_open}>
                <div class={classes!("modal-header", service.accent())}>
                    <button class="modal-close" onclick={close.clone()} aria-label={locale.text("modal.close")}>
                        <i class="icon-x"></i>
                    </button>
                    <div class="modal-title">
                        <div class="modal-icon"><i class={service.icon()}></i></div>
                        <div>
                            <h3>{locale.text(&service.key("title"))}</h3>
                            <p>{locale.text(&service.key("tagline"))}</p>
                        </div>
                    </div>
                </div>

                <div class="modal-body">
                    <section>
                        <h4>{locale.text("modal.overview")}</h4>
                        <p class="modal-description">{locale.text(&service.key("description"))}</p>
                    </section>

                    <section>
                        <h4>{locale.text("modal.features")}</h4>
                        <ul class="feature-list">
                            { for features.iter().map(|feature| html! {
                                <li><i class="icon-check-circle"></i>{feature}</li>
                            }) }
                        </ul>
                    </section>

                    <section>
                        <h4>{locale.text("modal.benefits")}</h4>
                        <div class="benefit-grid">{ benefits }</div>
                    </section>

                    <section>
                        <h4>{locale.text("modal.process")}</h4>
                        <ol class="process-list">
                            { for process.iter().enumerate().map(|(i, step)| html! {
                                <li>
                                    <span class="process-step">{i + 1}</span>
                                    <span>{step}</span>
                                </li>
                            }) }
                        </ol>
                    </section>

                    <div class="modal-cta">
                        <div>
                            <h4>{locale.text("modal.ctaTitle")}</h4>
                            <p>{locale.text("modal.ctaText")}</p>
                        </div>
                        <button class="modal-quote" onclick={get_quote}>
                            {locale.text("common.getQuote")}
                            <i class="icon-arrow-right"></i>
                        </button>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .modal-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    background: rgba(15, 23, 42, 0.6);
                    backdrop-filter: blur(4px);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    animation: modalFade 0.3s ease-out;
                }
                @keyframes modalFade { from { opacity: 0; } to { opacity: 1; } }
                .modal-panel {
                    position: relative;
                    width: 100%;
                    max-width: 56rem;
                    max-height: 90vh;
                    overflow-y: auto;
                    background: #fff;
                    border-radius: 1.5rem;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }
                .modal-header { position: relative; padding: 2rem; color: #fff; }
                .accent-sky { background: linear-gradient(to right, #38bdf8, #2563eb); }
                .accent-teal { background: linear-gradient(to right, #22d3ee, #0d9488); }
                .accent-amber { background: linear-gradient(to right, #fbbf24, #ea580c); }
                .accent-violet { background: linear-gradient(to right, #a78bfa, #9333ea); }
                .accent-slate { background: linear-gradient(to right, #94a3b8, #475569); }
                .accent-rose { background: linear-gradient(to right, #fb7185, #db2777); }
                .accent-lime { background: linear-gradient(to right, #a3e635, #16a34a); }
                .accent-emerald { background: linear-gradient(to right, #34d399, #16a34a); }
                .modal-close {
                    position: absolute;
                    top: 1rem;
                    inset-inline-end: 1rem;
                    border: none;
                    border-radius: 9999px;
                    width: 2.5rem;
                    height: 2.5rem;
                    background: rgba(255, 255, 255, 0.2);
                    color: #fff;
                    cursor: pointer;
                }
                .modal-title { display: flex; align-items: center; gap: 1rem; }
                .modal-body { padding: 2rem; display: flex; flex-direction: column; gap: 2rem; }
                .modal-body h4 { font-weight: 700; color: #0f172a; margin-bottom: 0.75rem; }
                .modal-description { color: #475569; line-height: 1.7; }
                .feature-list { display: grid; grid-template-columns: repeat(2, 1fr); gap: 0.75rem; list-style: none; padding: 0; }
                .benefit-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; }
                .benefit { background: #f8fafc; border-radius: 1rem; padding: 1.25rem; }
                .process-list { list-style: none; padding: 0; display: flex; flex-direction: column; gap: 0.75rem; }
                .process-step {
                    display: inline-flex;
                    width: 1.75rem;
                    height: 1.75rem;
                    margin-inline-end: 0.75rem;
                    border-radius: 9999px;
                    background: #dcfce7;
                    color: #15803d;
                    align-items: center;
                    justify-content: center;
                    font-weight: 700;
                }
                .modal-cta {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.5rem;
                    border-radius: 1rem;
                    background: #0f172a;
                    color: #fff;
                }
                .modal-cta h4 { color: #fff; }
                .modal-quote {
                    padding: 0.875rem 1.75rem;
                    border-radius: 9999px;
                    border: none;
                    background: #16a34a;
                    color: #fff;
                    font-weight: 700;
                    cursor: pointer;
                }
                @media (max-width: 768px) {
                    .feature-list, .benefit-grid { grid-template-columns: 1fr; }
                    .modal-cta { flex-direction: column; align-items: stretch; }
                }
                "#}
            </style>
        </div>
    }
}
