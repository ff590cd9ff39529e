use log::{debug, info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, MouseEvent};
use yew::prelude::*;

use crate::components::logo::Logo;
use crate::dom::Section;
use crate::i18n::locale::{use_locale, LocaleContext};
use crate::lead::{submit_lead, Field, FormStatus, LeadForm as LeadFormState, Rejected};
use crate::services::Service;

pub(crate) const HIGHLIGHTS: [(&str, &str); 3] = [
    ("fastResponse", "icon-clock"),
    ("globalNetwork", "icon-globe"),
    ("customSolutions", "icon-package"),
];

pub(crate) fn highlight_key(highlight: &str, field: &str) -> String {
    format!("form.highlights.{}.{}", highlight, field)
}

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub selected_service: Option<Service>,
    /// True while a "get a quote" request is being routed to the form.
    #[prop_or_default]
    pub quote_pending: bool,
    pub on_submitted: Callback<()>,
}

fn field_error(locale: &LocaleContext, form: &LeadFormState, field: Field) -> Html {
    match form.error_for(field) {
        Some(error) => html! { <span class="field-error">{locale.text(error.translation_key())}</span> },
        None => html! {},
    }
}

#[function_component(LeadForm)]
pub fn lead_form(props: &LeadFormProps) -> Html {
    let locale = use_locale();
    let form = use_state(LeadFormState::default);

    {
        let form = form.clone();
        use_effect_with_deps(
            move |(selected, _)| {
                if let Some(service) = *selected {
                    let mut next = (*form).clone();
                    next.preselect(service);
                    form.set(next);
                }
                || ()
            },
            (props.selected_service, props.quote_pending),
        );
    }

    let update = |field: Field| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.update(field, value);
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let on_submitted = props.on_submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            match next.begin_submit() {
                Ok(submission) => {
                    info!("Submitting quote request for {}", submission.service.wire_name());
                    form.set(next.clone());
                    let form = form.clone();
                    let on_submitted = on_submitted.clone();
                    spawn_local(async move {
                        let result = submit_lead(&submission).await;
                        if let Err(e) = &result {
                            warn!("Quote request failed: {}", e);
                        }
                        let succeeded = result.is_ok();
                        next.finish(&result);
                        form.set(next);
                        if succeeded {
                            on_submitted.emit(());
                        }
                    });
                }
                Err(Rejected::Invalid) => {
                    debug!("Quote form has {} invalid fields", next.errors().len());
                    form.set(next);
                }
                Err(Rejected::Busy) => {
                    debug!("Submit ignored, request already in flight");
                }
            }
        })
    };

    let send_another = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            next.send_another();
            form.set(next);
        })
    };

    let submitting = form.status() == FormStatus::Submitting;
    let data = form.data();

    let form_panel = if form.status() == FormStatus::Submitted {
        html! {
            <div class="form-success">
                <div class="success-logo">
                    <Logo large={true} />
                    <span class="success-check"><i class="icon-check-circle"></i></span>
                </div>
                <h3>{locale.text("form.success.title")}</h3>
                <p>{locale.text("form.success.text")}</p>
                <button class="send-another" onclick={send_another}>
                    {locale.text("form.success.again")}
                </button>
            </div>
        }
    } else {
        html! {
            <form class="lead-form" {onsubmit} novalidate={true}>
                <div class="form-row">
                    <div class="form-field">
                        <label>{locale.text("form.labels.fullName")}</label>
                        <input
                            type="text"
                            value={data.full_name.clone()}
                            placeholder={locale.text("form.placeholders.fullName")}
                            disabled={submitting}
                            oninput={let update = update(Field::FullName); move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                update.emit(input.value());
                            }}
                        />
                        { field_error(&locale, &form, Field::FullName) }
                    </div>
                    <div class="form-field">
                        <label>{locale.text("form.labels.email")}</label>
                        <input
                            type="email"
                            dir="ltr"
                            value={data.email.clone()}
                            placeholder={locale.text("form.placeholders.email")}
                            disabled={submitting}
                            oninput={let update = update(Field::Email); move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                update.emit(input.value());
                            }}
                        />
                        { field_error(&locale, &form, Field::Email) }
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-field">
                        <label>{locale.text("form.labels.phone")}</label>
                        <input
                            type="tel"
                            dir="ltr"
                            value={data.phone.clone()}
                            placeholder={locale.text("form.placeholders.phone")}
                            disabled={submitting}
                            oninput={let update = update(Field::Phone); move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                update.emit(input.value());
                            }}
                        />
                        { field_error(&locale, &form, Field::Phone) }
                    </div>
                    <div class="form-field">
                        <label>{locale.text("form.labels.service")}</label>
                        <select
                            disabled={submitting}
                            onchange={let update = update(Field::Service); move |e: Event| {
                                let select: HtmlSelectElement = e.target_unchecked_into();
                                update.emit(select.value());
                            }}
                        >
                            <option value="" selected={data.service.is_empty()}>
                                {locale.text("form.selectService")}
                            </option>
                            { for Service::ALL.iter().map(|service| html! {
                                <option
                                    value={service.wire_name()}
                                    selected={data.service == service.wire_name()}
                                >
                                    {locale.text(&service.key("title"))}
                                </option>
                            }) }
                        </select>
                        { field_error(&locale, &form, Field::Service) }
                    </div>
                </div>

                <div class="form-field">
                    <label>{locale.text("form.labels.message")}</label>
                    <textarea
                        rows="3"
                        value={data.message.clone()}
                        placeholder={locale.text("form.placeholders.message")}
                        disabled={submitting}
                        oninput={let update = update(Field::Message); move |e: InputEvent| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            update.emit(input.value());
                        }}
                    />
                    { field_error(&locale, &form, Field::Message) }
                </div>

                if form.submit_failed() {
                    <div class="submit-error">{locale.text("form.errors.submitFailed")}</div>
                }

                <button type="submit" class="submit-button" disabled={submitting}>
                    if submitting {
                        <span class="loading-spinner"></span>
                        <span>{locale.text("form.submitting")}</span>
                    } else {
                        <span>{locale.text("form.submit")}</span>
                        <i class="icon-send"></i>
                    }
                </button>
            </form>
        }
    };

    html! {
        <section id={Section::Quote.id()} class="quote-section">
            <div class="quote-card">
                <div class="quote-info">
                    <Logo dark={true} />
                    <h2>{locale.text("form.title")}</h2>
                    <p class="quote-intro">{locale.text("form.intro")}</p>
                    <div class="quote-highlights">
                        { for HIGHLIGHTS.iter().map(|(key, icon)| html! {
                            <div class="quote-highlight">
                                <div class="highlight-icon"><i class={*icon}></i></div>
                                <div>
                                    <h4>{locale.text(&highlight_key(key, "title"))}</h4>
                                    <p>{locale.text(&highlight_key(key, "desc"))}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
                <div class="quote-form-panel">{ form_panel }</div>
            </div>

            <style>
                {r#"
                .quote-section { padding: 8rem 1.5rem; background: #fff; }
                .quote-card {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: flex;
                    border-radius: 1.5rem;
                    overflow: hidden;
                    border: 1px solid #f3f4f6;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }
                .quote-info {
                    flex: 2;
                    background: #0f172a;
                    color: #fff;
                    padding: 4rem;
                }
                .quote-intro { color: #cbd5e1; margin-bottom: 3rem; line-height: 1.7; }
                .quote-highlights { display: flex; flex-direction: column; gap: 2rem; }
                .quote-highlight { display: flex; align-items: center; gap: 1rem; }
                .quote-highlight p { color: #94a3b8; font-size: 0.875rem; }
                .highlight-icon {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.1);
                    color: #4ade80;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .quote-form-panel { flex: 3; padding: 4rem; }
                .lead-form { display: flex; flex-direction: column; gap: 1.5rem; }
                .form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
                .form-field { display: flex; flex-direction: column; gap: 0.5rem; }
                .form-field label {
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    color: #64748b;
                    letter-spacing: 0.05em;
                }
                .form-field input, .form-field select, .form-field textarea {
                    padding: 1rem;
                    border-radius: 0.75rem;
                    border: 2px solid transparent;
                    background: #f8fafc;
                    font: inherit;
                    color: #334155;
                    resize: none;
                }
                .form-field input:focus, .form-field select:focus, .form-field textarea:focus {
                    border-color: #22c55e;
                    background: #fff;
                    outline: none;
                }
                .field-error, .submit-error { color: #ef4444; font-size: 0.75rem; }
                .submit-error { font-size: 0.875rem; }
                .submit-button {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    padding: 1rem;
                    border-radius: 0.75rem;
                    border: none;
                    background: #16a34a;
                    color: #fff;
                    font-weight: 700;
                    cursor: pointer;
                }
                .submit-button:disabled { opacity: 0.7; cursor: not-allowed; }
                .loading-spinner {
                    display: inline-block;
                    width: 20px;
                    height: 20px;
                    border: 3px solid rgba(255,255,255,.3);
                    border-radius: 50%;
                    border-top-color: #fff;
                    animation: spin 1s ease-in-out infinite;
                }
                @keyframes spin { to { transform: rotate(360deg); } }
                .form-success {
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 3rem 0;
                }
                .success-logo { position: relative; margin-bottom: 1.5rem; }
                .success-check { position: absolute; bottom: -0.25rem; inset-inline-end: -0.25rem; color: #22c55e; }
                .send-another {
                    margin-top: 2rem;
                    padding: 0.75rem 1.5rem;
                    border-radius: 9999px;
                    border: none;
                    background: #22c55e;
                    color: #fff;
                    font-weight: 600;
                    cursor: pointer;
                }
                @media (max-width: 1024px) {
                    .quote-card { flex-direction: column; }
                    .quote-info, .quote-form-panel { padding: 2.5rem; }
                }
                @media (max-width: 768px) {
                    .form-row { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
