use web_sys::MouseEvent;
use yew::prelude::*;

use crate::dom::Section;
use crate::i18n::locale::use_locale;
use crate::services::Service;

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub on_select: Callback<Service>,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    let locale = use_locale();

    let cards = Service::ALL
        .into_iter()
        .map(|service| {
            let onclick = {
                let on_select = props.on_select.clone();
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    on_select.emit(service);
                })
            };
            html! {
                <div class="service-card" key={service.wire_name()} {onclick}>
                    <div class="service-card-top">
                        <div class="service-icon"><i class={service.icon()}></i></div>
                        <i class="icon-arrow-up-right service-arrow" title={locale.text("servicesSection.learnMore")}></i>
                    </div>
                    <h4>{locale.text(&service.key("title"))}</h4>
                    <p>{locale.text(&service.key("desc"))}</p>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <section id={Section::Services.id()} class="services-section">
            <div class="services-container">
                <div class="services-header">
                    <div>
                        <span class="services-eyebrow">{locale.text("servicesSection.eyebrow")}</span>
                        <h2>
                            {locale.text("servicesSection.title")}
                            <br/>
                            <span class="muted">{locale.text("servicesSection.titleMuted")}</span>
                        </h2>
                    </div>
                    <p class="services-intro">{locale.text("servicesSection.intro")}</p>
                </div>
                <div class="services-grid">{ cards }</div>
            </div>

            <style>
                {r#"
                .services-section {
                    padding: 6rem 0;
                    background: #f8fafc;
                }
                .services-container { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; }
                .services-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-end;
                    gap: 1.5rem;
                    margin-bottom: 4rem;
                    flex-wrap: wrap;
                }
                .services-eyebrow {
                    color: #16a34a;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    font-size: 0.75rem;
                }
                .services-header h2 { font-size: 3rem; font-weight: 800; color: #0f172a; }
                .services-header .muted { color: #94a3b8; }
                .services-intro { color: #64748b; max-width: 28rem; }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(4, minmax(0, 1fr));
                    gap: 1.25rem;
                }
                .service-card {
                    background: #fff;
                    padding: 1.5rem;
                    border-radius: 1rem;
                    border: 1px solid #f3f4f6;
                    cursor: pointer;
                    transition: box-shadow 0.5s;
                }
                .service-card:hover { box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25); }
                .service-card-top { display: flex; justify-content: space-between; margin-bottom: 1rem; }
                .service-icon {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 0.75rem;
                    background: #f8fafc;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .service-card:hover .service-icon { background: #22c55e; color: #fff; }
                .service-card h4 { font-size: 1.125rem; font-weight: 700; color: #1e293b; }
                .service-card p { font-size: 0.75rem; color: #64748b; line-height: 1.6; }
                @media (max-width: 1024px) {
                    .services-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
                }
                @media (max-width: 640px) {
                    .services-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
